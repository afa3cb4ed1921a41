use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Milliseconds between simulation ticks (lower is faster)
    #[arg(long, default_value = "200")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        tick_interval: Duration::from_millis(cli.tick_ms),
    };

    let mut app = App::new(config)?;
    app.run().await
}
