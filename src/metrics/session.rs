use std::time::{Duration, Instant};

/// In-memory stats for the current play session
///
/// Lives only as long as the process; nothing is persisted.
pub struct SessionStats {
    game_started_at: Instant,
    elapsed: Duration,
    high_score: u32,
    games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            game_started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Refresh the elapsed-time reading for the current game
    pub fn update(&mut self) {
        self.elapsed = self.game_started_at.elapsed();
    }

    pub fn record_game_start(&mut self) {
        self.game_started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn record_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Elapsed time of the current game as mm:ss
    pub fn elapsed_str(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.elapsed_str(), "02:05");

        stats.elapsed = Duration::ZERO;
        assert_eq!(stats.elapsed_str(), "00:00");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.elapsed_str(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.record_game_over(10);
        assert_eq!(stats.high_score(), 10);
        assert_eq!(stats.games_played(), 1);

        stats.record_game_over(5);
        assert_eq!(stats.high_score(), 10);
        assert_eq!(stats.games_played(), 2);

        stats.record_game_over(15);
        assert_eq!(stats.high_score(), 15);
        assert_eq!(stats.games_played(), 3);
    }

    #[test]
    fn test_game_start_resets_elapsed() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();
        assert!(stats.elapsed.as_millis() >= 50);

        stats.record_game_start();
        stats.update();
        assert!(stats.elapsed.as_millis() < 50);
    }
}
