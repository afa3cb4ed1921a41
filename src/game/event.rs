use super::state::Cell;

/// State changes the engine reports to the presentation layer
///
/// The renderer keeps its own view of the board and updates it only by
/// consuming these events; it never reads engine internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new segment appeared (growth, or initial body at start)
    SegmentAdded { cell: Cell },
    /// The tail segment vacated `from` and the head advanced to `to`
    SegmentMoved { from: Cell, to: Cell },
    /// The apple was (re)placed
    AppleRelocated { cell: Cell },
    /// The score changed (also emitted with 0 at start)
    ScoreChanged { score: u32 },
    /// The game reached its terminal state
    GameOver,
}
