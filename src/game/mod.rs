pub mod grid;
pub mod scorer;
pub mod session;
pub mod timer;
pub mod validator;

pub use grid::{GeneratorSettings, PuzzleGenerator};
pub use session::{GameSession, SessionSettings, SessionStatus, TickOutcome};
pub use validator::{MatchKind, MatchPolicy};
