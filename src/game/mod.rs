//! Game logic: scoring history, hard mode, the session state machine and
//! target selection.

pub mod hard_mode;
pub mod session;
pub mod target;

pub use hard_mode::{HardModeConstraints, HardModeViolation};
pub use session::{GuessError, GuessRecord, MAX_GUESSES, Session, SessionState};
pub use target::{TargetError, TargetMode, select_target};
