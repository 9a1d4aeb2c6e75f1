pub mod enums;
pub mod roster;
pub mod session;
pub mod window;

pub use enums::{DisplayStatus, Phase, RecordedStatus};
pub use roster::{Mark, RosterRow, RosterSummary, RosterTally, Student};
pub use session::SessionRow;
pub use window::{Boundary, Countdown, SessionWindow, WindowInput, WindowStatus};
