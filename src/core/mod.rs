pub mod clock;
pub mod history;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock, UnavailableClock};
pub use history::{History, POSITIONS};
pub use report::{Report, ReportStyle, report};
