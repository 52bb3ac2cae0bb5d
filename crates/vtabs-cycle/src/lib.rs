//! VTabs Auto-Cycle
//!
//! Rotates the active tab of a rendered widget on a repeating timer:
//! - each tick clicks the header after the active one, wrapping around
//! - pointer enter on the container pauses, pointer leave resumes
//! - the returned [`CycleHandle`] stops the rotation for good

mod driver;
mod error;
mod timer;

pub use driver::{advance, auto_cycle, CycleHandle, DEFAULT_INTERVAL};
pub use error::CycleError;
pub use timer::{RepeatingTask, Ticket};

pub type Result<T> = std::result::Result<T, CycleError>;
