pub mod calendar;
pub mod config;
pub mod dice;
pub mod error;

pub use calendar::{Calendar, DayPhase};
pub use dice::Dice;
