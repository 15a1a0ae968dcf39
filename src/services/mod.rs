pub mod digest;
pub mod progress;
pub mod recommendations;
pub mod reminders;

pub use recommendations::Recommender;
