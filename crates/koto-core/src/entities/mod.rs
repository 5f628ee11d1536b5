//! Entity structs for hitokoto domain objects.

mod display;
mod event;
mod job;

pub use display::DisplaySettings;
pub use event::Event;
pub use job::JobPosting;
