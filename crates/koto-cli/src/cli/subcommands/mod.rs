mod category;
mod display;
mod event;
mod job;

pub use category::CategoryCommands;
pub use display::DisplayCommands;
pub use event::EventCommands;
pub use job::{FieldArg, JobCommands, StatusArg, TagArg};
