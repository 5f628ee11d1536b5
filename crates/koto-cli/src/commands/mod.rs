pub mod apply;
pub mod category;
pub mod dispatch;
pub mod display;
pub mod event;
pub mod job;
pub mod login;
pub mod preview;
