mod document;
mod event;
mod task;

pub use document::Document;
pub use event::Event;
pub use task::{Task, TaskStatus};
