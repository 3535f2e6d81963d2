// Core project engine - independent of UI

pub mod log;
pub mod project;
pub mod store;
pub mod validate;

pub use project::{Project, ProjectId, ProjectStatus};
pub use store::{Listeners, ProjectStore};
pub use validate::{Rule, Validatable, Value, text_length, validate};
