// Template context structures for Askama templates, split by audience.

mod viewer;
mod host;

pub use self::viewer::{IndexTemplate, PresentationTemplate};
pub use self::host::{LoginTemplate, HostTemplate};
