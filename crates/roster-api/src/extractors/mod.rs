//! Axum extractors for request handling

mod path;
mod validated;

pub use path::{RosterLocationPath, SnowflakePath};
pub use validated::ValidatedJson;
