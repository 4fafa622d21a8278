//! Configuration sections.

pub mod endpoint;
pub mod logging;

pub use endpoint::*;
pub use logging::*;
