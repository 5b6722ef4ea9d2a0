pub mod error;
pub mod format;
pub mod logging;
pub mod output;

pub use error::*;
pub use format::*;
pub use output::*;
