pub mod attributes;
pub mod codec;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod options;
pub mod order;
pub mod printer;
pub mod progress;
pub mod scanner;
pub mod snapshot;

pub use attributes::*;
pub use error::{Result, ScanError};
pub use model::*;
pub use options::*;
pub use progress::*;
pub use snapshot::{build_snapshot, OrderedSnapshot};
