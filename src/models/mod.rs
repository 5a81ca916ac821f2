pub mod cell;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod messages;
pub mod paint;
pub mod snapshot;

pub use cell::*;
pub use diagnostics::*;
pub use error::*;
pub use health::*;
pub use messages::*;
pub use paint::*;
pub use snapshot::*;
