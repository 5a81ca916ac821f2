pub mod color;
pub mod cooldown;
pub mod error;
pub mod presence;
pub mod store;
pub mod timeline;

pub use color::normalize_color;
pub use cooldown::{Admission, CooldownGate};
pub use error::CanvasError;
pub use presence::PresenceTracker;
pub use store::GridStore;
pub use timeline::{Snapshot, SnapshotTimeline};
