pub mod fetch;
pub mod local_view;
pub mod reconciler;

pub use fetch::{GridFetch, InProcessFetch, SyncFetchError};
pub use local_view::LocalView;
pub use reconciler::SyncReconciler;
