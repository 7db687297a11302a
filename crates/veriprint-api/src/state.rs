//! Shared application state.

use std::sync::Arc;

use veriprint_zkp::ZkpSystem;

/// State handed to every route handler.
///
/// The proving context is built once in `main`, before the listener
/// opens, and is read-only afterwards; sharing it behind an `Arc` needs
/// no further synchronization.
#[derive(Clone)]
pub struct AppState {
    pub zkp: Arc<ZkpSystem>,
}

impl AppState {
    /// Wrap a fully initialized proving context.
    pub fn new(zkp: ZkpSystem) -> Self {
        Self { zkp: Arc::new(zkp) }
    }
}
