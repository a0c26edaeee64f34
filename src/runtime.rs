//! Shared runtime for the blocking entry points.

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

/// Multi-thread runtime reused by every blocking discovery call.
static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .thread_name("sitefacts-worker")
        .enable_all()
        .build()
        .expect("failed to build sitefacts runtime")
});

/// Drive `future` to completion on the shared runtime.
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    RUNTIME.block_on(future)
}
