pub mod clock;
pub mod fetch_orchestrator;
pub mod ttl_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fetch_orchestrator::{
    FetchOptions, FetchOrchestrator, FetchOrigin, FetchOutcome, LoadState, RefreshFailure,
    RefreshHandle,
};
pub use ttl_cache::{CacheEntry, TtlCache};
