//! Session-scoped key-value storage for LoomCart.
//!
//! Models the browser's session storage: a flat map of string keys to string
//! values whose lifetime is one browsing session. Two backends are provided:
//!
//! - [`MemoryStorage`] keeps everything in process. Clones share the same map,
//!   which is how several tabs of one session see the same slot.
//! - [`DirStorage`] keeps one file per key under a directory, so a session can
//!   outlive a single process (used by the `loom` CLI).
//!
//! [`Cache`] layers typed JSON access on top of any backend.
//!
//! # Example
//!
//! ```rust
//! use loom_cache::{Cache, MemoryStorage};
//!
//! let cache = Cache::new(MemoryStorage::new());
//! cache.set("greeting", &vec!["hello", "world"]).unwrap();
//!
//! let value: Option<Vec<String>> = cache.get("greeting").unwrap();
//! assert_eq!(value.unwrap().len(), 2);
//! ```

mod error;
mod kv;
mod session;
mod storage;

pub use error::CacheError;
pub use kv::Cache;
pub use session::SessionId;
pub use storage::{DirStorage, MemoryStorage, SessionStorage};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, DirStorage, MemoryStorage, SessionId, SessionStorage};
}
