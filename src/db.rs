pub mod kv_store;
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub mod session_repo;
pub use session_repo::SessionRepository;
pub mod seed;
