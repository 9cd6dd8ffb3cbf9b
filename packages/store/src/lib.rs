pub mod config;
pub mod models;
pub mod query;
pub mod session_store;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{ApiConfig, ClientConfig, ConfigError, SessionConfig};
pub use models::{Apartment, NewApartment};
pub use query::{ApartmentQuery, SortDirection, SortField, SortOption};
pub use session_store::SessionStore;
