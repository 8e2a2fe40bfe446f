pub mod adapters;
pub mod agent;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod feeds;
pub mod store;

pub use agent::{ChatMessage, CompletionClient, CompletionConfig};
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use error::{CoachError, Result};
pub use store::{select_store, BetStore, KvConfig, MemoryStore, RemoteKvStore};
