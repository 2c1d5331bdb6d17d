//! Server-rendered UI for a remote blog-post API.
//!
//! - Remembers the API base URL across restarts
//! - Lists, creates, updates and deletes posts over HTTP
//! - Edit modal with "blank means unchanged" partial updates
//! - Search and sort passed through to the API
//! - Remote failures are logged, never shown

pub mod client;
pub mod config_store;
pub mod dto;
pub mod edit_session;
pub mod errors;
pub mod frontend;
pub mod models;
pub mod render;
pub mod routes;
pub mod settings;
pub mod states;

pub use states::AppState;
