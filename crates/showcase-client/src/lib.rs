pub mod client;
pub mod config;
pub mod credentials;
pub mod error;

pub use client::ApiClient;
pub use config::{resolve_data_dir, ClientConfig, DEFAULT_API_URL};
pub use credentials::CredentialStore;
pub use error::{ApiError, Result};
