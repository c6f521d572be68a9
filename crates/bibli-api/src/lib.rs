//! # bibli API Client
//!
//! Typed async client for the bibli backend REST API. One method per
//! backend route, grouped by resource; request and response bodies are the
//! [`bibli_core`] wire types.
//!
//! ```no_run
//! use bibli_api::{ApiClient, ApiConfig};
//! use bibli_core::identifiers::BookId;
//!
//! # async fn demo() -> Result<(), bibli_api::ApiError> {
//! let client = ApiClient::new(ApiConfig::default())?;
//! let book = client.book(BookId::new(11)).await?;
//! println!("{}", book.title);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

mod activity;
mod books;
mod collections;
mod reviews;
mod users;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
