//! # CookMaster HTTP Client
//!
//! Typed access to the CookMaster recipe API: listing, fetching, searching,
//! creating and deleting recipes.
//!
//! ## Modules
//!
//! - [`auth`] - API key header handling
//! - [`client`] - Main client with the retry policy and all endpoint methods
//! - [`config`] - Client settings and environment loading
//! - [`error`] - Argument and API errors
//! - [`transport`] - The HTTP seam and its reqwest implementation
//! - [`types`] - Request payloads, filters and the difficulty enum
//!
//! ## Quick Start
//!
//! ```no_run
//! use cookmaster_sdk::client::{CookMasterClient, Difficulty, SearchFilters};
//!
//! # async fn example() -> cookmaster_sdk::Result<()> {
//! let client = CookMasterClient::new("YOUR_API_KEY")?;
//!
//! let quick = client
//!     .search_recipes(&SearchFilters::new().difficulty(Difficulty::Easy).max_time(20))
//!     .await?;
//! println!("{}", quick);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{CookMasterClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{CookMasterError, Result};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport, TransportError};
pub use types::*;
