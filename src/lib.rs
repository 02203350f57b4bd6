//! # CookMaster SDK
//!
//! Async client for the CookMaster recipe-management API.
//!
//! Every request carries the caller's API key in the `X-API-Key` header.
//! Connection-level failures are retried immediately up to a configured number
//! of attempts; HTTP error statuses are never retried and surface as
//! [`CookMasterError::Api`] with the status code attached. Invalid input is
//! rejected locally with [`CookMasterError::InvalidArgument`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use cookmaster_sdk::{ClientConfig, CookMasterClient, CookMasterError, Ingredient, NewRecipe};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), CookMasterError> {
//! let config = ClientConfig::new("YOUR_API_KEY").timeout(Duration::from_secs(10));
//! let client = CookMasterClient::with_config(config)?;
//!
//! println!("{}", client.list_recipes(1, 50).await?);
//!
//! let recipe = NewRecipe::new()
//!     .name("Pasta al pesto")
//!     .category("pastas")
//!     .ingredient(Ingredient::new("Pasta", "200g"))
//!     .ingredient(Ingredient::new("Albahaca", "50g"))
//!     .steps(["Hervir pasta", "Preparar pesto", "Mezclar y servir"]);
//!
//! match client.create_recipe(recipe).await {
//!     Ok(created) => println!("{}", created),
//!     Err(CookMasterError::Api { message, status }) => {
//!         eprintln!("API error: {} ({:?})", message, status)
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{
    ClientConfig, CookMasterClient, CookMasterError, Difficulty, Ingredient, IngredientEntry,
    NewRecipe, Result, SearchFilters,
};
