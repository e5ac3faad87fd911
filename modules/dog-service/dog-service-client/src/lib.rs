//! Dog Service Client
//!
//! Thin HTTP client for the dogs backend. One call, one round trip:
//! `GET {endpoint}/dogs?breed={breed}` with `Accept: application/json`.
//!
//! - 200 and 404 are both accepted and come back as a [`ResponseEnvelope`]
//!   tagged with [`DogsBody::Dogs`] or [`DogsBody::NotFound`]
//! - any other status fails with [`DogServiceError::UnexpectedStatus`]
//! - network failures fail with [`DogServiceError::Connection`],
//!   [`DogServiceError::Timeout`] or [`DogServiceError::Transport`]
//!
//! The [`contract`] module holds the consumer contract the client is tested
//! against, and exports it as a pact file for provider verification.
//!
//! # Examples
//!
//! ## Async Usage
//!
//! ```no_run
//! use dog_service_client::{DogService, DogsBody};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DogService::new("http://localhost:8080")?;
//! let response = service.get_dogs("Corgi").await?;
//!
//! match response.body() {
//!     DogsBody::Dogs(dogs) => println!("{} dogs", dogs.len()),
//!     DogsBody::NotFound(err) => println!("nothing: {}", err.error),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! ```no_run
//! use dog_service_client::{DogService, DogServiceConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DogServiceConfig::from_env()?;
//! let service = DogService::from_config(config)?;
//!
//! let response = service.get_dogs_blocking("Corgi")?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod contract;
mod error;
mod model;
mod request;
mod response;
mod transport;

// Re-export public API
pub use client::{BREED_PARAM, DOGS_PATH, DogService, DogServiceConfig, dogs_request};
pub use error::DogServiceError;
pub use model::{Dog, ErrorBody};
pub use request::{Request, RequestBuilder};
pub use response::{DogsBody, RawResponse, ResponseEnvelope, is_accepted_status};

// Re-export commonly used types from dependencies
pub use http::StatusCode;
