//! Async usage example for the dog service client
//!
//! To run this example against a running backend:
//! ```bash
//! export DOG_SERVICE_URL="http://localhost:8080"
//! RUST_LOG=dog_service_client=debug cargo run --example async_usage -- Corgi
//! ```

use dog_service_client::{DogService, DogServiceConfig, DogsBody};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let breed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Corgi".to_owned());

    let config = DogServiceConfig::from_env()?;
    let service = DogService::from_config(config)?;

    let response = service.get_dogs(&breed).await?;
    println!("Status: {}", response.status());

    match response.into_body() {
        DogsBody::Dogs(dogs) => {
            for dog in dogs {
                println!("{} ({} years)", dog.breed, dog.age);
            }
        }
        DogsBody::NotFound(err) => println!("No dogs: {}", err.error),
    }

    Ok(())
}
