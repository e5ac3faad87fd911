//! Blocking usage example for the dog service client
//!
//! Suitable for build scripts and other sync contexts. Also writes the
//! consumer pact so the backend can verify against it.
//!
//! ```bash
//! cargo run --example blocking_usage -- http://localhost:8080 human
//! ```

use std::path::Path;

use dog_service_client::{DogService, DogServiceError, contract};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let endpoint = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080".to_owned());
    let breed = args.next().unwrap_or_else(|| "Corgi".to_owned());

    let pact_path = contract::dogs_pact().write_to(Path::new("pacts"))?;
    println!("Pact written to {}", pact_path.display());

    let service = DogService::new(endpoint)?;
    match service.get_dogs_blocking(&breed) {
        Ok(response) => {
            println!("Status: {}", response.status());
            println!("Found: {}", response.is_found());
            if let Some(dogs) = response.dogs() {
                println!("Dogs: {}", dogs.len());
            }
        }
        Err(err) if err.is_transport() => {
            println!("Backend unreachable: {err}");
        }
        Err(DogServiceError::UnexpectedStatus { status, .. }) => {
            println!("Backend broke the contract with status {status}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
