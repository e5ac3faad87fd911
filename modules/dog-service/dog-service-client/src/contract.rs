//! Consumer-driven contract for the dogs backend.
//!
//! Each [`Interaction`] pairs a provider state with the request this client
//! sends and the response it is prepared to handle. Tests replay the
//! interactions against a mock server; [`Pact`] exports them in the pact V4
//! layout so the provider can verify its side against the same file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use http::{Method, StatusCode};
use serde_json::{Map, Value, json};

use crate::client::{BREED_PARAM, DOGS_PATH};
use crate::error::DogServiceError;
use crate::request::Request;

pub const CONSUMER: &str = "frontend";
pub const PROVIDER: &str = "backend";

/// How a recorded response body constrains the real one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMatching {
    /// The body must equal the example
    Exact,
    /// The body is an array of at least `min` elements, each shaped like the example
    EachLike { min: usize },
}

/// Request side of an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRequest {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}

impl ContractRequest {
    /// True if `request` satisfies this expectation.
    ///
    /// Expected headers must be present (names compare case-insensitively);
    /// extra headers are allowed. Query parameters must match exactly.
    #[must_use]
    pub fn accepts(&self, request: &Request) -> bool {
        let query: BTreeMap<&str, &str> = request
            .query()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let expected_query: BTreeMap<&str, &str> = self
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        *request.method() == self.method
            && request.path() == self.path
            && query == expected_query
            && self.headers.iter().all(|(name, value)| {
                request
                    .headers()
                    .get(name.as_str())
                    .is_some_and(|actual| actual == value.as_str())
            })
    }

    fn to_pact(&self) -> Value {
        let query: Map<String, Value> = self
            .query
            .iter()
            .map(|(k, v)| (k.clone(), json!([v])))
            .collect();

        json!({
            "method": self.method.as_str(),
            "path": self.path,
            "query": query,
            "headers": multi_valued(&self.headers),
        })
    }
}

/// Response side of an interaction
#[derive(Debug, Clone, PartialEq)]
pub struct ContractResponse {
    pub status: StatusCode,
    pub headers: BTreeMap<String, String>,
    /// For [`BodyMatching::EachLike`] this is a single element
    pub body: Value,
    pub matching: BodyMatching,
}

impl ContractResponse {
    /// The body a mock provider should serve for this response
    #[must_use]
    pub fn example_body(&self) -> Value {
        match self.matching {
            BodyMatching::Exact => self.body.clone(),
            BodyMatching::EachLike { min } => Value::Array(vec![self.body.clone(); min.max(1)]),
        }
    }

    /// True if `actual` satisfies the recorded body
    #[must_use]
    pub fn matches(&self, actual: &Value) -> bool {
        match self.matching {
            BodyMatching::Exact => *actual == self.body,
            BodyMatching::EachLike { min } => actual.as_array().is_some_and(|items| {
                items.len() >= min && items.iter().all(|item| same_shape(&self.body, item))
            }),
        }
    }

    fn to_pact(&self) -> Value {
        let mut response = json!({
            "status": self.status.as_u16(),
            "headers": multi_valued(&self.headers),
            "body": {
                "content": self.example_body(),
                "contentType": "application/json",
                "encoded": false,
            },
        });

        if let BodyMatching::EachLike { min } = self.matching {
            response["matchingRules"] = json!({
                "body": {
                    "$": {
                        "combine": "AND",
                        "matchers": [{ "match": "type", "min": min }],
                    }
                }
            });
        }

        response
    }
}

/// One request/response pair under a named provider state
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub description: String,
    pub provider_state: String,
    pub request: ContractRequest,
    pub response: ContractResponse,
}

impl Interaction {
    fn to_pact(&self) -> Value {
        json!({
            "type": "Synchronous/HTTP",
            "description": self.description,
            "providerStates": [{ "name": self.provider_state }],
            "request": self.request.to_pact(),
            "response": self.response.to_pact(),
        })
    }
}

/// The dog every 200 example is shaped like
#[must_use]
pub fn dog_example() -> Value {
    json!({ "breed": "Corgi", "age": 12 })
}

/// Given "I have a list of dogs", `GET /dogs?breed=Corgi` answers 200 with dogs
#[must_use]
pub fn dogs_available() -> Interaction {
    Interaction {
        description: "a request for all dogs with the builder pattern".into(),
        provider_state: "I have a list of dogs".into(),
        request: dogs_request("Corgi"),
        response: ContractResponse {
            status: StatusCode::OK,
            headers: json_content_type(),
            body: dog_example(),
            matching: BodyMatching::EachLike { min: 1 },
        },
    }
}

/// Given "I not have a list of dogs", `GET /dogs?breed=human` answers 404
#[must_use]
pub fn dogs_not_found() -> Interaction {
    Interaction {
        description: "a request for all dogs with the builder pattern1".into(),
        provider_state: "I not have a list of dogs".into(),
        request: dogs_request("human"),
        response: ContractResponse {
            status: StatusCode::NOT_FOUND,
            headers: json_content_type(),
            body: json!({ "error": "not found!" }),
            matching: BodyMatching::Exact,
        },
    }
}

/// Contract between a consumer and a provider
#[derive(Debug, Clone, PartialEq)]
pub struct Pact {
    pub consumer: String,
    pub provider: String,
    pub interactions: Vec<Interaction>,
}

impl Pact {
    #[must_use]
    pub fn new(consumer: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            consumer: consumer.into(),
            provider: provider.into(),
            interactions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// File name the pact is written under
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.consumer, self.provider)
    }

    /// Render the pact V4 document
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "consumer": { "name": self.consumer },
            "provider": { "name": self.provider },
            "interactions": self.interactions.iter().map(Interaction::to_pact).collect::<Vec<_>>(),
            "metadata": { "pactSpecification": { "version": "4.0" } },
        })
    }

    /// Write the pact to `<dir>/<consumer>-<provider>.json`, creating `dir`
    ///
    /// # Errors
    /// Returns [`DogServiceError::Io`] if the directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, DogServiceError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let rendered = serde_json::to_vec_pretty(&self.to_json())?;
        std::fs::write(&path, rendered)?;
        tracing::debug!(path = %path.display(), "pact written");
        Ok(path)
    }
}

/// The `frontend`/`backend` pact covering both dogs interactions
#[must_use]
pub fn dogs_pact() -> Pact {
    Pact::new(CONSUMER, PROVIDER)
        .with_interaction(dogs_available())
        .with_interaction(dogs_not_found())
}

fn dogs_request(breed: &str) -> ContractRequest {
    ContractRequest {
        method: Method::GET,
        path: DOGS_PATH.into(),
        query: BTreeMap::from([(BREED_PARAM.to_owned(), breed.to_owned())]),
        headers: BTreeMap::from([("Accept".to_owned(), "application/json".to_owned())]),
    }
}

fn json_content_type() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_owned(), "application/json".to_owned())])
}

fn multi_valued(headers: &BTreeMap<String, String>) -> Map<String, Value> {
    headers
        .iter()
        .map(|(k, v)| (k.clone(), json!([v])))
        .collect()
}

/// Type matching: same JSON kinds, every example key present, values free
fn same_shape(example: &Value, actual: &Value) -> bool {
    match (example, actual) {
        (Value::Object(expected), Value::Object(actual)) => expected
            .iter()
            .all(|(key, value)| actual.get(key).is_some_and(|v| same_shape(value, v))),
        (Value::Array(expected), Value::Array(actual)) => expected
            .first()
            .is_none_or(|first| actual.iter().all(|v| same_shape(first, v))),
        (Value::String(_), Value::String(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Null, Value::Null) => true,
        _ => false,
    }
}
