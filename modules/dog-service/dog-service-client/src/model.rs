use serde::{Deserialize, Serialize};

/// One dog record as served by `GET /dogs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub breed: String,
    pub age: u32,
}

/// Error record served alongside a 404
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
