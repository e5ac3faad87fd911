use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use url::Url;

use crate::error::DogServiceError;

/// Outbound HTTP request: method, path, query pairs and headers
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl Request {
    /// Create a new request builder
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Get the HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the request path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the query pairs in insertion order
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Get the request headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Resolve the full URL against `endpoint`.
    ///
    /// The path is appended to the endpoint as-is, so an endpoint carrying a
    /// base path (`http://host/api`) keeps it. Query values are
    /// percent-encoded.
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] if the combined URL does not parse.
    pub fn url(&self, endpoint: &str) -> Result<Url, DogServiceError> {
        let raw = format!("{}{}", endpoint.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| DogServiceError::Build(format!("Invalid request URL {raw}: {e}")))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

/// Builder for constructing HTTP requests with a fluent API
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl RequestBuilder {
    /// Set the HTTP method (defaults to GET)
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the request path, starting with `/`
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a header
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] for an invalid header name or value.
    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self, DogServiceError>
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
        K::Error: std::fmt::Display,
        V::Error: std::fmt::Display,
    {
        let key = key
            .try_into()
            .map_err(|e| DogServiceError::Build(format!("Invalid header name: {e}")))?;
        let value = value
            .try_into()
            .map_err(|e| DogServiceError::Build(format!("Invalid header value: {e}")))?;
        self.headers.insert(key, value);
        Ok(self)
    }

    /// Declare that the caller expects a JSON response
    #[must_use]
    pub fn accept_json(mut self) -> Self {
        self.headers
            .insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    /// Build the request
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] when no path was set.
    pub fn build(self) -> Result<Request, DogServiceError> {
        let method = self.method.unwrap_or(Method::GET);
        let path = self
            .path
            .ok_or_else(|| DogServiceError::Build("Request path is required".into()))?;

        Ok(Request {
            method,
            path,
            query: self.query,
            headers: self.headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_to_get() {
        let request = Request::builder().path("/dogs").build().unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_build_requires_path() {
        let err = Request::builder().build().unwrap_err();
        assert!(matches!(err, DogServiceError::Build(_)));
    }

    #[test]
    fn test_invalid_header_is_build_error() {
        let err = Request::builder().header("bad header", "x").unwrap_err();
        assert!(matches!(err, DogServiceError::Build(_)));
    }

    #[test]
    fn test_accept_json() {
        let request = Request::builder()
            .path("/dogs")
            .accept_json()
            .build()
            .unwrap();
        assert_eq!(request.headers()[header::ACCEPT], "application/json");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let request = Request::builder().path("/dogs").build().unwrap();
        let url = request.url("http://localhost:8080/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/dogs");
    }

    #[test]
    fn test_url_encodes_query() {
        let request = Request::builder()
            .path("/dogs")
            .query("breed", "Jack Russell & co")
            .build()
            .unwrap();
        let url = request.url("http://localhost:8080").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/dogs?breed=Jack+Russell+%26+co"
        );
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("breed".to_owned(), "Jack Russell & co".to_owned())]
        );
    }
}
