//! Test case definitions
//!
//! A test case is a single externally-defined request to be executed and
//! timed. Cases are read-only once loaded from a test definition file.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single REST request specification
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestTestCase {
    /// HTTP verb, case-insensitive (GET, post, Put, ...)
    pub method: String,

    /// Target URL
    pub url: String,

    /// Request headers (empty when omitted)
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Optional structured payload, sent as a JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RestTestCase {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A single GraphQL request specification
///
/// Always executed as an HTTP POST carrying `{"query": <query>}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphqlTestCase {
    /// GraphQL endpoint URL
    pub url: String,

    /// Raw GraphQL query or mutation text (empty string is allowed and is
    /// sent downstream unmodified)
    pub query: String,

    /// Request headers; `None` means the JSON content-type default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl GraphqlTestCase {
    pub fn new(url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: query.into(),
            headers: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Headers to put on the wire. Cases without headers get exactly one
    /// entry declaring a JSON content type.
    pub fn effective_headers(&self) -> HashMap<String, String> {
        match &self.headers {
            Some(headers) => headers.clone(),
            None => HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        }
    }
}
