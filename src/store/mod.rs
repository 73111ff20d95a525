//! Access to the hosted table-REST record store.
//!
//! [`TableRequest`] describes a single call against a table resource and
//! [`TableStore`] executes it. [`StoreConnector`] is the HTTP implementation;
//! tests substitute their own.

mod connector;
mod error;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use connector::StoreConnector;
pub use error::StoreError;

/// Anything that can execute table requests.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Execute one request and return the parsed JSON body.
    ///
    /// An empty response body is returned as `Value::Null`.
    async fn execute(&self, request: TableRequest) -> Result<Value, StoreError>;
}

#[async_trait]
impl<T: TableStore + ?Sized> TableStore for Arc<T> {
    async fn execute(&self, request: TableRequest) -> Result<Value, StoreError> {
        (**self).execute(request).await
    }
}

/// Table operation, mapped onto an HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMethod {
    Select,
    Insert,
    Update,
    Delete,
}

impl TableMethod {
    pub fn http_method(&self) -> reqwest::Method {
        match self {
            TableMethod::Select => reqwest::Method::GET,
            TableMethod::Insert => reqwest::Method::POST,
            TableMethod::Update => reqwest::Method::PATCH,
            TableMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Equality row filter rendered as `column=eq.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self {
            column: column.into(),
            value: value.to_string(),
        }
    }

    /// The query pair for this filter.
    pub fn to_query_pair(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=eq.{}", self.column, self.value)
    }
}

/// A single request against a table resource.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRequest {
    pub resource: String,
    pub method: TableMethod,
    pub filter: Option<Filter>,
    /// Column list for reads; `*` selects every column.
    pub select: Option<String>,
    pub body: Option<Value>,
    /// Ask the store to echo the affected rows back.
    pub return_representation: bool,
}

impl TableRequest {
    fn new(resource: impl Into<String>, method: TableMethod) -> Self {
        Self {
            resource: resource.into(),
            method,
            filter: None,
            select: None,
            body: None,
            return_representation: false,
        }
    }

    /// Read every column of the matching rows.
    pub fn select(resource: impl Into<String>) -> Self {
        let mut request = Self::new(resource, TableMethod::Select);
        request.select = Some("*".to_string());
        request
    }

    /// Insert one row (object body) or many rows (array body), echoing them back.
    pub fn insert(resource: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(resource, TableMethod::Insert);
        request.body = Some(body);
        request.return_representation = true;
        request
    }

    /// Overwrite the given columns of the matching rows, echoing them back.
    pub fn update(resource: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(resource, TableMethod::Update);
        request.body = Some(body);
        request.return_representation = true;
        request
    }

    /// Delete the matching rows. Without a filter this deletes every row.
    pub fn delete(resource: impl Into<String>) -> Self {
        Self::new(resource, TableMethod::Delete)
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Query pairs in wire order: filter first, then `select`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(filter.to_query_pair());
        }
        if let Some(select) = &self.select {
            pairs.push(("select".to_string(), select.clone()));
        }
        pairs
    }
}
