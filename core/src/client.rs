//! Stateless HTTP request builder and response parser for the directory API.
//!
//! # Design
//! `DirectoryClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! 404 responses are classified as `ApiError::NotFound` before the generic
//! status check, so hosts can report "entry does not exist" for update and
//! delete instead of a bare HTTP failure.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateReply, Employee, EmployeeUpdate, MessageReply, NewEmployee};

/// Synchronous, stateless client for the employee directory API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The host is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_path(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn item_path(&self, id: u32) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_path())
    }

    pub fn build_get_employee(&self, id: u32) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.item_path(id))
    }

    pub fn build_create_employee(&self, input: &NewEmployee) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_path(), body))
    }

    pub fn build_update_employee(&self, id: u32, input: &EmployeeUpdate) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_path(id), body))
    }

    pub fn build_delete_employee(&self, id: u32) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.item_path(id))
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<CreateReply, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<MessageReply, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<MessageReply, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
///
/// 404 wins over the generic variant so not-found stays distinguishable.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
