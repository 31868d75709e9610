//! HTTP client for the management API
//!
//! Wraps every endpoint of the remote gateway: employee CRUD, the
//! department reference set, and the recent-activity feed. All responses
//! arrive in the standard `ApiResponse` envelope; a response that does
//! not is treated as a generic failure.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::ApiResponse;
use shared::{ActivityRecord, Department, Employee, EmployeePayload};

/// HTTP client for making network requests to the management API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = Self::envelope_message(&text).unwrap_or(text);
            tracing::warn!(status = %status, "gateway request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Extract the `message` field from an error body, if the body is an
    /// `ApiResponse` envelope.
    fn envelope_message(body: &str) -> Option<String> {
        serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .filter(|envelope| !envelope.message.is_empty())
            .map(|envelope| envelope.message)
    }

    // ========== Employee API ==========

    /// List all employees
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get::<ApiResponse<Vec<Employee>>>("/api/employees")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Create a new employee, returning the canonical server record
    pub async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        self.post::<ApiResponse<Employee>, _>("/api/employees", payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Update an employee, returning the canonical server record
    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> ClientResult<Employee> {
        self.put::<ApiResponse<Employee>, _>(&format!("/api/employees/{}", id), payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<serde_json::Value>>(&format!("/api/employees/{}", id))
            .await?;
        Ok(())
    }

    // ========== Department API ==========

    /// List all departments
    pub async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get::<ApiResponse<Vec<Department>>>("/api/departments")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing department data".to_string()))
    }

    // ========== Activity API ==========

    /// List recent activities, newest first
    pub async fn list_activities(&self) -> ClientResult<Vec<ActivityRecord>> {
        self.get::<ApiResponse<Vec<ActivityRecord>>>("/api/activities")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing activity data".to_string()))
    }
}
