//! Todo API Bindings
//!
//! Frontend bindings for the todo HTTP API, behind a trait so the sync
//! controller can be exercised against a stub.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::Todo;

/// Base URL of the backend API
pub const API_BASE: &str = "http://localhost:4000";

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    text: &'a str,
}

/// Request boundary of the sync controller
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, String>;
    async fn create_todo(&self, text: &str) -> Result<Todo, String>;
    async fn toggle_todo(&self, id: u32) -> Result<Todo, String>;
    async fn delete_todo(&self, id: u32) -> Result<(), String>;
}

/// HTTP implementation of [`TodoApi`]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, String> {
        let response = self
            .client
            .get(self.url("/todos"))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        response.json().await.map_err(|e| e.to_string())
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, String> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(&CreateTodoArgs { text })
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        response.json().await.map_err(|e| e.to_string())
    }

    async fn toggle_todo(&self, id: u32) -> Result<Todo, String> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        response.json().await.map_err(|e| e.to_string())
    }

    async fn delete_todo(&self, id: u32) -> Result<(), String> {
        self.client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
