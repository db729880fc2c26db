use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the kb-server REST API
pub struct Client {
    pub base_url: String,
    /// Sent as `X-User-Id` when no token is set (desktop mode)
    pub user_id: Option<String>,
    /// Sent as a bearer token; takes precedence over `user_id`
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Authenticate with a bearer JWT instead of X-User-Id
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(String::from);
        self
    }

    /// Absolute URL for `path` with percent-encoded query parameters
    #[track_caller]
    fn url(&self, path: &str, params: &[(&str, String)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let location = ErrorLocation::from(Location::caller());
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location,
        })?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Build a request with credentials attached
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);

        match (&self.token, &self.user_id) {
            (Some(token), _) => req.bearer_auth(token),
            (None, Some(user_id)) => req.header("X-User-Id", user_id),
            (None, None) => req,
        }
    }

    /// Execute request and handle errors
    ///
    /// Empty success bodies (204) come back as `Value::Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let error = &body["error"];
        let text = |key: &str| error.get(key).and_then(Value::as_str).map(String::from);

        let (code, message) = if error.is_object() {
            (
                text("code").unwrap_or_else(|| "UNKNOWN".to_string()),
                text("message").unwrap_or_else(|| "Unknown error".to_string()),
            )
        } else {
            (
                format!("HTTP_{}", status.as_u16()),
                String::from_utf8_lossy(&bytes).into_owned(),
            )
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
            field: text("field"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn get(&self, path: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, self.url(path, &[])?);
        self.execute(req).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> CliClientResult<Value> {
        let req = self.request(method, self.url(path, &[])?).json(body);
        self.execute(req).await
    }

    async fn delete(&self, path: &str, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, self.url(path, &[])?);
        self.execute(req).await?;
        Ok(json!({ "deleted_id": id }))
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Register the acting user
    pub async fn register(&self, email: &str, name: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            name: &'a str,
        }

        self.send_json(
            Method::POST,
            "/api/v1/auth/register",
            &RegisterRequest { email, name },
        )
        .await
    }

    /// The acting user's profile
    pub async fn me(&self) -> CliClientResult<Value> {
        self.get("/api/v1/auth/me").await
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    pub async fn list_boards(&self) -> CliClientResult<Value> {
        self.get("/api/v1/boards").await
    }

    /// Get a board with its columns
    pub async fn get_board(&self, id: &str) -> CliClientResult<Value> {
        self.get(&format!("/api/v1/boards/{}", id)).await
    }

    pub async fn create_board(&self, name: &str) -> CliClientResult<Value> {
        self.send_json(Method::POST, "/api/v1/boards", &json!({ "name": name }))
            .await
    }

    pub async fn delete_board(&self, id: &str) -> CliClientResult<Value> {
        self.delete(&format!("/api/v1/boards/{}", id), id).await
    }

    // =========================================================================
    // Column Operations
    // =========================================================================

    pub async fn list_columns(&self, board_id: &str) -> CliClientResult<Value> {
        self.get(&format!("/api/v1/boards/{}/columns", board_id))
            .await
    }

    pub async fn create_column(&self, board_id: &str, name: &str) -> CliClientResult<Value> {
        self.send_json(
            Method::POST,
            &format!("/api/v1/boards/{}/columns", board_id),
            &json!({ "name": name }),
        )
        .await
    }

    /// Rename and/or reposition a column
    pub async fn update_column(
        &self,
        id: &str,
        name: Option<&str>,
        order: Option<i32>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateColumnRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            order: Option<i32>,
        }

        self.send_json(
            Method::PATCH,
            &format!("/api/v1/columns/{}", id),
            &UpdateColumnRequest { name, order },
        )
        .await
    }

    pub async fn delete_column(&self, id: &str) -> CliClientResult<Value> {
        self.delete(&format!("/api/v1/columns/{}", id), id).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Every task on a board
    pub async fn list_board_tasks(&self, board_id: &str) -> CliClientResult<Value> {
        self.get(&format!("/api/v1/boards/{}/tasks", board_id))
            .await
    }

    /// One page of a column's tasks
    pub async fn list_column_tasks(
        &self,
        column_id: &str,
        search: Option<&str>,
        sort: Option<&str>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> CliClientResult<Value> {
        let mut params = vec![];
        if let Some(s) = search {
            params.push(("search", s.to_string()));
        }
        if let Some(s) = sort {
            params.push(("sort", s.to_string()));
        }
        if let Some(p) = page {
            params.push(("page", p.to_string()));
        }
        if let Some(l) = limit {
            params.push(("limit", l.to_string()));
        }

        let url = self.url(&format!("/api/v1/columns/{}/tasks", column_id), &params)?;
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    pub async fn get_task(&self, id: &str) -> CliClientResult<Value> {
        self.get(&format!("/api/v1/tasks/{}", id)).await
    }

    pub async fn create_task(
        &self,
        column_id: &str,
        title: &str,
        description: Option<&str>,
        priority: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateTaskRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            priority: Option<&'a str>,
        }

        self.send_json(
            Method::POST,
            &format!("/api/v1/columns/{}/tasks", column_id),
            &CreateTaskRequest {
                title,
                description,
                priority,
            },
        )
        .await
    }

    /// Edit task fields. An empty description clears it.
    pub async fn update_task(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateTaskRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            priority: Option<&'a str>,
        }

        self.send_json(
            Method::PATCH,
            &format!("/api/v1/tasks/{}", id),
            &UpdateTaskRequest {
                title,
                description,
                priority,
            },
        )
        .await
    }

    /// Move a task. Both values are stored exactly as sent.
    pub async fn move_task(
        &self,
        id: &str,
        column_id: Option<&str>,
        order: Option<i32>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct MoveTaskRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            column_id: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            order: Option<i32>,
        }

        self.send_json(
            Method::PATCH,
            &format!("/api/v1/tasks/{}", id),
            &MoveTaskRequest { column_id, order },
        )
        .await
    }

    pub async fn delete_task(&self, id: &str) -> CliClientResult<Value> {
        self.delete(&format!("/api/v1/tasks/{}", id), id).await
    }

    // =========================================================================
    // Comment Operations
    // =========================================================================

    pub async fn list_comments(&self, task_id: &str) -> CliClientResult<Value> {
        self.get(&format!("/api/v1/tasks/{}/comments", task_id))
            .await
    }

    pub async fn create_comment(&self, task_id: &str, content: &str) -> CliClientResult<Value> {
        self.send_json(
            Method::POST,
            &format!("/api/v1/tasks/{}/comments", task_id),
            &json!({ "content": content }),
        )
        .await
    }

    pub async fn delete_comment(&self, id: &str) -> CliClientResult<Value> {
        self.delete(&format!("/api/v1/comments/{}", id), id).await
    }
}
