use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Response, StatusCode};
use tracing::debug;

use super::ClientError;
use crate::domain::{Department, Employee, Record, RecordId};

/// Default server the CLI talks to when no URL is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`DEFAULT_SERVER_URL`].
pub const SERVER_URL_ENV: &str = "EMPLOYEE_API_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type EmployeeClient = RecordClient<Employee>;
pub type DepartmentClient = RecordClient<Department>;

/// HTTP client for one record collection of a running server.
pub struct RecordClient<R: Record> {
    client: reqwest::Client,
    /// Collection URL, e.g. `http://localhost:8080/employees`.
    url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordClient<R> {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl AsRef<str>, client: reqwest::Client) -> Self {
        let trimmed = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            url: format!("{trimmed}/{}", R::COLLECTION),
            _record: PhantomData,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn create(&self, record: &R) -> Result<R, ClientError> {
        debug!("POST {}", self.url);
        let response = self.client.post(&self.url).json(record).send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(response.json().await?),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    pub async fn retrieve(&self, id: RecordId) -> Result<R, ClientError> {
        let url = self.item_url(id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = Self::expect_ok(response, id)?;
        Ok(response.json().await?)
    }

    pub async fn retrieve_all(&self) -> Result<Vec<R>, ClientError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    pub async fn update(&self, record: &R) -> Result<R, ClientError> {
        let url = self.item_url(record.id());
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(record).send().await?;
        let response = Self::expect_ok(response, record.id())?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound {
                entity: R::KIND,
                id,
            }),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    fn item_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.url, id)
    }

    fn expect_ok(response: Response, id: RecordId) -> Result<Response, ClientError> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound {
                entity: R::KIND,
                id,
            }),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }
}

/// Server URL from the environment, or the local default.
pub fn configured_server_url() -> String {
    std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}
