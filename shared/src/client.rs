use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::api::{parse_confirmation, ApiError, ApiResult, AppointmentApi, Endpoint, Method};
use crate::config::ClientConfig;
use crate::models::{Appointment, AppointmentDraft};

/// Native HTTP implementation of [`AppointmentApi`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn request(&self, endpoint: Endpoint<'_>) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }

    async fn confirmation(&self, request: RequestBuilder) -> ApiResult<Value> {
        let body = self
            .send(request)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_confirmation(&body))
    }
}

#[async_trait(?Send)]
impl AppointmentApi for HttpClient {
    async fn list_appointments(&self) -> ApiResult<Vec<Appointment>> {
        self.send(self.request(Endpoint::List))
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> ApiResult<Appointment> {
        self.send(self.request(Endpoint::Add).json(draft))
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_appointment(&self, id: &str, fields: &AppointmentDraft) -> ApiResult<Value> {
        self.confirmation(self.request(Endpoint::Update(id)).json(fields))
            .await
    }

    async fn delete_appointment(&self, id: &str) -> ApiResult<Value> {
        self.confirmation(self.request(Endpoint::Delete(id))).await
    }
}
