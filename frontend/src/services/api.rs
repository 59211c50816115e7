use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use shared::api::{parse_confirmation, Endpoint, Method};
use shared::{ApiError, ApiResult, Appointment, AppointmentApi, AppointmentDraft, ClientConfig};

/// Browser implementation of [`AppointmentApi`] on top of `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn request(&self, endpoint: Endpoint<'_>) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    async fn send(request: Request) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        Ok(response)
    }

    fn with_json(builder: RequestBuilder, body: &AppointmentDraft) -> ApiResult<Request> {
        builder
            .json(body)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))
    }

    async fn confirmation(request: Request) -> ApiResult<Value> {
        let body = Self::send(request)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        Ok(parse_confirmation(&body))
    }
}

#[async_trait(?Send)]
impl AppointmentApi for ApiService {
    async fn list_appointments(&self) -> ApiResult<Vec<Appointment>> {
        let request = self
            .request(Endpoint::List)
            .build()
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;

        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> ApiResult<Appointment> {
        let request = Self::with_json(self.request(Endpoint::Add), draft)?;

        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))
    }

    async fn update_appointment(&self, id: &str, fields: &AppointmentDraft) -> ApiResult<Value> {
        let request = Self::with_json(self.request(Endpoint::Update(id)), fields)?;
        Self::confirmation(request).await
    }

    async fn delete_appointment(&self, id: &str) -> ApiResult<Value> {
        let request = self
            .request(Endpoint::Delete(id))
            .build()
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        Self::confirmation(request).await
    }
}
