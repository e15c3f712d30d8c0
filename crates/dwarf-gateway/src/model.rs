use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUrlsRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUrlsResponse {
    /// Short urls, in request order.
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
