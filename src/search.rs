use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppError;
use crate::model::ImagePayload;
use crate::request::TextSearchRequest;

/// Reply to a text search. A missing list means no matches.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchReply {
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Reply to an image search. The backend echoes the text it decoded from the
/// submitted image; a missing field is tolerated and read as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchReply {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// One network round trip per call, no retries.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_text(&self, request: &TextSearchRequest) -> Result<TextSearchReply, AppError>;
    async fn search_image(&self, payload: &ImagePayload) -> Result<ImageSearchReply, AppError>;
}
