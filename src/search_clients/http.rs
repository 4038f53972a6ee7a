use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::ImagePayload;
use crate::request::{self, TextSearchRequest};
use crate::search::{ImageSearchReply, SearchBackend, TextSearchReply};

const TEXT_SEARCH_PATH: &str = "/search";
const IMAGE_SEARCH_PATH: &str = "/search/image";

pub struct HttpSearchBackend {
    client: Client,
    base: Url,
}

impl HttpSearchBackend {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log::debug!("Creating search backend client for URL: {}", config.backend_url);
        let base = Url::parse(&config.backend_url)?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn with_base(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search_text(&self, request: &TextSearchRequest) -> Result<TextSearchReply, AppError> {
        let endpoint = self.base.join(TEXT_SEARCH_PATH)?;
        log::debug!("Posting text search to {} with query: {}", endpoint, request.query);

        let reply = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<TextSearchReply>()
            .await?;

        log::trace!("Text search reply: {:?}", reply);
        Ok(reply)
    }

    async fn search_image(&self, payload: &ImagePayload) -> Result<ImageSearchReply, AppError> {
        let endpoint = self.base.join(IMAGE_SEARCH_PATH)?;
        log::debug!(
            "Posting image search to {} for {} ({} bytes)",
            endpoint,
            payload.local_ref,
            payload.bytes.len()
        );

        let form = request::image_form(payload)?;
        let reply = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<ImageSearchReply>()
            .await?;

        log::trace!("Image search reply: {:?}", reply);
        Ok(reply)
    }
}
