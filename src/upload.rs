use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::ImagePayload;
use crate::request;

const UPLOAD_PATH: &str = "/admin/upload";

/// Backend confirmation naming the classification folder the image landed in.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub status: String,
    pub metal: String,
}

/// Admin-side collaborator: ships a raw image to the catalog backend, which
/// classifies it and files it away.
pub struct AdminUploader {
    client: Client,
    base: Url,
}

impl AdminUploader {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self::with_base(Url::parse(&config.backend_url)?))
    }

    pub fn with_base(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    pub async fn upload(&self, payload: &ImagePayload) -> Result<UploadReceipt, AppError> {
        let endpoint = self.base.join(UPLOAD_PATH)?;
        log::debug!(
            "Uploading {} ({} bytes) to {}",
            payload.local_ref,
            payload.bytes.len(),
            endpoint
        );

        let form = request::image_form(payload)?;
        let receipt = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<UploadReceipt>()
            .await?;

        log::info!(
            "Upload of {} accepted into the {} folder",
            payload.local_ref,
            receipt.metal
        );
        Ok(receipt)
    }
}
