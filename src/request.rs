use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::AppError;
use crate::model::ImagePayload;

/// Multipart field name the backend expects for image uploads.
pub const IMAGE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSearchRequest {
    pub query: String,
}

/// Builds the text-search body. An empty query never reaches the network.
pub fn text_request(query: &str) -> Result<TextSearchRequest, AppError> {
    if query.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    Ok(TextSearchRequest {
        query: query.to_string(),
    })
}

/// Checks the image-search precondition without consuming the payload.
pub fn image_request(payload: Option<&ImagePayload>) -> Result<&ImagePayload, AppError> {
    payload.ok_or(AppError::NoImageSelected)
}

/// Builds the multipart body shared by image search and admin upload.
pub fn image_form(payload: &ImagePayload) -> Result<Form, AppError> {
    let part = Part::bytes(payload.bytes.clone())
        .file_name(payload.local_ref.clone())
        .mime_str(payload.mime.as_ref())?;
    Ok(Form::new().part(IMAGE_FIELD, part))
}
