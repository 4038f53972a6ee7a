use std::sync::Arc;

use crate::model::{ImagePayload, SearchOutcome};
use crate::request::TextSearchRequest;
use crate::search::SearchBackend;

pub const NO_MATCHES_MESSAGE: &str = "No matches found.";
pub const TEXT_ERROR_MESSAGE: &str = "Something went wrong. Try again.";
pub const IMAGE_ERROR_MESSAGE: &str = "Something went wrong during the image search. Try again.";

/// Runs one search round trip and folds every possible result, including
/// transport and parse failures, into a terminal `SearchOutcome`. No error
/// type leaves this boundary.
#[derive(Clone)]
pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
}

impl SearchClient {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    pub async fn search_by_text(&self, request: &TextSearchRequest) -> SearchOutcome {
        match self.backend.search_text(request).await {
            Ok(reply) => classify(reply.images, None),
            Err(e) => {
                log::warn!("Text search failed: {}", e);
                SearchOutcome::error(TEXT_ERROR_MESSAGE)
            }
        }
    }

    pub async fn search_by_image(&self, payload: &ImagePayload) -> SearchOutcome {
        match self.backend.search_image(payload).await {
            Ok(reply) => {
                // Missing decoded text is a backend contract violation;
                // defend by reading it as empty.
                let decoded = reply.query.unwrap_or_default();
                classify(reply.images, Some(&decoded))
            }
            Err(e) => {
                log::warn!("Image search failed: {}", e);
                SearchOutcome::error(IMAGE_ERROR_MESSAGE)
            }
        }
    }
}

/// Classifies a well-formed reply. The decoded text, when present, is shown
/// to the user whether or not anything matched.
fn classify(images: Option<Vec<String>>, decoded: Option<&str>) -> SearchOutcome {
    let refs = images.unwrap_or_default();
    let prefix = decoded.map(|text| format!("Detected text: \"{}\"", text));

    if refs.is_empty() {
        let message = match &prefix {
            Some(prefix) => format!("{} {}", prefix, NO_MATCHES_MESSAGE),
            None => NO_MATCHES_MESSAGE.to_string(),
        };
        return SearchOutcome::empty(message);
    }

    SearchOutcome::success(refs, prefix.unwrap_or_default())
}
