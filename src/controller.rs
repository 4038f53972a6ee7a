use crate::client::SearchClient;
use crate::error::AppError;
use crate::model::{ImagePayload, SearchMode, SearchOutcome};
use crate::request;

const SEARCHING_TEXT_STATUS: &str = "Searching...";
const SEARCHING_IMAGE_STATUS: &str = "Extracting text from image...";

/// Single source of truth for the active input mode, the stored inputs, and
/// the current search attempt's outcome.
///
/// Submissions are not re-entrant: the front-end must not trigger a new
/// submit while an attempt is SEARCHING. A submit that is abandoned anyway is
/// neutralized by the attempt token: only the latest issued attempt may
/// publish its outcome.
pub struct SearchModeController {
    client: SearchClient,
    mode: SearchMode,
    query_text: String,
    image: Option<ImagePayload>,
    outcome: SearchOutcome,
    attempt: u64,
}

struct AttemptTicket {
    attempt: u64,
}

impl SearchModeController {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            mode: SearchMode::default(),
            query_text: String::new(),
            image: None,
            outcome: SearchOutcome::idle(),
            attempt: 0,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Switches the active input channel. The inactive channel's stored input
    /// survives the switch; it is just not submitted while inactive.
    pub fn set_mode(&mut self, mode: SearchMode) {
        log::debug!("Switching search mode to {:?}", mode);
        self.mode = mode;
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Replaces the selected image; the previous payload is discarded.
    pub fn set_image_payload(&mut self, payload: ImagePayload) {
        log::debug!("Image payload selected: {}", payload.local_ref);
        self.image = Some(payload);
    }

    pub fn image_payload(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Runs one text search attempt to its terminal outcome. An empty query
    /// is rejected before any state changes or network traffic.
    pub async fn submit_text(&mut self) -> Result<(), AppError> {
        let request = request::text_request(&self.query_text)?;
        let ticket = self.start_attempt(SEARCHING_TEXT_STATUS);
        let outcome = self.client.search_by_text(&request).await;
        self.finish_attempt(ticket, outcome);
        Ok(())
    }

    /// Runs one image search attempt to its terminal outcome. A missing
    /// payload is rejected before any state changes or network traffic.
    pub async fn submit_image(&mut self) -> Result<(), AppError> {
        let payload = request::image_request(self.image.as_ref())?.clone();
        let ticket = self.start_attempt(SEARCHING_IMAGE_STATUS);
        let outcome = self.client.search_by_image(&payload).await;
        self.finish_attempt(ticket, outcome);
        Ok(())
    }

    fn start_attempt(&mut self, status_text: &str) -> AttemptTicket {
        self.attempt += 1;
        log::debug!("Search attempt {} started", self.attempt);
        self.outcome = SearchOutcome::searching(status_text);
        AttemptTicket {
            attempt: self.attempt,
        }
    }

    /// Publishes an attempt's outcome unless a newer attempt has been issued
    /// in the meantime (last-submit-wins, without transport cancellation).
    fn finish_attempt(&mut self, ticket: AttemptTicket, outcome: SearchOutcome) {
        if ticket.attempt != self.attempt {
            log::debug!(
                "Discarding stale outcome for attempt {} (latest is {})",
                ticket.attempt,
                self.attempt
            );
            return;
        }
        log::debug!("Search attempt {} finished: {:?}", ticket.attempt, outcome.status);
        self.outcome = outcome;
    }
}
