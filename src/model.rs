use std::path::Path;

use crate::error::AppError;

/// Result galleries never show more than this many images.
pub const MAX_RESULT_REFS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Text,
    Image,
}

#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime: mime::Mime,
    pub local_ref: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime: mime::Mime, local_ref: impl Into<String>) -> Self {
        Self {
            bytes,
            mime,
            local_ref: local_ref.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let bytes = std::fs::read(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let local_ref = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        log::debug!("Loaded image payload {} ({}, {} bytes)", local_ref, mime, bytes.len());
        Ok(Self::new(bytes, mime, local_ref))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Searching,
    Success,
    Empty,
    Error,
}

/// One search attempt's result. Replaced wholesale by each new attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub result_refs: Vec<String>,
    pub message: String,
}

impl SearchOutcome {
    pub fn idle() -> Self {
        Self {
            status: SearchStatus::Idle,
            result_refs: Vec::new(),
            message: String::new(),
        }
    }

    pub fn searching(message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Searching,
            result_refs: Vec::new(),
            message: message.into(),
        }
    }

    pub fn success(mut result_refs: Vec<String>, message: impl Into<String>) -> Self {
        result_refs.truncate(MAX_RESULT_REFS);
        Self {
            status: SearchStatus::Success,
            result_refs,
            message: message.into(),
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Empty,
            result_refs: Vec::new(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Error,
            result_refs: Vec::new(),
            message: message.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            SearchStatus::Success | SearchStatus::Empty | SearchStatus::Error
        )
    }
}

impl Default for SearchOutcome {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_truncates_to_first_eight_in_order() {
        let refs: Vec<String> = (0..12).map(|i| format!("/static/images/{i}.jpg")).collect();
        let outcome = SearchOutcome::success(refs.clone(), "");

        assert_eq!(outcome.status, SearchStatus::Success);
        assert_eq!(outcome.result_refs.len(), MAX_RESULT_REFS);
        assert_eq!(outcome.result_refs, refs[..MAX_RESULT_REFS].to_vec());
    }

    #[test]
    fn error_and_empty_carry_no_refs() {
        assert!(SearchOutcome::error("boom").result_refs.is_empty());
        assert!(SearchOutcome::empty("none").result_refs.is_empty());
    }

    #[test]
    fn default_mode_is_text() {
        assert_eq!(SearchMode::default(), SearchMode::Text);
    }
}
