use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::SearchOutcome;

/// Read-only projection of a `SearchOutcome`: one status line plus the
/// gallery of displayable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedView {
    pub status_line: String,
    pub gallery: Vec<Url>,
}

/// Maps outcomes to renderable state. Holds no state of its own beyond the
/// fixed backend base origin used to resolve image references.
pub struct StatusProjector {
    base: Url,
}

impl StatusProjector {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self::new(Url::parse(&config.backend_url)?))
    }

    /// Recomputed on every outcome change. References the base origin cannot
    /// resolve are dropped rather than failing the whole gallery.
    pub fn project(&self, outcome: &SearchOutcome) -> ProjectedView {
        let gallery = outcome
            .result_refs
            .iter()
            .filter_map(|image_ref| match self.base.join(image_ref) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("Dropping unresolvable image reference {}: {}", image_ref, e);
                    None
                }
            })
            .collect();

        ProjectedView {
            status_line: outcome.message.clone(),
            gallery,
        }
    }
}
