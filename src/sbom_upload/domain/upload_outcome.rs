use super::UploadTarget;

/// Result of a single upload attempt
///
/// Workers never propagate errors out of an attempt. Everything that can go
/// wrong while uploading one file is folded into `Failure` so the
/// orchestrator only has to match on the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { target: UploadTarget },
    Failure { target: UploadTarget, detail: String },
}

impl UploadOutcome {
    pub fn success(target: UploadTarget) -> Self {
        UploadOutcome::Success { target }
    }

    pub fn failure(target: UploadTarget, detail: impl Into<String>) -> Self {
        UploadOutcome::Failure {
            target,
            detail: detail.into(),
        }
    }

    pub fn target(&self) -> &UploadTarget {
        match self {
            UploadOutcome::Success { target } | UploadOutcome::Failure { target, .. } => target,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }

    /// Error detail, present only for failures
    pub fn detail(&self) -> Option<&str> {
        match self {
            UploadOutcome::Success { .. } => None,
            UploadOutcome::Failure { detail, .. } => Some(detail),
        }
    }
}
