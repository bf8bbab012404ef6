use crate::sbom_upload::domain::{UploadOutcome, UploadReport};

/// UploadResponse - Result of one upload run
///
/// `outcomes` keeps the per-file details (including failure messages) in
/// discovery order; `report` is the two-list summary derived from them.
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub outcomes: Vec<UploadOutcome>,
    pub report: UploadReport,
    /// True iff no upload failed
    pub success: bool,
}

impl UploadResponse {
    pub fn new(outcomes: Vec<UploadOutcome>) -> Self {
        let report = UploadReport::from_outcomes(&outcomes);
        let success = report.is_success();
        Self {
            outcomes,
            report,
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_upload::domain::UploadTarget;

    #[test]
    fn test_empty_response_is_success() {
        let response = UploadResponse::new(vec![]);
        assert!(response.success);
        assert!(response.report.success.is_empty());
        assert!(response.report.failure.is_empty());
    }

    #[test]
    fn test_single_failure_fails_the_run() {
        let response = UploadResponse::new(vec![
            UploadOutcome::success(UploadTarget::new("/a.json").unwrap()),
            UploadOutcome::failure(UploadTarget::new("/b.json").unwrap(), "500"),
        ]);
        assert!(!response.success);
        assert_eq!(response.report.total(), 2);
        assert_eq!(response.outcomes.len(), 2);
    }
}
