use crate::models::domain::Fact;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub const WELL_FORMED_RAW: &str = "(Paris is in Germany @ False) | (Paris is in France @ True) | \
(The Eiffel Tower is in Paris @ True) | (Paris is the capital of France @ True)";

    pub const PARIS_ARTICLE: &str = "Paris is the capital and largest city of France. \
The Eiffel Tower was completed in 1889.";

    /// The four facts encoded by [`WELL_FORMED_RAW`], in order.
    pub fn sample_batch() -> Vec<Fact> {
        vec![
            Fact::new("Paris is in Germany", false),
            Fact::new("Paris is in France", true),
            Fact::new("The Eiffel Tower is in Paris", true),
            Fact::new("Paris is the capital of France", true),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::fact_parser::parse_facts;

    #[test]
    fn test_sample_batch_matches_raw_fixture() {
        assert_eq!(parse_facts(WELL_FORMED_RAW), sample_batch());
    }

    #[test]
    fn test_sample_batch_has_one_fake() {
        let batch = sample_batch();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch.iter().filter(|f| !f.is_true).count(), 1);
    }
}
