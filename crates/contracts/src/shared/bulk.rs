use serde::{Deserialize, Serialize};

/// Request body for bulk restore and deactivate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkRequest {
    pub ids: Vec<String>,
}

/// Request body for bulk delete
///
/// `force` skips the trash and removes the rows permanently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
    pub force: bool,
}

/// One row the server could not process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: String,
    pub reason: String,
}

/// Per-row result of a bulk mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub successes: Vec<String>,
    pub failures: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// Number of rows the request covered
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// True when every row went through
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Ids of the rows that failed, in response order
    pub fn failed_ids(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_outcome() -> BulkOutcome {
        BulkOutcome {
            successes: vec!["a".into(), "b".into(), "c".into()],
            failures: vec![
                BulkFailure {
                    id: "d".into(),
                    reason: "referenced by invoice".into(),
                },
                BulkFailure {
                    id: "e".into(),
                    reason: "referenced by purchase order".into(),
                },
            ],
        }
    }

    #[test]
    fn test_total_counts_both_sides() {
        assert_eq!(mixed_outcome().total(), 5);
    }

    #[test]
    fn test_failed_ids_cover_exactly_the_failures() {
        assert_eq!(mixed_outcome().failed_ids(), vec!["d", "e"]);
    }

    #[test]
    fn test_clean_outcome() {
        let outcome = BulkOutcome {
            successes: vec!["a".into()],
            failures: vec![],
        };
        assert!(outcome.is_clean());
        assert!(outcome.failed_ids().is_empty());
    }
}
