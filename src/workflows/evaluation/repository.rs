use super::domain::Evaluation;
use super::patch::EvaluationPatch;

/// Storage abstraction over the evaluation document collection so the
/// service and workflow can be exercised without a concrete driver.
///
/// Implementations must treat `(salesman_id, year)` as a uniqueness
/// constraint: `insert` on an existing key surfaces [`RepositoryError::Conflict`]
/// rather than silently overwriting.
pub trait EvaluationRepository: Send + Sync {
    /// Persist a new evaluation. Fails with `Conflict` on a duplicate key.
    fn insert(&self, evaluation: Evaluation) -> Result<Evaluation, RepositoryError>;

    /// Look up the evaluation for the key. A miss is `Ok(None)`, not an error.
    fn find(&self, salesman_id: u32, year: u16) -> Result<Option<Evaluation>, RepositoryError>;

    /// Merge the patch onto the stored document and return the result.
    /// Fails with `NotFound` if no record exists for the key.
    fn apply(
        &self,
        salesman_id: u32,
        year: u16,
        patch: &EvaluationPatch,
    ) -> Result<Evaluation, RepositoryError>;
}

/// Error enumeration for evaluation store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("an evaluation already exists for this salesman and year")]
    Conflict,
    #[error("no evaluation exists for this salesman and year")]
    NotFound,
    #[error("evaluation store unavailable: {0}")]
    Unavailable(String),
}
