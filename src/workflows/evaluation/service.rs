use std::sync::Arc;

use super::domain::{Approver, Evaluation, ValidationError};
use super::generator::{EvaluationGenerator, GenerateError};
use super::patch::EvaluationPatch;
use super::repository::{EvaluationRepository, RepositoryError};

/// Service composing the evaluation generator and the evaluation store.
///
/// Exposes the generate/read/create/update primitives separately; the
/// read-through-create orchestration on a read miss belongs to the API
/// layer calling this service.
pub struct EvaluationService<R> {
    repository: Arc<R>,
    generator: EvaluationGenerator,
}

impl<R> EvaluationService<R>
where
    R: EvaluationRepository + 'static,
{
    pub fn new(repository: Arc<R>, generator: EvaluationGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Assemble a transient draft from the underlying sales/social data.
    /// Nothing is persisted.
    pub fn generate(&self, salesman_id: u32, year: u16) -> Result<Evaluation, EvaluationServiceError> {
        let draft = self.generator.generate(salesman_id, year)?;
        Ok(draft)
    }

    /// Read the persisted evaluation; a miss is `Ok(None)`, not an error.
    pub fn read(&self, salesman_id: u32, year: u16) -> Result<Option<Evaluation>, EvaluationServiceError> {
        let stored = self.repository.find(salesman_id, year)?;
        Ok(stored)
    }

    /// Persist a draft. The store's uniqueness constraint on
    /// `(salesman_id, year)` surfaces duplicate creation as `Conflict`.
    pub fn create(&self, evaluation: Evaluation) -> Result<Evaluation, EvaluationServiceError> {
        let stored = self.repository.insert(evaluation)?;
        Ok(stored)
    }

    /// Merge the patch onto the stored evaluation. Fields absent from the
    /// patch retain their stored value.
    pub fn update(
        &self,
        salesman_id: u32,
        year: u16,
        patch: &EvaluationPatch,
    ) -> Result<Evaluation, EvaluationServiceError> {
        let updated = self.repository.apply(salesman_id, year, patch)?;
        Ok(updated)
    }

    /// Record one party's sign-off. Re-accepting an already-accepted
    /// evaluation is a no-op success.
    pub fn accept(
        &self,
        approver: Approver,
        salesman_id: u32,
        year: u16,
    ) -> Result<Evaluation, EvaluationServiceError> {
        let accepted = self
            .repository
            .apply(salesman_id, year, &EvaluationPatch::acceptance(approver))?;
        Ok(accepted)
    }
}

/// Error raised by the evaluation service. Collaborator failures propagate
/// unmodified; no retries, no silent fallback.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
