//! Yearly bonus evaluation generation, storage, and approval workflow.
//!
//! The generator joins salesman, sales-order, customer, and social-
//! performance data into a per-year [`Evaluation`] draft; the store persists
//! drafts under a `(salesman_id, year)` uniqueness constraint; the approval
//! workflow records the three independent HR/CEO/salesman sign-offs. The
//! external HR/CRM/ERP systems and the document store appear only as the
//! collaborator traits in [`generator`] and [`repository`].

pub mod bonus;
pub mod domain;
pub mod generator;
pub mod import;
pub mod memory;
pub mod patch;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Approver, BonusLedger, Customer, CustomerRating, Evaluation, EvaluationKey, EvaluationView,
    Gender, OrderTotals, Position, Product, SalesOrder, SalesPerformance, Salesman,
    SocialPerformance, ValidationError,
};
pub use generator::{
    CustomerLookup, EvaluationGenerator, GenerateError, LookupError, SalesOrderLookup,
    SalesmanLookup, SalesmanProfile, SocialPerformanceLookup,
};
pub use import::{SocialImportError, SocialPerformanceImporter};
pub use memory::{InMemoryDirectory, InMemoryEvaluationRepository};
pub use patch::EvaluationPatch;
pub use repository::{EvaluationRepository, RepositoryError};
pub use router::{evaluation_router, CreateEvaluationRequest};
pub use service::{EvaluationService, EvaluationServiceError};
