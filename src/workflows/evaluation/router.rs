use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Approver, Evaluation, SalesPerformance, SocialPerformance, ValidationError};
use super::generator::GenerateError;
use super::patch::EvaluationPatch;
use super::repository::{EvaluationRepository, RepositoryError};
use super::service::{EvaluationService, EvaluationServiceError};

/// Router builder exposing the evaluation store and approval workflow.
pub fn evaluation_router<R>(service: Arc<EvaluationService<R>>) -> Router
where
    R: EvaluationRepository + 'static,
{
    Router::new()
        .route("/api/v1/evaluations", post(create_handler::<R>))
        .route(
            "/api/v1/evaluations/:salesman_id/:year",
            get(read_handler::<R>).patch(update_handler::<R>),
        )
        .route(
            "/api/v1/evaluations/:salesman_id/:year/accept/:role",
            post(accept_handler::<R>),
        )
        .with_state(service)
}

/// Incoming document for explicit creation; runs the entity validators
/// before anything reaches the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationRequest {
    pub salesman_id: u32,
    pub year: u16,
    pub fullname: String,
    pub department: String,
    #[serde(default)]
    pub sales_evaluation: Vec<SalesPerformance>,
    #[serde(default)]
    pub social_evaluation: Vec<SocialPerformance>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl CreateEvaluationRequest {
    fn into_evaluation(self) -> Result<Evaluation, ValidationError> {
        let evaluation = Evaluation::new(
            self.salesman_id,
            self.year,
            self.fullname,
            self.department,
            self.sales_evaluation,
            self.social_evaluation,
        )?;
        Ok(match self.remark {
            Some(remark) => evaluation.with_remark(remark),
            None => evaluation,
        })
    }
}

/// Read with read-through-create: a miss generates a draft from the
/// underlying sales/social data and persists it before responding. A
/// `Conflict` from the racing create falls back to a re-read.
pub(crate) async fn read_handler<R>(
    State(service): State<Arc<EvaluationService<R>>>,
    Path((salesman_id, year)): Path<(u32, u16)>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.read(salesman_id, year) {
        Ok(Some(evaluation)) => (StatusCode::OK, Json(evaluation.view())).into_response(),
        Ok(None) => {
            let draft = match service.generate(salesman_id, year) {
                Ok(draft) => draft,
                Err(err) => return error_response(err),
            };
            match service.create(draft) {
                Ok(created) => (StatusCode::OK, Json(created.view())).into_response(),
                Err(EvaluationServiceError::Repository(RepositoryError::Conflict)) => {
                    match service.read(salesman_id, year) {
                        Ok(Some(existing)) => {
                            (StatusCode::OK, Json(existing.view())).into_response()
                        }
                        Ok(None) => error_response(EvaluationServiceError::Repository(
                            RepositoryError::Unavailable(
                                "evaluation vanished after conflicting create".to_string(),
                            ),
                        )),
                        Err(err) => error_response(err),
                    }
                }
                Err(err) => error_response(err),
            }
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<EvaluationService<R>>>,
    Json(request): Json<CreateEvaluationRequest>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    let evaluation = match request.into_evaluation() {
        Ok(evaluation) => evaluation,
        Err(err) => return error_response(EvaluationServiceError::Validation(err)),
    };

    match service.create(evaluation) {
        Ok(created) => (StatusCode::CREATED, Json(created.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<EvaluationService<R>>>,
    Path((salesman_id, year)): Path<(u32, u16)>,
    Json(patch): Json<EvaluationPatch>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.update(salesman_id, year, &patch) {
        Ok(updated) => (StatusCode::OK, Json(updated.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn accept_handler<R>(
    State(service): State<Arc<EvaluationService<R>>>,
    Path((salesman_id, year, role)): Path<(u32, u16, String)>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    let approver = match Approver::from_role(&role) {
        Some(approver) => approver,
        None => {
            let payload = json!({
                "error": format!("unknown approver role '{role}', expected hr, ceo, or salesman"),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.accept(approver, salesman_id, year) {
        Ok(accepted) => (StatusCode::OK, Json(accepted.view())).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: EvaluationServiceError) -> Response {
    let status = match &err {
        EvaluationServiceError::Generate(GenerateError::UnknownSalesman(_))
        | EvaluationServiceError::Generate(GenerateError::UnknownCustomer { .. }) => {
            StatusCode::NOT_FOUND
        }
        EvaluationServiceError::Generate(GenerateError::Validation(_))
        | EvaluationServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EvaluationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        EvaluationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        EvaluationServiceError::Generate(GenerateError::Lookup(_))
        | EvaluationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
