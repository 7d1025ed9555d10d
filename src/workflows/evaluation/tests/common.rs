use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::evaluation::domain::{
    Customer, CustomerRating, Evaluation, Gender, OrderTotals, Position, Product, SalesOrder,
    Salesman, SocialPerformance,
};
use crate::workflows::evaluation::generator::EvaluationGenerator;
use crate::workflows::evaluation::memory::{InMemoryDirectory, InMemoryEvaluationRepository};
use crate::workflows::evaluation::patch::EvaluationPatch;
use crate::workflows::evaluation::repository::{EvaluationRepository, RepositoryError};
use crate::workflows::evaluation::service::EvaluationService;

pub(super) const SALESMAN_ID: u32 = 90123;
pub(super) const YEAR: u16 = 2024;

pub(super) fn salesman() -> Salesman {
    Salesman::new(
        SALESMAN_ID,
        "5BE0AE3E-FF96-40E2-A80B-B8A530D39EBC",
        "E0001",
        "John",
        "Smith",
        "Sales",
        "Senior Salesman",
        Some(Gender::Male),
    )
    .expect("valid salesman fixture")
}

pub(super) fn product(product_id: u32, name: &str) -> Product {
    Product {
        product_id,
        name: name.to_string(),
        uid: format!("prod-{product_id}"),
        min_quantity: 1,
        max_quantity: 100,
        min_positions: 1,
        max_positions: 10,
    }
}

pub(super) fn position(
    position_id: u32,
    quantity: u32,
    price_per_unit: f64,
    product_name: &str,
) -> Position {
    Position::new(
        position_id,
        format!("pos-{position_id}"),
        price_per_unit * quantity as f64,
        price_per_unit * quantity as f64,
        0.0,
        0.0,
        quantity,
        price_per_unit,
        product(position_id, product_name),
    )
    .expect("valid position fixture")
}

pub(super) fn order(
    sales_order_id: u32,
    customer_id: u32,
    name: &str,
    positions: Vec<Position>,
) -> SalesOrder {
    let amount: f64 = positions.iter().map(Position::amount).sum();
    SalesOrder::new(
        sales_order_id,
        format!("order-{sales_order_id}"),
        customer_id,
        SALESMAN_ID,
        name,
        YEAR,
        1,
        2,
        4,
        OrderTotals {
            amount,
            base_amount: amount,
            amount_including_tax: amount * 1.19,
            ..OrderTotals::default()
        },
        positions,
    )
    .expect("valid order fixture")
}

pub(super) fn social(social_id: u32, target: f64, actual: f64) -> SocialPerformance {
    SocialPerformance::new(
        SALESMAN_ID,
        social_id,
        "Leadership Competence",
        target,
        actual,
        YEAR,
    )
    .expect("valid social performance fixture")
}

/// Directory seeded with the reference scenario: two orders with three
/// positions total (sales bonuses 10 + 30 + 80) and one social goal at
/// target 20 / actual 25 (bonus 250).
pub(super) fn directory() -> Arc<InMemoryDirectory> {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.add_salesman(salesman());
    directory.add_customer(
        Customer::new(500, "cust-500", "Deutsche Bahn", CustomerRating::VeryGood)
            .expect("valid customer fixture"),
    );
    directory.add_customer(
        Customer::new(501, "cust-501", "Telekom", CustomerRating::Excellent)
            .expect("valid customer fixture"),
    );
    directory.add_sales_order(order(
        7001,
        500,
        "Deutsche Bahn Q2",
        vec![
            position(1, 10, 5.0, "HooverClean"),
            position(2, 20, 12.0, "HooverGo"),
        ],
    ));
    directory.add_sales_order(order(
        7002,
        501,
        "Telekom Q4",
        vec![position(3, 5, 100.0, "HooverPremium")],
    ));
    directory.add_social_performance(social(1, 20.0, 25.0));
    directory
}

pub(super) fn generator(directory: &Arc<InMemoryDirectory>) -> EvaluationGenerator {
    EvaluationGenerator::new(
        directory.clone(),
        directory.clone(),
        directory.clone(),
        directory.clone(),
    )
}

pub(super) fn build_service() -> (
    Arc<EvaluationService<InMemoryEvaluationRepository>>,
    Arc<InMemoryEvaluationRepository>,
    Arc<InMemoryDirectory>,
) {
    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let directory = directory();
    let service = Arc::new(EvaluationService::new(
        repository.clone(),
        generator(&directory),
    ));
    (service, repository, directory)
}

pub(super) struct UnavailableRepository;

impl EvaluationRepository for UnavailableRepository {
    fn insert(&self, _evaluation: Evaluation) -> Result<Evaluation, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find(&self, _salesman_id: u32, _year: u16) -> Result<Option<Evaluation>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn apply(
        &self,
        _salesman_id: u32,
        _year: u16,
        _patch: &EvaluationPatch,
    ) -> Result<Evaluation, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
