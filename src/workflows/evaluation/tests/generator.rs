use std::sync::Arc;

use super::common::*;
use crate::workflows::evaluation::domain::CustomerRating;
use crate::workflows::evaluation::generator::{
    CustomerLookup, EvaluationGenerator, GenerateError, LookupError, SalesOrderLookup,
    SalesmanLookup, SalesmanProfile, SocialPerformanceLookup,
};
use crate::workflows::evaluation::memory::InMemoryDirectory;

#[test]
fn joins_orders_customers_and_goals_into_a_draft() {
    let directory = directory();
    let draft = generator(&directory)
        .generate(SALESMAN_ID, YEAR)
        .expect("draft generates");

    assert_eq!(draft.salesman_id(), SALESMAN_ID);
    assert_eq!(draft.year(), YEAR);
    assert_eq!(draft.fullname(), "John Smith");
    assert_eq!(draft.department(), "Sales");

    // Two orders, three positions, one line per position.
    assert_eq!(draft.sales_evaluation().len(), 3);
    let first = &draft.sales_evaluation()[0];
    assert_eq!(first.product_name(), "HooverClean");
    assert_eq!(first.customer(), "Deutsche Bahn");
    assert_eq!(first.customer_rating(), CustomerRating::VeryGood);
    assert_eq!(first.items(), 10);
    assert_eq!(first.bonus(), 10);

    assert_eq!(draft.sales_total_bonus(), 10 + 30 + 80);

    assert_eq!(draft.social_evaluation().len(), 1);
    assert_eq!(draft.social_evaluation()[0].bonus(), 250);
    assert_eq!(draft.total_bonus(), 120 + 250);

    assert!(!draft.accepted_hr());
    assert!(!draft.accepted_ceo());
    assert!(!draft.accepted_salesman());
}

#[test]
fn a_year_without_data_yields_empty_evaluations() {
    let directory = directory();
    let draft = generator(&directory)
        .generate(SALESMAN_ID, 2020)
        .expect("draft generates for an empty year");

    assert!(draft.sales_evaluation().is_empty());
    assert!(draft.social_evaluation().is_empty());
    assert_eq!(draft.total_bonus(), 0);
}

#[test]
fn fails_for_an_unregistered_salesman() {
    let directory = directory();
    match generator(&directory).generate(99999, YEAR) {
        Err(GenerateError::UnknownSalesman(99999)) => {}
        other => panic!("expected unknown salesman, got {other:?}"),
    }
}

#[test]
fn fails_when_an_order_references_a_missing_customer() {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.add_salesman(salesman());
    directory.add_sales_order(order(
        7010,
        777,
        "Orphaned order",
        vec![position(1, 2, 10.0, "HooverClean")],
    ));

    match generator(&directory).generate(SALESMAN_ID, YEAR) {
        Err(GenerateError::UnknownCustomer {
            customer_id: 777,
            sales_order_id: 7010,
        }) => {}
        other => panic!("expected unknown customer, got {other:?}"),
    }
}

struct OfflineDirectory;

impl SalesmanLookup for OfflineDirectory {
    fn by_salesman_id(&self, _salesman_id: u32) -> Result<Option<SalesmanProfile>, LookupError> {
        Err(LookupError::Unavailable("HR system offline".to_string()))
    }
}

impl SocialPerformanceLookup for OfflineDirectory {
    fn by_salesman_and_year(
        &self,
        _salesman_id: u32,
        _year: u16,
    ) -> Result<Vec<crate::workflows::evaluation::domain::SocialPerformance>, LookupError> {
        Err(LookupError::Unavailable("HR system offline".to_string()))
    }
}

impl SalesOrderLookup for OfflineDirectory {
    fn by_salesman_and_year(
        &self,
        _salesman_id: u32,
        _year: u16,
    ) -> Result<Vec<crate::workflows::evaluation::domain::SalesOrder>, LookupError> {
        Err(LookupError::Unavailable("ERP system offline".to_string()))
    }
}

impl CustomerLookup for OfflineDirectory {
    fn by_customer_id(
        &self,
        _customer_id: u32,
    ) -> Result<Option<crate::workflows::evaluation::domain::Customer>, LookupError> {
        Err(LookupError::Unavailable("CRM system offline".to_string()))
    }
}

#[test]
fn external_failures_abort_the_whole_draft() {
    let offline = Arc::new(OfflineDirectory);
    let generator = EvaluationGenerator::new(
        offline.clone(),
        offline.clone(),
        offline.clone(),
        offline,
    );

    match generator.generate(SALESMAN_ID, YEAR) {
        Err(GenerateError::Lookup(LookupError::Unavailable(detail))) => {
            assert!(detail.contains("offline"));
        }
        other => panic!("expected lookup failure, got {other:?}"),
    }
}
