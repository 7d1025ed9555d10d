use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{Customer, Evaluation, EvaluationKey, SalesOrder, Salesman, SocialPerformance};
use super::generator::{
    CustomerLookup, LookupError, SalesOrderLookup, SalesmanLookup, SalesmanProfile,
    SocialPerformanceLookup,
};
use super::patch::EvaluationPatch;
use super::repository::{EvaluationRepository, RepositoryError};

/// Mutex-guarded map standing in for the evaluation document collection
/// during tests and demos.
#[derive(Default, Clone)]
pub struct InMemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<EvaluationKey, Evaluation>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
    fn insert(&self, evaluation: Evaluation) -> Result<Evaluation, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&evaluation.key()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(evaluation.key(), evaluation.clone());
        Ok(evaluation)
    }

    fn find(&self, salesman_id: u32, year: u16) -> Result<Option<Evaluation>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&EvaluationKey { salesman_id, year }).cloned())
    }

    fn apply(
        &self,
        salesman_id: u32,
        year: u16,
        patch: &EvaluationPatch,
    ) -> Result<Evaluation, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let key = EvaluationKey { salesman_id, year };
        let existing = guard.get(&key).ok_or(RepositoryError::NotFound)?;
        let updated = existing.merged(patch);
        guard.insert(key, updated.clone());
        Ok(updated)
    }
}

/// In-memory stand-in for the external HR/CRM/ERP directories, implementing
/// all four generator lookups. Seeded by the demo CLI and the tests.
#[derive(Default)]
pub struct InMemoryDirectory {
    salesmen: Mutex<HashMap<u32, Salesman>>,
    customers: Mutex<HashMap<u32, Customer>>,
    orders: Mutex<Vec<SalesOrder>>,
    social: Mutex<Vec<SocialPerformance>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_salesman(&self, salesman: Salesman) {
        self.salesmen
            .lock()
            .expect("directory mutex poisoned")
            .insert(salesman.salesman_id(), salesman);
    }

    pub fn add_customer(&self, customer: Customer) {
        self.customers
            .lock()
            .expect("directory mutex poisoned")
            .insert(customer.customer_id(), customer);
    }

    pub fn add_sales_order(&self, order: SalesOrder) {
        self.orders
            .lock()
            .expect("directory mutex poisoned")
            .push(order);
    }

    pub fn add_social_performance(&self, record: SocialPerformance) {
        self.social
            .lock()
            .expect("directory mutex poisoned")
            .push(record);
    }
}

impl SalesmanLookup for InMemoryDirectory {
    fn by_salesman_id(&self, salesman_id: u32) -> Result<Option<SalesmanProfile>, LookupError> {
        let guard = self.salesmen.lock().expect("directory mutex poisoned");
        Ok(guard.get(&salesman_id).map(|salesman| SalesmanProfile {
            fullname: salesman.fullname(),
            department: salesman.department().to_string(),
        }))
    }
}

impl SocialPerformanceLookup for InMemoryDirectory {
    fn by_salesman_and_year(
        &self,
        salesman_id: u32,
        year: u16,
    ) -> Result<Vec<SocialPerformance>, LookupError> {
        let guard = self.social.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.salesman_id() == salesman_id && record.year() == year)
            .cloned()
            .collect())
    }
}

impl SalesOrderLookup for InMemoryDirectory {
    fn by_salesman_and_year(
        &self,
        salesman_id: u32,
        year: u16,
    ) -> Result<Vec<SalesOrder>, LookupError> {
        let guard = self.orders.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .filter(|order| order.salesman_id() == salesman_id && order.year() == year)
            .cloned()
            .collect())
    }
}

impl CustomerLookup for InMemoryDirectory {
    fn by_customer_id(&self, customer_id: u32) -> Result<Option<Customer>, LookupError> {
        let guard = self.customers.lock().expect("directory mutex poisoned");
        Ok(guard.get(&customer_id).cloned())
    }
}
