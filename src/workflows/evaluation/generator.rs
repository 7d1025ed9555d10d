use std::sync::Arc;

use super::domain::{
    Customer, Evaluation, SalesOrder, SalesPerformance, SocialPerformance, ValidationError,
};

/// Projection of a salesman as the generator needs it from the HR directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesmanProfile {
    pub fullname: String,
    pub department: String,
}

/// An underlying lookup/persistence call itself failed (network, driver).
/// Propagated unmodified; the generator never partially succeeds.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("external system unavailable: {0}")]
    Unavailable(String),
}

/// Salesman identity/department resolution, backed by the HR system.
pub trait SalesmanLookup: Send + Sync {
    fn by_salesman_id(&self, salesman_id: u32) -> Result<Option<SalesmanProfile>, LookupError>;
}

/// Social-performance goals recorded per salesman and year.
pub trait SocialPerformanceLookup: Send + Sync {
    fn by_salesman_and_year(
        &self,
        salesman_id: u32,
        year: u16,
    ) -> Result<Vec<SocialPerformance>, LookupError>;
}

/// Sales orders (with nested positions and products) per salesman and year.
pub trait SalesOrderLookup: Send + Sync {
    fn by_salesman_and_year(
        &self,
        salesman_id: u32,
        year: u16,
    ) -> Result<Vec<SalesOrder>, LookupError>;
}

/// Customer resolution for rating lookups, backed by the CRM.
pub trait CustomerLookup: Send + Sync {
    fn by_customer_id(&self, customer_id: u32) -> Result<Option<Customer>, LookupError>;
}

/// Failure while assembling an evaluation draft.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("salesman {0} is not registered")]
    UnknownSalesman(u32),
    #[error("customer {customer_id} referenced by sales order {sales_order_id} is not registered")]
    UnknownCustomer {
        customer_id: u32,
        sales_order_id: u32,
    },
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Joins salesman, sales-order, customer, and social-performance data for a
/// `(salesman_id, year)` pair into a transient [`Evaluation`] draft.
///
/// The generator never persists; creating the draft in the store is a
/// separate explicit step performed by the caller.
pub struct EvaluationGenerator {
    salesmen: Arc<dyn SalesmanLookup>,
    social: Arc<dyn SocialPerformanceLookup>,
    orders: Arc<dyn SalesOrderLookup>,
    customers: Arc<dyn CustomerLookup>,
}

impl EvaluationGenerator {
    pub fn new(
        salesmen: Arc<dyn SalesmanLookup>,
        social: Arc<dyn SocialPerformanceLookup>,
        orders: Arc<dyn SalesOrderLookup>,
        customers: Arc<dyn CustomerLookup>,
    ) -> Self {
        Self {
            salesmen,
            social,
            orders,
            customers,
        }
    }

    pub fn generate(&self, salesman_id: u32, year: u16) -> Result<Evaluation, GenerateError> {
        let profile = self
            .salesmen
            .by_salesman_id(salesman_id)?
            .ok_or(GenerateError::UnknownSalesman(salesman_id))?;

        // Empty result sets are valid: a year without recorded goals or
        // orders yields empty evaluation arrays, not an error.
        let social_evaluation = self.social.by_salesman_and_year(salesman_id, year)?;

        let mut sales_evaluation = Vec::new();
        for order in self.orders.by_salesman_and_year(salesman_id, year)? {
            let customer = self
                .customers
                .by_customer_id(order.customer_id())?
                .ok_or(GenerateError::UnknownCustomer {
                    customer_id: order.customer_id(),
                    sales_order_id: order.sales_order_id(),
                })?;

            for position in order.positions() {
                sales_evaluation.push(SalesPerformance::new(
                    salesman_id,
                    position.product().name.clone(),
                    customer.name().to_string(),
                    customer.rating(),
                    position.quantity(),
                    position.price_per_unit(),
                )?);
            }
        }

        let draft = Evaluation::new(
            salesman_id,
            year,
            profile.fullname,
            profile.department,
            sales_evaluation,
            social_evaluation,
        )?;

        Ok(draft)
    }
}
