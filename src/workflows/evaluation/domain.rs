use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::bonus;
use super::patch::EvaluationPatch;

/// A field value violated an entity invariant. Always recoverable by the
/// caller supplying a corrected value; never silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn positive_id(field: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::new(field, "must be a positive integer"));
    }
    Ok(value)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(value)
}

fn valid_year(field: &'static str, year: u16) -> Result<u16, ValidationError> {
    let current = chrono::Utc::now().year();
    if year < 1900 || i32::from(year) > current {
        return Err(ValidationError::new(
            field,
            format!("must be between 1900 and {current}, got {year}"),
        ));
    }
    Ok(year)
}

/// Self-declared gender as carried by the HR system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Customer satisfaction rating driving the sales-bonus multiplier.
///
/// Serialized as its numeric CRM code (0..=3); the range invariant lives in
/// the `TryFrom<u8>` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CustomerRating {
    Okay,
    Good,
    VeryGood,
    Excellent,
}

impl CustomerRating {
    pub const fn multiplier(self) -> f64 {
        match self {
            CustomerRating::Okay => 1.0,
            CustomerRating::Good => 1.5,
            CustomerRating::VeryGood => 2.0,
            CustomerRating::Excellent => 3.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CustomerRating::Okay => "okay",
            CustomerRating::Good => "good",
            CustomerRating::VeryGood => "very good",
            CustomerRating::Excellent => "excellent",
        }
    }
}

impl TryFrom<u8> for CustomerRating {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CustomerRating::Okay),
            1 => Ok(CustomerRating::Good),
            2 => Ok(CustomerRating::VeryGood),
            3 => Ok(CustomerRating::Excellent),
            other => Err(ValidationError::new(
                "rating",
                format!("must be a code between 0 and 3, got {other}"),
            )),
        }
    }
}

impl From<CustomerRating> for u8 {
    fn from(rating: CustomerRating) -> Self {
        match rating {
            CustomerRating::Okay => 0,
            CustomerRating::Good => 1,
            CustomerRating::VeryGood => 2,
            CustomerRating::Excellent => 3,
        }
    }
}

/// Yearly bonus payouts owned by a salesman record, one entry per year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusLedger(BTreeMap<u16, f64>);

impl BonusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the payout for a year, replacing any previous entry so the
    /// one-entry-per-year invariant holds.
    pub fn record(&mut self, year: u16, value: f64) -> Result<(), ValidationError> {
        let year = valid_year("bonusSalary.year", year)?;
        let value = non_negative("bonusSalary.value", value)?;
        self.0.insert(year, value);
        Ok(())
    }

    pub fn for_year(&self, year: u16) -> Option<f64> {
        self.0.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An employee tracked across the HR and CRM systems, identified by a stable
/// government ID (`salesman_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salesman {
    salesman_id: u32,
    uid: String,
    employee_id: String,
    first_name: String,
    last_name: String,
    department: String,
    job_title: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    bonus_salaries: BonusLedger,
}

impl Salesman {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        salesman_id: u32,
        uid: impl Into<String>,
        employee_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        job_title: impl Into<String>,
        gender: Option<Gender>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            salesman_id: positive_id("salesmanId", salesman_id)?,
            uid: uid.into(),
            employee_id: employee_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            job_title: job_title.into(),
            gender,
            bonus_salaries: BonusLedger::new(),
        })
    }

    pub fn salesman_id(&self) -> u32 {
        self.salesman_id
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn bonus_salaries(&self) -> &BonusLedger {
        &self.bonus_salaries
    }

    /// Record the payout granted for a year once its evaluation is signed off.
    pub fn record_bonus(&mut self, year: u16, value: f64) -> Result<(), ValidationError> {
        self.bonus_salaries.record(year, value)
    }
}

/// A customer record mirrored from the CRM, rated for bonus weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    customer_id: u32,
    uid: String,
    name: String,
    rating: CustomerRating,
}

impl Customer {
    pub fn new(
        customer_id: u32,
        uid: impl Into<String>,
        name: impl Into<String>,
        rating: CustomerRating,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            customer_id: positive_id("customerId", customer_id)?,
            uid: uid.into(),
            name: name.into(),
            rating,
        })
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> CustomerRating {
        self.rating
    }

    pub fn with_rating(mut self, rating: CustomerRating) -> Self {
        self.rating = rating;
        self
    }
}

/// A sellable product as mirrored from the CRM catalogue.
///
/// All bounds are non-negative by type; no cross-field invariants apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub uid: String,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub min_positions: u32,
    pub max_positions: u32,
}

/// One line item of a sales order, owning the sold product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    position_id: u32,
    uid: String,
    amount: f64,
    base_amount: f64,
    tax_amount: f64,
    discount_amount: f64,
    quantity: u32,
    price_per_unit: f64,
    product: Product,
}

impl Position {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position_id: u32,
        uid: impl Into<String>,
        amount: f64,
        base_amount: f64,
        tax_amount: f64,
        discount_amount: f64,
        quantity: u32,
        price_per_unit: f64,
        product: Product,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            position_id,
            uid: uid.into(),
            amount: non_negative("position.amount", amount)?,
            base_amount: non_negative("position.baseAmount", base_amount)?,
            tax_amount: non_negative("position.taxAmount", tax_amount)?,
            discount_amount: non_negative("position.discountAmount", discount_amount)?,
            quantity,
            price_per_unit: non_negative("position.pricePerUnit", price_per_unit)?,
            product,
        })
    }

    pub fn position_id(&self) -> u32 {
        self.position_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn product(&self) -> &Product {
        &self.product
    }
}

/// Monetary totals of a sales order as reported by the ERP.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub amount: f64,
    pub tax_amount: f64,
    pub base_amount: f64,
    pub amount_including_tax: f64,
    pub discount_amount: f64,
    pub commission: f64,
}

impl OrderTotals {
    fn validated(self) -> Result<Self, ValidationError> {
        non_negative("totals.amount", self.amount)?;
        non_negative("totals.taxAmount", self.tax_amount)?;
        non_negative("totals.baseAmount", self.base_amount)?;
        non_negative("totals.amountIncludingTax", self.amount_including_tax)?;
        non_negative("totals.discountAmount", self.discount_amount)?;
        non_negative("totals.commission", self.commission)?;
        Ok(self)
    }
}

/// A sales order mirrored from the CRM/ERP with its ordered line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    sales_order_id: u32,
    uid: String,
    customer_id: u32,
    salesman_id: u32,
    name: String,
    year: u16,
    priority: u8,
    submit_status: i32,
    pricing_state: i32,
    totals: OrderTotals,
    positions: Vec<Position>,
}

impl SalesOrder {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sales_order_id: u32,
        uid: impl Into<String>,
        customer_id: u32,
        salesman_id: u32,
        name: impl Into<String>,
        year: u16,
        priority: u8,
        submit_status: i32,
        pricing_state: i32,
        totals: OrderTotals,
        positions: Vec<Position>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sales_order_id: positive_id("salesOrderId", sales_order_id)?,
            uid: uid.into(),
            customer_id: positive_id("customerId", customer_id)?,
            salesman_id: positive_id("salesmanId", salesman_id)?,
            name: name.into(),
            year: valid_year("year", year)?,
            priority,
            submit_status,
            pricing_state,
            totals: totals.validated()?,
            positions,
        })
    }

    pub fn sales_order_id(&self) -> u32 {
        self.sales_order_id
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn salesman_id(&self) -> u32 {
        self.salesman_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

/// A goal-based, non-sales metric (e.g. leadership) with a target/actual
/// value pair. The bonus is derived, never set directly; incoming documents
/// re-run the field validators and the bonus derivation via
/// [`SocialPerformanceDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SocialPerformanceDocument")]
pub struct SocialPerformance {
    salesman_id: u32,
    social_id: u32,
    description: String,
    target_value: f64,
    actual_value: f64,
    year: u16,
    bonus: u32,
}

impl SocialPerformance {
    pub fn new(
        salesman_id: u32,
        social_id: u32,
        description: impl Into<String>,
        target_value: f64,
        actual_value: f64,
        year: u16,
    ) -> Result<Self, ValidationError> {
        let target_value = non_negative("targetValue", target_value)?;
        let actual_value = non_negative("actualValue", actual_value)?;
        Ok(Self {
            salesman_id: positive_id("salesmanId", salesman_id)?,
            social_id: positive_id("socialId", social_id)?,
            description: description.into(),
            target_value,
            actual_value,
            year: valid_year("year", year)?,
            bonus: bonus::social_bonus(target_value, actual_value),
        })
    }

    pub fn salesman_id(&self) -> u32 {
        self.salesman_id
    }

    pub fn social_id(&self) -> u32 {
        self.social_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn actual_value(&self) -> f64 {
        self.actual_value
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    pub fn with_target_value(mut self, target_value: f64) -> Result<Self, ValidationError> {
        self.target_value = non_negative("targetValue", target_value)?;
        self.bonus = bonus::social_bonus(self.target_value, self.actual_value);
        Ok(self)
    }

    pub fn with_actual_value(mut self, actual_value: f64) -> Result<Self, ValidationError> {
        self.actual_value = non_negative("actualValue", actual_value)?;
        self.bonus = bonus::social_bonus(self.target_value, self.actual_value);
        Ok(self)
    }
}

/// Wire shape of a social-performance record. A declared `bonus` is checked
/// against the derived value so stored documents round-trip while forged
/// payouts are rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialPerformanceDocument {
    salesman_id: u32,
    social_id: u32,
    description: String,
    target_value: f64,
    actual_value: f64,
    year: u16,
    #[serde(default)]
    bonus: Option<u32>,
}

impl TryFrom<SocialPerformanceDocument> for SocialPerformance {
    type Error = ValidationError;

    fn try_from(document: SocialPerformanceDocument) -> Result<Self, Self::Error> {
        let record = SocialPerformance::new(
            document.salesman_id,
            document.social_id,
            document.description,
            document.target_value,
            document.actual_value,
            document.year,
        )?;
        if let Some(declared) = document.bonus {
            if declared != record.bonus {
                return Err(ValidationError::new(
                    "bonus",
                    "must match the value derived from the target and actual values",
                ));
            }
        }
        Ok(record)
    }
}

/// A derived bonus line from one sold product position within a sales order.
/// As with [`SocialPerformance`], the bonus is derived and incoming documents
/// are re-validated via [`SalesPerformanceDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SalesPerformanceDocument")]
pub struct SalesPerformance {
    salesman_id: u32,
    product_name: String,
    customer: String,
    customer_rating: CustomerRating,
    items: u32,
    price_per_unit: f64,
    bonus: u32,
}

impl SalesPerformance {
    pub fn new(
        salesman_id: u32,
        product_name: impl Into<String>,
        customer: impl Into<String>,
        customer_rating: CustomerRating,
        items: u32,
        price_per_unit: f64,
    ) -> Result<Self, ValidationError> {
        let price_per_unit = non_negative("pricePerUnit", price_per_unit)?;
        Ok(Self {
            salesman_id: positive_id("salesmanId", salesman_id)?,
            product_name: product_name.into(),
            customer: customer.into(),
            customer_rating,
            items,
            price_per_unit,
            bonus: bonus::sales_bonus(customer_rating, items, price_per_unit),
        })
    }

    pub fn salesman_id(&self) -> u32 {
        self.salesman_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn customer_rating(&self) -> CustomerRating {
        self.customer_rating
    }

    pub fn items(&self) -> u32 {
        self.items
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }
}

/// Wire shape of a sales-performance line; see [`SocialPerformanceDocument`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalesPerformanceDocument {
    salesman_id: u32,
    product_name: String,
    customer: String,
    customer_rating: CustomerRating,
    items: u32,
    price_per_unit: f64,
    #[serde(default)]
    bonus: Option<u32>,
}

impl TryFrom<SalesPerformanceDocument> for SalesPerformance {
    type Error = ValidationError;

    fn try_from(document: SalesPerformanceDocument) -> Result<Self, Self::Error> {
        let line = SalesPerformance::new(
            document.salesman_id,
            document.product_name,
            document.customer,
            document.customer_rating,
            document.items,
            document.price_per_unit,
        )?;
        if let Some(declared) = document.bonus {
            if declared != line.bonus {
                return Err(ValidationError::new(
                    "bonus",
                    "must match the value derived from items, price, and rating",
                ));
            }
        }
        Ok(line)
    }
}

/// One of the three independent sign-off parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approver {
    Hr,
    Ceo,
    Salesman,
}

impl Approver {
    pub const fn label(self) -> &'static str {
        match self {
            Approver::Hr => "hr",
            Approver::Ceo => "ceo",
            Approver::Salesman => "salesman",
        }
    }

    pub fn from_role(role: &str) -> Option<Self> {
        match role.trim().to_ascii_lowercase().as_str() {
            "hr" => Some(Approver::Hr),
            "ceo" => Some(Approver::Ceo),
            "salesman" => Some(Approver::Salesman),
            _ => None,
        }
    }
}

/// Uniqueness key of a persisted evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationKey {
    pub salesman_id: u32,
    pub year: u16,
}

/// The yearly aggregate bonus record for one salesman, combining sales and
/// social performance. Keyed by `(salesman_id, year)`, unique per pair.
///
/// The three acceptance flags start out false and only ever move to true;
/// nothing in this module resets an accepted flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    salesman_id: u32,
    year: u16,
    fullname: String,
    department: String,
    sales_evaluation: Vec<SalesPerformance>,
    social_evaluation: Vec<SocialPerformance>,
    #[serde(default)]
    remark: String,
    #[serde(rename = "acceptedHR", default)]
    accepted_hr: bool,
    #[serde(rename = "acceptedCEO", default)]
    accepted_ceo: bool,
    #[serde(rename = "acceptedSalesman", default)]
    accepted_salesman: bool,
}

impl Evaluation {
    pub fn new(
        salesman_id: u32,
        year: u16,
        fullname: impl Into<String>,
        department: impl Into<String>,
        sales_evaluation: Vec<SalesPerformance>,
        social_evaluation: Vec<SocialPerformance>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            salesman_id: positive_id("salesmanId", salesman_id)?,
            year: valid_year("year", year)?,
            fullname: fullname.into(),
            department: department.into(),
            sales_evaluation,
            social_evaluation,
            remark: String::new(),
            accepted_hr: false,
            accepted_ceo: false,
            accepted_salesman: false,
        })
    }

    pub fn key(&self) -> EvaluationKey {
        EvaluationKey {
            salesman_id: self.salesman_id,
            year: self.year,
        }
    }

    pub fn salesman_id(&self) -> u32 {
        self.salesman_id
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn sales_evaluation(&self) -> &[SalesPerformance] {
        &self.sales_evaluation
    }

    pub fn social_evaluation(&self) -> &[SocialPerformance] {
        &self.social_evaluation
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    pub fn accepted_hr(&self) -> bool {
        self.accepted_hr
    }

    pub fn accepted_ceo(&self) -> bool {
        self.accepted_ceo
    }

    pub fn accepted_salesman(&self) -> bool {
        self.accepted_salesman
    }

    pub fn is_accepted_by(&self, approver: Approver) -> bool {
        match approver {
            Approver::Hr => self.accepted_hr,
            Approver::Ceo => self.accepted_ceo,
            Approver::Salesman => self.accepted_salesman,
        }
    }

    /// Mark one party's sign-off. Idempotent; flags never move back.
    pub fn accept(&mut self, approver: Approver) {
        match approver {
            Approver::Hr => self.accepted_hr = true,
            Approver::Ceo => self.accepted_ceo = true,
            Approver::Salesman => self.accepted_salesman = true,
        }
    }

    /// Derived read for callers/UI; no combined state is stored.
    pub fn fully_accepted(&self) -> bool {
        self.accepted_hr && self.accepted_ceo && self.accepted_salesman
    }

    pub fn sales_total_bonus(&self) -> u64 {
        self.sales_evaluation
            .iter()
            .map(|line| u64::from(line.bonus()))
            .sum()
    }

    pub fn social_total_bonus(&self) -> u64 {
        self.social_evaluation
            .iter()
            .map(|goal| u64::from(goal.bonus()))
            .sum()
    }

    pub fn total_bonus(&self) -> u64 {
        self.sales_total_bonus() + self.social_total_bonus()
    }

    /// Pure field-wise merge: fields present in the patch replace the stored
    /// value, absent fields are kept, and acceptance flags are monotonic (a
    /// stored true is never reset by a patch).
    pub fn merged(&self, patch: &EvaluationPatch) -> Evaluation {
        Evaluation {
            salesman_id: self.salesman_id,
            year: self.year,
            fullname: patch
                .fullname
                .clone()
                .unwrap_or_else(|| self.fullname.clone()),
            department: patch
                .department
                .clone()
                .unwrap_or_else(|| self.department.clone()),
            sales_evaluation: patch
                .sales_evaluation
                .clone()
                .unwrap_or_else(|| self.sales_evaluation.clone()),
            social_evaluation: patch
                .social_evaluation
                .clone()
                .unwrap_or_else(|| self.social_evaluation.clone()),
            remark: patch.remark.clone().unwrap_or_else(|| self.remark.clone()),
            accepted_hr: self.accepted_hr || patch.accepted_hr.unwrap_or(false),
            accepted_ceo: self.accepted_ceo || patch.accepted_ceo.unwrap_or(false),
            accepted_salesman: self.accepted_salesman || patch.accepted_salesman.unwrap_or(false),
        }
    }

    pub fn view(&self) -> EvaluationView {
        EvaluationView {
            salesman_id: self.salesman_id,
            year: self.year,
            fullname: self.fullname.clone(),
            department: self.department.clone(),
            sales_total_bonus: self.sales_total_bonus(),
            social_total_bonus: self.social_total_bonus(),
            total_bonus: self.total_bonus(),
            remark: self.remark.clone(),
            accepted_hr: self.accepted_hr,
            accepted_ceo: self.accepted_ceo,
            accepted_salesman: self.accepted_salesman,
            fully_accepted: self.fully_accepted(),
            sales_evaluation: self.sales_evaluation.clone(),
            social_evaluation: self.social_evaluation.clone(),
        }
    }
}

/// Serializable projection of an evaluation including the derived totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    pub salesman_id: u32,
    pub year: u16,
    pub fullname: String,
    pub department: String,
    pub sales_total_bonus: u64,
    pub social_total_bonus: u64,
    pub total_bonus: u64,
    pub remark: String,
    #[serde(rename = "acceptedHR")]
    pub accepted_hr: bool,
    #[serde(rename = "acceptedCEO")]
    pub accepted_ceo: bool,
    #[serde(rename = "acceptedSalesman")]
    pub accepted_salesman: bool,
    pub fully_accepted: bool,
    pub sales_evaluation: Vec<SalesPerformance>,
    pub social_evaluation: Vec<SocialPerformance>,
}
