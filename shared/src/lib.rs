use serde::{Deserialize, Serialize};

/// A loan tracked by the application, together with its computed
/// amortization schedule. Loans are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Stable identifier in format: "loan::<uuid>"
    pub id: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Amount borrowed (BGN)
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate: f64,
    /// Loan term in months
    pub term_months: u32,
    /// Free-text description of the loan
    pub description: String,
    /// Fixed monthly payment, taken from the first schedule row (BGN)
    pub monthly_payment: f64,
    /// Full amortization schedule, one row per month
    pub schedule: Vec<PaymentPeriod>,
}

/// One row of an amortization schedule. All monetary fields are rounded
/// to two decimal places for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Period index, 1-based
    pub period: u32,
    /// Principal portion paid this period (BGN)
    pub principal_payment: f64,
    /// Interest portion paid this period (BGN)
    pub interest: f64,
    /// Total payment this period (BGN)
    pub total_payment: f64,
    /// Remaining principal after this period, clamped to >= 0 (BGN)
    pub remaining_principal: f64,
}

/// Aggregate totals over a full schedule, computed from the rounded
/// per-row values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_payments: f64,
}

/// Request to create a new loan with already-parsed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    /// Amount borrowed (BGN), must be positive
    pub principal: f64,
    /// Annual interest rate in percent, must be non-negative
    pub annual_rate: f64,
    /// Loan term in months, must be positive
    pub term_months: u32,
    /// Free-text description of the loan
    pub description: String,
}

/// A loan formatted for display in the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedLoan {
    pub id: String,
    pub formatted_principal: String,
    pub formatted_rate: String,
    pub formatted_term: String,
    pub formatted_payment: String,
    pub description: String,
}

/// A schedule row formatted for display in the detail table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPaymentPeriod {
    pub period: String,
    pub formatted_principal_payment: String,
    pub formatted_interest: String,
    pub formatted_total_payment: String,
    pub formatted_remaining: String,
}

/// Validation result for loan form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub cleaned_request: Option<CreateLoanRequest>,
}

/// Specific validation errors for loan form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Loan amount field could not be parsed as a number
    AmountNotNumeric(String),
    /// Interest rate field could not be parsed as a number
    RateNotNumeric(String),
    /// Term field could not be parsed as an integer
    TermNotNumeric(String),
    /// Parsed loan amount is zero or negative
    AmountNotPositive,
    /// Parsed interest rate is negative
    RateNegative,
    /// Parsed term is zero
    TermNotPositive,
}

impl ValidationError {
    /// Whether this error comes from parsing rather than a domain
    /// constraint. Parse errors and constraint errors map to different
    /// user-facing dialog messages.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ValidationError::AmountNotNumeric(_)
                | ValidationError::RateNotNumeric(_)
                | ValidationError::TermNotNumeric(_)
        )
    }
}
