//! Loan table domain logic for the loan tracker.
//!
//! This module contains the business logic behind the two tables the app
//! shows: the loans summary table and the period-by-period schedule table
//! in the detail view. It turns raw loan data into formatted display rows
//! and validates the add-loan form input before it reaches the service.
//!
//! ## Key Responsibilities
//!
//! - **Input Validation**: Parsing and validating the four form fields,
//!   with the two user-facing dialog messages the app shows
//! - **Table Formatting**: Converting loans and schedule rows into
//!   formatted display data
//! - **Summary & Totals Lines**: The one-line loan summary and the
//!   payment totals line shown in the detail view
//!
//! ## Design Principles
//!
//! - **UI Agnostic**: Pure formatting logic independent of any widget
//!   toolkit, testable without a display
//! - **Validation First**: No state is touched unless input parses and
//!   satisfies the domain constraints

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::{
    CreateLoanRequest, FormattedLoan, FormattedPaymentPeriod, Loan, PaymentPeriod,
    ScheduleTotals, ValidationError, ValidationResult,
};

/// Configuration for loan table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanTableConfig {
    /// Currency label shown in summary and totals lines
    pub currency_label: String,
    pub decimal_places: u8,
}

impl Default for LoanTableConfig {
    fn default() -> Self {
        Self {
            currency_label: "BGN".to_string(),
            decimal_places: 2,
        }
    }
}

/// Loan table service that handles form validation and display formatting
#[derive(Clone)]
pub struct LoanTableService {
    config: LoanTableConfig,
}

impl LoanTableService {
    /// Create a new LoanTableService with default configuration
    pub fn new() -> Self {
        Self {
            config: LoanTableConfig::default(),
        }
    }

    /// Create a new LoanTableService with custom configuration
    pub fn with_config(config: LoanTableConfig) -> Self {
        Self { config }
    }

    /// Validate the raw add-loan form input.
    ///
    /// All three numeric fields are parsed first; if any of them fails to
    /// parse, the result carries only parse errors (the domain constraints
    /// are not checked against half-parsed input). Otherwise the parsed
    /// values are checked against the constraints: principal > 0,
    /// rate >= 0, term > 0.
    pub fn validate_loan_input(
        &self,
        amount_input: &str,
        rate_input: &str,
        term_input: &str,
        description: &str,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        let principal = match self.clean_and_parse_amount(amount_input) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(ValidationError::AmountNotNumeric(e.to_string()));
                None
            }
        };
        let annual_rate = match self.clean_and_parse_amount(rate_input) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(ValidationError::RateNotNumeric(e.to_string()));
                None
            }
        };
        let term_months = match term_input.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(ValidationError::TermNotNumeric(e.to_string()));
                None
            }
        };

        if !errors.is_empty() {
            return ValidationResult {
                is_valid: false,
                errors,
                cleaned_request: None,
            };
        }

        // All three fields parsed successfully past this point
        let principal = principal.unwrap_or_default();
        let annual_rate = annual_rate.unwrap_or_default();
        let term_months = term_months.unwrap_or_default();

        if principal <= 0.0 {
            errors.push(ValidationError::AmountNotPositive);
        }
        if annual_rate < 0.0 {
            errors.push(ValidationError::RateNegative);
        }
        if term_months <= 0 {
            errors.push(ValidationError::TermNotPositive);
        }

        if !errors.is_empty() {
            return ValidationResult {
                is_valid: false,
                errors,
                cleaned_request: None,
            };
        }

        ValidationResult {
            is_valid: true,
            errors,
            cleaned_request: Some(CreateLoanRequest {
                principal,
                annual_rate,
                term_months: term_months as u32,
                description: description.trim().to_string(),
            }),
        }
    }

    /// Clean and parse a decimal input string
    pub fn clean_and_parse_amount(&self, input: &str) -> Result<f64> {
        let cleaned = input
            .trim()
            .replace(&self.config.currency_label, "")
            .replace(',', "")
            .replace(' ', "");

        cleaned
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Invalid number format: {}", e))
    }

    /// The single dialog message for a failed validation. Parse failures
    /// take precedence, matching the original submission flow where
    /// parsing happens before the constraint checks.
    pub fn validation_message(&self, errors: &[ValidationError]) -> String {
        if errors.iter().any(|e| e.is_parse_error()) {
            "Please enter numeric values".to_string()
        } else {
            "Please enter positive values for amount, rate, and term".to_string()
        }
    }

    /// Format a list of loans for the summary table
    pub fn format_loans_for_table(&self, loans: &[Loan]) -> Vec<FormattedLoan> {
        loans.iter().map(|loan| self.format_single_loan(loan)).collect()
    }

    /// Format a single loan for the summary table
    pub fn format_single_loan(&self, loan: &Loan) -> FormattedLoan {
        FormattedLoan {
            id: loan.id.clone(),
            formatted_principal: format!("{:.2}", loan.principal),
            formatted_rate: format!("{:.2}", loan.annual_rate),
            formatted_term: loan.term_months.to_string(),
            formatted_payment: format!("{:.2}", loan.monthly_payment),
            description: loan.description.clone(),
        }
    }

    /// Format a schedule for the detail table
    pub fn format_schedule_for_table(
        &self,
        schedule: &[PaymentPeriod],
    ) -> Vec<FormattedPaymentPeriod> {
        schedule
            .iter()
            .map(|row| FormattedPaymentPeriod {
                period: row.period.to_string(),
                formatted_principal_payment: format!("{:.2}", row.principal_payment),
                formatted_interest: format!("{:.2}", row.interest),
                formatted_total_payment: format!("{:.2}", row.total_payment),
                formatted_remaining: format!("{:.2}", row.remaining_principal),
            })
            .collect()
    }

    /// One-line loan summary shown at the top of the detail view
    pub fn summary_line(&self, loan: &Loan) -> String {
        format!(
            "Principal: {:.2} {c} | Interest Rate: {:.2}% | Term: {} months | Monthly Payment: {:.2} {c}",
            loan.principal,
            loan.annual_rate,
            loan.term_months,
            loan.monthly_payment,
            c = self.config.currency_label,
        )
    }

    /// Payment totals line shown at the bottom of the detail view
    pub fn totals_line(&self, totals: &ScheduleTotals) -> String {
        format!(
            "Total Principal: {:.2} {c} | Total Interest: {:.2} {c} | Total Payments: {:.2} {c}",
            totals.total_principal,
            totals.total_interest,
            totals.total_payments,
            c = self.config.currency_label,
        )
    }
}

impl Default for LoanTableService {
    fn default() -> Self {
        Self::new()
    }
}
