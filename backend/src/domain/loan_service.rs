//! Loan service domain logic for the loan tracker.
//!
//! Owns the in-memory loan registry: an insertion-ordered list of loans,
//! the only mutable state in the process. Loans are appended by
//! `add_loan`, read back by `list_loans`, and looked up by their stable
//! id for the detail view. Nothing is ever edited or deleted, and nothing
//! survives process exit.

use crate::domain::commands::loans::{AddLoanCommand, AddLoanResult, LoanDetailResult};
use crate::domain::models::loan::Loan as DomainLoan;
use crate::domain::schedule::{calculate_annuity_schedule, schedule_totals};
use anyhow::{anyhow, Result};
use chrono::Local;
use log::info;
use std::sync::RwLock;

pub struct LoanService {
    registry: RwLock<Vec<DomainLoan>>,
}

impl LoanService {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Vec::new()),
        }
    }

    /// Create a loan from an already-parsed command, compute its schedule
    /// and append it to the registry.
    ///
    /// The UI validates input before building the command, but the
    /// constraints are enforced here as well: the registry must never hold
    /// a loan the annuity formula is undefined for. On a constraint
    /// violation nothing is mutated.
    pub fn add_loan(&self, command: AddLoanCommand) -> Result<AddLoanResult> {
        if command.principal <= 0.0 || command.annual_rate < 0.0 || command.term_months == 0 {
            return Err(anyhow!(
                "Please enter positive values for amount, rate, and term"
            ));
        }

        let schedule = calculate_annuity_schedule(
            command.principal,
            command.annual_rate,
            command.term_months,
        );

        // Monthly payment comes from the first schedule row; a validated
        // term is at least 1 so the row always exists, but mirror the
        // guard rather than index blindly.
        let monthly_payment = schedule.first().map(|row| row.total_payment).unwrap_or(0.0);

        let loan = DomainLoan {
            id: DomainLoan::generate_id(),
            created_at: Local::now(),
            principal: command.principal,
            annual_rate: command.annual_rate,
            term_months: command.term_months,
            description: command.description,
            monthly_payment,
            schedule,
        };

        let mut registry = self
            .registry
            .write()
            .map_err(|_| anyhow!("loan registry lock poisoned"))?;
        registry.push(loan.clone());

        info!(
            "Added loan {} ({:.2} BGN over {} months at {:.2}%)",
            loan.id, loan.principal, loan.term_months, loan.annual_rate
        );

        Ok(AddLoanResult {
            loan,
            success_message: "Loan added successfully".to_string(),
        })
    }

    /// All loans in insertion order.
    pub fn list_loans(&self) -> Result<Vec<DomainLoan>> {
        let registry = self
            .registry
            .read()
            .map_err(|_| anyhow!("loan registry lock poisoned"))?;
        Ok(registry.clone())
    }

    /// Look up a single loan by its stable id.
    pub fn get_loan(&self, loan_id: &str) -> Result<Option<DomainLoan>> {
        let registry = self
            .registry
            .read()
            .map_err(|_| anyhow!("loan registry lock poisoned"))?;
        Ok(registry.iter().find(|loan| loan.id == loan_id).cloned())
    }

    /// Loan detail for the drill-down view: the loan plus the totals
    /// summed over its schedule rows.
    pub fn loan_detail(&self, loan_id: &str) -> Result<Option<LoanDetailResult>> {
        let loan = match self.get_loan(loan_id)? {
            Some(loan) => loan,
            None => return Ok(None),
        };
        let totals = schedule_totals(&loan.schedule);
        Ok(Some(LoanDetailResult { loan, totals }))
    }

    pub fn loan_count(&self) -> Result<usize> {
        let registry = self
            .registry
            .read()
            .map_err(|_| anyhow!("loan registry lock poisoned"))?;
        Ok(registry.len())
    }
}

impl Default for LoanService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_command(principal: f64, annual_rate: f64, term_months: u32) -> AddLoanCommand {
        AddLoanCommand {
            principal,
            annual_rate,
            term_months,
            description: "Test loan".to_string(),
        }
    }

    #[test]
    fn test_add_loan_computes_schedule_and_payment() {
        let service = LoanService::new();

        let result = service.add_loan(add_command(1000.0, 12.0, 12)).unwrap();

        assert_eq!(result.loan.schedule.len(), 12);
        assert_eq!(result.loan.monthly_payment, 88.85);
        assert_eq!(
            result.loan.monthly_payment,
            result.loan.schedule[0].total_payment
        );
        assert_eq!(result.success_message, "Loan added successfully");
        assert_eq!(service.loan_count().unwrap(), 1);
    }

    #[test]
    fn test_loans_are_listed_in_insertion_order() {
        let service = LoanService::new();

        let first = service.add_loan(add_command(1000.0, 12.0, 12)).unwrap();
        let second = service.add_loan(add_command(5000.0, 0.0, 10)).unwrap();

        let loans = service.list_loans().unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].id, first.loan.id);
        assert_eq!(loans[1].id, second.loan.id);
        assert_ne!(first.loan.id, second.loan.id);
    }

    #[test]
    fn test_invalid_input_is_rejected_and_registry_unchanged() {
        let service = LoanService::new();

        assert!(service.add_loan(add_command(-5.0, 12.0, 12)).is_err());
        assert!(service.add_loan(add_command(0.0, 12.0, 12)).is_err());
        assert!(service.add_loan(add_command(1000.0, -1.0, 12)).is_err());
        assert!(service.add_loan(add_command(1000.0, 12.0, 0)).is_err());

        assert_eq!(service.loan_count().unwrap(), 0);
        assert!(service.list_loans().unwrap().is_empty());
    }

    #[test]
    fn test_validation_error_message_names_positive_values() {
        let service = LoanService::new();
        let err = service.add_loan(add_command(-5.0, 12.0, 12)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter positive values for amount, rate, and term"
        );
    }

    #[test]
    fn test_get_loan_by_id() {
        let service = LoanService::new();
        let added = service.add_loan(add_command(1000.0, 12.0, 12)).unwrap();

        let found = service.get_loan(&added.loan.id).unwrap();
        assert_eq!(found, Some(added.loan));

        let missing = service.get_loan("loan::does-not-exist").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_loan_detail_includes_totals() {
        let service = LoanService::new();
        let added = service.add_loan(add_command(1000.0, 0.0, 10)).unwrap();

        let detail = service.loan_detail(&added.loan.id).unwrap().unwrap();
        assert_eq!(detail.totals.total_principal, 1000.00);
        assert_eq!(detail.totals.total_interest, 0.00);
        assert_eq!(detail.totals.total_payments, 1000.00);
    }

    #[test]
    fn test_zero_rate_loan_monthly_payment() {
        let service = LoanService::new();
        let added = service.add_loan(add_command(1000.0, 0.0, 10)).unwrap();
        assert_eq!(added.loan.monthly_payment, 100.00);
    }
}
