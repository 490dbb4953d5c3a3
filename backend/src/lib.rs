//! # Backend for the Loan Tracker
//!
//! This crate is the domain layer behind the egui frontend. It is fully
//! synchronous and does no I/O:
//! - The annuity schedule calculator is a pure function
//! - The loan registry lives in memory for the lifetime of the process
//! - Formatting and validation logic is independent of any widget toolkit

use anyhow::Result;

pub mod domain;

/// Main backend struct that orchestrates the domain services
pub struct Backend {
    pub loan_service: domain::LoanService,
    pub loan_table_service: domain::LoanTableService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Result<Self> {
        let loan_service = domain::LoanService::new();
        let loan_table_service = domain::LoanTableService::new();

        Ok(Backend {
            loan_service,
            loan_table_service,
        })
    }
}
