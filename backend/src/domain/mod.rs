pub mod commands;
pub mod loan_service;
pub mod loan_table;
pub mod models;
pub mod schedule;

pub use loan_service::LoanService;
pub use loan_table::{LoanTableConfig, LoanTableService};
