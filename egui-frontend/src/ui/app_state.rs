//! # App State Module
//!
//! This module defines the central application state structure and the
//! event handlers behind the form and table interactions.
//!
//! ## Key Types:
//! - `LoanTrackerApp` - Main application state struct
//!
//! ## Purpose:
//! The LoanTrackerApp struct holds all application state in a single
//! location:
//! - Backend connection (loan registry and formatting services)
//! - Form input state (the four text fields)
//! - UI state (error/success messages, which loan's detail view is open)
//!
//! All mutation goes through the handlers here; the rendering code in
//! `app_implementation` and `components` only reads state and reports
//! clicks back.

use backend::Backend;
use log::info;

/// Main application struct for the egui loan tracker
pub struct LoanTrackerApp {
    pub backend: Backend,

    // Form state (raw text, parsed on submit)
    pub loan_amount_input: String,
    pub interest_rate_input: String,
    pub loan_term_input: String,
    pub description_input: String,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    /// Loan whose detail window is currently open, by stable id
    pub selected_loan_id: Option<String>,
}

impl LoanTrackerApp {
    /// Create a new LoanTrackerApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing LoanTrackerApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,

            loan_amount_input: String::new(),
            interest_rate_input: String::new(),
            loan_term_input: String::new(),
            description_input: String::new(),

            error_message: None,
            success_message: None,

            selected_loan_id: None,
        })
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Clear the add-loan form fields
    pub fn clear_form(&mut self) {
        self.loan_amount_input.clear();
        self.interest_rate_input.clear();
        self.loan_term_input.clear();
        self.description_input.clear();
    }

    /// Handle the Add Loan button: validate the form, add the loan, and
    /// surface the outcome. On any validation failure nothing is mutated
    /// and the form keeps its contents so the user can correct it.
    pub fn submit_loan_form(&mut self) {
        self.clear_messages();

        let validation = self.backend.loan_table_service.validate_loan_input(
            &self.loan_amount_input,
            &self.interest_rate_input,
            &self.loan_term_input,
            &self.description_input,
        );

        if !validation.is_valid {
            let message = self
                .backend
                .loan_table_service
                .validation_message(&validation.errors);
            info!("Rejected loan form input: {:?}", validation.errors);
            self.error_message = Some(message);
            return;
        }

        let request = match validation.cleaned_request {
            Some(request) => request,
            None => return,
        };

        match self.backend.loan_service.add_loan(request.into()) {
            Ok(result) => {
                self.success_message = Some(result.success_message);
                self.clear_form();
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Open the detail view for the given loan
    pub fn open_loan_details(&mut self, loan_id: String) {
        info!("Opening detail view for {}", loan_id);
        self.selected_loan_id = Some(loan_id);
    }
}
