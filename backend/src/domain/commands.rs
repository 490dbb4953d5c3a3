//! Domain-level command and query types.
//! These structs are used by services inside the domain layer. The UI layer
//! maps the public DTOs defined in the `shared` crate to these internal
//! types before calling into the services.

pub mod loans {
    use crate::domain::models::loan::Loan as DomainLoan;
    use shared::ScheduleTotals;

    /// Input for creating a new loan. Values are already parsed; the
    /// service still enforces the domain constraints before touching the
    /// registry.
    #[derive(Debug, Clone)]
    pub struct AddLoanCommand {
        pub principal: f64,
        pub annual_rate: f64,
        pub term_months: u32,
        pub description: String,
    }

    impl From<shared::CreateLoanRequest> for AddLoanCommand {
        fn from(request: shared::CreateLoanRequest) -> Self {
            Self {
                principal: request.principal,
                annual_rate: request.annual_rate,
                term_months: request.term_months,
                description: request.description,
            }
        }
    }

    /// Result of adding a loan.
    #[derive(Debug, Clone)]
    pub struct AddLoanResult {
        pub loan: DomainLoan,
        pub success_message: String,
    }

    /// Result of a loan detail lookup: the loan plus aggregate totals
    /// over its schedule.
    #[derive(Debug, Clone)]
    pub struct LoanDetailResult {
        pub loan: DomainLoan,
        pub totals: ScheduleTotals,
    }
}
