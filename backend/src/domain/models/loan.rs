//! Domain model for a loan.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use shared::PaymentPeriod;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub created_at: DateTime<Local>,
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
    pub description: String,
    /// Fixed monthly payment, taken from the first schedule row
    pub monthly_payment: f64,
    pub schedule: Vec<PaymentPeriod>,
}

impl Loan {
    /// Generate a unique loan ID.
    /// Format: loan::<uuid>
    /// Example: loan::67e55044-10b1-426f-9247-bb680e5fe0c8
    pub fn generate_id() -> String {
        format!("loan::{}", Uuid::new_v4())
    }

    /// Convert to the shared DTO handed to the UI layer.
    pub fn to_dto(&self) -> shared::Loan {
        shared::Loan {
            id: self.id.clone(),
            created_at: self.created_at.to_rfc3339(),
            principal: self.principal,
            annual_rate: self.annual_rate,
            term_months: self.term_months,
            description: self.description.clone(),
            monthly_payment: self.monthly_payment,
            schedule: self.schedule.clone(),
        }
    }
}
