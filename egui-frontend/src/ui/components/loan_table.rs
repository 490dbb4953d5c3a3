//! # Loans Table
//!
//! The summary table of all tracked loans. Rows are clickable; a click
//! reports the loan's stable id back to the caller, which opens the
//! detail view. The table never mutates state itself.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::FormattedLoan;

/// Render the loans summary table. Returns the id of the clicked row,
/// if any.
pub fn render_loans_table(ui: &mut egui::Ui, loans: &[FormattedLoan]) -> Option<String> {
    if loans.is_empty() {
        ui.label("No loans yet. Add one on the left to see its schedule.");
        return None;
    }

    let mut clicked_loan_id = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(130.0)) // AMOUNT
        .column(Column::exact(110.0)) // RATE
        .column(Column::exact(130.0)) // TERM
        .column(Column::exact(150.0)) // MONTHLY PAYMENT
        .column(Column::remainder()) // DESCRIPTION
        .header(28.0, |mut header| {
            for title in [
                "Loan Amount (BGN)",
                "Interest Rate (%)",
                "Loan Term (months)",
                "Monthly Payment (BGN)",
                "Description",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for loan in loans {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&loan.formatted_principal);
                    });
                    row.col(|ui| {
                        ui.label(&loan.formatted_rate);
                    });
                    row.col(|ui| {
                        ui.label(&loan.formatted_term);
                    });
                    row.col(|ui| {
                        ui.label(&loan.formatted_payment);
                    });
                    row.col(|ui| {
                        ui.label(&loan.description);
                    });

                    if row.response().clicked() {
                        clicked_loan_id = Some(loan.id.clone());
                    }
                });
            }
        });

    clicked_loan_id
}
