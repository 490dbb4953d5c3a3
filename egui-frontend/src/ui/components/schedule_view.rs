//! # Schedule Detail View
//!
//! The drill-down window for a single loan: summary line, the full
//! period-by-period amortization schedule, and the payment totals. All
//! strings arrive pre-formatted from the backend's table service.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::FormattedPaymentPeriod;

/// Render the loan detail window. Returns false once the user closes it.
pub fn render_loan_details_window(
    ctx: &egui::Context,
    title: &str,
    summary_line: &str,
    schedule_rows: &[FormattedPaymentPeriod],
    totals_line: &str,
) -> bool {
    let mut open = true;

    egui::Window::new(title)
        .open(&mut open)
        .default_size([900.0, 500.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.group(|ui| {
                ui.label(egui::RichText::new("Loan Summary").strong());
                ui.label(summary_line);
            });

            ui.add_space(8.0);

            render_schedule_table(ui, schedule_rows);

            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Payment Totals").strong());
                ui.label(totals_line);
            });
        });

    open
}

/// Render the period-by-period schedule table
fn render_schedule_table(ui: &mut egui::Ui, rows: &[FormattedPaymentPeriod]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(60.0)) // MONTH
        .column(Column::exact(170.0)) // PRINCIPAL PAYMENT
        .column(Column::exact(130.0)) // INTEREST
        .column(Column::exact(150.0)) // TOTAL PAYMENT
        .column(Column::remainder()) // REMAINING PRINCIPAL
        .min_scrolled_height(0.0)
        .max_scroll_height(320.0)
        .header(28.0, |mut header| {
            for title in [
                "Month",
                "Principal Payment (BGN)",
                "Interest (BGN)",
                "Total Payment (BGN)",
                "Remaining Principal (BGN)",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row_data in rows {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&row_data.period);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.formatted_principal_payment);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.formatted_interest);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.formatted_total_payment);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.formatted_remaining);
                    });
                });
            }
        });
}
