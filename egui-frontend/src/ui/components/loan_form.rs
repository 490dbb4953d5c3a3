//! # Loan Form
//!
//! The add-loan input form shown in the left panel: four text fields
//! (amount, rate, term, description) and the Add Loan button. Parsing and
//! validation live in the backend; this module only collects the raw text
//! and hands it to `submit_loan_form` on click.

use crate::ui::app_state::LoanTrackerApp;
use eframe::egui;

impl LoanTrackerApp {
    /// Render the add-loan form
    pub fn render_loan_form(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("💰 Add New Loan")
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .strong(),
        );
        ui.add_space(12.0);

        egui::Grid::new("loan_form_grid")
            .num_columns(2)
            .spacing([8.0, 10.0])
            .show(ui, |ui| {
                ui.label("Loan Amount (BGN):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.loan_amount_input)
                        .hint_text("1000.00")
                        .desired_width(110.0),
                );
                ui.end_row();

                ui.label("Annual Interest Rate (%):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.interest_rate_input)
                        .hint_text("12.0")
                        .desired_width(110.0),
                );
                ui.end_row();

                ui.label("Loan Term (months):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.loan_term_input)
                        .hint_text("12")
                        .desired_width(110.0),
                );
                ui.end_row();

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.description_input)
                        .hint_text("Car repair")
                        .desired_width(110.0),
                );
                ui.end_row();
            });

        ui.add_space(12.0);

        if ui
            .add_sized([140.0, 32.0], egui::Button::new("Add Loan"))
            .clicked()
        {
            self.submit_loan_form();
        }
    }
}
