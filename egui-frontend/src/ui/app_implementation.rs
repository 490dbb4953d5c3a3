use crate::ui::app_state::LoanTrackerApp;
use crate::ui::components::{render_loan_details_window, render_loans_table};
use eframe::egui;

impl eframe::App for LoanTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left - input form
        egui::SidePanel::left("loan_input_panel")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.render_loan_form(ui);
            });

        // Right - loans table
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            self.render_loans_section(ui);
        });

        // Detail window for the selected loan
        self.render_selected_loan_details(ctx);
    }
}

impl LoanTrackerApp {
    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::from_rgb(34, 139, 34), format!("✅ {}", success));
        }
        if self.error_message.is_some() || self.success_message.is_some() {
            ui.separator();
        }
    }

    /// Render the loans summary table section
    fn render_loans_section(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Your Loans")
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .strong(),
        );
        ui.add_space(8.0);

        let loans = match self.backend.loan_service.list_loans() {
            Ok(loans) => loans,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
                return;
            }
        };
        let dtos: Vec<shared::Loan> = loans.iter().map(|loan| loan.to_dto()).collect();
        let rows = self.backend.loan_table_service.format_loans_for_table(&dtos);

        if let Some(loan_id) = render_loans_table(ui, &rows) {
            self.open_loan_details(loan_id);
        }
    }

    /// Render the detail window for the selected loan, if any
    fn render_selected_loan_details(&mut self, ctx: &egui::Context) {
        let loan_id = match self.selected_loan_id.clone() {
            Some(id) => id,
            None => return,
        };

        match self.backend.loan_service.loan_detail(&loan_id) {
            Ok(Some(detail)) => {
                let dto = detail.loan.to_dto();
                let title = format!("Loan Details: {}", dto.description);
                let summary = self.backend.loan_table_service.summary_line(&dto);
                let rows = self
                    .backend
                    .loan_table_service
                    .format_schedule_for_table(&dto.schedule);
                let totals = self.backend.loan_table_service.totals_line(&detail.totals);

                let still_open =
                    render_loan_details_window(ctx, &title, &summary, &rows, &totals);
                if !still_open {
                    self.selected_loan_id = None;
                }
            }
            Ok(None) => {
                // Loan vanished from the registry; stale id
                self.selected_loan_id = None;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.selected_loan_id = None;
            }
        }
    }
}
