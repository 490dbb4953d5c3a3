pub mod loan_form;
pub mod loan_table;
pub mod schedule_view;

pub use loan_table::render_loans_table;
pub use schedule_view::render_loan_details_window;
