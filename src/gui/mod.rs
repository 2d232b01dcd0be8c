//! GUI module - User interface components

mod alert;
mod app;
mod control_panel;
mod results_view;
mod table;

pub use alert::AlertPresenter;
pub use app::ExpenseGuardApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use results_view::ResultsView;
pub use table::TableRenderer;

#[cfg(test)]
pub(crate) use table::RowStyle;
