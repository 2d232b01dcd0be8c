//! Table Renderer
//! Formats analyzed transactions into display rows and draws them.

use crate::data::Transaction;
use egui::{Color32, RichText, ScrollArea};

const DANGER_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const MISSING_VALUE: &str = "N/A";
const TABLE_MAX_HEIGHT: f32 = 320.0;

/// Conditional row styling. Fraud is the only rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    Danger,
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub fraud: &'static str,
    pub style: RowStyle,
}

impl From<&Transaction> for TableRow {
    fn from(tx: &Transaction) -> Self {
        let description = tx
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(MISSING_VALUE);

        Self {
            id: tx
                .id
                .map_or_else(|| MISSING_VALUE.to_string(), |id| id.to_string()),
            description: description.to_string(),
            amount: format!("${:.2}", tx.amount),
            category: tx.category.clone(),
            fraud: if tx.is_fraud { "Yes" } else { "No" },
            style: if tx.is_fraud {
                RowStyle::Danger
            } else {
                RowStyle::Normal
            },
        }
    }
}

/// Transaction table; every render replaces all rows.
#[derive(Debug, Default)]
pub struct TableRenderer {
    rows: Vec<TableRow>,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with `transactions`, in input order.
    pub fn render(&mut self, transactions: &[Transaction]) {
        self.rows.clear();
        self.rows.extend(transactions.iter().map(TableRow::from));
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let default_text_color = ui.visuals().text_color();

        ScrollArea::vertical()
            .max_height(TABLE_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("transactions_table")
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["ID", "Description", "Amount", "Category", "Fraud?"] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for row in &self.rows {
                            let color = match row.style {
                                RowStyle::Danger => DANGER_COLOR,
                                RowStyle::Normal => default_text_color,
                            };
                            for cell in [
                                row.id.as_str(),
                                row.description.as_str(),
                                row.amount.as_str(),
                                row.category.as_str(),
                                row.fraud,
                            ] {
                                ui.label(RichText::new(cell).color(color));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
