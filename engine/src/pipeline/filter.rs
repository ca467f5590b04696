// Analyst-facing filters, applied between normalization and derivation.
// Blank category / billing values are compared under their display
// placeholders so the filter options line up with what the dashboard shows.

use shared::models::Row;

#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Category whitelist; `None` selects everything.
    pub categories: Option<Vec<String>>,
    /// Billing-status whitelist; `None` selects everything.
    pub billed: Option<Vec<String>>,
    /// Case-insensitive substring match on the material name.
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(categories) = &self.categories {
            if !categories.iter().any(|c| c == row.display_category()) {
                return false;
            }
        }
        if let Some(billed) = &self.billed {
            if !billed.iter().any(|b| b == row.display_billed_status()) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty() && !row.material_name.to_lowercase().contains(&term) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}
