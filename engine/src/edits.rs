// Edit reconciliation: an edited display row is matched back to its source
// rows by a composite key and the edit is applied to every match (duplicate
// source rows all receive it). Derived fields are recomputed immediately.

use shared::models::Row;
use tracing::warn;

use crate::pipeline;

/// One analyst edit, carrying the composite match key of the row it was made
/// on plus the editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEdit {
    // Match key
    pub category: String,
    pub code: String,
    pub material_name: String,
    pub measure_unit: String,
    pub purchase_need: f64,
    pub need_professional: f64,
    pub need_student: f64,
    pub canonical_qty: f64,

    // Editable fields
    pub unit_cost: f64,
    pub best_price: f64,
    pub invoice_number: String,
    pub billed_status: String,
}

impl RowEdit {
    /// Seeds an edit from the row as currently displayed; callers then
    /// overwrite the editable fields.
    pub fn from_row(row: &Row) -> Self {
        RowEdit {
            category: row.category.clone(),
            code: row.code.clone(),
            material_name: row.material_name.clone(),
            measure_unit: row.measure_unit.clone(),
            purchase_need: row.purchase_need,
            need_professional: row.need_professional,
            need_student: row.need_student,
            canonical_qty: row.canonical_qty,
            unit_cost: row.unit_cost,
            best_price: row.best_price,
            invoice_number: row.invoice_number.clone(),
            billed_status: row.billed_status.clone(),
        }
    }

    /// Exact match on the composite key. Both sides of the float comparisons
    /// come out of the same parser, so equality is exact by construction.
    fn matches(&self, row: &Row) -> bool {
        self.category == row.category
            && self.code == row.code
            && self.material_name == row.material_name
            && self.measure_unit == row.measure_unit
            && self.purchase_need == row.purchase_need
            && self.need_professional == row.need_professional
            && self.need_student == row.need_student
            && self.canonical_qty == row.canonical_qty
    }
}

/// Applies each edit to every matching source row, overwriting the editable
/// fields and recomputing quantity and derived values for the touched rows.
/// Returns the number of row updates performed.
pub fn apply_edits(rows: &mut [Row], edits: &[RowEdit]) -> usize {
    let mut touched = 0usize;
    for edit in edits {
        let mut matched = false;
        for row in rows.iter_mut().filter(|row| edit.matches(row)) {
            row.unit_cost = edit.unit_cost;
            row.best_price = edit.best_price;
            row.invoice_number = edit.invoice_number.clone();
            row.billed_status = edit.billed_status.clone();
            pipeline::recompute_row(row);
            touched += 1;
            matched = true;
        }
        if !matched {
            warn!(
                material = %edit.material_name,
                code = %edit.code,
                "Edit matched no source row; skipped"
            );
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_row() -> Row {
        let mut row = Row {
            category: "Elétrica".to_string(),
            code: "E-01".to_string(),
            material_name: "Cabo".to_string(),
            measure_unit: "M".to_string(),
            purchase_need: 5.0,
            unit_cost: 10.0,
            best_price: 8.0,
            status: "Aguardando".to_string(),
            status_norm: "aguardando".to_string(),
            ..Row::default()
        };
        pipeline::recompute_row(&mut row);
        row
    }

    #[test]
    fn test_edit_overwrites_and_recomputes() {
        let mut rows = vec![source_row()];
        let mut edit = RowEdit::from_row(&rows[0]);
        edit.best_price = 12.0;
        edit.invoice_number = "NF-7".to_string();
        edit.billed_status = "Sim".to_string();

        let touched = apply_edits(&mut rows, &[edit]);
        assert_eq!(touched, 1);
        assert_eq!(rows[0].best_price, 12.0);
        assert_eq!(rows[0].invoice_number, "NF-7");
        assert_eq!(rows[0].billed_status, "Sim");
        // canonical_qty 5 * new best price
        assert_eq!(rows[0].purchase_value, 60.0);
        assert_eq!(
            rows[0].overstock_value,
            rows[0].negotiated_value - rows[0].purchase_value
        );
    }

    #[test]
    fn test_edit_applies_to_all_duplicate_matches() {
        let mut rows = vec![source_row(), source_row()];
        let mut edit = RowEdit::from_row(&rows[0]);
        edit.unit_cost = 99.0;

        let touched = apply_edits(&mut rows, &[edit]);
        assert_eq!(touched, 2);
        assert!(rows.iter().all(|r| r.unit_cost == 99.0));
        assert!(rows.iter().all(|r| r.forecast_value == 99.0 * 5.0));
    }

    #[test]
    fn test_mismatched_key_touches_nothing() {
        let mut rows = vec![source_row()];
        let mut edit = RowEdit::from_row(&rows[0]);
        edit.code = "OUTRO".to_string();
        edit.unit_cost = 99.0;

        let touched = apply_edits(&mut rows, &[edit]);
        assert_eq!(touched, 0);
        assert_eq!(rows[0].unit_cost, 10.0);
    }

    #[test]
    fn test_canonical_qty_is_part_of_the_key() {
        let mut other = source_row();
        other.purchase_need = 7.0;
        pipeline::recompute_row(&mut other);
        let mut rows = vec![source_row(), other];

        let mut edit = RowEdit::from_row(&rows[0]);
        edit.best_price = 20.0;
        let touched = apply_edits(&mut rows, &[edit]);
        assert_eq!(touched, 1);
        assert_eq!(rows[0].best_price, 20.0);
        assert_eq!(rows[1].best_price, 8.0);
    }
}
