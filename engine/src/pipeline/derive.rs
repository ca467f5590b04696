// Stage 4: derived monetary fields. Pure recomputation from the row's
// current canonical quantity and prices; every output is sanitized so a
// non-finite intermediate can never reach the aggregator.

use shared::models::Row;
use shared::utils::brazilian_format::sanitize;

/// Recomputes all derived monetary fields. `canonical_qty` must already be
/// resolved for the row's current values.
pub fn derive_financials(row: &mut Row) {
    row.forecast_value = sanitize(row.unit_cost * row.canonical_qty);
    row.purchase_value = sanitize(row.best_price * row.canonical_qty);
    row.negotiated_value = sanitize(row.best_price * row.negotiated_qty);
    row.need_value = sanitize(row.lowest_price * row.canonical_qty);
    row.historical_value = sanitize(row.unit_cost * row.stock_qty);
    row.overstock_value = sanitize(row.negotiated_value - row.purchase_value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced_row() -> Row {
        Row {
            canonical_qty: 4.0,
            unit_cost: 10.0,
            best_price: 8.0,
            lowest_price: 7.5,
            negotiated_qty: 6.0,
            stock_qty: 3.0,
            ..Row::default()
        }
    }

    #[test]
    fn test_formulas() {
        let mut row = priced_row();
        derive_financials(&mut row);
        assert_eq!(row.forecast_value, 40.0);
        assert_eq!(row.purchase_value, 32.0);
        assert_eq!(row.negotiated_value, 48.0);
        assert_eq!(row.need_value, 30.0);
        assert_eq!(row.historical_value, 30.0);
        assert_eq!(row.overstock_value, 16.0);
    }

    #[test]
    fn test_overstock_identity_is_exact() {
        let mut row = priced_row();
        row.best_price = 19.99;
        row.negotiated_qty = 3.7;
        row.canonical_qty = 2.3;
        derive_financials(&mut row);
        // Both sides come from the same float pipeline, so equality is exact.
        assert_eq!(
            row.overstock_value,
            row.negotiated_value - row.purchase_value
        );
    }

    #[test]
    fn test_blank_negotiated_qty_defaults_to_zero() {
        let mut row = priced_row();
        row.negotiated_qty = 0.0;
        derive_financials(&mut row);
        assert_eq!(row.negotiated_value, 0.0);
        assert_eq!(row.overstock_value, -row.purchase_value);
    }

    #[test]
    fn test_non_finite_artifacts_collapse_to_zero() {
        let mut row = priced_row();
        row.unit_cost = f64::NAN;
        derive_financials(&mut row);
        assert_eq!(row.forecast_value, 0.0);
        assert_eq!(row.historical_value, 0.0);
    }

    #[test]
    fn test_recomputation_overwrites_stale_values() {
        let mut row = priced_row();
        row.forecast_value = 999.0;
        row.overstock_value = -999.0;
        derive_financials(&mut row);
        assert_eq!(row.forecast_value, 40.0);
        assert_eq!(row.overstock_value, 16.0);
    }
}
