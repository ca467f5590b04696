// The pipeline runs in full on every load, filter change or edit-save:
// normalize -> resolve quantity -> derive financials. Each stage is a pure
// function from its input table to its output table; nothing is cached
// between runs.

pub mod derive;
pub mod filter;
pub mod normalize;
pub mod quantity;

use shared::models::Row;

use crate::data::csv_loader::RawRecord;
use filter::FilterSpec;

/// Recomputes the canonical quantity and every derived monetary field for a
/// single row. Re-entry point for user edits.
pub fn recompute_row(row: &mut Row) {
    row.canonical_qty = quantity::resolve(row);
    derive::derive_financials(row);
}

/// Full pipeline over a raw table: schema normalization (which drops rows
/// without any status signal), filtering, then per-row derivation.
pub fn run(records: &[RawRecord], filter: &FilterSpec) -> Vec<Row> {
    let rows = normalize::normalize(records);
    let mut rows = filter.apply(rows);
    for row in &mut rows {
        recompute_row(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate;
    use shared::models::{DeliveryStatus, STATUS_IN_BUDGETING};
    use std::collections::HashMap;

    fn record(cells: &[(&str, &str)]) -> RawRecord {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    // The three-row scenario: a budgeted row with a blank status, a
    // delivered row, and a waiting row.
    fn scenario_records() -> Vec<RawRecord> {
        vec![
            record(&[
                ("Categoria", "Elétrica"),
                ("Insumo", "Cabo"),
                ("Situação", ""),
                ("Orçamento 1", "100"),
                ("Necessidade Prof.", "2"),
            ]),
            record(&[
                ("Categoria", "Elétrica"),
                ("Insumo", "Tomada"),
                ("Situação", "Entregue"),
                ("Qtd Armazenada", "0"),
            ]),
            record(&[
                ("Categoria", "Hidráulica"),
                ("Insumo", "Tubo"),
                ("Situação", "Aguardando"),
                ("Qtd Armazenada", "0"),
            ]),
        ]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let rows = run(&scenario_records(), &FilterSpec::default());
        assert_eq!(rows.len(), 3);

        let budgeted = &rows[0];
        assert_eq!(budgeted.status, STATUS_IN_BUDGETING);
        assert_eq!(budgeted.canonical_qty, 2.0);

        assert_eq!(rows[1].delivery_status(), Some(DeliveryStatus::Delivered));
        assert_eq!(
            rows[2].delivery_status(),
            Some(DeliveryStatus::WaitingDelivery)
        );

        // All three statuses are in the restricted base set, so the waiting
        // percentage is 1/3.
        let waiting = aggregate::waiting_stats(&rows);
        assert_eq!(waiting.item_count, 1);
        assert!((waiting.pct - 100.0 / 3.0).abs() < 1e-9);

        let delivery = aggregate::delivery_stats(&rows);
        assert_eq!(delivery.base_count, 3);
        assert_eq!(delivery.delivered_count, 1);
        assert!((delivery.pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let rows = run(&scenario_records(), &FilterSpec::default());
        let mut rerun = rows.clone();
        for row in &mut rerun {
            recompute_row(row);
        }
        assert_eq!(rows, rerun);
    }

    #[test]
    fn test_filtered_run_recomputes_from_scratch() {
        let filter = FilterSpec {
            categories: Some(vec!["Elétrica".to_string()]),
            ..FilterSpec::default()
        };
        let rows = run(&scenario_records(), &filter);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.category == "Elétrica"));
    }
}
