// Stage 1: schema normalization. Guarantees the expected column set, trims
// text, resolves the status column, defaults budgeted rows and drops rows
// without any status signal.

use shared::models::{Row, STATUS_IN_BUDGETING};
use shared::utils::brazilian_format::to_float;
use tracing::warn;

use crate::data::columns;
use crate::data::csv_loader::RawRecord;

fn text(record: &RawRecord, col: &str) -> String {
    record
        .get(col)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn number(record: &RawRecord, col: &str) -> f64 {
    record.get(col).map(|s| to_float(s)).unwrap_or(0.0)
}

/// Normalizes a raw table into canonical rows. Rows whose normalized status
/// stays empty carry no signal to aggregate on and are dropped; the dropped
/// count is logged so the data loss is visible.
pub fn normalize(records: &[RawRecord]) -> Vec<Row> {
    // Status source is a table-level decision: the short-form column wins
    // when the sheet has it.
    let use_short_status = records
        .iter()
        .any(|r| r.contains_key(columns::STATUS_SHORT));

    let mut rows = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        let row = normalize_record(record, use_short_status);
        if row.status_norm.is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    if dropped > 0 {
        warn!(
            dropped,
            kept = rows.len(),
            "Dropped rows with no status and no budget quotes"
        );
    }
    rows
}

fn normalize_record(record: &RawRecord, use_short_status: bool) -> Row {
    let status_source = if use_short_status {
        columns::STATUS_SHORT
    } else {
        columns::STATUS
    };

    let quote_1 = text(record, columns::QUOTE_1);
    let quote_2 = text(record, columns::QUOTE_2);
    let quote_3 = text(record, columns::QUOTE_3);
    let is_budgeted = [&quote_1, &quote_2, &quote_3].iter().any(|q| !q.is_empty());

    let mut status = text(record, status_source);
    if status.is_empty() && is_budgeted {
        status = STATUS_IN_BUDGETING.to_string();
    }
    let status_norm = status.to_lowercase();

    Row {
        category: text(record, columns::CATEGORY),
        code: text(record, columns::CODE),
        material_name: text(record, columns::MATERIAL),
        measure_unit: text(record, columns::MEASURE_UNIT),
        status,
        status_norm,
        is_budgeted,
        quote_1,
        quote_2,
        quote_3,
        need_professional: number(record, columns::NEED_PROFESSIONAL),
        need_student: number(record, columns::NEED_STUDENT),
        stock_qty: number(record, columns::STOCK_QTY),
        purchase_need: number(record, columns::PURCHASE_NEED),
        post_purchase_balance: number(record, columns::POST_PURCHASE_BALANCE),
        lowest_price: number(record, columns::LOWEST_PRICE),
        unit_cost: number(record, columns::UNIT_COST),
        stocked_cost: number(record, columns::STOCKED_COST),
        forecast_total: number(record, columns::FORECAST_TOTAL),
        best_price: number(record, columns::BEST_PRICE),
        reduction_lowest_price: number(record, columns::REDUCTION_LOWEST),
        reduction_pct: number(record, columns::REDUCTION_PCT),
        reduction_unit: number(record, columns::REDUCTION_UNIT),
        reduction_total: number(record, columns::REDUCTION_TOTAL),
        negotiated_qty: number(record, columns::NEGOTIATED_QTY),
        purchased_qty_raw: number(record, columns::PURCHASED_QTY_RAW),
        stored_qty: number(record, columns::STORED_QTY),
        invoice_number: text(record, columns::INVOICE_NUMBER),
        billed_status: text(record, columns::BILLED_STATUS),
        supplier: text(record, columns::SUPPLIER),
        location: text(record, columns::LOCATION),
        position: text(record, columns::POSITION),
        repurchase: text(record, columns::REPURCHASE),
        purchase_date: text(record, columns::PURCHASE_DATE),
        delivery_date: text(record, columns::DELIVERY_DATE),
        ..Row::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(cells: &[(&str, &str)]) -> RawRecord {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_budgeted_row_defaults_to_in_budgeting() {
        let rows = normalize(&[record(&[
            ("Situação", ""),
            ("Orçamento 1", "R$ 100,00"),
        ])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, STATUS_IN_BUDGETING);
        assert_eq!(rows[0].status_norm, "em orçamento");
        assert!(rows[0].is_budgeted);
    }

    #[test]
    fn test_empty_status_rows_are_dropped() {
        let rows = normalize(&[
            record(&[("Situação", ""), ("Insumo", "sem sinal")]),
            record(&[("Situação", "   "), ("Insumo", "só espaços")]),
            record(&[("Situação", "Aguardando"), ("Insumo", "fica")]),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].material_name, "fica");
        assert!(rows.iter().all(|r| !r.status_norm.is_empty()));
    }

    #[test]
    fn test_all_blank_status_column_without_quotes_drops_everything() {
        let rows = normalize(&[
            record(&[("Insumo", "a")]),
            record(&[("Insumo", "b"), ("Situação", "")]),
        ]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_short_status_column_is_preferred() {
        let rows = normalize(&[record(&[
            ("N", "Entregue"),
            ("Situação", "Aguardando"),
        ])]);
        assert_eq!(rows[0].status, "Entregue");
        assert_eq!(rows[0].status_norm, "entregue");
    }

    #[test]
    fn test_text_is_trimmed_and_status_lowercased() {
        let rows = normalize(&[record(&[
            ("Categoria", "  Elétrica  "),
            ("Situação", "  Aguardando  "),
        ])]);
        assert_eq!(rows[0].category, "Elétrica");
        assert_eq!(rows[0].status, "Aguardando");
        assert_eq!(rows[0].status_norm, "aguardando");
    }

    #[test]
    fn test_missing_columns_degrade_to_defaults() {
        let rows = normalize(&[record(&[("Situação", "Entregue")])]);
        let row = &rows[0];
        assert_eq!(row.category, "");
        assert_eq!(row.purchase_need, 0.0);
        assert_eq!(row.best_price, 0.0);
        assert!(!row.is_budgeted);
    }

    #[test]
    fn test_locale_numbers_are_parsed() {
        let rows = normalize(&[record(&[
            ("Situação", "Aguardando"),
            ("Melhor Preço", "R$ 1.234,56"),
            ("Necessidade Compra", "7"),
        ])]);
        assert_eq!(rows[0].best_price, 1234.56);
        assert_eq!(rows[0].purchase_need, 7.0);
    }
}
