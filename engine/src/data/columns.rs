// Column vocabulary of the procurement sheet. Header names are preserved
// verbatim on write-back, so they are the source sheet's Portuguese labels.
use shared::models::Row;

pub const CATEGORY: &str = "Categoria";
pub const CODE: &str = "Código";
pub const MATERIAL: &str = "Insumo";
pub const NEED_PROFESSIONAL: &str = "Necessidade Prof.";
pub const NEED_STUDENT: &str = "Necessidade Aluno";
pub const MEASURE_UNIT: &str = "Medida";
pub const STOCK_QTY: &str = "Estoque";
pub const PURCHASE_NEED: &str = "Necessidade Compra";
pub const POST_PURCHASE_BALANCE: &str = "saldo pós compra";
pub const LOWEST_PRICE: &str = "Menor Preço";
pub const UNIT_COST: &str = "custo";
pub const STOCKED_COST: &str = "Custo Estoque";
pub const FORECAST_TOTAL: &str = "total Previsto";
pub const STATUS: &str = "Situação";
/// Alternate short-form status column; preferred over `STATUS` when present.
pub const STATUS_SHORT: &str = "N";
pub const QUOTE_1: &str = "Orçamento 1";
pub const QUOTE_2: &str = "Orçamento 2";
pub const QUOTE_3: &str = "Orçamento 3";
pub const BEST_PRICE: &str = "Melhor Preço";
pub const REDUCTION_LOWEST: &str = "Redução Menor Preço";
pub const REDUCTION_PCT: &str = "Redução %";
pub const REDUCTION_UNIT: &str = "Redução R$ unt";
pub const REDUCTION_TOTAL: &str = "Redução R$ total";
pub const NEGOTIATED_QTY: &str = "Qtd Negociada";
pub const PURCHASE_VALUE: &str = "Valor Total Compra";
pub const NEED_VALUE: &str = "Valor Total Necessidade";
pub const FORECAST_VALUE: &str = "Valor Previsto";
pub const HISTORICAL_VALUE: &str = "Valor Total Histórico";
pub const OVERSTOCK: &str = "Overstock";
pub const STORED_QTY: &str = "Qtd Armazenada";
pub const LOCATION: &str = "Local";
pub const POSITION: &str = "Posição";
pub const SUPPLIER: &str = "Fornecedor";
pub const INVOICE_NUMBER: &str = "Nota Fiscal";
pub const BILLED_STATUS: &str = "Faturado?";
pub const REPURCHASE: &str = "Recompra?";
pub const PURCHASE_DATE: &str = "Data Compra";
pub const DELIVERY_DATE: &str = "Data Entrega";
pub const PURCHASED_QTY_RAW: &str = "compras";

// Pipeline-owned output columns, appended on write-back.
pub const CANONICAL_QTY: &str = "qtd";
pub const NEGOTIATED_VALUE: &str = "Valor Total Negociado";

/// The fixed expected column set, in sheet order. Missing columns are
/// synthesized as blank during normalization; extra input columns are
/// ignored.
pub const EXPECTED_COLUMNS: [&str; 38] = [
    CATEGORY,
    CODE,
    MATERIAL,
    NEED_PROFESSIONAL,
    NEED_STUDENT,
    MEASURE_UNIT,
    STOCK_QTY,
    PURCHASE_NEED,
    POST_PURCHASE_BALANCE,
    LOWEST_PRICE,
    UNIT_COST,
    STOCKED_COST,
    FORECAST_TOTAL,
    STATUS,
    QUOTE_1,
    QUOTE_2,
    QUOTE_3,
    BEST_PRICE,
    REDUCTION_LOWEST,
    REDUCTION_PCT,
    REDUCTION_UNIT,
    REDUCTION_TOTAL,
    NEGOTIATED_QTY,
    PURCHASE_VALUE,
    NEED_VALUE,
    FORECAST_VALUE,
    HISTORICAL_VALUE,
    OVERSTOCK,
    STORED_QTY,
    LOCATION,
    POSITION,
    SUPPLIER,
    INVOICE_NUMBER,
    BILLED_STATUS,
    REPURCHASE,
    PURCHASE_DATE,
    DELIVERY_DATE,
    PURCHASED_QTY_RAW,
];

/// Write-back header: the expected set plus the derived columns the pipeline
/// adds.
pub fn output_header() -> Vec<&'static str> {
    let mut header: Vec<&'static str> = EXPECTED_COLUMNS.to_vec();
    header.push(CANONICAL_QTY);
    header.push(NEGOTIATED_VALUE);
    header
}

/// Plain float rendering for write-back cells. `Display` for f64 keeps the
/// shortest representation ("5", "1234.56"), which the lenient parser reads
/// back as a canonical decimal.
fn fmt_num(value: f64) -> String {
    value.to_string()
}

/// Maps a canonical row to write-back cells, aligned with `output_header()`.
pub fn row_to_record(row: &Row) -> Vec<String> {
    vec![
        row.category.clone(),
        row.code.clone(),
        row.material_name.clone(),
        fmt_num(row.need_professional),
        fmt_num(row.need_student),
        row.measure_unit.clone(),
        fmt_num(row.stock_qty),
        fmt_num(row.purchase_need),
        fmt_num(row.post_purchase_balance),
        fmt_num(row.lowest_price),
        fmt_num(row.unit_cost),
        fmt_num(row.stocked_cost),
        fmt_num(row.forecast_total),
        row.status.clone(),
        row.quote_1.clone(),
        row.quote_2.clone(),
        row.quote_3.clone(),
        fmt_num(row.best_price),
        fmt_num(row.reduction_lowest_price),
        fmt_num(row.reduction_pct),
        fmt_num(row.reduction_unit),
        fmt_num(row.reduction_total),
        fmt_num(row.negotiated_qty),
        fmt_num(row.purchase_value),
        fmt_num(row.need_value),
        fmt_num(row.forecast_value),
        fmt_num(row.historical_value),
        fmt_num(row.overstock_value),
        fmt_num(row.stored_qty),
        row.location.clone(),
        row.position.clone(),
        row.supplier.clone(),
        row.invoice_number.clone(),
        row.billed_status.clone(),
        row.repurchase.clone(),
        row.purchase_date.clone(),
        row.delivery_date.clone(),
        fmt_num(row.purchased_qty_raw),
        fmt_num(row.canonical_qty),
        fmt_num(row.negotiated_value),
    ]
}
