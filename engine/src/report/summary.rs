// Flat metric-name -> value summary consumed by the presentation layer and
// serialized as a two-column report.

use shared::models::Row;
use shared::utils::brazilian_format::format_brl;

use crate::report::aggregate;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Ordered (metric label, value) pairs. Counts and percentages ride in
    /// the same f64 channel as the monetary totals.
    pub metrics: Vec<(String, f64)>,
}

impl SummaryReport {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }
}

/// Labels whose value should be rendered as Brazilian currency on screen.
fn is_currency(label: &str) -> bool {
    label.contains("(R$)")
}

/// Human rendering for one metric value.
pub fn display_value(label: &str, value: f64) -> String {
    if is_currency(label) {
        format_brl(value)
    } else if label.contains('%') {
        format!("{:.1}%", value)
    } else {
        format!("{}", value)
    }
}

/// Builds the executive summary over the current (filtered) row set.
pub fn build_summary(rows: &[Row]) -> SummaryReport {
    let totals = aggregate::totals(rows);
    let waiting = aggregate::waiting_stats(rows);
    let delivery = aggregate::delivery_stats(rows);

    let metrics = vec![
        ("Total Itens".to_string(), totals.item_count as f64),
        ("Total Compra (R$)".to_string(), totals.purchase_total),
        ("Total Negociado (R$)".to_string(), totals.negotiated_total),
        ("Total Previsto (R$)".to_string(), totals.forecast_total),
        ("Total Necessidade (R$)".to_string(), totals.need_total),
        ("Valor Histórico (R$)".to_string(), totals.historical_total),
        ("Economia Total (R$)".to_string(), totals.savings),
        ("Total Overstock (R$)".to_string(), totals.overstock_total),
        ("Overstock (%)".to_string(), totals.overstock_pct),
        (
            "Necessidade Prof. (unidades)".to_string(),
            totals.need_professional_total,
        ),
        (
            "Necessidade Aluno (unidades)".to_string(),
            totals.need_student_total,
        ),
        (
            "Itens Aguardando (count)".to_string(),
            waiting.item_count as f64,
        ),
        ("Valor Aguardando (R$)".to_string(), waiting.purchase_total),
        ("% Aguardando (base)".to_string(), waiting.pct),
        ("Itens Base Entrega".to_string(), delivery.base_count as f64),
        (
            "Itens Entregues".to_string(),
            delivery.delivered_count as f64,
        ),
        ("% Entregue (base)".to_string(), delivery.pct),
    ];

    SummaryReport { metrics }
}
