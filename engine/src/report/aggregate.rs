// Stage 5: grouped summary views and scalar totals over a (filtered) row
// set. Groupings use BTreeMap so view order is deterministic. Every
// percentage guards its denominator and yields 0 instead of dividing by
// zero.

use shared::models::{DeliveryStatus, Row, NORM_WAITING};
use std::collections::{BTreeMap, BTreeSet};

/// Safe percentage: 0 when the denominator is not strictly positive.
pub fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub item_count: usize,
    pub purchase_total: f64,
    pub negotiated_total: f64,
    pub forecast_total: f64,
    pub overstock: f64,
    pub overstock_pct: f64,
    /// forecast minus negotiated, the "Economia" ranking column.
    pub savings: f64,
    pub invoice_count: usize,
}

/// Per-category sums feeding the cost-distribution and overstock views plus
/// the category ranking.
pub fn by_category(rows: &[Row]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.display_category()).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(category, members)| {
            let purchase_total: f64 = members.iter().map(|r| r.purchase_value).sum();
            let negotiated_total: f64 = members.iter().map(|r| r.negotiated_value).sum();
            let forecast_total: f64 = members.iter().map(|r| r.forecast_value).sum();
            let overstock = negotiated_total - purchase_total;
            let invoices: BTreeSet<&str> = members
                .iter()
                .filter(|r| !r.invoice_number.is_empty())
                .map(|r| r.invoice_number.as_str())
                .collect();
            CategorySummary {
                category: category.to_string(),
                item_count: members.len(),
                purchase_total,
                negotiated_total,
                forecast_total,
                overstock,
                overstock_pct: pct(overstock, purchase_total),
                savings: forecast_total - negotiated_total,
                invoice_count: invoices.len(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BilledSummary {
    pub billed_status: String,
    pub item_count: usize,
    pub invoice_count: usize,
    pub purchase_total: f64,
}

/// Billing-status breakdown: item count, distinct invoices, purchase sum.
pub fn by_billed_status(rows: &[Row]) -> Vec<BilledSummary> {
    let mut groups: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.display_billed_status())
            .or_default()
            .push(row);
    }
    groups
        .into_iter()
        .map(|(billed, members)| {
            let invoices: BTreeSet<&str> = members
                .iter()
                .filter(|r| !r.invoice_number.is_empty())
                .map(|r| r.invoice_number.as_str())
                .collect();
            BilledSummary {
                billed_status: billed.to_string(),
                item_count: members.len(),
                invoice_count: invoices.len(),
                purchase_total: members.iter().map(|r| r.purchase_value).sum(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    pub status: String,
    pub item_count: usize,
    pub forecast_total: f64,
    pub purchase_total: f64,
    pub negotiated_total: f64,
}

/// Workflow-state breakdown keyed on the display status.
pub fn by_status(rows: &[Row]) -> Vec<StatusSummary> {
    let mut groups: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.status.as_str()).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(status, members)| StatusSummary {
            status: status.to_string(),
            item_count: members.len(),
            forecast_total: members.iter().map(|r| r.forecast_value).sum(),
            purchase_total: members.iter().map(|r| r.purchase_value).sum(),
            negotiated_total: members.iter().map(|r| r.negotiated_value).sum(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSummary {
    pub measure_unit: String,
    pub need_professional_total: f64,
    pub need_student_total: f64,
}

/// Need sums broken down by measure unit. Units are not commensurable, so
/// this view is the only place the need columns are summed.
pub fn by_measure_unit(rows: &[Row]) -> Vec<MeasureSummary> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in rows {
        let unit = if row.measure_unit.is_empty() {
            "SEM MEDIDA"
        } else {
            row.measure_unit.as_str()
        };
        let entry = groups.entry(unit).or_default();
        entry.0 += row.need_professional;
        entry.1 += row.need_student;
    }
    groups
        .into_iter()
        .map(|(unit, (prof, student))| MeasureSummary {
            measure_unit: unit.to_string(),
            need_professional_total: prof,
            need_student_total: student,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub category: String,
    pub invoice_number: String,
    pub item_count: usize,
    pub purchase_total: f64,
    pub billed_status: String,
}

/// Invoice analysis per (category, invoice); blank invoice numbers carry no
/// billing document and are excluded.
pub fn by_invoice(rows: &[Row]) -> Vec<InvoiceSummary> {
    let mut groups: BTreeMap<(&str, &str), Vec<&Row>> = BTreeMap::new();
    for row in rows.iter().filter(|r| !r.invoice_number.is_empty()) {
        groups
            .entry((row.display_category(), row.invoice_number.as_str()))
            .or_default()
            .push(row);
    }
    groups
        .into_iter()
        .map(|((category, invoice), members)| InvoiceSummary {
            category: category.to_string(),
            invoice_number: invoice.to_string(),
            item_count: members.len(),
            purchase_total: members.iter().map(|r| r.purchase_value).sum(),
            billed_status: members[0].billed_status.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitingStats {
    pub item_count: usize,
    pub purchase_total: f64,
    /// Share of waiting items inside the restricted base set.
    pub pct: f64,
}

pub fn waiting_stats(rows: &[Row]) -> WaitingStats {
    let waiting: Vec<&Row> = rows
        .iter()
        .filter(|r| r.status_norm == NORM_WAITING)
        .collect();
    let base_count = rows.iter().filter(|r| r.in_delivery_base()).count();
    WaitingStats {
        item_count: waiting.len(),
        purchase_total: waiting.iter().map(|r| r.purchase_value).sum(),
        pct: pct(waiting.len() as f64, base_count as f64),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryStats {
    pub base_count: usize,
    pub delivered_count: usize,
    pub waiting_count: usize,
    /// Share of delivered items inside the restricted base set.
    pub pct: f64,
}

pub fn delivery_stats(rows: &[Row]) -> DeliveryStats {
    let base: Vec<&Row> = rows.iter().filter(|r| r.in_delivery_base()).collect();
    let delivered_count = base
        .iter()
        .filter(|r| r.delivery_status() == Some(DeliveryStatus::Delivered))
        .count();
    let waiting_count = base
        .iter()
        .filter(|r| r.delivery_status() == Some(DeliveryStatus::WaitingDelivery))
        .count();
    DeliveryStats {
        base_count: base.len(),
        delivered_count,
        waiting_count,
        pct: pct(delivered_count as f64, base.len() as f64),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub item_count: usize,
    pub purchase_total: f64,
    pub negotiated_total: f64,
    pub forecast_total: f64,
    pub need_total: f64,
    pub historical_total: f64,
    /// forecast minus purchase.
    pub savings: f64,
    pub overstock_total: f64,
    pub overstock_pct: f64,
    pub need_professional_total: f64,
    pub need_student_total: f64,
    pub items_with_professional_need: usize,
    pub items_with_student_need: usize,
}

/// Executive-summary scalars over the whole (filtered) row set.
pub fn totals(rows: &[Row]) -> Totals {
    let purchase_total: f64 = rows.iter().map(|r| r.purchase_value).sum();
    let negotiated_total: f64 = rows.iter().map(|r| r.negotiated_value).sum();
    let forecast_total: f64 = rows.iter().map(|r| r.forecast_value).sum();
    let overstock_total: f64 = rows.iter().map(|r| r.overstock_value).sum();
    Totals {
        item_count: rows.len(),
        purchase_total,
        negotiated_total,
        forecast_total,
        need_total: rows.iter().map(|r| r.need_value).sum(),
        historical_total: rows.iter().map(|r| r.historical_value).sum(),
        savings: forecast_total - purchase_total,
        overstock_total,
        overstock_pct: pct(overstock_total, purchase_total),
        need_professional_total: rows.iter().map(|r| r.need_professional).sum(),
        need_student_total: rows.iter().map(|r| r.need_student).sum(),
        items_with_professional_need: rows.iter().filter(|r| r.need_professional > 0.0).count(),
        items_with_student_need: rows.iter().filter(|r| r.need_student > 0.0).count(),
    }
}
