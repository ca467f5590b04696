use serde::{Deserialize, Serialize};

/// Status written into a row that arrived blank but carries at least one
/// budget quote.
pub const STATUS_IN_BUDGETING: &str = "Em Orçamento";

/// Normalized (trimmed, lowercased) status values the aggregator compares
/// against.
pub const NORM_IN_BUDGETING: &str = "em orçamento";
pub const NORM_WAITING: &str = "aguardando";
pub const NORM_DELIVERED: &str = "entregue";

/// Statuses forming the denominator of the delivery / waiting percentages.
pub const DELIVERY_BASE_STATUSES: [&str; 3] = [NORM_IN_BUDGETING, NORM_WAITING, NORM_DELIVERED];

/// Display placeholder for rows with an empty category. Grouping-time only;
/// the canonical row keeps the empty string.
pub const NO_CATEGORY: &str = "Sem Categoria";

/// Display placeholder for rows with an empty billing status.
pub const NO_BILLING_INFO: &str = "Sem Info";

/// One procurement line item after schema normalization. Text columns are
/// trimmed, numeric columns are canonical floats, and the derived fields are
/// recomputed by the pipeline on every run (they are never a source of truth).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    // Identity / grouping
    pub category: String,
    pub code: String,
    pub material_name: String,
    pub measure_unit: String,

    // Workflow state
    pub status: String,
    /// trim + lowercase of `status`; never empty for a surviving row.
    pub status_norm: String,
    /// True iff any of the three quote slots is non-blank.
    pub is_budgeted: bool,

    // Raw budget quotes (kept as text, presence is what matters)
    pub quote_1: String,
    pub quote_2: String,
    pub quote_3: String,

    // Quantities and prices
    pub need_professional: f64,
    pub need_student: f64,
    pub stock_qty: f64,
    pub purchase_need: f64,
    pub post_purchase_balance: f64,
    pub lowest_price: f64,
    pub unit_cost: f64,
    pub stocked_cost: f64,
    pub forecast_total: f64,
    pub best_price: f64,
    pub reduction_lowest_price: f64,
    pub reduction_pct: f64,
    pub reduction_unit: f64,
    pub reduction_total: f64,
    pub negotiated_qty: f64,
    /// Raw "compras" column, second tier of the quantity chain.
    pub purchased_qty_raw: f64,
    /// Physical receipt quantity; > 0 counts as delivery evidence regardless
    /// of the declared status.
    pub stored_qty: f64,

    // Billing / logistics
    pub invoice_number: String,
    pub billed_status: String,
    pub supplier: String,
    pub location: String,
    pub position: String,
    pub repurchase: String,
    pub purchase_date: String,
    pub delivery_date: String,

    // Derived fields, owned by the pipeline
    pub canonical_qty: f64,
    pub forecast_value: f64,
    pub purchase_value: f64,
    pub negotiated_value: f64,
    pub need_value: f64,
    pub historical_value: f64,
    pub overstock_value: f64,
}

/// Delivery classification over the restricted base set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Delivered,
    WaitingDelivery,
}

impl Row {
    /// Whether the row belongs to the base set used as denominator for the
    /// delivery and waiting percentages.
    pub fn in_delivery_base(&self) -> bool {
        DELIVERY_BASE_STATUSES.contains(&self.status_norm.as_str())
    }

    /// Delivered when the status says so or when something was physically
    /// stored; waiting only for an explicit "aguardando". Rows outside the
    /// base set are not classified.
    pub fn delivery_status(&self) -> Option<DeliveryStatus> {
        if !self.in_delivery_base() {
            return None;
        }
        if self.status_norm == NORM_DELIVERED || self.stored_qty > 0.0 {
            Some(DeliveryStatus::Delivered)
        } else if self.status_norm == NORM_WAITING {
            Some(DeliveryStatus::WaitingDelivery)
        } else {
            None
        }
    }

    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            NO_CATEGORY
        } else {
            &self.category
        }
    }

    pub fn display_billed_status(&self) -> &str {
        if self.billed_status.is_empty() {
            NO_BILLING_INFO
        } else {
            &self.billed_status
        }
    }
}
