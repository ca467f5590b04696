// Brazilian number/currency handling shared by the engine pipeline and the
// report surface.

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Strict parser for Brazilian-formatted values like "R$ 1.234,56" or
    /// "123,45". A string without a comma is treated as an already-canonical
    /// decimal ("12.5" -> 12.5).
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let mut cleaned = s.replace("R$", "");
        cleaned.retain(|c| !c.is_whitespace());
        let normalized = if cleaned.contains(',') {
            cleaned
                .replace('.', "") // Remove thousand separators
                .replace(',', ".") // Replace decimal separator
        } else {
            cleaned
        };
        f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Lenient cell conversion used by the pipeline: blank or unparseable
    /// input degrades to 0.0, it never fails.
    pub fn to_float(raw: &str) -> f64 {
        parse_decimal(raw).unwrap_or(0.0)
    }

    /// Guards derived-field arithmetic: anything non-finite collapses to 0.0
    /// so blank propagation can never poison an aggregate.
    pub fn sanitize(value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Renders a float as Brazilian currency text: 1234.56 -> "R$ 1.234,56".
    /// Round-trips through `parse_decimal` for values the pipeline produces.
    pub fn format_brl(value: f64) -> String {
        let sanitized = sanitize(value);
        let negative = sanitized < 0.0;
        let fixed = format!("{:.2}", sanitized.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        let int_grouped: String = grouped.chars().rev().collect();

        let sign = if negative { "-" } else { "" };
        format!("R$ {}{},{}", sign, int_grouped, frac_part)
    }

}
