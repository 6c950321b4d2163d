use catview_types::ProductRecord;
use serde::Serialize;

use crate::{Labels, Markers};

/// Name, category, price, unit price, availability.
pub const COLUMN_COUNT: usize = 5;

/// Rendered body of the product table. Always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    /// Single row spanning every column, shown when nothing matches
    Placeholder { message: String, colspan: usize },
    Rows { rows: Vec<RowView> },
}

impl TableBody {
    /// Number of visual rows, counting the placeholder as one.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows { rows } => rows.len(),
        }
    }

    pub fn rows(&self) -> &[RowView] {
        match self {
            TableBody::Placeholder { .. } => &[],
            TableBody::Rows { rows } => rows,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableBody::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkView>,
    pub category: String,
    pub total_price: String,
    pub unit_price: String,
    pub available: Availability,
    pub available_glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Literal comparison: only a value identical to `marker` is available.
    pub fn from_flag(flag: Option<&str>, marker: &str) -> Self {
        match flag {
            Some(value) if value == marker => Availability::Available,
            _ => Availability::Unavailable,
        }
    }

    pub fn glyph<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Availability::Available => &labels.available_glyph,
            Availability::Unavailable => &labels.unavailable_glyph,
        }
    }
}

/// Round to cents with ties away from zero; `{:.2}` alone rounds exact
/// binary ties such as 0.125 to even. A zero input always prints unsigned.
fn round_cents(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Two decimals plus currency suffix, or the N/A label.
pub fn format_price(price: Option<f64>, labels: &Labels) -> String {
    match price {
        Some(value) => format!("{:.2} {}", round_cents(value), labels.currency),
        None => labels.not_available.clone(),
    }
}

/// Two decimals plus the unit label, or the N/A label when the price is absent.
pub fn format_unit_price(price: Option<f64>, unit: Option<&str>, labels: &Labels) -> String {
    match price {
        Some(value) => format!("{:.2} {}", round_cents(value), unit.unwrap_or(""))
            .trim_end()
            .to_string(),
        None => labels.not_available.clone(),
    }
}

/// Produce the table body for `records`, in input order.
pub fn render_table(records: &[ProductRecord], labels: &Labels, markers: &Markers) -> TableBody {
    if records.is_empty() {
        return TableBody::Placeholder {
            message: labels.no_results.clone(),
            colspan: COLUMN_COUNT,
        };
    }

    let rows = records
        .iter()
        .map(|record| render_row(record, labels, markers))
        .collect();
    TableBody::Rows { rows }
}

fn render_row(record: &ProductRecord, labels: &Labels, markers: &Markers) -> RowView {
    let available = Availability::from_flag(record.disponible.as_deref(), &markers.available);

    RowView {
        id: record.id.clone(),
        name: non_empty_or(&record.nombre, &labels.no_name),
        link: record
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|href| LinkView {
                label: labels.view_externally.clone(),
                href: href.to_string(),
            }),
        category: non_empty_or(&record.categoria, &labels.no_category),
        total_price: format_price(record.precio_total, labels),
        unit_price: format_unit_price(
            record.precio_por_unidad,
            record.unidad_medida.as_deref(),
            labels,
        ),
        available,
        available_glyph: available.glyph(labels).to_string(),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
