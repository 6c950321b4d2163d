use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::FieldValue;

/// Column names consumed from the catalog header.
pub mod field {
    pub const ID: &str = "id";
    pub const NOMBRE: &str = "nombre";
    pub const CATEGORIA: &str = "categoria";
    pub const PRECIO_TOTAL: &str = "precio_total";
    pub const PRECIO_POR_UNIDAD: &str = "precio_por_unidad";
    pub const UNIDAD_MEDIDA: &str = "unidad_medida";
    pub const DISPONIBLE: &str = "disponible";
    pub const URL: &str = "url";
}

/// One parsed catalog row, keyed by header name.
///
/// Extra columns are retained; missing columns are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Typed view of a column; a missing column reads as `Empty`.
    pub fn value(&self, key: &str) -> FieldValue {
        self.get(key).map(FieldValue::infer).unwrap_or(FieldValue::Empty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).map(str::to_string)
    }
}

/// A validated catalog entry.
///
/// Only [`ProductRecord::from_raw`] produces these from parsed rows, so every
/// record in a working set carries a non-empty id, name and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub nombre: String,
    pub categoria: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_por_unidad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
    /// Availability flag exactly as stored in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponible: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProductRecord {
    /// Build a record with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        nombre: impl Into<String>,
        categoria: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            categoria: categoria.into(),
            precio_total: None,
            precio_por_unidad: None,
            unidad_medida: None,
            disponible: None,
            url: None,
        }
    }

    /// Validate a raw row. Returns `None` when `id`, `nombre` or
    /// `categoria` is missing or empty.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let id = raw.non_empty(field::ID)?;
        let nombre = raw.non_empty(field::NOMBRE)?;
        let categoria = raw.non_empty(field::CATEGORIA)?;

        Some(Self {
            id,
            nombre,
            categoria,
            precio_total: raw.value(field::PRECIO_TOTAL).as_number(),
            precio_por_unidad: raw.value(field::PRECIO_POR_UNIDAD).as_number(),
            unidad_medida: raw.non_empty(field::UNIDAD_MEDIDA),
            disponible: raw.non_empty(field::DISPONIBLE),
            url: raw.non_empty(field::URL),
        })
    }

    pub fn with_total_price(mut self, price: f64) -> Self {
        self.precio_total = Some(price);
        self
    }

    pub fn with_unit_price(mut self, price: f64, unit: impl Into<String>) -> Self {
        self.precio_por_unidad = Some(price);
        self.unidad_medida = Some(unit.into());
        self
    }

    pub fn with_availability(mut self, flag: impl Into<String>) -> Self {
        self.disponible = Some(flag.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
