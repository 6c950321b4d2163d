use serde::{Deserialize, Serialize};

/// Fixed display strings shown by every presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub no_results: String,
    pub no_name: String,
    pub no_category: String,
    pub view_externally: String,
    pub load_error: String,
    pub all_categories: String,
    pub not_available: String,
    pub currency: String,
    pub available_glyph: String,
    pub unavailable_glyph: String,
    pub column_name: String,
    pub column_category: String,
    pub column_price: String,
    pub column_unit_price: String,
    pub column_available: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            no_results: "No se encontraron productos".to_string(),
            no_name: "Sin nombre".to_string(),
            no_category: "Sin categoría".to_string(),
            view_externally: "Ver producto".to_string(),
            load_error: "Error al cargar".to_string(),
            all_categories: "Todas las categorías".to_string(),
            not_available: "N/A".to_string(),
            currency: "€".to_string(),
            available_glyph: "✅".to_string(),
            unavailable_glyph: "❌".to_string(),
            column_name: "Producto".to_string(),
            column_category: "Categoría".to_string(),
            column_price: "Precio".to_string(),
            column_unit_price: "Precio/unidad".to_string(),
            column_available: "Disponible".to_string(),
        }
    }
}

impl Labels {
    pub fn column_headers(&self) -> [&str; crate::COLUMN_COUNT] {
        [
            &self.column_name,
            &self.column_category,
            &self.column_price,
            &self.column_unit_price,
            &self.column_available,
        ]
    }
}

/// Substrings and literals matched against resource content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Metadata line label for the build timestamp
    pub last_updated: String,
    /// Metadata line label for the product total
    pub product_count: String,
    /// Metadata line label for the category total
    pub category_count: String,
    /// Exact `disponible` value that counts as in stock
    pub available: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            last_updated: "Última actualización".to_string(),
            product_count: "Total de productos".to_string(),
            category_count: "Categorías".to_string(),
            available: "true".to_string(),
        }
    }
}
