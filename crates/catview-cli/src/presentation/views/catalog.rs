use std::fmt;

use catview_engine::TableBody;

use crate::presentation::formatters::format_columns;
use crate::presentation::view_models::{
    CategoryListViewModel, MetadataViewModel, ProductListViewModel,
};

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

impl fmt::Display for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            TableBody::Placeholder { message, .. } => {
                writeln!(f, "{}", message)?;
            }
            TableBody::Rows { rows } => {
                let mut table = Vec::with_capacity(rows.len() + 1);
                table.push(self.headers.clone());
                for row in rows {
                    table.push(vec![
                        row.name.clone(),
                        row.category.clone(),
                        row.total_price.clone(),
                        row.unit_price.clone(),
                        row.available_glyph.clone(),
                    ]);
                }

                let lines = format_columns(&table);
                let rule = lines.first().map(|l| l.chars().count()).unwrap_or(0);
                for (i, line) in lines.iter().enumerate() {
                    writeln!(f, "{}", line)?;
                    if i == 0 {
                        writeln!(f, "{}", "-".repeat(rule))?;
                    }
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Showing {} of {} products", self.shown, self.total)
    }
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.categories.is_empty() {
            return writeln!(f, "No categories.");
        }

        for entry in &self.categories {
            match entry.count {
                Some(count) => writeln!(f, "{:>6}  {}", count, entry.name)?,
                None => writeln!(f, "{}", entry.name)?,
            }
        }

        if self.categories.len() < self.total {
            writeln!(f, "({} of {} categories)", self.categories.len(), self.total)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Metadata View
// --------------------------------------------------------

impl fmt::Display for MetadataViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            write!(f, "{}: {}", field.label, field.value.as_deref().unwrap_or("-"))?;
            // Age annotates the timestamp line
            if i == 0
                && let Some(age) = &self.age
            {
                write!(f, " ({})", age)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Source: {}", self.source)
    }
}
