//! Assertions over the `--format json` output of catview commands.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a `list` result shows the expected number of rows.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let shown = json["content"]["shown"]
        .as_u64()
        .context("Expected 'content.shown' in JSON")?;

    if shown as usize != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, shown);
    }

    let kind = json["content"]["body"]["kind"]
        .as_str()
        .context("Expected 'content.body.kind' in JSON")?;
    let expected_kind = if expected == 0 { "placeholder" } else { "rows" };
    if kind != expected_kind {
        anyhow::bail!("Expected body kind '{}', got '{}'", expected_kind, kind);
    }

    Ok(())
}

/// Product names of a `list` result, in display order.
pub fn row_names(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["body"]["rows"]
        .as_array()
        .context("Expected 'content.body.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["name"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Row {} missing name", i))
        })
        .collect()
}

/// Assert that a `categories` result lists exactly these names, in order.
pub fn assert_categories(json: &Value, expected: &[&str]) -> Result<()> {
    let categories = json["content"]["categories"]
        .as_array()
        .context("Expected 'content.categories' array in JSON")?;

    let names: Vec<&str> = categories
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();

    if names != expected {
        anyhow::bail!("Expected categories {:?}, got {:?}", expected, names);
    }

    Ok(())
}
