use catview_types::RawRecord;
use csv::ReaderBuilder;

use crate::{Error, Result};

const UTF8_BOM: char = '\u{feff}';

/// Parse header-delimited catalog text into raw rows, in source order.
///
/// The first row names the fields. Blank lines are skipped. The first
/// malformed row aborts the whole parse, and so does a quoted field that
/// is still open at end of input.
pub fn parse_catalog(text: &str) -> Result<Vec<RawRecord>> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    check_quotes_closed(text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        rows.push(RawRecord::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}

/// The csv reader reads an open quote through to EOF as one field, so the
/// rows after it would vanish silently. Only a quote at the start of a field
/// opens one; `""` inside it is an escaped quote.
fn check_quotes_closed(text: &str) -> Result<()> {
    let mut line = 1u64;
    let mut opened_on = None;
    let mut at_field_start = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if opened_on.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => opened_on = None,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if at_field_start => opened_on = Some(line),
            ',' | '\r' => {
                at_field_start = true;
                continue;
            }
            '\n' => {
                line += 1;
                at_field_start = true;
                continue;
            }
            _ => {}
        }
        at_field_start = false;
    }

    match opened_on {
        Some(line) => Err(Error::UnterminatedQuote { line }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_drives_keys() {
        let rows = parse_catalog("id,nombre,categoria\n1,Leche,Lácteos\n2,Pan,Panadería\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("nombre"), Some("Leche"));
        assert_eq!(rows[1].get("categoria"), Some("Panadería"));
        assert_eq!(rows[1].get("url"), None);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let rows = parse_catalog("\u{feff}id,nombre\n7,Huevos\n").unwrap();
        assert_eq!(rows[0].get("id"), Some("7"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let rows = parse_catalog("id,nombre\n1,\"Tomate, triturado\"\n").unwrap();
        assert_eq!(rows[0].get("nombre"), Some("Tomate, triturado"));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let rows = parse_catalog("id,nombre\n1,Pan\n\n2,Sal\n\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        assert!(parse_catalog("id,nombre,categoria\n").unwrap().is_empty());
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_aborts_on_unterminated_quote() {
        let err = parse_catalog(
            "id,nombre,categoria\n1,Leche,\"Lácteos\n2,Pan,Panadería\n3,Sal,Condimentos\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnterminatedQuote { line: 2 }));
        assert_eq!(
            err.to_string(),
            "quoted field starting on line 2 is never closed"
        );
    }

    #[test]
    fn test_parse_accepts_escaped_and_multiline_quotes() {
        let rows = parse_catalog(
            "id,nombre,categoria\n1,\"Pizza \"\"4 quesos\"\"\",\"Congelados\nvarios\"\n2,Tablet 10\",Electrónica\n",
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("nombre"), Some("Pizza \"4 quesos\""));
        assert_eq!(rows[0].get("categoria"), Some("Congelados\nvarios"));
        assert_eq!(rows[1].get("nombre"), Some("Tablet 10\""));
    }

    #[test]
    fn test_parse_aborts_on_short_row() {
        let err = parse_catalog("id,nombre,categoria\n1,Leche,Lácteos\n2,Pan\n").unwrap_err();
        assert!(
            err.to_string().contains("found record with 2 fields"),
            "unexpected message: {err}"
        );
    }
}
