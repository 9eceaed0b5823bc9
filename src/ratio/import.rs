// src/ratio/import.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::model::Month;

/// Header cell carrying the theoretical consumed quantity in imported
/// tables, compared case-insensitively.
pub const CONSUMPTION_COLUMN: &str = "conso théorique qté";

/// A parsed import: the header row plus data rows, cells kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parses CSV text. Returns `None` when there is no data row under the
    /// header; malformed lines never error, they just yield fewer rows.
    pub fn parse(text: &str) -> Option<CsvTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut records = Vec::new();
        for record in reader.records() {
            let Ok(record) = record else { continue };
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            records.push(cells);
        }
        if records.len() < 2 {
            return None;
        }
        let header = records.remove(0);
        Some(CsvTable {
            header,
            rows: records,
        })
    }

    /// Index of `column` in the header row, trimmed and case-insensitive.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        let wanted = column.to_lowercase();
        self.header
            .iter()
            .position(|cell| cell.trim().to_lowercase() == wanted)
    }

    /// First row containing a cell equal to `needle` (trimmed,
    /// case-insensitive), wherever in the row that cell sits.
    pub fn find_row(&self, needle: &str) -> Option<&[String]> {
        let wanted = needle.to_lowercase();
        self.rows
            .iter()
            .find(|row| row.iter().any(|cell| cell.trim().to_lowercase() == wanted))
            .map(|row| row.as_slice())
    }
}

/// Looks up a product's imported consumption in one month's CSV text.
///
/// With a positive `import_divisor` the raw value is converted (e.g. kg into
/// pieces) and rounded **up**, so a conversion never under-reports. Without
/// one it is rounded to the nearest unit. `None` means the table has no
/// usable value for this product and the caller falls back to history.
pub fn imported_value_for_product(
    csv_text: &str,
    search_name: &str,
    import_divisor: Option<f64>,
) -> Option<f64> {
    let table = CsvTable::parse(csv_text)?;
    let column = table.column_index(CONSUMPTION_COLUMN)?;
    let row = table.find_row(search_name)?;
    let cell = row.get(column)?;
    if cell.is_empty() {
        return None;
    }
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let raw = parse_loose_number(&cleaned);
    match import_divisor {
        Some(divisor) if divisor > 0.0 => Some((raw / divisor).ceil()),
        _ => Some(raw.round()),
    }
}

/// Longest-valid-prefix float parse: leftovers like `12.3.4` after the
/// character filter still yield their leading number, anything else is 0.
fn parse_loose_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'-' if i == 0 => {}
            b'.' if !seen_dot => seen_dot = true,
            b'0'..=b'9' => seen_digit = true,
            _ => break,
        }
        end = i + 1;
    }
    if !seen_digit {
        return 0.0;
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Collects plausible product names from every imported table: any cell
/// longer than three characters that does not read as a number. Drives the
/// mapping suggestions for products whose `search_name` matches nothing.
pub fn extract_import_names(imports: &BTreeMap<Month, String>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for text in imports.values() {
        let Some(table) = CsvTable::parse(text) else {
            continue;
        };
        for row in &table.rows {
            for cell in row {
                let value = cell.trim();
                if value.chars().count() > 3 && value.parse::<f64>().is_err() {
                    names.insert(value.to_string());
                }
            }
        }
    }
    names
}
