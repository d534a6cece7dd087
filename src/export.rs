//! JSON export of the decoded workbook.
//!
//! Mirrors the on-page convention: row 0 of each sheet provides the keys and
//! every later row becomes one record. Key and sheet order follow the file.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

use crate::workbook::SheetData;

/// Records of one sheet, keyed by its header row. Columns with a blank
/// header and rows with no values are skipped.
pub fn sheet_records(sheet: &SheetData) -> Vec<IndexMap<String, Value>> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for row in sheet.body() {
        let mut record = IndexMap::with_capacity(header.len());
        for (idx, key) in header.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let value = row.get(idx).cloned().unwrap_or_default();
            record.insert(key.clone(), Value::String(value));
        }

        let has_values = record
            .values()
            .any(|v| matches!(v, Value::String(s) if !s.is_empty()));
        if has_values {
            records.push(record);
        }
    }
    records
}

/// Pretty JSON for the whole workbook, keyed by sheet name in file order.
pub fn workbook_json(sheets: &[SheetData]) -> Result<String> {
    let mut out: IndexMap<String, Vec<IndexMap<String, Value>>> = IndexMap::new();
    for sheet in sheets {
        out.insert(sheet.name.clone(), sheet_records(sheet));
    }
    serde_json::to_string_pretty(&out).context("Failed to serialize workbook to JSON")
}
