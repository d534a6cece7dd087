//! Spreadsheet decoding.
//!
//! The detailed programme lives in an xlsx workbook. calamine decodes it and
//! every cell is flattened to its display string. Row 0 of each sheet, when
//! present, is treated as the header row; nothing else about the content is
//! validated.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, DataType, Reader};

/// One sheet of the workbook as display strings.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    /// Header row (row 0) when the sheet is non-empty.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|row| row.as_slice())
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

/// Decode every sheet of the workbook at `path`, in file order.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<SheetData>> {
    let mut workbook = open_workbook_auto(&path).context("Unable to parse spreadsheet")?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Unable to read worksheet: {}", name))?;

        let rows = range?
            .rows()
            .map(|row| row.iter().map(cell_display).collect())
            .collect();

        sheets.push(SheetData {
            name: name.clone(),
            rows,
        });
    }

    Ok(sheets)
}

/// Display string for a single cell.
fn cell_display(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::String(s) => s.to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Error(e) => format!("Error: {:?}", e),
        DataType::DateTime(dt) => format!("{}", dt),
        DataType::Duration(d) => format!("{}", d),
        DataType::DateTimeIso(s) => s.to_string(),
        DataType::DurationIso(s) => s.to_string(),
    }
}
