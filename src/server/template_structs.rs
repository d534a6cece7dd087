//! Askama template structs for the agenda page.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::agenda::{self, Day};
use crate::config::Settings;
use crate::workbook::SheetData;

/// One schedule cell: session lines plus the room columns it spans.
pub struct SessionCell {
    pub lines: &'static [&'static str],
    pub colspan: usize,
}

/// One time-slot row of the schedule.
pub struct SlotRow {
    pub time: &'static str,
    pub cells: Vec<SessionCell>,
}

/// One conference day with its banner label.
pub struct DayView {
    pub label: &'static str,
    pub rows: Vec<SlotRow>,
}

impl DayView {
    fn from_day(day: &Day) -> Self {
        let rows = day
            .slots
            .iter()
            .map(|slot| SlotRow {
                time: slot.time,
                cells: slot
                    .sessions
                    .iter()
                    .map(|session| SessionCell {
                        lines: session.lines,
                        colspan: slot.colspan(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            label: day.label,
            rows,
        }
    }
}

/// One spreadsheet-derived section: a sheet rendered as a table, with
/// row 0 split off as the header.
pub struct SheetSection {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetSection {
    pub fn from_sheet(sheet: SheetData) -> Self {
        let mut rows = sheet.rows;
        let header = if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0)
        };

        Self {
            name: sheet.name,
            header,
            rows,
        }
    }
}

/// The agenda page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub rooms: &'static [&'static str],
    pub days: Vec<DayView>,
    pub sheets: Vec<SheetSection>,
    pub pdf_href: String,
    pub workbook_href: String,
}

impl<'a> IndexTemplate<'a> {
    /// Build the page view from settings plus whatever sheets decoded.
    /// An empty `sheets` renders the page without spreadsheet sections.
    pub fn build(settings: &'a Settings, sheets: Vec<SheetData>) -> Self {
        Self {
            title: &settings.title,
            subtitle: &settings.subtitle,
            rooms: agenda::ROOM_HEADERS,
            days: agenda::PROGRAM.iter().map(DayView::from_day).collect(),
            sheets: sheets.into_iter().map(SheetSection::from_sheet).collect(),
            pdf_href: settings.pdf_href(),
            workbook_href: settings.workbook_href(),
        }
    }
}
