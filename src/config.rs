//! Site configuration.
//!
//! Settings come from an optional `agenda.toml` in the working directory
//! (or an explicit `--config` path), with defaults matching the published
//! conference assets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "agenda.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Page heading and browser-tab title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Strapline shown under the overview heading.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Directory holding the downloadable assets.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Spreadsheet file name inside `assets_dir`.
    #[serde(default = "default_workbook_file")]
    pub workbook_file: String,

    /// PDF file name inside `assets_dir`.
    #[serde(default = "default_pdf_file")]
    pub pdf_file: String,
}

fn default_title() -> String {
    "RACCC 2025 Conference Agenda".to_string()
}

fn default_subtitle() -> String {
    "6th Rwanda Anesthesia and Critical Care Conference".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_workbook_file() -> String {
    "RACCC 2025 Conference Agenda.xlsx".to_string()
}

fn default_pdf_file() -> String {
    "CONFERENCE AGENDA.pdf".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            assets_dir: default_assets_dir(),
            workbook_file: default_workbook_file(),
            pdf_file: default_pdf_file(),
        }
    }
}

impl Settings {
    /// Path of the spreadsheet asset.
    pub fn workbook_path(&self) -> PathBuf {
        self.assets_dir.join(&self.workbook_file)
    }

    /// Path of the PDF asset.
    pub fn pdf_path(&self) -> PathBuf {
        self.assets_dir.join(&self.pdf_file)
    }

    /// Download link target for the spreadsheet. The published file names
    /// contain spaces, so hrefs are percent-encoded.
    pub fn workbook_href(&self) -> String {
        format!("/files/{}", urlencoding::encode(&self.workbook_file))
    }

    /// Download link target for the PDF.
    pub fn pdf_href(&self) -> String {
        format!("/files/{}", urlencoding::encode(&self.pdf_file))
    }
}

/// Load settings from an explicit path, `agenda.toml` when present, or
/// defaults. An explicit path that is missing or malformed is an error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(CONFIG_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title, "RACCC 2025 Conference Agenda");
        assert_eq!(
            settings.workbook_path(),
            PathBuf::from("assets/RACCC 2025 Conference Agenda.xlsx")
        );
        assert_eq!(settings.pdf_path(), PathBuf::from("assets/CONFERENCE AGENDA.pdf"));
    }

    #[test]
    fn test_hrefs_are_percent_encoded() {
        let settings = Settings::default();
        assert_eq!(
            settings.workbook_href(),
            "/files/RACCC%202025%20Conference%20Agenda.xlsx"
        );
        assert_eq!(settings.pdf_href(), "/files/CONFERENCE%20AGENDA.pdf");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            title = "Test Agenda"
            assets_dir = "public"
            "#,
        )
        .unwrap();
        assert_eq!(settings.title, "Test Agenda");
        assert_eq!(settings.assets_dir, PathBuf::from("public"));
        assert_eq!(settings.pdf_file, "CONFERENCE AGENDA.pdf");
    }

    #[test]
    fn test_load_settings_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.toml");
        std::fs::write(&path, "subtitle = \"Regional Meeting\"\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.subtitle, "Regional Meeting");
    }

    #[test]
    fn test_load_settings_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(load_settings(Some(&path)).is_err());
    }
}
