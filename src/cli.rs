//! CLI commands for the agenda site.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;
use clap::{Parser, Subcommand};
use console::style;

use crate::config::{load_settings, Settings};
use crate::export;
use crate::server::IndexTemplate;
use crate::workbook;

#[derive(Parser)]
#[command(name = "raccc-agenda")]
#[command(about = "Conference agenda site for the Rwanda Anesthesia and Critical Care Conference")]
#[command(version)]
pub struct Cli {
    /// Config file (agenda.toml in the working directory by default)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the agenda web server
    Serve {
        /// Bind address (port, host:port, or host)
        #[arg(short, long, default_value = "127.0.0.1:8080", env = "AGENDA_BIND")]
        bind: String,
    },

    /// Render the agenda page into a static directory
    Render {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Check the configured assets and summarize the workbook
    Check,

    /// Export workbook sheets as JSON records
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => cmd_serve(&settings, &bind).await,
        Commands::Render { output } => cmd_render(&settings, &output),
        Commands::Check => cmd_check(&settings),
        Commands::Export { output } => cmd_export(&settings, output.as_deref()),
    }
}

/// Start the web server.
async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    if !settings.workbook_path().exists() {
        println!(
            "  {} Spreadsheet not found at {} (the page will render without sheet tables)",
            style("!").yellow(),
            settings.workbook_path().display()
        );
    }

    println!(
        "{} Starting agenda server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Render the page and its assets into a static directory.
fn cmd_render(settings: &Settings, output: &Path) -> anyhow::Result<()> {
    let sheets = match workbook::load_workbook(settings.workbook_path()) {
        Ok(sheets) => sheets,
        Err(e) => {
            println!(
                "  {} Rendering without sheet tables: {:#}",
                style("!").yellow(),
                e
            );
            Vec::new()
        }
    };

    let page = IndexTemplate::build(settings, sheets)
        .render()
        .context("Failed to render agenda page")?;

    let static_dir = output.join("static");
    let files_dir = output.join("files");
    std::fs::create_dir_all(&static_dir)
        .with_context(|| format!("Failed to create {}", static_dir.display()))?;
    std::fs::create_dir_all(&files_dir)
        .with_context(|| format!("Failed to create {}", files_dir.display()))?;

    std::fs::write(output.join("index.html"), page)
        .with_context(|| format!("Failed to write {}", output.join("index.html").display()))?;
    println!("{} index.html", style("✓").green());

    std::fs::write(static_dir.join("style.css"), crate::server::STYLESHEET)
        .with_context(|| format!("Failed to write {}", static_dir.join("style.css").display()))?;
    println!("{} static/style.css", style("✓").green());

    let downloads = [
        (settings.workbook_path(), &settings.workbook_file),
        (settings.pdf_path(), &settings.pdf_file),
    ];
    for (source, name) in downloads {
        if source.exists() {
            std::fs::copy(&source, files_dir.join(name))
                .with_context(|| format!("Failed to copy {}", source.display()))?;
            println!("{} files/{}", style("✓").green(), name);
        } else {
            println!("{} files/{} (source missing, skipped)", style("!").yellow(), name);
        }
    }

    println!(
        "{} Rendered static site into {}",
        style("→").cyan(),
        output.display()
    );
    Ok(())
}

/// Check assets and print a workbook summary.
fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let mut problems = 0;

    let pdf = settings.pdf_path();
    if pdf.exists() {
        println!("{} PDF asset: {}", style("✓").green(), pdf.display());
    } else {
        println!("{} PDF asset missing: {}", style("✗").red(), pdf.display());
        problems += 1;
    }

    let workbook_path = settings.workbook_path();
    match workbook::load_workbook(&workbook_path) {
        Ok(sheets) => {
            println!(
                "{} Spreadsheet: {} ({} sheets)",
                style("✓").green(),
                workbook_path.display(),
                sheets.len()
            );
            for sheet in &sheets {
                let columns = sheet.header().map(|h| h.len()).unwrap_or(0);
                println!(
                    "  {} {} ({} rows, {} columns)",
                    style("·").dim(),
                    sheet.name,
                    sheet.rows.len(),
                    columns
                );
            }
        }
        Err(e) => {
            println!(
                "{} Spreadsheet failed to decode: {:#}",
                style("✗").red(),
                e
            );
            problems += 1;
        }
    }

    if problems > 0 {
        anyhow::bail!("{} asset problem(s) found", problems);
    }
    Ok(())
}

/// Export the workbook as JSON.
fn cmd_export(settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let sheets = workbook::load_workbook(settings.workbook_path())?;
    let json = export::workbook_json(&sheets)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", style("✓").green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Parse a bind address that can be a bare port, host:port, or bare host.
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 8080))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    fn fixture_settings(dir: &Path) -> Settings {
        let settings = Settings {
            assets_dir: dir.to_path_buf(),
            workbook_file: "agenda.xlsx".to_string(),
            pdf_file: "agenda.pdf".to_string(),
            ..Settings::default()
        };

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Day 1").unwrap();
        sheet.write_string(0, 0, "Time").unwrap();
        sheet.write_string(1, 0, "09:00").unwrap();
        workbook.save(settings.workbook_path()).unwrap();

        std::fs::write(settings.pdf_path(), b"%PDF-1.4 fixture").unwrap();
        settings
    }

    #[test]
    fn test_parse_bind_address_port_only() {
        let (host, port) = parse_bind_address("3000").unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_bind_address_host_and_port() {
        let (host, port) = parse_bind_address("0.0.0.0:9090").unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_bind_address_bare_host() {
        let (host, port) = parse_bind_address("localhost").unwrap();
        assert_eq!(host, "localhost");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_render_writes_static_site() {
        let assets = tempdir().unwrap();
        let out = tempdir().unwrap();
        let settings = fixture_settings(assets.path());

        cmd_render(&settings, out.path()).unwrap();

        let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("<!DOCTYPE html>"));
        assert!(index.contains("Day 1"));
        assert!(out.path().join("static/style.css").exists());
        assert!(out.path().join("files/agenda.xlsx").exists());
        assert!(out.path().join("files/agenda.pdf").exists());
    }

    #[test]
    fn test_render_without_workbook_still_writes_page() {
        let assets = tempdir().unwrap();
        let out = tempdir().unwrap();
        let settings = Settings {
            assets_dir: assets.path().to_path_buf(),
            ..Settings::default()
        };

        cmd_render(&settings, out.path()).unwrap();

        let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("Registration"));
        assert!(!index.contains("class=\"sheet-section\""));
    }

    #[test]
    fn test_export_writes_json() {
        let assets = tempdir().unwrap();
        let settings = fixture_settings(assets.path());
        let out = assets.path().join("agenda.json");

        cmd_export(&settings, Some(&out)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["Day 1"][0]["Time"], "09:00");
    }

    #[test]
    fn test_check_reports_missing_assets() {
        let assets = tempdir().unwrap();
        let settings = Settings {
            assets_dir: assets.path().to_path_buf(),
            ..Settings::default()
        };
        assert!(cmd_check(&settings).is_err());
    }

    #[test]
    fn test_check_passes_on_fixture() {
        let assets = tempdir().unwrap();
        let settings = fixture_settings(assets.path());
        assert!(cmd_check(&settings).is_ok());
    }
}
