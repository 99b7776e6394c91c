//! WWN Annotation Tool
//!
//! Reads text from files or stdin, appends decoded storage array model,
//! serial and port to every line carrying a WWN, and writes the result to
//! stdout.

mod settings;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wwn_decode::{Annotator, ModelDatabase};
use wwn_oui::OuiDatabase;

use settings::Settings;

/// Annotate storage WWNs in text with array model, serial and port.
#[derive(Parser, Debug)]
#[command(name = "wwnanno", version, about)]
struct Cli {
    /// Input files (stdin when none are given)
    files: Vec<PathBuf>,

    /// Only output lines that decoded to something
    #[arg(short = 'x', long)]
    extract_only: bool,

    /// Text placed before each appended descriptor
    #[arg(short, long)]
    tag: Option<String>,

    /// IEEE MA-L registry CSV used to name non-storage vendors
    #[arg(long, value_name = "CSV")]
    oui_registry: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output one JSON object per decoded line
    #[arg(long)]
    json: bool,

    /// List the known storage model codes and exit
    #[arg(long)]
    list_models: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wwnanno=info,wwn_decode=info,wwn_oui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_models {
        return list_models();
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    }
    .with_overrides(cli.extract_only, cli.tag, cli.oui_registry);
    tracing::debug!(?settings, "Settings resolved");

    let vendors = vendor_database(settings.oui_registry.as_deref())?;
    let lines = read_lines(&cli.files)?;

    let notify = |message: &str| eprintln!("{message}");
    let annotator = Annotator::new(&settings.annotate, &vendors, &notify);
    let annotation = annotator
        .annotate_lines(lines)
        .context("Vendor lookup failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        for line in annotation.lines.iter().filter(|l| !l.descriptors.is_empty()) {
            serde_json::to_writer(&mut out, line)?;
            writeln!(out)?;
        }
    } else if !annotation.lines.is_empty() {
        writeln!(out, "{annotation}")?;
    }
    Ok(())
}

/// Built-in SAN vendors, overlaid with a registry file when one is configured
fn vendor_database(registry: Option<&Path>) -> Result<OuiDatabase> {
    let mut db = OuiDatabase::builtin();
    if let Some(path) = registry {
        let file = OuiDatabase::from_path(path)?;
        tracing::info!(path = %path.display(), entries = file.len(), "Loaded OUI registry");
        db.merge(file);
    }
    Ok(db)
}

/// Read all input lines, trimmed
fn read_lines(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if files.is_empty() {
        collect_lines(io::stdin().lock(), &mut lines).context("Failed to read stdin")?;
    }
    for path in files {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        collect_lines(BufReader::new(file), &mut lines)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(lines)
}

fn collect_lines(reader: impl BufRead, lines: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        lines.push(line?.trim().to_string());
    }
    Ok(())
}

fn list_models() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "CODE  MODEL             FAMILY     SERIAL PREFIX")?;
    for model in ModelDatabase::all() {
        let family = serde_json::to_value(model.family)?;
        let prefix = match (model.serial_hex_prefix, model.serial_decimal_prefix) {
            (Some(hex), Some(dec)) => format!("hex {hex:X}, dec {dec}"),
            (Some(hex), None) => format!("hex {hex:X}"),
            (None, Some(dec)) => format!("dec {dec}"),
            (None, None) => String::new(),
        };
        writeln!(
            out,
            "{:<4}  {:<16}  {:<9}  {}",
            model.code_hex(),
            model.name,
            family.as_str().unwrap_or_default(),
            prefix
        )?;
    }
    Ok(())
}
