use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gqltoast_lib::{ErrorEnvelope, MemoryNotifier, ToastConfig};
use serde_json::Value;

use crate::output::{print_json, print_toasts_table, print_toasts_text, OutputFormat};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Read envelopes from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Input is newline-delimited JSON, one envelope per line
    #[arg(long)]
    pub lines: bool,
}

pub fn run(args: &ClassifyArgs, config: &ToastConfig, format: &OutputFormat) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let envelopes = parse_envelopes(&raw, args.lines)?;
    tracing::debug!("classifying {} envelope(s)", envelopes.len());

    let notifier = MemoryNotifier::new();
    let reporter = config.build_reporter(&notifier)?;
    let reports: Vec<_> = envelopes
        .iter()
        .map(|envelope| reporter.report_detailed(envelope))
        .collect();

    match format {
        OutputFormat::Text => print_toasts_text(&reports),
        OutputFormat::Table => print_toasts_table(&reports),
        OutputFormat::Json => print_json(&reports),
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// A single envelope, a JSON array of envelopes, or (with `lines`) one
/// envelope per non-blank line.
fn parse_envelopes(raw: &str, lines: bool) -> Result<Vec<ErrorEnvelope>> {
    if lines {
        return raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                ErrorEnvelope::from_json(line).with_context(|| format!("line {}", i + 1))
            })
            .collect();
    }

    let value: Value = serde_json::from_str(raw).context("input is not valid JSON")?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                ErrorEnvelope::from_value(item).with_context(|| format!("envelope {}", i))
            })
            .collect(),
        other => Ok(vec![ErrorEnvelope::from_value(other)?]),
    }
}
