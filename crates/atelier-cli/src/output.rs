use std::io::{self, Write};

use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::metadata::Report;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => write_ndjson(out, report)?,
        OutputFormat::Table => write_table(out, report)?,
    }

    Ok(())
}

/// Metadata line first, then one line per record (or a single `data` line
/// for non-list payloads).
fn write_ndjson<W: Write>(out: &mut W, report: &Report) -> Result<(), CliError> {
    writeln!(
        out,
        "{}",
        serde_json::to_string(&json!({ "meta": report.meta }))?
    )?;

    match &report.data {
        Value::Array(records) => {
            for record in records {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
        }
        other => writeln!(
            out,
            "{}",
            serde_json::to_string(&json!({ "data": other }))?
        )?,
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, report: &Report) -> Result<(), CliError> {
    let meta = &report.meta;
    writeln!(out, "operation   : {}", meta.operation)?;
    writeln!(out, "generated_at: {}", meta.generated_at)?;
    writeln!(out, "latency_ms  : {}", meta.latency_ms)?;
    if let Some(total) = meta.total {
        writeln!(out, "total       : {total}")?;
    }
    if let Some(sectors) = &meta.sectors {
        writeln!(out, "sectors     : {}", sectors.join(", "))?;
    }
    if !meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }
    writeln!(out)?;

    match &report.data {
        Value::Array(rows) => write_rows(out, rows),
        Value::Object(fields) => write_fields(out, fields),
        other => {
            writeln!(out, "{other}")?;
            Ok(())
        }
    }
}

fn write_rows<W: Write>(out: &mut W, rows: &[Value]) -> Result<(), CliError> {
    let columns: Vec<&str> = match rows.first() {
        None => {
            writeln!(out, "(no rows)")?;
            return Ok(());
        }
        Some(Value::Object(first)) => first.keys().map(String::as_str).collect(),
        Some(_) => {
            for row in rows {
                writeln!(out, "{row}")?;
            }
            return Ok(());
        }
    };

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|column| cell(row.get(*column))).collect())
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .fold(column.chars().count(), usize::max)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{column:<width$}"))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(out, "{}", rule.join("  "))?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    Ok(())
}

fn write_fields<W: Write>(out: &mut W, fields: &Map<String, Value>) -> Result<(), CliError> {
    let width = fields.keys().map(|key| key.chars().count()).max().unwrap_or(0);
    for (key, value) in fields {
        writeln!(out, "{key:<width$}  {}", cell(Some(value)))?;
    }
    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::from("-"),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
