mod bonds;
mod onboarding;
mod serve;
mod stocks;

use std::time::Instant;

use atelier_core::{DeskConfig, Operation};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Report, ReportMeta};

pub struct CommandResult {
    pub operation: Operation,
    pub data: Value,
    pub total: Option<usize>,
    pub sectors: Option<Vec<String>>,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
}

impl CommandResult {
    pub fn ok(operation: Operation, data: Value) -> Self {
        Self {
            operation,
            data,
            total: None,
            sectors: None,
            warnings: Vec::new(),
            latency_ms: 0,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_sectors(mut self, sectors: Vec<String>) -> Self {
        self.sectors = Some(sectors);
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn into_report(self) -> Report {
        let mut meta = ReportMeta::new(self.operation, self.latency_ms);
        meta.total = self.total;
        meta.sectors = self.sectors;
        meta.warnings = self.warnings;
        Report {
            meta,
            data: self.data,
        }
    }
}

/// Run the selected command. `serve` blocks until shutdown and yields no
/// report.
pub async fn run(cli: &Cli) -> Result<Option<Report>, CliError> {
    if let Command::Serve(args) = &cli.command {
        serve::run(cli, args).await?;
        return Ok(None);
    }

    let desk = desk_config(cli).open()?;
    let result = match &cli.command {
        Command::Stocks(args) => stocks::run(args, &desk).await?,
        Command::Bonds => bonds::list(&desk).await?,
        Command::Bond(args) => bonds::detail(args, &desk).await?,
        Command::Brief => onboarding::brief(&desk).await?,
        Command::Instruments(args) => onboarding::instruments(args, &desk).await?,
        Command::Serve(_) => return Ok(None),
    };

    Ok(Some(result.into_report()))
}

/// Environment configuration with CLI flags layered on top.
fn desk_config(cli: &Cli) -> DeskConfig {
    DeskConfig::from_env()
        .with_latency_ms(cli.latency_ms)
        .with_fixtures_dir(cli.fixtures.clone())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
