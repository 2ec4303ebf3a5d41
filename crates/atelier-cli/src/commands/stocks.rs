use std::time::Instant;

use atelier_core::{DeskSource, Operation, StockFilter};

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

pub async fn run(args: &StocksArgs, desk: &dyn DeskSource) -> Result<CommandResult, CliError> {
    let filter = StockFilter::from_query(&args.to_query());

    let mut warnings: Vec<String> = filter
        .discarded_bounds()
        .iter()
        .map(|bound| {
            format!(
                "ignored malformed --{} value '{}'",
                flag_name(bound.param),
                bound.raw
            )
        })
        .collect();
    if let Some(change) = args.change.as_deref() {
        if !matches!(change, "" | "positive" | "negative" | "any") {
            warnings.push(format!(
                "unrecognized --change value '{change}'; no direction filter applied"
            ));
        }
    }

    let started = Instant::now();
    let listing = desk.list_stocks(filter).await;
    let latency_ms = elapsed_ms(started);

    Ok(
        CommandResult::ok(Operation::ListStocks, serde_json::to_value(&listing.records)?)
            .with_total(listing.total)
            .with_sectors(listing.sectors)
            .with_warnings(warnings)
            .with_latency(latency_ms),
    )
}

fn flag_name(param: &str) -> &str {
    match param {
        "minPrice" => "min-price",
        "maxPrice" => "max-price",
        "minCap" => "min-cap",
        "maxCap" => "max-cap",
        other => other,
    }
}
