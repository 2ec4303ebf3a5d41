use atelier_core::{Envelope, StockFilter, StockListMeta, StockRecord};
use axum::extract::{RawQuery, State};
use axum::Json;

use crate::params::QueryParams;
use crate::AppState;

/// GET /api/stocks
///
/// Unparseable numeric bounds are dropped from the filter and only logged.
pub async fn list_stocks(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<Envelope<Vec<StockRecord>, StockListMeta>> {
    let query = QueryParams::parse(raw.as_deref()).stock_query();
    let filter = StockFilter::from_query(&query);
    for bound in filter.discarded_bounds() {
        tracing::debug!(param = bound.param, raw = %bound.raw, "ignoring malformed bound");
    }

    Json(state.desk().list_stocks(filter).await.into())
}
