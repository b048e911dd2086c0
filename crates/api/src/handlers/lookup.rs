use crate::{dto::LookupParams, errors::ApiError, state::AppState};
use axum::extract::{Query, State};
use tracing::{debug, instrument};

/// Resolves `fqdn`/`querytype` against the upstream and returns one
/// presentation line per answer record. An empty answer set is an empty 200.
#[instrument(skip_all, name = "api_dns_query_get")]
pub async fn dns_query_get(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let params = LookupParams::from_pairs(pairs);
    debug!(fqdn = ?params.fqdn, querytype = ?params.querytype, "DNS lookup requested");

    let resolution = state
        .lookup
        .execute(params.fqdn.as_deref(), params.querytype.as_deref())
        .await?;

    Ok(resolution.render())
}
