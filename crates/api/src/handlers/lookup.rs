use crate::{dto::TraceResponse, errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use dnstrace_domain::{validate_lookup_target, DnsQuery, DomainError, RecordType};
use std::str::FromStr;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Path((host, record_type)): Path<(String, String)>,
) -> Result<Json<TraceResponse>, ApiError> {
    let record_type = RecordType::from_str(&record_type)
        .map_err(|_| DomainError::InvalidRecordType(record_type.clone()))?;

    run_lookup(&state, &host, record_type).await
}

#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup_default_type(
    State(state): State<AppState>,
    Path(host): Path<String>,
) -> Result<Json<TraceResponse>, ApiError> {
    run_lookup(&state, &host, RecordType::A).await
}

async fn run_lookup(
    state: &AppState,
    host: &str,
    record_type: RecordType,
) -> Result<Json<TraceResponse>, ApiError> {
    validate_lookup_target(host)?;

    let query = DnsQuery::new(host, record_type);
    debug!(query = %query, "Tracing lookup");

    // A dropped request drops this future, which abandons the walk.
    let trace = state.lookup.execute(&query).await?;

    Ok(Json(TraceResponse::from(&trace)))
}
