use axum::extract::State;

use crate::{
    pkg::{internal::adaptors::jobs::selectors::JobSelector, server::state::AppState},
    prelude::Result,
};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    let table = state.store.jobs();
    let postings = JobSelector::new(&table).get_all().len();
    tracing::debug!(postings, "service is healthy");
    Ok(())
}
