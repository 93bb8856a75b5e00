use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{JobEntry, JobFilter, JobType},
        },
        server::{extract::ValidatedJson, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[validate(length(min = 1, message = "salary must not be empty"))]
    pub salary: String,
    #[validate(length(min = 1, message = "summary must not be empty"))]
    pub summary: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "requirements must not be empty"))]
    pub requirements: String,
    #[serde(default)]
    pub nice_to_have: Option<String>,
}

// id and postedDate are deliberately absent: both are store-assigned, and
// deny_unknown_fields turns any attempt to patch them into a 400.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchJobInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: Option<String>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[validate(length(min = 1, message = "salary must not be empty"))]
    pub salary: Option<String>,
    #[validate(length(min = 1, message = "summary must not be empty"))]
    pub summary: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "requirements must not be empty"))]
    pub requirements: Option<String>,
    pub nice_to_have: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

impl FilterQuery {
    // absent, empty and "all" criteria impose no constraint
    fn criterion(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty() && v != "all")
    }

    fn into_filter(self) -> JobFilter {
        JobFilter {
            department: Self::criterion(self.department),
            location: Self::criterion(self.location),
            job_type: Self::criterion(self.job_type),
        }
    }
}

fn parse_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>().map_err(|_| Error::InvalidJobId)
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let table = state.store.jobs();
    Ok(Json(JobSelector::new(&table).get_all()))
}

pub async fn filter(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<JobEntry>>> {
    let table = state.store.jobs();
    let jobs = JobSelector::new(&table).get_by_filter(&query.into_filter());
    Ok(Json(jobs))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<JobEntry>> {
    let id = parse_id(&id)?;
    let table = state.store.jobs();
    let job = JobSelector::new(&table)
        .get_by_id(id)
        .ok_or(Error::JobNotFound)?;
    Ok(Json(job))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let mut table = state.store.jobs_mut();
    let job = JobMutator::new(&mut table).create(input);
    tracing::info!(id = job.id, title = %job.title, "job posting created");
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<PatchJobInput>,
) -> Result<Json<JobEntry>> {
    let id = parse_id(&id)?;
    let mut table = state.store.jobs_mut();
    let job = JobMutator::new(&mut table)
        .update(id, input)
        .ok_or(Error::JobNotFound)?;
    Ok(Json(job))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let mut table = state.store.jobs_mut();
    if !JobMutator::new(&mut table).delete(id) {
        return Err(Error::JobNotFound);
    }
    tracing::info!(id, "job posting deleted");
    Ok(StatusCode::NO_CONTENT)
}
