use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::users::selectors::UserSelector,
        server::{extract::ValidatedJson, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserSummary,
}

/// One-shot credential check: no session or token is issued, a match only
/// echoes back the user summary.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginInput>,
) -> Result<Json<LoginResponse>> {
    let table = state.store.users();
    let user = UserSelector::new(&table)
        .get_by_username(&input.username)
        .ok_or(Error::InvalidCredentials)?;
    if user.password != input.password {
        tracing::warn!(username = %input.username, "login rejected");
        return Err(Error::InvalidCredentials);
    }
    Ok(Json(LoginResponse {
        user: UserSummary {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin == "true",
        },
    }))
}
