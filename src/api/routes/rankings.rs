use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::objectives::ObjectiveSummary;
use crate::calculate::{leaderboard, rank, Leaderboard};
use crate::catalog::WeaponFilter;
use crate::models::BodyPart;

#[derive(Debug, Serialize)]
pub struct ObjectivesResponse {
    pub objectives: Vec<ObjectiveSummary>,
    pub body_parts: Vec<BodyPart>,
    pub default_top_n: usize,
}

pub async fn list_objectives(State(state): State<AppState>) -> Json<ObjectivesResponse> {
    Json(ObjectivesResponse {
        objectives: state.registry.iter().map(|o| o.summary()).collect(),
        body_parts: BodyPart::ALL.to_vec(),
        default_top_n: state.config.rankings.top_n,
    })
}

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub objective: String,
    pub body_part: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub weapon_type: Option<String>,
    pub max_weight: Option<f64>,
    /// Return the whole ranking instead of the top entries
    #[serde(default)]
    pub all: bool,
}

pub async fn get_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Leaderboard>, ApiError> {
    let body_part = params
        .body_part
        .as_deref()
        .unwrap_or_default()
        .parse::<BodyPart>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let filter = WeaponFilter {
        search: params.search,
        weapon_type: params.weapon_type,
        max_weight: params.max_weight,
    };
    let weapons = state.catalog.filter(&filter);

    let ranked = rank(
        &state.catalog,
        &state.registry,
        &weapons,
        &params.objective,
        body_part,
    );

    Ok(Json(leaderboard(
        &state.catalog,
        &state.registry,
        &params.objective,
        &ranked,
        body_part,
        state.config.rankings.top_n,
        params.all,
    )))
}
