use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{weapon_card, WeaponCard};
use crate::catalog::{CategoryGroup, WeaponFilter};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub weapons: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        weapons: state.catalog.len(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub weapon_type: Option<String>,
    pub max_weight: Option<f64>,
}

impl From<FilterParams> for WeaponFilter {
    fn from(params: FilterParams) -> Self {
        WeaponFilter {
            search: params.search,
            weapon_type: params.weapon_type,
            max_weight: params.max_weight,
        }
    }
}

/// Filtered weapons grouped by category.
///
/// `types` and `names` always cover the whole catalog so clients can fill
/// the type filter and comparison pickers from the same response.
#[derive(Debug, Serialize)]
pub struct WeaponListResponse {
    pub total: usize,
    pub categories: Vec<CategoryGroup>,
    pub types: Vec<String>,
    pub names: Vec<String>,
}

pub async fn list_weapons(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<WeaponListResponse> {
    let names = state.catalog.filter(&params.into());
    Json(WeaponListResponse {
        total: names.len(),
        categories: state.catalog.group_by_category(&names),
        types: state
            .catalog
            .weapon_types()
            .into_iter()
            .map(String::from)
            .collect(),
        names: state.catalog.sorted_names(),
    })
}

pub async fn get_weapon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WeaponCard>, ApiError> {
    weapon_card(&state.catalog, &name)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Weapon '{}'", name)))
}
