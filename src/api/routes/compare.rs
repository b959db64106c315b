use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::compare;
use crate::models::Comparison;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub a: Option<String>,
    pub b: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(flatten)]
    pub comparison: Comparison,
    pub wins_a: usize,
    pub wins_b: usize,
}

pub async fn compare_weapons(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<CompareResponse>, ApiError> {
    let (Some(a), Some(b)) = (params.a, params.b) else {
        return Err(ApiError::BadRequest(
            "Both 'a' and 'b' weapons are required".to_string(),
        ));
    };

    for name in [&a, &b] {
        if !state.catalog.contains(name) {
            return Err(ApiError::NotFound(format!("Weapon '{}'", name)));
        }
    }

    let comparison = compare(&state.catalog, &a, &b, state.compare_options())
        .ok_or_else(|| ApiError::Internal(format!("Comparison of '{}' and '{}' failed", a, b)))?;
    let (wins_a, wins_b) = comparison.tally();

    Ok(Json(CompareResponse {
        comparison,
        wins_a,
        wins_b,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::test_support::{get_json, setup_test_state};
    use axum::http::StatusCode;
    use serde_json::Value;

    fn row<'a>(json: &'a Value, field: &str) -> &'a Value {
        json["rows"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["field"] == field)
            .unwrap()
    }

    #[tokio::test]
    async fn test_compare_weapons() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/compare?a=AK&b=M4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["weapon_a"], "AK");
        assert_eq!(json["weapon_b"], "M4");
        assert_eq!(row(&json, "weight")["winner"], "b");
        assert_eq!(row(&json, "firerate")["winner"], "b");
        assert_eq!(row(&json, "damage_max")["winner"], "a");
        assert_eq!(row(&json, "equip_speed")["display_a"], "—");
        assert!(json["rows"]
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["field"] != "pellet_count"));
    }

    #[tokio::test]
    async fn test_compare_with_shotgun() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/compare?a=Pump&b=Auto").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(row(&json, "pellet_count")["winner"], "a");
        assert_eq!(row(&json, "damage_max")["display_a"], "20 × 8 = 160");
        assert_eq!(row(&json, "damage_min")["display_a"], "10");
        assert_eq!(row(&json, "damage_min")["winner"], "a");
    }

    #[tokio::test]
    async fn test_compare_unknown_weapon() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/compare?a=AK&b=Ghost").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["message"], "Not found: Weapon 'Ghost'");
    }

    #[tokio::test]
    async fn test_compare_missing_param() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, _) = get_json(app, "/api/compare?a=AK").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
