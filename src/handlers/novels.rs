use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use crate::auth::Caller;
use crate::gateway::BackendRequest;
use crate::models::{NovelEntry, NovelStats, NovelSubset};
use crate::novels::{self, FilterColumn, NovelFilter, SortKey, SortOrder};
use crate::state::AppState;
use crate::utils::response::{ApiResponse, ApiError};

use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NovelListQuery {
    pub subset: Option<NovelSubset>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    /// Column the `text` filter applies to; title when omitted.
    pub column: Option<FilterColumn>,
    pub text: Option<String>,
}

impl NovelListQuery {
    fn filter(&self) -> Option<NovelFilter> {
        self.text
            .as_ref()
            .map(|text| NovelFilter::new(self.column.unwrap_or(FilterColumn::Title), text.clone()))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubsetQuery {
    pub subset: Option<NovelSubset>,
}

async fn fetch<T: DeserializeOwned>(
    state: &AppState,
    caller: &Caller,
    request: BackendRequest,
) -> Result<T, ApiError> {
    let path = request.path.clone();
    let data = state.gateway.dispatch(request, caller.session()).await?;
    serde_json::from_value(data)
        .map_err(|e| ApiError::BadGateway(format!("unexpected payload from {}: {}", path, e)))
}

async fn fetch_novels(
    state: &AppState,
    caller: &Caller,
    path: &str,
    subset: NovelSubset,
) -> Result<Vec<NovelEntry>, ApiError> {
    let request = BackendRequest::post(path)
        .with_json(&subset)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    fetch(state, caller, request).await
}

#[utoipa::path(
    get,
    path = "/novels",
    params(NovelListQuery),
    responses(
        (status = 200, description = "Filtered and sorted novel list", body = Object),
        (status = 502, description = "Backend failure")
    )
)]
pub async fn list_novels(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Query(query): Query<NovelListQuery>,
) -> Result<Json<ApiResponse<Vec<NovelEntry>>>, ApiError> {
    let list = fetch_novels(&state, &caller, "/api/novels", query.subset.unwrap_or_default()).await?;

    let filter = query.filter();
    let list = novels::apply(
        list,
        filter.as_ref(),
        query.sort.unwrap_or_default(),
        query.order.unwrap_or_default(),
    );

    Ok(Json(ApiResponse::success(list)))
}

#[utoipa::path(
    get,
    path = "/novels/random",
    params(SubsetQuery),
    responses(
        (status = 200, description = "Random selection of novels", body = Object),
        (status = 502, description = "Backend failure")
    )
)]
pub async fn random_novels(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Query(query): Query<SubsetQuery>,
) -> Result<Json<ApiResponse<Vec<NovelEntry>>>, ApiError> {
    let list = fetch_novels(&state, &caller, "/api/random_novels", query.subset.unwrap_or_default()).await?;
    Ok(Json(ApiResponse::success(list)))
}

#[utoipa::path(
    get,
    path = "/novels/stats",
    responses(
        (status = 200, description = "Aggregated reading statistics", body = Object),
        (status = 502, description = "Backend failure")
    )
)]
pub async fn novel_stats(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<NovelStats>>, ApiError> {
    let stats: NovelStats = fetch(&state, &caller, BackendRequest::get("/api/novels_stats")).await?;
    Ok(Json(ApiResponse::success(stats)))
}

#[utoipa::path(
    get,
    path = "/novels/export.csv",
    responses(
        (status = 200, description = "All novels as a CSV attachment", body = String, content_type = "text/csv"),
        (status = 502, description = "Backend failure")
    )
)]
pub async fn export_csv(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    let list = fetch_novels(&state, &caller, "/api/novels", NovelSubset::All).await?;
    let csv = novels::to_csv(&list);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"novels.csv\""),
        ],
        csv,
    ))
}

#[utoipa::path(
    get,
    path = "/novels/export.json",
    responses(
        (status = 200, description = "All novels as a JSON backup attachment", body = String, content_type = "application/json"),
        (status = 502, description = "Backend failure")
    )
)]
pub async fn export_json(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    let list = fetch_novels(&state, &caller, "/api/novels", NovelSubset::All).await?;
    let json = serde_json::to_string_pretty(&list).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"novels.json\""),
        ],
        json,
    ))
}
