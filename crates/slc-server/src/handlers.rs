//! Route handlers. Each one parses its body, validates tokens, and runs the
//! classifier call on the blocking pool.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};

use slc_core::errors::SlcResult;
use slc_core::models::{Area, ClassifyOutcome, Slot, Snapshot, Variant};

use crate::dto::{
    ClassifyRequest, FeedbackRequest, InitRequest, MovePropertyRequest, OkResponse,
    PropertyRequest, RenameClassRequest, RenamePropertyRequest,
};
use crate::error::ApiError;
use crate::identity::UserId;
use crate::state::AppState;

type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Run a classifier call off the async runtime, inside an operation span.
async fn run_blocking<T, F>(op: &'static str, user: UserId, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&str) -> SlcResult<T> + Send + 'static,
    T: Send + 'static,
{
    let UserId(user_id) = user;
    let result = tokio::task::spawn_blocking(move || {
        let _span = slc_core::operation_span!(op, user_id).entered();
        f(&user_id)
    })
    .await
    .map_err(|e| ApiError::Internal {
        message: format!("{op} task failed: {e}"),
    })?;
    Ok(result?)
}

pub async fn init(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<InitRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    if req.class1.name.trim().is_empty() || req.class2.name.trim().is_empty() {
        return Err(ApiError::bad_request("class names are required"));
    }
    let svc = state.service();
    run_blocking("init", user, move |uid| svc.init(uid, req.class1, req.class2)).await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn classify(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<ClassifyRequest>,
) -> Result<Json<ClassifyOutcome>, ApiError> {
    let Json(req) = body?;
    let svc = state.service();
    let outcome = run_blocking("classify", user, move |uid| {
        svc.classify(uid, &req.properties)
    })
    .await?;
    tracing::debug!(guess = %outcome.guess, unknown = outcome.unknown.len(), "classified");
    Ok(Json(outcome))
}

pub async fn feedback(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<FeedbackRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let variant: Variant = req
        .variant
        .parse()
        .map_err(|_| ApiError::bad_request("variant must be one of: class1|class2|none"))?;
    let svc = state.service();
    run_blocking("feedback", user, move |uid| {
        svc.feedback(uid, variant, &req.properties)
    })
    .await?;
    tracing::debug!(%variant, "feedback applied");
    Ok(Json(OkResponse::ok()))
}

pub async fn snapshot(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
) -> Result<Json<Snapshot>, ApiError> {
    let svc = state.service();
    let snapshot = run_blocking("snapshot", user, move |uid| svc.snapshot(uid)).await?;
    Ok(Json(snapshot))
}

pub async fn reset(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
) -> Result<Json<OkResponse>, ApiError> {
    let svc = state.service();
    run_blocking("reset", user, move |uid| svc.reset(uid)).await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn add_property(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<PropertyRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let area: Area = req.area.parse()?;
    let svc = state.service();
    run_blocking("property.add", user, move |uid| {
        svc.add_property(uid, area, &req.property)
    })
    .await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn remove_property(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<PropertyRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let area: Area = req.area.parse()?;
    let svc = state.service();
    run_blocking("property.remove", user, move |uid| {
        svc.remove_property(uid, area, &req.property)
    })
    .await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn move_property(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<MovePropertyRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let from: Area = req.from.parse()?;
    let to: Area = req.to.parse()?;
    let svc = state.service();
    run_blocking("property.move", user, move |uid| {
        svc.move_property(uid, from, to, &req.property)
    })
    .await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn rename_property(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<RenamePropertyRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let area: Area = req.area.parse()?;
    let svc = state.service();
    run_blocking("property.rename", user, move |uid| {
        svc.rename_property(uid, area, &req.from, &req.to)
    })
    .await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn rename_class(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    body: JsonBody<RenameClassRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(req) = body?;
    let slot: Slot = req.class.parse()?;
    let svc = state.service();
    run_blocking("class.rename", user, move |uid| {
        svc.rename_class(uid, slot, &req.name)
    })
    .await?;
    Ok(Json(OkResponse::ok()))
}

/// Liveness probe.
pub async fn status() -> &'static str {
    "ok"
}
