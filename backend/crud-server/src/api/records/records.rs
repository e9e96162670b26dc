//! Record REST API handlers
//!
//! Form submissions are url-encoded. A successful write answers 303 See Other
//! to the entity listing; a rejected one answers 422 with the form to
//! redisplay.

use crate::{
    ApiResult, AppState, FormResponse, RecordDto, RecordListResponse, RecordResponse,
};

use crud_core::{EntitySchema, FieldErrors, Fields, Outcome, RecordId, Submission};

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /records/{entity}
pub async fn list_records(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> ApiResult<Json<RecordListResponse>> {
    let manager = state.manager(&entity)?;
    let records = manager.list().await?;

    Ok(Json(RecordListResponse {
        entity: manager.entity().to_string(),
        records: records.into_iter().map(RecordDto::from).collect(),
    }))
}

/// GET /records/{entity}/new
pub async fn new_record_form(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> ApiResult<Json<FormResponse>> {
    let manager = state.manager(&entity)?;
    let schema = manager.schema();

    Ok(Json(FormResponse::new(
        schema,
        new_path(schema),
        &schema.blank_values(),
        FieldErrors::new(),
    )))
}

/// POST /records/{entity}/new
pub async fn create_record(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Form(fields): Form<Fields>,
) -> ApiResult<Response> {
    let manager = state.manager(&entity)?;
    let outcome = manager.submit(Submission::Create, fields).await?;

    Ok(respond(outcome, manager.schema(), new_path(manager.schema())))
}

/// GET /records/{entity}/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
) -> ApiResult<Json<RecordResponse>> {
    let manager = state.manager(&entity)?;
    let record = manager.get(RecordId::parse(&id)?).await?;

    Ok(Json(RecordResponse {
        entity: manager.entity().to_string(),
        record: record.into(),
    }))
}

/// GET /records/{entity}/{id}/edit
pub async fn edit_record_form(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
) -> ApiResult<Json<FormResponse>> {
    let manager = state.manager(&entity)?;
    let record_id = RecordId::parse(&id)?;
    let record = manager.get(record_id).await?;

    Ok(Json(FormResponse::new(
        manager.schema(),
        edit_path(manager.schema(), record_id),
        &record.fields,
        FieldErrors::new(),
    )))
}

/// POST /records/{entity}/{id}/edit
pub async fn update_record(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
    Form(fields): Form<Fields>,
) -> ApiResult<Response> {
    let manager = state.manager(&entity)?;
    let record_id = RecordId::parse(&id)?;
    let outcome = manager
        .submit(Submission::Update(record_id), fields)
        .await?;

    Ok(respond(
        outcome,
        manager.schema(),
        edit_path(manager.schema(), record_id),
    ))
}

/// POST /records/{entity}/{id}/delete
pub async fn delete_record(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
) -> ApiResult<Redirect> {
    let manager = state.manager(&entity)?;
    manager.delete(RecordId::parse(&id)?).await?;

    Ok(Redirect::to(&manager.schema().listing_path()))
}

// =============================================================================
// Helpers
// =============================================================================

fn respond(outcome: Outcome, schema: &EntitySchema, action: String) -> Response {
    match outcome {
        Outcome::Redirect { location } => Redirect::to(&location).into_response(),
        Outcome::Redisplay { values, errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FormResponse::new(schema, action, &values, errors)),
        )
            .into_response(),
    }
}

fn new_path(schema: &EntitySchema) -> String {
    format!("{}/new", schema.listing_path())
}

fn edit_path(schema: &EntitySchema, id: RecordId) -> String {
    format!("{}/{}/edit", schema.listing_path(), id)
}
