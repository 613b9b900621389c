//! Notes REST API — CRUD endpoints for the note resource.
//!
//! Every response is wrapped in the `{status, data}` envelope; failures
//! go through `ApiError` so status codes and envelope shape stay
//! consistent across handlers.

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::errors::ApiError;
use crate::models::{
    validate_note_fields, CreateNoteRequest, EditNoteRequest, ListNotesQuery, Note, NoteFilter,
};
use crate::AppState;

fn note_envelope(note: &Note) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "data": { "note": note }
    }))
}

fn find_note_or_not_found(state: &AppState, id: i64) -> Result<Note, ApiError> {
    state.db.find_note(id)?.ok_or(ApiError::NoteNotFound)
}

fn validate_or_unprocessable(title: &str, text: &str) -> Result<(), ApiError> {
    let errors = validate_note_fields(title, text);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// GET /note/{id}
async fn show_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let note = find_note_or_not_found(&data, path.into_inner())?;

    Ok(note_envelope(&note))
}

/// GET /notes?sort=&limit=&search=
async fn list_notes(
    data: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = NoteFilter::from(query.into_inner());
    let notes = data.db.list_notes(&filter)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "data": { "notes": notes }
    })))
}

/// POST /note/add
async fn add_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let title = body.title.as_deref().unwrap_or_default().trim().to_string();
    let text = body.text.as_deref().unwrap_or_default().trim().to_string();

    validate_or_unprocessable(&title, &text)?;

    let note = data.db.create_note(&title, &text, Utc::now())?;
    log::info!("Created note {}", note.id);

    Ok(note_envelope(&note))
}

/// PUT /note/{id} — fields absent in the body keep their stored value
async fn edit_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<EditNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut note = find_note_or_not_found(&data, path.into_inner())?;

    let body = body.into_inner();
    if let Some(title) = body.title {
        note.title = title.trim().to_string();
    }
    if let Some(text) = body.text {
        note.text = text.trim().to_string();
    }

    validate_or_unprocessable(&note.title, &note.text)?;

    data.db.update_note(&note)?;

    Ok(note_envelope(&note))
}

/// DELETE /note/{id}
async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let note = find_note_or_not_found(&data, path.into_inner())?;

    data.db.delete_note(note.id)?;
    log::info!("Deleted note {}", note.id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "data": serde_json::Value::Null
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // The literal /note/add route is registered before /note/{id}
    cfg.route("/notes", web::get().to(list_notes))
        .route("/note/add", web::post().to(add_note))
        .route("/note/{id}", web::get().to(show_note))
        .route("/note/{id}", web::put().to(edit_note))
        .route("/note/{id}", web::delete().to(delete_note));
}
