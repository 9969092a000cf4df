//! User mutation handlers - the JSON create endpoint and the edit-form post.

use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserInput;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create a user
#[utoipa::path(
    post,
    path = "/add-user",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 200, description = "User added successfully", body = MessageResponse),
        (status = 400, description = "Malformed request body"),
        (status = 409, description = "Email already taken"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> AppResult<Json<MessageResponse>> {
    let user = state.user_service.create_user(input).await?;
    tracing::info!(user_id = %user.id, "user created");

    Ok(Json(MessageResponse::new("User added successfully")))
}

/// Overwrite a user's fields and return to the dashboard.
///
/// The rendered edit form posts here as urlencoded form data.
#[utoipa::path(
    post,
    path = "/update-user/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User identifier")),
    request_body(content = UserInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirects to the dashboard"),
        (status = 404, description = "No user with that id")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(input): Form<UserInput>,
) -> AppResult<Redirect> {
    state.user_service.update_user(id, input).await?;
    tracing::info!(user_id = %id, "user updated");

    Ok(Redirect::to("/dashboard"))
}
