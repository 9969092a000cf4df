//! Server-rendered dashboard views.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Dashboard page: the user list, plus the edit form when a user is selected.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub users: Vec<User>,
    pub edit_user: Option<User>,
}

/// Render the user list
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = state.user_service.list_users().await?;

    let template = DashboardTemplate {
        title: "Admin Dashboard".to_string(),
        users,
        edit_user: None,
    };

    Ok(Html(template.render()?))
}

/// Render the edit form for one user
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let user = match state.user_service.get_user(id).await {
        Ok(user) => user,
        // The edit lookup answers plain text, not the JSON error body
        Err(AppError::NotFound) => {
            return Ok((StatusCode::NOT_FOUND, "User not found!").into_response());
        }
        Err(err) => return Err(err),
    };

    let users = state.user_service.list_users().await?;

    let template = DashboardTemplate {
        title: "Edit User".to_string(),
        users,
        edit_user: Some(user),
    };

    Ok(Html(template.render()?).into_response())
}
