//! API surface tests.
//!
//! These tests exercise the HTTP-facing pieces that do not require a live
//! database: error-to-response mapping, request body parsing, response
//! shapes, and dashboard template rendering.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use user_dashboard::api::handlers::dashboard_handler::DashboardTemplate;
use user_dashboard::domain::{User, UserInput};
use user_dashboard::errors::{AppError, AppResult};
use user_dashboard::services::UserService;
use user_dashboard::types::MessageResponse;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_user(name: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
    }
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&body).expect("body should be JSON")
}

// =============================================================================
// Error Response Tests
// =============================================================================

#[tokio::test]
async fn not_found_maps_to_404_with_flat_error_body() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn duplicate_email_maps_to_409() {
    let response = AppError::DuplicateEmail("alice@x.com".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response_json(response).await;
    assert_eq!(body["error"], "User with email alice@x.com already exists");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let response = AppError::validation("missing field `email`").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "missing field `email`");
}

#[tokio::test]
async fn internal_maps_to_500_and_hides_detail() {
    let response = AppError::internal("connection pool exhausted").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "An internal error occurred");
}

// =============================================================================
// Response Shape Tests
// =============================================================================

#[tokio::test]
async fn message_response_serializes_flat() {
    let value = serde_json::to_value(MessageResponse::new("User added successfully")).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "User added successfully" }));
}

// =============================================================================
// Request Body Tests
// =============================================================================

#[tokio::test]
async fn user_input_requires_all_four_fields() {
    let missing_address = r#"{"name":"Alice","email":"a@b.com","phone":"555"}"#;
    assert!(serde_json::from_str::<UserInput>(missing_address).is_err());

    let complete = r#"{"name":"Alice","email":"a@b.com","phone":"555","address":""}"#;
    let input: UserInput = serde_json::from_str(complete).unwrap();
    assert_eq!(input.address, "");
}

#[tokio::test]
async fn user_input_parses_from_form_encoding() {
    use axum::extract::FromRequest;
    use axum::Form;

    // The edit form posts urlencoded fields
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/update-user/00000000-0000-0000-0000-000000000000")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(
            "name=Bob2&email=b2%40x.com&phone=555&address=new+addr",
        ))
        .unwrap();

    let Form(input) = Form::<UserInput>::from_request(request, &())
        .await
        .expect("form body should parse");

    assert_eq!(input.name, "Bob2");
    assert_eq!(input.email, "b2@x.com");
    assert_eq!(input.address, "new addr");
}

#[tokio::test]
async fn validated_json_rejects_missing_field_with_400() {
    use axum::extract::FromRequest;
    use user_dashboard::api::extractors::ValidatedJson;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/add-user")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            r#"{"name":"Alice","email":"a@b.com","phone":"555"}"#,
        ))
        .unwrap();

    let err = ValidatedJson::<UserInput>::from_request(request, &())
        .await
        .err()
        .expect("missing field should be rejected");

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Dashboard Template Tests
// =============================================================================

#[tokio::test]
async fn dashboard_template_lists_users_without_edit_form() {
    use askama::Template;

    let template = DashboardTemplate {
        title: "Admin Dashboard".to_string(),
        users: vec![test_user("Alice", "alice@x.com"), test_user("Bob", "bob@x.com")],
        edit_user: None,
    };

    let html = template.render().unwrap();
    assert!(html.contains("Admin Dashboard"));
    assert!(html.contains("alice@x.com"));
    assert!(html.contains("bob@x.com"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn dashboard_template_renders_edit_form_for_selected_user() {
    use askama::Template;

    let alice = test_user("Alice", "alice@x.com");
    let action = format!("/update-user/{}", alice.id);

    let template = DashboardTemplate {
        title: "Edit User".to_string(),
        users: vec![alice.clone()],
        edit_user: Some(alice),
    };

    let html = template.render().unwrap();
    assert!(html.contains("Edit User"));
    assert!(html.contains(&action));
    assert!(html.contains(r#"name="address""#));
}

#[tokio::test]
async fn dashboard_template_escapes_field_values() {
    use askama::Template;

    let template = DashboardTemplate {
        title: "Admin Dashboard".to_string(),
        users: vec![test_user("<script>alert(1)</script>", "x@x.com")],
        edit_user: None,
    };

    let html = template.render().unwrap();
    assert!(!html.contains("<script>alert(1)</script>"));
}

// =============================================================================
// Mock Service Tests
// =============================================================================

/// Mock user service that mirrors the service contract for a fixed store
struct MockUserService {
    existing: User,
}

impl MockUserService {
    fn new() -> Self {
        Self {
            existing: test_user("Alice", "alice@x.com"),
        }
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![self.existing.clone()])
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        if id == self.existing.id {
            Ok(self.existing.clone())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        let input = input.trimmed();
        if input.email == self.existing.email {
            return Err(AppError::DuplicateEmail(input.email));
        }
        Ok(User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        })
    }

    async fn update_user(&self, id: Uuid, _input: UserInput) -> AppResult<()> {
        if id == self.existing.id {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[tokio::test]
async fn mock_service_duplicate_create_surfaces_409() {
    let service = MockUserService::new();

    let err = service
        .create_user(UserInput {
            name: "Other".to_string(),
            email: " alice@x.com ".to_string(),
            phone: String::new(),
            address: String::new(),
        })
        .await
        .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn mock_service_get_unknown_user_surfaces_404() {
    let service = MockUserService::new();

    let err = service.get_user(Uuid::new_v4()).await.unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
