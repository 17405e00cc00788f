//! User handlers for lookups and profile updates.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::models::ProfileUpdate;
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "The two demo users", body = [crate::models::UserSummary])
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(user_service.find_all())
}

/// Get a specific user by ID
///
/// The id is not checked against any store; every id returns the demo record.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID, echoed unchanged")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::UserRecord)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    HttpResponse::Ok().json(user_service.find_one(&user_id))
}

/// Update the caller's profile
///
/// The target user comes from the body's `userId` (default `"1"`), which is
/// trusted as sent and echoed back with the rest of the body.
#[utoipa::path(
    put,
    path = "/users/profile/update",
    tag = "Users",
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Submitted fields echoed with id and updated flag", body = crate::models::ProfileUpdateResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_profile(
    user_service: web::Data<UserService>,
    body: web::Json<ProfileUpdate>,
) -> HttpResponse {
    let body = body.into_inner();
    let user_id = body.user_id();

    let response = user_service.update_profile(&user_id, body);

    info!("Profile update accepted for user {}", user_id);
    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::routes::configure_routes;
    use crate::services::UserService;

    macro_rules! user_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserService::new()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_user_echoes_id() {
        let app = user_app!();
        let req = test::TestRequest::get().uri("/users/abc-123").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({"id": "abc-123", "name": "John Doe", "email": "john@example.com"})
        );
    }

    #[actix_web::test]
    async fn test_get_users_returns_two_in_order() {
        let app = user_app!();

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/users").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(
                body,
                json!([
                    {"id": 1, "name": "John Doe"},
                    {"id": 2, "name": "Jane Doe"}
                ])
            );
        }
    }

    #[actix_web::test]
    async fn test_update_profile_uses_body_user_id() {
        let app = user_app!();
        let req = test::TestRequest::put()
            .uri("/users/profile/update")
            .set_json(json!({"userId": "7", "city": "NYC"}))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({"userId": "7", "city": "NYC", "id": "7", "updated": true})
        );
    }

    #[actix_web::test]
    async fn test_update_profile_defaults_user_id() {
        let app = user_app!();
        let req = test::TestRequest::put()
            .uri("/users/profile/update")
            .set_json(json!({"name": "X"}))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"name": "X", "id": "1", "updated": true}));
    }

    #[actix_web::test]
    async fn test_wrong_method_is_json_not_found() {
        let app = user_app!();

        for req in [
            test::TestRequest::get()
                .uri("/users/profile/update")
                .to_request(),
            test::TestRequest::post().uri("/users/3").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "NOT_FOUND");
        }
    }

    #[actix_web::test]
    async fn test_update_profile_null_user_id_defaults() {
        let app = user_app!();
        let req = test::TestRequest::put()
            .uri("/users/profile/update")
            .set_json(json!({"userId": null, "a": 1}))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({"a": 1, "userId": null, "id": "1", "updated": true})
        );
    }

    #[actix_web::test]
    async fn test_update_profile_rejects_array_body() {
        let app = user_app!();
        let req = test::TestRequest::put()
            .uri("/users/profile/update")
            .set_json(json!([1, 2, 3]))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
