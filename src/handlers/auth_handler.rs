//! Authentication handlers for login and signup.

use actix_web::{web, HttpResponse};
use log::info;

use crate::models::{Credentials, SignupRequest};
use crate::services::AuthService;
use crate::utils::log_sanitizer::mask_email;

/// Log in and receive a mock token
///
/// Credentials are not checked; any JSON object of scalar values is accepted.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login accepted", body = crate::models::LoginResponse),
        (status = 400, description = "Body is not a JSON object of scalar values", body = crate::models::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<Credentials>,
) -> HttpResponse {
    let response = auth_service.login(&body);

    info!(
        "Issued mock token for {}",
        body.email().map(mask_email).unwrap_or_default()
    );
    HttpResponse::Ok().json(response)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Submitted fields echoed with the assigned id", body = crate::models::SignupResponse),
        (status = 400, description = "Body is not a JSON object of scalar values", body = crate::models::ErrorResponse)
    )
)]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    body: web::Json<SignupRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    let email = body.email().map(mask_email);

    let response = auth_service.signup(body);

    info!(
        "Signed up user {} ({})",
        response.id,
        email.unwrap_or_default()
    );
    HttpResponse::Ok().json(response)
}
