use std::sync::Arc;

use axum::{
    Json, Router, middleware,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        models::registration::{Registration, RegistrationWithUser},
        models::user::User,
        repositories::{
            registration_repository::RegistrationRepository, user_repository::UserRepository,
        },
        services::{password_service::PasswordHasher, token_service::TokenVerifier},
    },
    presentation::middleware::auth::require_auth,
    usecase::registration_usecase::{
        CreateRegistrationInput, RegistrationUsecase, UpdateRegistrationInput,
    },
};

// Request

/// json for create request; field names are part of the published wire contract
#[derive(Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub name: String,
    pub email: String,
    pub senha: String,
    pub tipo: String,
    pub user: String,
}

/// json for update request; absent fields are left untouched
#[derive(Serialize, Deserialize, Default)]
pub struct UpdateRegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub tipo: Option<String>,
    pub user: Option<String>,
}

// Response

/// json for a registration without its user relation resolved; the password
/// digest is deliberately redacted
#[derive(Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tipo: String,
    pub user: String,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id().to_string(),
            name: registration.name().to_string(),
            email: registration.email().to_string(),
            tipo: registration.role().as_str().to_string(),
            user: registration.user_ref().to_string(),
        }
    }
}

/// json for a registration with its user relation resolved; `user` is null
/// when the referenced account could not be found
#[derive(Serialize, Deserialize)]
pub struct ResolvedRegistrationResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tipo: String,
    pub user: Option<UserInfo>,
}

#[derive(Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

impl From<RegistrationWithUser> for ResolvedRegistrationResponse {
    fn from(record: RegistrationWithUser) -> Self {
        Self {
            id: record.registration.id().to_string(),
            name: record.registration.name().to_string(),
            email: record.registration.email().to_string(),
            tipo: record.registration.role().as_str().to_string(),
            user: record.user.map(UserInfo::from),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/* Router Function and Handler Function */

// Registration Router

/// function return Router object
/// Suppose to be nested by main router under the escola path

pub fn create_registration_router<R, U, P, V>(
    registration_service: RegistrationUsecase<R, U, P>,
    token_verifier: V,
) -> Router
where
    R: RegistrationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
    V: TokenVerifier + Clone + 'static,
{
    let state = AppState {
        registration_service: Arc::new(registration_service),
    };

    Router::new()
        .route("/", get(list::<R, U, P>).post(create::<R, U, P>))
        .route(
            "/{id}",
            get(get_by_id::<R, U, P>)
                .put(update::<R, U, P>)
                .delete(delete::<R, U, P>),
        )
        .route("/user/{user_id}", get(list_by_user::<R, U, P>))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(token_verifier),
            require_auth::<V>,
        ))
        .with_state(state)
}

pub struct AppState<R, U, P> {
    pub registration_service: Arc<RegistrationUsecase<R, U, P>>,
}

impl<R, U, P> Clone for AppState<R, U, P> {
    fn clone(&self) -> Self {
        Self {
            registration_service: self.registration_service.clone(),
        }
    }
}

// handler function

/// handler function for listing every registration, user relation resolved
async fn list<R, U, P>(State(state): State<AppState<R, U, P>>) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.registration_service.list().await {
        Ok(records) => {
            let body: Vec<ResolvedRegistrationResponse> = records
                .into_iter()
                .map(ResolvedRegistrationResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// handler function for fetching one registration by id
async fn get_by_id<R, U, P>(
    State(state): State<AppState<R, U, P>>,
    Path(id): Path<String>,
) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.registration_service.get(&id).await {
        Ok(record) => {
            (StatusCode::OK, Json(ResolvedRegistrationResponse::from(record))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// handler function for creating a registration
async fn create<R, U, P>(
    State(state): State<AppState<R, U, P>>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    let input = CreateRegistrationInput {
        name: payload.name,
        email: payload.email,
        password: payload.senha,
        role: payload.tipo,
        user_ref: payload.user,
    };

    match state.registration_service.create(input).await {
        Ok(registration) => {
            (StatusCode::CREATED, Json(RegistrationResponse::from(registration))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// handler function for partially updating a registration
async fn update<R, U, P>(
    State(state): State<AppState<R, U, P>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    let input = UpdateRegistrationInput {
        name: payload.name,
        email: payload.email,
        password: payload.senha,
        role: payload.tipo,
        user_ref: payload.user,
    };

    match state.registration_service.update(&id, input).await {
        Ok(registration) => {
            (StatusCode::OK, Json(RegistrationResponse::from(registration))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// handler function for deleting a registration
async fn delete<R, U, P>(
    State(state): State<AppState<R, U, P>>,
    Path(id): Path<String>,
) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.registration_service.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Registration deleted".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// handler function for listing the registrations of one user account
async fn list_by_user<R, U, P>(
    State(state): State<AppState<R, U, P>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.registration_service.list_by_user(&user_id).await {
        Ok(registrations) => {
            let body: Vec<RegistrationResponse> = registrations
                .into_iter()
                .map(RegistrationResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Maps the error taxonomy onto HTTP statuses: validation problems and
/// duplicate emails are client errors, missing records are 404, everything
/// else is a server fault.
fn error_response(err: DomainError) -> Response {
    match &err {
        DomainError::MissingField(_)
        | DomainError::InvalidRole(_)
        | DomainError::MalformedIdentifier(_)
        | DomainError::EmptyPassword
        | DomainError::Repository(RepositoryError::DuplicateEmail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        DomainError::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: "User not found".to_string(),
            }),
        )
            .into_response(),
        DomainError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: "Registration not found".to_string(),
            }),
        )
            .into_response(),
        _ => {
            tracing::error!(error = %err, "registration request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
