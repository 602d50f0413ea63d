mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, jwt_token_verifier::JwtTokenVerifier,
        registration_repository::MysqlRegistrationRepository, user_repository::MysqlUserRepository,
    },
    presentation::handlers::registration_handler::create_registration_router,
    usecase::registration_usecase::RegistrationUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    let registration_repository = MysqlRegistrationRepository::new(db.clone());
    let user_repository = MysqlUserRepository::new(db.clone());
    let password_hasher = Argon2PasswordHasher::new();
    let token_verifier = JwtTokenVerifier::new(
        dotenvy::var("JWT_SECRET").unwrap_or_else(|_| "testtoken".to_string()),
    );
    let registration_service = RegistrationUsecase::new(
        registration_repository,
        user_repository,
        password_hasher,
    );

    let app = Router::new()
        .route("/", get(|| async { "escola-api" }))
        .nest(
            "/api/escola",
            create_registration_router(registration_service, token_verifier),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
