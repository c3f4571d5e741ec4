use std::sync::Arc;

use auth::Authenticator;
use blog_service::config::Config;
use blog_service::domain::category::service::CategoryService;
use blog_service::domain::contact::service::ContactService;
use blog_service::domain::post::service::PostService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::mailer::SmtpMailer;
use blog_service::outbound::repositories::PostgresCategoryRepository;
use blog_service::outbound::repositories::PostgresPostRepository;
use blog_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        smtp_host = %config.smtp.host,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool.clone()));
    let post_repository = Arc::new(PostgresPostRepository::new(pg_pool));
    let mailer = Arc::new(SmtpMailer::new(&config.smtp));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository)),
        post_service: Arc::new(PostService::new(
            post_repository,
            Arc::clone(&category_repository),
        )),
        category_service: Arc::new(CategoryService::new(category_repository)),
        contact_service: Arc::new(ContactService::new(
            mailer,
            config.smtp.admin_email.clone(),
        )),
        authenticator,
        jwt_expiration_hours: config.jwt.expiration_hours,
    };

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
