use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_category::create_category;
use super::handlers::create_post::create_post;
use super::handlers::get_post::get_post;
use super::handlers::list_categories::list_categories;
use super::handlers::list_posts::list_posts;
use super::handlers::list_posts_by_category::list_posts_by_category;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::send_contact_message::send_contact_message;
use super::middleware::authenticate as auth_middleware;
use crate::domain::category::service::CategoryService;
use crate::domain::contact::service::ContactService;
use crate::domain::post::service::PostService;
use crate::domain::user::service::UserService;
use crate::outbound::mailer::SmtpMailer;
use crate::outbound::repositories::PostgresCategoryRepository;
use crate::outbound::repositories::PostgresPostRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository, PostgresCategoryRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub contact_service: Arc<ContactService<SmtpMailer>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/contact", post(send_contact_message))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_slug", get(get_post))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:cat_slug/posts", get(list_posts_by_category));

    let protected_routes = Router::new()
        .route("/api/posts", post(create_post))
        .route("/api/categories", post(create_category))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
