use axum::extract::{FromRef, MatchedPath};
use axum::http::{Method, Request};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::domain::CouponCatalogue;
use crate::routes::{check_health, list_coupons};

#[derive(Clone)]
pub struct AppState {
    pub catalogue: CouponCatalogue,
}

impl FromRef<AppState> for CouponCatalogue {
    fn from_ref(state: &AppState) -> Self {
        state.catalogue.clone()
    }
}

pub fn get_app_state() -> AppState {
    AppState {
        catalogue: CouponCatalogue::seeded(),
    }
}

pub async fn run(listener: TcpListener, state: AppState) {
    let app = router(state);

    axum::serve(listener, app)
        .await
        .expect("Failed to start up the application")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/coupons", get(list_coupons))
        .with_state(state)
        .route("/health_check", get(check_health))
        // Browser clients of the demo frontend are served from a different
        // origin, so every route answers with permissive CORS headers.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(
            // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::info_span!(
                    "Starting HTTP request",
                    method = ?request.method(),
                    path,
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
}
