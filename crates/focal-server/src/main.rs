use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use focal_api::auth::{self, AppState, AppStateInner};
use focal_api::media::MediaStore;
use focal_api::middleware::{optional_auth, require_auth};
use focal_api::{
    bookings, dashboard, directory, favorites, likes, news, photographers, photos, profiles,
    support,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "focal=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("FOCAL_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("FOCAL_DB_PATH").unwrap_or_else(|_| "focal.db".into());
    let media_dir = std::env::var("FOCAL_MEDIA_DIR").unwrap_or_else(|_| "media".into());
    let host = std::env::var("FOCAL_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("FOCAL_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database and media storage
    let db = focal_db::Database::open(&PathBuf::from(&db_path))?;
    let media = MediaStore::new(PathBuf::from(&media_dir)).await?;
    let media_root = media.root().to_path_buf();

    let state: AppState = Arc::new(AppStateInner {
        db,
        media,
        jwt_secret,
    });

    // Open routes; some personalize their response when a token is present
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/specialists", get(directory::list_specialists))
        .route("/specialists/{id}", get(photographers::photographer_detail))
        .route("/gallery", get(photos::gallery))
        .route("/photos/featured", get(photos::featured_photos))
        .route("/news", get(news::list_news))
        .route("/news/{id}", get(news::news_detail))
        .layer(middleware::from_fn_with_state(state.clone(), optional_auth))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/profile", get(profiles::get_profile))
        .route("/profile/photographer", put(profiles::update_photographer_profile))
        .route("/profile/client", put(profiles::update_client_profile))
        .route("/profile/image", post(profiles::upload_profile_image))
        .route("/profile/image", delete(profiles::delete_profile_image))
        .route("/account/password", post(auth::change_password))
        .route("/account", delete(auth::delete_account))
        .route("/specialists/{id}/bookings", post(bookings::create_booking))
        .route("/specialists/{id}/favorite", post(favorites::toggle_favorite))
        .route("/bookings/{id}/status", put(bookings::update_booking_status))
        .route("/bookings/{id}/cancel", post(bookings::cancel_booking))
        .route("/photos", post(photos::upload_photos))
        .route("/photos/{id}", delete(photos::delete_photo))
        .route("/photos/{id}/like", post(likes::toggle_photo_like))
        .route("/admin/news", post(news::create_news))
        .route("/support", post(support::create_ticket))
        .route("/support", get(support::my_tickets))
        .route("/support/inbox", get(support::inbox))
        .route("/support/{id}/reply", post(support::reply))
        .route("/support/{id}", delete(support::delete_ticket))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/media", ServeDir::new(media_root))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Focal server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
