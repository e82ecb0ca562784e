use axum::{
    routing::{get, post},
    Router,
};
use quiz_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    info!("Connected to PostgreSQL database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("All migrations completed");

    let app_state = AppState::new(pool);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/questions",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/api/questions/:id",
            get(routes::questions::get_question)
                .put(routes::questions::update_question)
                .delete(routes::questions::delete_question),
        )
        .route("/api/quiz/submit", post(routes::quiz::submit_quiz))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
