use reqwest::Client;
use std::net::SocketAddr;
use talentscout_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes,
    services::ai_service::AIService,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let http_client = Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let ai_service = AIService::new(
        config.ollama_url.clone(),
        config.ollama_model.clone(),
        http_client,
    );
    if config.ollama_url.is_none() {
        tracing::warn!("OLLAMA_URL is not set; question generation will be unavailable");
    }

    let app_state = AppState::new(pool, ai_service);

    let app = routes::api_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
