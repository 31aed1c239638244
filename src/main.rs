use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use novel_portal::auth::key_manager::KeyManager;
use novel_portal::gateway::{transport::create_client, Gateway, ReqwestTransport, RouteTable};
use novel_portal::settings::Settings;
use novel_portal::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();

    let key_manager = Arc::new(KeyManager::new(
        &settings.admin_key_path,
        settings.key_ttl_warning_days,
        settings.key_ttl_limit_days,
    )?);

    let transport = Arc::new(ReqwestTransport::new(create_client()?));
    let gateway = Gateway::new(settings.backend_url.clone(), Arc::new(RouteTable::default()), transport);

    let state = AppState {
        gateway,
        key_manager,
    };

    let app = novel_portal::app(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
            .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
