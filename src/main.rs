mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app().expect("leptos configuration failed");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "rental-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
