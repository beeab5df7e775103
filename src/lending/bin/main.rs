use std::net::SocketAddr;
use tracing::info;
use lending_library::core::controller::AppState;
use lending_library::core::domain::Configuration;
use lending_library::lending::controller::router;
use lending_library::lending::factory::load_library;
use lending_library::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env("dev");
    let library = load_library(&config)?;
    let addr: SocketAddr = config.bind_address.parse()?;
    let app = router(AppState::new(config, library));

    info!(address = %addr, "library listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
