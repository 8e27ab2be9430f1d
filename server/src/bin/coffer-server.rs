use coffer_server::config::Config;
use tracing::Level;

#[actix_web::main]
async fn main() -> coffer_server::Result<()> {
    dotenvy::dotenv().ok();

    let c = Config::new::<&str>(None)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::from(c.log_level))
        .init();

    coffer_server::app::start_server(c).await
}
