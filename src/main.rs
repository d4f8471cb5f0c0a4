use std::io;
use std::sync::Arc;

use bookstore_orders::config::Settings;
use bookstore_orders::infrastructure::catalogue_client::HttpCatalogueClient;
use bookstore_orders::infrastructure::order_repo::DieselOrderRepository;
use bookstore_orders::{build_server, create_pool, run_migrations, OrderService};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let pool = create_pool(&settings.database_url).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    let service = OrderService::new(
        Arc::new(DieselOrderRepository::new(pool)),
        Arc::new(HttpCatalogueClient::new(&settings.catalogue_book_url)),
    );

    log::info!(
        "Starting server at http://{}:{} (catalogue: {})",
        settings.host,
        settings.port,
        settings.catalogue_book_url
    );

    build_server(service, &settings.host, settings.port)?.await
}
