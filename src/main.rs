use coursedesk::{
    config::{Config, StoreKind},
    migrator::Migrator,
    routes,
    store::{CategoryStore, DatabaseCategoryStore, MemoryCategoryStore},
    AppState,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

async fn open_store(env: &Config) -> Result<Arc<dyn CategoryStore>, Box<dyn std::error::Error>> {
    match env.category_store {
        StoreKind::Database => {
            info!("connecting to {}", &env.database_url);
            let db = Database::connect(&env.database_url).await?;
            Migrator::up(&db, None).await?;
            Ok(Arc::new(DatabaseCategoryStore::new(db)))
        }
        StoreKind::Memory => {
            info!("using in-memory category store");
            Ok(Arc::new(MemoryCategoryStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env = Config::init()?;

    tracing_subscriber::fmt()
        .with_max_level(env.log_level)
        .init();

    let addr = env.bind_address().parse::<SocketAddr>()?;
    let store = open_store(&env).await?;
    let app = routes::router(Arc::new(AppState::new(env, store)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on: {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
