pub mod config;
pub mod constants;
pub mod migrator;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;
pub mod utils;

use std::sync::Arc;

use config::Config;
use service::CategoryService;
use store::CategoryStore;

pub struct AppState {
    pub env: Config,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(env: Config, store: Arc<dyn CategoryStore>) -> Self {
        Self {
            env,
            categories: CategoryService::new(store),
        }
    }
}
