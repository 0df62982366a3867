pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::store::TriviaStore;
use crate::services::trivia_service::TriviaService;

#[derive(Clone)]
pub struct AppState {
    pub trivia_service: TriviaService,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            trivia_service: TriviaService::new(store),
        }
    }
}
