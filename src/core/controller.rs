use std::sync::{Arc, Mutex};
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::lending::domain::model::Library;

// AppState is shared by every request; all of them act on the same library instance.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub library: Arc<Mutex<Library>>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration, library: Arc<Mutex<Library>>) -> AppState {
        let publisher = create_publisher(&config);
        AppState {
            config,
            library,
            publisher,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::State { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}
