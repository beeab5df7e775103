use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct SessionCommand {
    lending_service: Box<dyn LendingService>,
}

impl SessionCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SessionAction {
    Open,
    Close,
    Quit,
}

#[derive(Debug, Deserialize)]
pub struct SessionCommandRequest {
    pub action: SessionAction,
}

impl SessionCommandRequest {
    pub fn new(action: SessionAction) -> Self {
        Self {
            action,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionCommandResponse {
    pub outcome: Outcome,
}

impl SessionCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<SessionCommandRequest, SessionCommandResponse> for SessionCommand {
    async fn execute(&self, req: SessionCommandRequest) -> Result<SessionCommandResponse, CommandError> {
        let res = match req.action {
            SessionAction::Open => self.lending_service.open().await,
            SessionAction::Close => self.lending_service.close().await,
            SessionAction::Quit => self.lending_service.quit().await,
        };
        res.map_err(CommandError::from).map(SessionCommandResponse::new)
    }
}
