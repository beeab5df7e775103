use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct IssueCardCommand {
    lending_service: Box<dyn LendingService>,
}

impl IssueCardCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueCardCommandRequest {
    pub name: String,
}

impl IssueCardCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueCardCommandResponse {
    pub outcome: Outcome,
}

impl IssueCardCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<IssueCardCommandRequest, IssueCardCommandResponse> for IssueCardCommand {
    async fn execute(&self, req: IssueCardCommandRequest) -> Result<IssueCardCommandResponse, CommandError> {
        self.lending_service.issue_card(req.name.as_str())
            .await.map_err(CommandError::from).map(IssueCardCommandResponse::new)
    }
}
