use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct OverdueBooksCommand {
    lending_service: Box<dyn LendingService>,
}

impl OverdueBooksCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

// OverdueScope selects between the active member's report, the branch-wide report and member notices.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OverdueScope {
    ActiveMember,
    AllMembers,
    Notices,
}

#[derive(Debug, Deserialize)]
pub struct OverdueBooksCommandRequest {
    pub scope: OverdueScope,
}

impl OverdueBooksCommandRequest {
    pub fn new(scope: OverdueScope) -> Self {
        Self {
            scope,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OverdueBooksCommandResponse {
    pub outcome: Outcome,
}

impl OverdueBooksCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<OverdueBooksCommandRequest, OverdueBooksCommandResponse> for OverdueBooksCommand {
    async fn execute(&self, req: OverdueBooksCommandRequest) -> Result<OverdueBooksCommandResponse, CommandError> {
        let res = match req.scope {
            OverdueScope::ActiveMember => self.lending_service.find_overdue_books().await,
            OverdueScope::AllMembers => self.lending_service.find_all_overdue_books().await,
            OverdueScope::Notices => self.lending_service.send_overdue_notices().await,
        };
        res.map_err(CommandError::from).map(OverdueBooksCommandResponse::new)
    }
}
