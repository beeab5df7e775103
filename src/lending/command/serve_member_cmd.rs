use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct ServeMemberCommand {
    lending_service: Box<dyn LendingService>,
}

impl ServeMemberCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServeMemberCommandRequest {
    pub name: String,
}

impl ServeMemberCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServeMemberCommandResponse {
    pub outcome: Outcome,
}

impl ServeMemberCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<ServeMemberCommandRequest, ServeMemberCommandResponse> for ServeMemberCommand {
    async fn execute(&self, req: ServeMemberCommandRequest) -> Result<ServeMemberCommandResponse, CommandError> {
        self.lending_service.serve(req.name.as_str())
            .await.map_err(CommandError::from).map(ServeMemberCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::library::OutcomeKind;
    use crate::lending::command::serve_member_cmd::{ServeMemberCommand, ServeMemberCommandRequest};
    use crate::lending::factory::tests::create_test_service;

    #[tokio::test]
    async fn test_should_run_serve_member() {
        let svc = create_test_service();
        svc.open().await.expect("should open");
        svc.issue_card("Bruce Banner").await.expect("should issue card");
        let cmd = ServeMemberCommand::new(svc);
        let res = cmd.execute(ServeMemberCommandRequest::new("Bruce Banner")).await.expect("should serve");
        assert_eq!("Now serving Bruce Banner.", res.outcome.message);
        assert_eq!(Some("Bruce Banner".to_string()), res.outcome.member);
        let res = cmd.execute(ServeMemberCommandRequest::new("Clark Kent")).await.expect("should answer");
        assert_eq!(OutcomeKind::Declined, res.outcome.kind);
    }
}
