use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::members::dto::MemberDto;

pub struct ListMembersCommand {
    lending_service: Box<dyn LendingService>,
}

impl ListMembersCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMembersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl ListMembersCommandResponse {
    pub fn new(members: Vec<MemberDto>) -> Self {
        Self {
            members,
        }
    }
}

#[async_trait]
impl Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand {
    async fn execute(&self, _req: ListMembersCommandRequest) -> Result<ListMembersCommandResponse, CommandError> {
        self.lending_service.members()
            .await.map_err(CommandError::from).map(ListMembersCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::lending::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
    use crate::lending::factory::tests::create_test_service;

    #[tokio::test]
    async fn test_should_run_list_members() {
        let svc = create_test_service();
        svc.open().await.expect("should open");
        svc.issue_card("Bruce Banner").await.expect("should issue card");
        svc.issue_card("Clark Kent").await.expect("should issue card");
        let res = ListMembersCommand::new(svc)
            .execute(ListMembersCommandRequest::default()).await.expect("should list");
        let names: Vec<&str> = res.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(vec!["Bruce Banner", "Clark Kent"], names);
    }
}
