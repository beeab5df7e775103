use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::BookId;
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct RenewBooksCommand {
    lending_service: Box<dyn LendingService>,
}

impl RenewBooksCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenewBooksCommandRequest {
    #[serde(default)]
    pub book_ids: Vec<BookId>,
}

impl RenewBooksCommandRequest {
    pub fn new(book_ids: &[BookId]) -> Self {
        Self {
            book_ids: book_ids.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenewBooksCommandResponse {
    pub outcome: Outcome,
}

impl RenewBooksCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<RenewBooksCommandRequest, RenewBooksCommandResponse> for RenewBooksCommand {
    async fn execute(&self, req: RenewBooksCommandRequest) -> Result<RenewBooksCommandResponse, CommandError> {
        self.lending_service.renew(&req.book_ids)
            .await.map_err(CommandError::from).map(RenewBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::lending::command::renew_books_cmd::{RenewBooksCommand, RenewBooksCommandRequest};
    use crate::lending::factory::tests::create_test_service;

    #[tokio::test]
    async fn test_should_run_renew_books() {
        let svc = create_test_service();
        svc.open().await.expect("should open");
        let cmd = RenewBooksCommand::new(create_test_service());
        let res = cmd.execute(RenewBooksCommandRequest::new(&[1])).await;
        assert!(matches!(res, Err(CommandError::State { .. })));

        svc.issue_card("Bruce Banner").await.expect("should issue card");
        svc.serve("Bruce Banner").await.expect("should serve");
        svc.check_out(&[4]).await.expect("should check out");
        let cmd = RenewBooksCommand::new(svc);
        let res = cmd.execute(RenewBooksCommandRequest::new(&[4])).await.expect("should renew");
        assert_eq!("1 books have been renewed for Bruce Banner.", res.outcome.message);
    }
}
