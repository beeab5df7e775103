use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::BookId;
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct CheckinBooksCommand {
    lending_service: Box<dyn LendingService>,
}

impl CheckinBooksCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckinBooksCommandRequest {
    #[serde(default)]
    pub book_ids: Vec<BookId>,
}

impl CheckinBooksCommandRequest {
    pub fn new(book_ids: &[BookId]) -> Self {
        Self {
            book_ids: book_ids.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckinBooksCommandResponse {
    pub outcome: Outcome,
}

impl CheckinBooksCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<CheckinBooksCommandRequest, CheckinBooksCommandResponse> for CheckinBooksCommand {
    async fn execute(&self, req: CheckinBooksCommandRequest) -> Result<CheckinBooksCommandResponse, CommandError> {
        self.lending_service.check_in(&req.book_ids)
            .await.map_err(CommandError::from).map(CheckinBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::lending::command::checkin_books_cmd::{CheckinBooksCommand, CheckinBooksCommandRequest};
    use crate::lending::factory::tests::create_test_service;

    #[tokio::test]
    async fn test_should_run_checkin_books() {
        let svc = create_test_service();
        svc.open().await.expect("should open");
        svc.issue_card("Bruce Banner").await.expect("should issue card");
        svc.serve("Bruce Banner").await.expect("should serve");
        svc.check_out(&[1, 2]).await.expect("should check out");
        let cmd = CheckinBooksCommand::new(svc);
        let res = cmd.execute(CheckinBooksCommandRequest::new(&[9999])).await;
        assert!(matches!(res, Err(CommandError::NotFound { ref message }) if message == "The member does not have book 9999."));
        let res = cmd.execute(CheckinBooksCommandRequest::new(&[2, 1])).await.expect("should check in");
        assert_eq!("Bruce Banner has returned 2 books.", res.outcome.message);
    }
}
