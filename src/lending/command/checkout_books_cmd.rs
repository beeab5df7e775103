use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::BookId;
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct CheckoutBooksCommand {
    lending_service: Box<dyn LendingService>,
}

impl CheckoutBooksCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBooksCommandRequest {
    #[serde(default)]
    pub book_ids: Vec<BookId>,
}

impl CheckoutBooksCommandRequest {
    pub fn new(book_ids: &[BookId]) -> Self {
        Self {
            book_ids: book_ids.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBooksCommandResponse {
    pub outcome: Outcome,
}

impl CheckoutBooksCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<CheckoutBooksCommandRequest, CheckoutBooksCommandResponse> for CheckoutBooksCommand {
    async fn execute(&self, req: CheckoutBooksCommandRequest) -> Result<CheckoutBooksCommandResponse, CommandError> {
        self.lending_service.check_out(&req.book_ids)
            .await.map_err(CommandError::from).map(CheckoutBooksCommandResponse::new)
    }
}
