use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub struct ListCatalogCommand {
    lending_service: Box<dyn LendingService>,
}

impl ListCatalogCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListCatalogCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListCatalogCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListCatalogCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListCatalogCommandRequest, ListCatalogCommandResponse> for ListCatalogCommand {
    async fn execute(&self, _req: ListCatalogCommandRequest) -> Result<ListCatalogCommandResponse, CommandError> {
        self.lending_service.catalog()
            .await.map_err(CommandError::from).map(ListCatalogCommandResponse::new)
    }
}
