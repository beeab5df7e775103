use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::Outcome;

pub struct SearchCatalogCommand {
    lending_service: Box<dyn LendingService>,
}

impl SearchCatalogCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchCatalogCommandRequest {
    pub query: String,
}

impl SearchCatalogCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchCatalogCommandResponse {
    pub outcome: Outcome,
}

impl SearchCatalogCommandResponse {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<SearchCatalogCommandRequest, SearchCatalogCommandResponse> for SearchCatalogCommand {
    async fn execute(&self, req: SearchCatalogCommandRequest) -> Result<SearchCatalogCommandResponse, CommandError> {
        self.lending_service.search(req.query.as_str())
            .await.map_err(CommandError::from).map(SearchCatalogCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::library::OutcomeKind;
    use crate::lending::command::search_catalog_cmd::{SearchCatalogCommand, SearchCatalogCommandRequest};
    use crate::lending::factory::tests::create_test_service;

    #[tokio::test]
    async fn test_should_run_search_while_closed() {
        let cmd = SearchCatalogCommand::new(create_test_service());
        let res = cmd.execute(SearchCatalogCommandRequest::new("wallpaper")).await.expect("should search");
        assert_eq!("9: The Yellow Wallpaper, by Charlotte Perkins Gilman\n", res.outcome.message);
        assert_eq!(vec![9], res.outcome.book_ids);
        let res = cmd.execute(SearchCatalogCommandRequest::new("zz")).await.expect("should answer");
        assert_eq!(OutcomeKind::Declined, res.outcome.kind);
    }
}
