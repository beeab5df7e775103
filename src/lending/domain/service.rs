use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{BookId, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::lending::domain::LendingService;
use crate::lending::domain::model::Library;
use crate::lending::dto::Outcome;
use crate::members::dto::MemberDto;

pub(crate) struct LendingServiceImpl {
    branch_id: String,
    library: Arc<Mutex<Library>>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub(crate) fn new(config: &Configuration, library: Arc<Mutex<Library>>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            library,
            events_publisher,
        }
    }

    // the guard never outlives this call, so it is not held across an await
    fn with_library<T>(&self, operation: &str, f: impl FnOnce(&mut Library) -> LibraryResult<T>) -> LibraryResult<T> {
        let mut library = self.library.lock()
            .map_err(|err| LibraryError::runtime(format!("library lock poisoned {:?}", err).as_str(), None))?;
        f(&mut library).map_err(|err| {
            warn!(branch = self.branch_id.as_str(), operation, error = %err, "operation rejected");
            err
        })
    }

    // the transaction is already committed when this runs, so a failed publish is logged, not returned
    async fn publish(&self, outcome: &Outcome, name: &str, group: &str, kind: DomainEventType) {
        if !outcome.is_completed() {
            return;
        }
        let key = outcome.member.as_deref().unwrap_or(self.branch_id.as_str());
        let metadata = HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]);
        let published = match DomainEvent::new(kind, name, group, key, &metadata, outcome) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        match published {
            Ok(_) => info!(branch = self.branch_id.as_str(), event = name, key, "{}", outcome.message.trim()),
            Err(err) => warn!(branch = self.branch_id.as_str(), event = name, key, error = %err, "failed to publish event"),
        }
    }
}

#[async_trait]
impl LendingService for LendingServiceImpl {
    async fn open(&self) -> LibraryResult<Outcome> {
        let outcome = self.with_library("open", |library| library.open())?;
        self.publish(&outcome, "library_opened", "session", DomainEventType::Updated).await;
        Ok(outcome)
    }

    async fn close(&self) -> LibraryResult<Outcome> {
        let outcome = self.with_library("close", |library| library.close())?;
        self.publish(&outcome, "library_closed", "session", DomainEventType::Updated).await;
        Ok(outcome)
    }

    async fn quit(&self) -> LibraryResult<Outcome> {
        let outcome = self.with_library("quit", |library| library.quit())?;
        self.publish(&outcome, "library_quit", "session", DomainEventType::Deleted).await;
        Ok(outcome)
    }

    async fn issue_card(&self, name: &str) -> LibraryResult<Outcome> {
        let outcome = self.with_library("issue_card", |library| library.issue_card(name))?;
        self.publish(&outcome, "card_issued", "members", DomainEventType::Added).await;
        Ok(outcome)
    }

    async fn serve(&self, name: &str) -> LibraryResult<Outcome> {
        let outcome = self.with_library("serve", |library| library.serve(name))?;
        self.publish(&outcome, "member_served", "members", DomainEventType::Updated).await;
        Ok(outcome)
    }

    async fn check_out(&self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let outcome = self.with_library("check_out", |library| library.check_out(book_ids))?;
        self.publish(&outcome, "books_checked_out", "loans", DomainEventType::Added).await;
        Ok(outcome)
    }

    async fn check_in(&self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let outcome = self.with_library("check_in", |library| library.check_in(book_ids))?;
        self.publish(&outcome, "books_returned", "loans", DomainEventType::Deleted).await;
        Ok(outcome)
    }

    async fn renew(&self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let outcome = self.with_library("renew", |library| library.renew(book_ids))?;
        self.publish(&outcome, "books_renewed", "loans", DomainEventType::Updated).await;
        Ok(outcome)
    }

    async fn find_overdue_books(&self) -> LibraryResult<Outcome> {
        self.with_library("find_overdue_books", |library| library.find_overdue_for_active_member())
    }

    async fn find_all_overdue_books(&self) -> LibraryResult<Outcome> {
        self.with_library("find_all_overdue_books", |library| library.find_all_overdue())
    }

    async fn send_overdue_notices(&self) -> LibraryResult<Outcome> {
        self.with_library("send_overdue_notices", |library| library.send_overdue_notices())
    }

    async fn search(&self, query: &str) -> LibraryResult<Outcome> {
        self.with_library("search", |library| Ok(library.search(query)))
    }

    async fn catalog(&self) -> LibraryResult<Vec<BookDto>> {
        self.with_library("catalog", |library| Ok(library.catalog_books()))
    }

    async fn members(&self) -> LibraryResult<Vec<MemberDto>> {
        self.with_library("members", |library| Ok(library.member_list()))
    }
}
