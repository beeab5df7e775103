use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{BookId, LibraryResult};
use crate::lending::dto::Outcome;
use crate::members::dto::MemberDto;

pub mod model;
pub mod service;

#[async_trait]
pub trait LendingService: Sync + Send {
    async fn open(&self) -> LibraryResult<Outcome>;
    async fn close(&self) -> LibraryResult<Outcome>;
    async fn quit(&self) -> LibraryResult<Outcome>;
    async fn issue_card(&self, name: &str) -> LibraryResult<Outcome>;
    async fn serve(&self, name: &str) -> LibraryResult<Outcome>;
    async fn check_out(&self, book_ids: &[BookId]) -> LibraryResult<Outcome>;
    async fn check_in(&self, book_ids: &[BookId]) -> LibraryResult<Outcome>;
    async fn renew(&self, book_ids: &[BookId]) -> LibraryResult<Outcome>;
    async fn find_overdue_books(&self) -> LibraryResult<Outcome>;
    async fn find_all_overdue_books(&self) -> LibraryResult<Outcome>;
    async fn send_overdue_notices(&self) -> LibraryResult<Outcome>;
    async fn search(&self, query: &str) -> LibraryResult<Outcome>;
    async fn catalog(&self) -> LibraryResult<Vec<BookDto>>;
    async fn members(&self) -> LibraryResult<Vec<MemberDto>>;
}
