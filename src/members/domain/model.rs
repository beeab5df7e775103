use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookId, Day};
use crate::members::domain::Member;

// MemberEntity owns the books currently on loan to it, in checkout order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberEntity {
    pub name: String,
    pub loaned_books: Vec<BookEntity>,
}

impl MemberEntity {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            loaned_books: vec![],
        }
    }

    pub fn checkout(&mut self, book: BookEntity) {
        self.loaned_books.push(book);
    }

    pub fn return_book(&mut self, book_id: BookId) -> Option<BookEntity> {
        let position = self.loaned_books.iter().position(|b| b.book_id == book_id)?;
        Some(self.loaned_books.remove(position))
    }

    pub fn find_book_mut(&mut self, book_id: BookId) -> Option<&mut BookEntity> {
        self.loaned_books.iter_mut().find(|b| b.book_id == book_id)
    }

    pub fn overdue_books(&self, today: Day) -> Vec<&BookEntity> {
        self.loaned_books.iter().filter(|b| b.is_overdue(today)).collect()
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.name.to_string()
    }
}

impl Member for MemberEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn book_ids(&self) -> Vec<BookId> {
        self.loaned_books.iter().map(|b| b.book_id).collect()
    }
}
