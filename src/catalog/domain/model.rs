use std::collections::HashSet;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::seed::CatalogSeedEntry;
use crate::core::library::BookId;

// Catalog holds the books available for loan. Lookups go by id equality, never by position,
// so the order can change freely as books leave and come back.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Catalog {
    books: Vec<BookEntity>,
}

impl Catalog {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self { books }
    }

    // ids are assigned 1..=N in seed order
    pub fn from_seed(seed: &[CatalogSeedEntry]) -> Self {
        let books = seed.iter().zip(1..)
            .map(|(entry, book_id)| BookEntity::new(book_id, entry.title.as_str(), entry.author.as_str()))
            .collect();
        Self { books }
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, book_id: BookId) -> bool {
        self.books.iter().any(|b| b.book_id == book_id)
    }

    pub fn book_ids(&self) -> Vec<BookId> {
        self.books.iter().map(|b| b.book_id).collect()
    }

    pub fn take(&mut self, book_id: BookId) -> Option<BookEntity> {
        let position = self.books.iter().position(|b| b.book_id == book_id)?;
        Some(self.books.remove(position))
    }

    // returned books go to the end of the catalog
    pub fn restore(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    // Copies sharing title and author collapse to the first one in catalog order.
    pub fn search(&self, query: &str) -> Vec<&BookEntity> {
        let lowercase_query = query.to_lowercase();
        let mut seen = HashSet::new();
        self.books.iter()
            .filter(|b| b.matches(lowercase_query.as_str()))
            .filter(|b| seen.insert(b.listing()))
            .collect()
    }
}
