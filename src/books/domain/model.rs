use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookId, Day};

// BookEntity is one catalog entry. Two copies of the same title are two entities with distinct ids.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub due_date: Option<Day>,
}

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            due_date: None,
        }
    }

    pub fn check_out(&mut self, due_date: Day) {
        self.due_date = Some(due_date);
    }

    pub fn check_in(&mut self) {
        self.due_date = None;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn due_date(&self) -> Option<Day> {
        self.due_date
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
