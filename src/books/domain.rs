use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Day};

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn due_date(&self) -> Option<Day>;

    fn status(&self) -> BookStatus {
        if self.due_date().is_some() {
            BookStatus::CheckedOut
        } else {
            BookStatus::Available
        }
    }

    // due exactly today is not overdue
    fn is_overdue(&self, today: Day) -> bool {
        matches!(self.due_date(), Some(due_date) if due_date < today)
    }

    fn listing(&self) -> String {
        format!("{}, by {}", self.title(), self.author())
    }

    fn describe(&self) -> String {
        format!("{}: {}", self.id(), self.listing())
    }

    fn matches(&self, lowercase_query: &str) -> bool {
        self.title().to_lowercase().contains(lowercase_query)
            || self.author().to_lowercase().contains(lowercase_query)
    }
}
