use crate::core::domain::Identifiable;
use crate::core::library::BookId;

pub mod model;

// Member is keyed by name; there is no separate member id.
pub trait Member: Identifiable {
    fn name(&self) -> &str;
    fn book_ids(&self) -> Vec<BookId>;

    fn loan_count(&self) -> usize {
        self.book_ids().len()
    }

    fn is_holding(&self, book_id: BookId) -> bool {
        self.book_ids().contains(&book_id)
    }

    fn format_notice(&self, text: &str) -> String {
        format!("{}: {}", self.name(), text)
    }
}
