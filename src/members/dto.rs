use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::BookId;
use crate::members::domain::Member;
use crate::members::domain::model::MemberEntity;

// MemberDto abstracts a library member and the ids of the books it holds.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub name: String,
    pub book_ids: Vec<BookId>,
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.name.to_string()
    }
}

impl Member for MemberDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn book_ids(&self) -> Vec<BookId> {
        self.book_ids.clone()
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            name: other.name.to_string(),
            book_ids: other.book_ids(),
        }
    }
}
