pub mod session_cmd;
pub mod issue_card_cmd;
pub mod serve_member_cmd;
pub mod checkout_books_cmd;
pub mod checkin_books_cmd;
pub mod renew_books_cmd;
pub mod overdue_books_cmd;
pub mod search_catalog_cmd;
pub mod list_catalog_cmd;
pub mod list_members_cmd;
