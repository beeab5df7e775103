use crate::books::domain::Book;
use crate::core::library::{BookId, LibraryError, LibraryResult};
use crate::lending::domain::LendingService;
use crate::members::domain::Member;

/// ConsoleRequest is one parsed line of the interactive console.
#[derive(Debug, PartialEq, Clone)]
pub enum ConsoleRequest {
    Open,
    Close,
    Quit,
    Card(String),
    Serve(String),
    Checkout(Vec<BookId>),
    Checkin(Vec<BookId>),
    Renew(Vec<BookId>),
    Overdue,
    OverdueAll,
    Notices,
    Search(String),
    Catalog,
    Members,
    Help,
}

pub const HELP: &str = "Commands: open, close, quit, card <name>, serve <name>, checkout <ids>, \
checkin <ids>, renew <ids>, overdue, overdue all, notices, search <text>, catalog, members";

impl ConsoleRequest {
    pub fn parse(line: &str) -> LibraryResult<ConsoleRequest> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command.to_lowercase().as_str() {
            "open" => Ok(ConsoleRequest::Open),
            "close" => Ok(ConsoleRequest::Close),
            "quit" | "exit" => Ok(ConsoleRequest::Quit),
            "card" => Ok(ConsoleRequest::Card(required(rest, "card <name>")?)),
            "serve" => Ok(ConsoleRequest::Serve(required(rest, "serve <name>")?)),
            "checkout" => Ok(ConsoleRequest::Checkout(parse_ids(rest)?)),
            "checkin" => Ok(ConsoleRequest::Checkin(parse_ids(rest)?)),
            "renew" => Ok(ConsoleRequest::Renew(parse_ids(rest)?)),
            "overdue" if rest.eq_ignore_ascii_case("all") => Ok(ConsoleRequest::OverdueAll),
            "overdue" if rest.is_empty() => Ok(ConsoleRequest::Overdue),
            "notices" => Ok(ConsoleRequest::Notices),
            // an empty query still reaches the library, which reports the minimum length
            "search" => Ok(ConsoleRequest::Search(rest.to_string())),
            "catalog" => Ok(ConsoleRequest::Catalog),
            "members" => Ok(ConsoleRequest::Members),
            "help" | "" => Ok(ConsoleRequest::Help),
            _ => Err(LibraryError::validation(format!("unknown command '{}'", line).as_str(),
                                              Some("400".to_string()))),
        }
    }

    pub fn is_quit(&self) -> bool {
        *self == ConsoleRequest::Quit
    }
}

fn required(rest: &str, usage: &str) -> LibraryResult<String> {
    if rest.is_empty() {
        Err(LibraryError::validation(format!("usage: {}", usage).as_str(), Some("400".to_string())))
    } else {
        Ok(rest.to_string())
    }
}

// ids may be separated by commas, whitespace or both
fn parse_ids(rest: &str) -> LibraryResult<Vec<BookId>> {
    rest.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<BookId>().map_err(|_|
            LibraryError::validation(format!("invalid book id '{}'", token).as_str(), Some("400".to_string()))))
        .collect()
}

/// Runs one console request against the service and renders the reply as plain text.
pub async fn dispatch(svc: &dyn LendingService, req: &ConsoleRequest) -> LibraryResult<String> {
    let reply = match req {
        ConsoleRequest::Open => svc.open().await?.message,
        ConsoleRequest::Close => svc.close().await?.message,
        ConsoleRequest::Quit => svc.quit().await?.message,
        ConsoleRequest::Card(name) => svc.issue_card(name).await?.message,
        ConsoleRequest::Serve(name) => svc.serve(name).await?.message,
        ConsoleRequest::Checkout(ids) => svc.check_out(ids).await?.message,
        ConsoleRequest::Checkin(ids) => svc.check_in(ids).await?.message,
        ConsoleRequest::Renew(ids) => svc.renew(ids).await?.message,
        ConsoleRequest::Overdue => svc.find_overdue_books().await?.message,
        ConsoleRequest::OverdueAll => svc.find_all_overdue_books().await?.message,
        ConsoleRequest::Notices => svc.send_overdue_notices().await?.message,
        ConsoleRequest::Search(query) => svc.search(query).await?.message,
        ConsoleRequest::Catalog => {
            svc.catalog().await?.iter().map(|b| format!("{}\n", b.describe())).collect()
        }
        ConsoleRequest::Members => {
            svc.members().await?.iter()
                .map(|m| format!("{} ({} books)\n", m.name(), m.loan_count()))
                .collect()
        }
        ConsoleRequest::Help => HELP.to_string(),
    };
    Ok(reply)
}
