use std::collections::{HashMap, HashSet};
use tracing::debug;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::calendar::Calendar;
use crate::catalog::domain::model::Catalog;
use crate::catalog::seed::CatalogSeedEntry;
use crate::core::domain::Configuration;
use crate::core::library::{BookId, BookLocation, Day, LibraryError, LibraryResult};
use crate::lending::dto::Outcome;
use crate::members::domain::Member;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;

pub(crate) const OVERDUE_NOTICE: &str = "You have overdue books, please return or renew them.";

/// Library is the session state machine of a single branch.
///
/// It starts closed. `open` advances the calendar by one day; every lending operation
/// requires the library to be open, and the member-scoped ones also require a member
/// selected with `serve`. A book lives in exactly one place at a time: the catalog or
/// the loan list of one member.
#[derive(Debug)]
pub struct Library {
    max_loans: usize,
    loan_days: Day,
    min_search_chars: usize,
    calendar: Calendar,
    catalog: Catalog,
    members: Vec<MemberEntity>,
    member_index: HashMap<String, usize>,
    active_member: Option<usize>,
    open: bool,
}

impl Library {
    pub fn new(config: &Configuration, seed: &[CatalogSeedEntry]) -> Self {
        Self {
            max_loans: config.max_loans,
            loan_days: config.loan_days,
            min_search_chars: config.min_search_chars,
            calendar: Calendar::new(),
            catalog: Catalog::from_seed(seed),
            members: vec![],
            member_index: HashMap::new(),
            active_member: None,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_day(&self) -> Day {
        self.calendar.current_day()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn members(&self) -> &[MemberEntity] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberEntity> {
        self.member_index.get(name).map(|index| &self.members[*index])
    }

    pub fn active_member(&self) -> Option<&MemberEntity> {
        self.active_member.map(|index| &self.members[index])
    }

    pub fn catalog_books(&self) -> Vec<BookDto> {
        self.catalog.books().iter().map(BookDto::from).collect()
    }

    pub fn member_list(&self) -> Vec<MemberDto> {
        self.members.iter().map(MemberDto::from).collect()
    }

    pub fn open(&mut self) -> LibraryResult<Outcome> {
        if self.open {
            return Err(LibraryError::already_open());
        }
        let day = self.calendar.advance();
        self.open = true;
        debug!(day, "library opened");
        Ok(Outcome::completed(format!("Today is day {}.", day).as_str()))
    }

    pub fn close(&mut self) -> LibraryResult<Outcome> {
        self.ensure_open()?;
        self.open = false;
        debug!(day = self.current_day(), "library closed");
        Ok(Outcome::completed("Good night."))
    }

    // unlike close, quitting an already closed library is fine
    pub fn quit(&mut self) -> LibraryResult<Outcome> {
        self.open = false;
        Ok(Outcome::completed("The library is now closed for renovations."))
    }

    pub fn issue_card(&mut self, name: &str) -> LibraryResult<Outcome> {
        self.ensure_open()?;
        if self.member_index.contains_key(name) {
            return Ok(Outcome::declined(format!("{} already has a library card.", name).as_str()).with_member(name));
        }
        self.member_index.insert(name.to_string(), self.members.len());
        self.members.push(MemberEntity::new(name));
        Ok(Outcome::completed(format!("Library card issued to {}", name).as_str()).with_member(name))
    }

    pub fn serve(&mut self, name: &str) -> LibraryResult<Outcome> {
        self.ensure_open()?;
        match self.member_index.get(name) {
            Some(index) => {
                self.active_member = Some(*index);
                Ok(Outcome::completed(format!("Now serving {}.", name).as_str()).with_member(name))
            }
            None => {
                Ok(Outcome::declined(format!("{} does not have a library card.", name).as_str()).with_member(name))
            }
        }
    }

    /// Lends the given catalog books to the active member, all or nothing.
    pub fn check_out(&mut self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let index = self.active_index()?;
        let name = self.members[index].name.to_string();
        if book_ids.len() > self.max_loans || self.members[index].loan_count() + book_ids.len() > self.max_loans {
            return Ok(Outcome::declined(format!("Members cannot check out more than {} books.", self.max_loans).as_str())
                .with_member(name.as_str()));
        }
        if book_ids.is_empty() {
            return Ok(Outcome::declined("You must check out at least one book.").with_member(name.as_str()));
        }
        let mut requested = HashSet::new();
        for book_id in book_ids {
            if !self.catalog.contains(*book_id) || !requested.insert(*book_id) {
                return Err(LibraryError::book_not_found(*book_id, BookLocation::Catalog));
            }
        }

        let due_date = self.due_date()?;
        for book_id in book_ids {
            let mut book = self.catalog.take(*book_id)
                .ok_or_else(|| LibraryError::book_not_found(*book_id, BookLocation::Catalog))?;
            book.check_out(due_date);
            self.members[index].checkout(book);
        }
        debug!(member = name.as_str(), due_date, books = ?book_ids, "books checked out");
        Ok(Outcome::completed(format!("{} books have been checked out to {}.", book_ids.len(), name).as_str())
            .with_member(name.as_str()).with_books(book_ids.to_vec()))
    }

    /// Takes the given books back from the active member into the catalog, all or nothing.
    pub fn check_in(&mut self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let index = self.active_index()?;
        let name = self.members[index].name.to_string();
        if book_ids.is_empty() {
            return Ok(Outcome::declined("You must check in at least one book.").with_member(name.as_str()));
        }
        if self.members[index].loan_count() == 0 {
            return Ok(Outcome::declined("The member doesn't currently have any books out on loan").with_member(name.as_str()));
        }
        let mut requested = HashSet::new();
        for book_id in book_ids {
            if !self.members[index].is_holding(*book_id) || !requested.insert(*book_id) {
                return Err(LibraryError::book_not_found(*book_id, BookLocation::Loans));
            }
        }

        for book_id in book_ids {
            let mut book = self.members[index].return_book(*book_id)
                .ok_or_else(|| LibraryError::book_not_found(*book_id, BookLocation::Loans))?;
            book.check_in();
            self.catalog.restore(book);
        }
        debug!(member = name.as_str(), books = ?book_ids, "books checked in");
        Ok(Outcome::completed(format!("{} has returned {} books.", name, book_ids.len()).as_str())
            .with_member(name.as_str()).with_books(book_ids.to_vec()))
    }

    /// Moves the due date of the given loans to a full loan period from today.
    /// Every id is validated before any book is renewed; a repeated id counts as missing.
    pub fn renew(&mut self, book_ids: &[BookId]) -> LibraryResult<Outcome> {
        let index = self.active_index()?;
        let name = self.members[index].name.to_string();
        if book_ids.is_empty() {
            return Ok(Outcome::declined("Please specify at least one book id to renew.").with_member(name.as_str()));
        }
        let mut requested = HashSet::new();
        for book_id in book_ids {
            if !self.members[index].is_holding(*book_id) || !requested.insert(*book_id) {
                return Err(LibraryError::book_not_found(*book_id, BookLocation::Loans));
            }
        }

        let due_date = self.due_date()?;
        for book_id in book_ids {
            let book = self.members[index].find_book_mut(*book_id)
                .ok_or_else(|| LibraryError::book_not_found(*book_id, BookLocation::Loans))?;
            book.check_out(due_date);
        }
        debug!(member = name.as_str(), due_date, books = ?book_ids, "books renewed");
        Ok(Outcome::completed(format!("{} books have been renewed for {}.", book_ids.len(), name).as_str())
            .with_member(name.as_str()).with_books(book_ids.to_vec()))
    }

    pub fn find_overdue_for_active_member(&self) -> LibraryResult<Outcome> {
        let index = self.active_index()?;
        let member = &self.members[index];
        let overdue = member.overdue_books(self.current_day());
        let mut report = format!("\nOverdue books for {}: \n", member.name);
        if overdue.is_empty() {
            report.push_str("\tNone\n");
        }
        for book in overdue.iter() {
            report.push_str(format!("\t{}\n", book.describe()).as_str());
        }
        Ok(Outcome::completed(report.as_str())
            .with_member(member.name.as_str())
            .with_books(overdue.iter().map(|b| b.book_id).collect()))
    }

    pub fn find_all_overdue(&self) -> LibraryResult<Outcome> {
        self.ensure_open()?;
        let today = self.current_day();
        let mut report = String::new();
        let mut book_ids = vec![];
        for member in self.members.iter() {
            let overdue = member.overdue_books(today);
            if overdue.is_empty() {
                continue;
            }
            report.push_str(format!("{}:\n", member.name).as_str());
            for book in overdue {
                report.push_str(format!("\t{}\n", book.describe()).as_str());
                book_ids.push(book.book_id);
            }
        }
        if report.is_empty() {
            return Ok(Outcome::declined("No books are overdue."));
        }
        Ok(Outcome::completed(report.as_str()).with_books(book_ids))
    }

    pub fn send_overdue_notices(&self) -> LibraryResult<Outcome> {
        self.ensure_open()?;
        let today = self.current_day();
        let notices: Vec<String> = self.members.iter()
            .filter(|m| !m.overdue_books(today).is_empty())
            .map(|m| format!("{}\n", m.format_notice(OVERDUE_NOTICE)))
            .collect();
        if notices.is_empty() {
            return Ok(Outcome::declined("No books are overdue."));
        }
        Ok(Outcome::completed(notices.concat().as_str()))
    }

    // search needs neither an open library nor an active member
    pub fn search(&self, query: &str) -> Outcome {
        if query.chars().count() < self.min_search_chars {
            return Outcome::declined(format!("Search string must contain at least {} characters.",
                                             count_word(self.min_search_chars)).as_str());
        }
        let found = self.catalog.search(query);
        if found.is_empty() {
            return Outcome::declined("No books found.");
        }
        let report: String = found.iter().map(|b| format!("{}\n", b.describe())).collect();
        Outcome::completed(report.as_str()).with_books(found.iter().map(|b| b.book_id).collect())
    }

    // a loan started today is due a full loan period later
    fn due_date(&self) -> LibraryResult<Day> {
        self.current_day().checked_add(self.loan_days).ok_or_else(|| LibraryError::validation(
            format!("loan period of {} days runs past the last calendar day", self.loan_days).as_str(),
            Some("400".to_string())))
    }

    fn ensure_open(&self) -> LibraryResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(LibraryError::not_open())
        }
    }

    fn active_index(&self) -> LibraryResult<usize> {
        self.ensure_open()?;
        self.active_member.ok_or_else(LibraryError::no_active_member)
    }

    #[cfg(test)]
    pub(crate) fn advance_days(&mut self, days: Day) {
        for _ in 0..days {
            self.calendar.advance();
        }
    }
}

fn count_word(count: usize) -> String {
    const WORDS: [&str; 10] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
    WORDS.get(count).map(|w| w.to_string()).unwrap_or_else(|| count.to_string())
}
