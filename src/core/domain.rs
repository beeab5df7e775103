use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::library::Day;
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by library objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_loans: usize,
    pub loan_days: Day,
    pub min_search_chars: usize,
    pub collection_path: String,
    pub bind_address: String,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_loans: 3,
            loan_days: 7,
            min_search_chars: 4,
            collection_path: "data/collection.txt".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn from_env(branch_id: &str) -> Self {
        Configuration::from_vars(branch_id, |name| std::env::var(name).ok())
    }

    /// Applies `LIBRARY_*` overrides read through `lookup`. Loan settings that do not
    /// parse or fall outside their range are logged and left at their defaults.
    pub fn from_vars(branch_id: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Some(path) = lookup("LIBRARY_COLLECTION") {
            config.collection_path = path;
        }
        if let Some(addr) = lookup("LIBRARY_ADDR") {
            config.bind_address = addr;
        }
        if let Some(max_loans) = parse_var(&lookup, "LIBRARY_MAX_LOANS", 1..=usize::MAX) {
            config.max_loans = max_loans;
        }
        if let Some(loan_days) = parse_var(&lookup, "LIBRARY_LOAN_DAYS", 1..=MAX_LOAN_DAYS) {
            config.loan_days = loan_days;
        }
        config
    }
}

pub const MAX_LOAN_DAYS: Day = 365;

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, range: RangeInclusive<T>) -> Option<T>
    where T: FromStr + PartialOrd + Display {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) if range.contains(&value) => Some(value),
        Ok(value) => {
            warn!(variable = name, value = %value, min = %range.start(), max = %range.end(), "ignoring out of range setting");
            None
        }
        Err(_) => {
            warn!(variable = name, value = raw.as_str(), "ignoring unparseable setting");
            None
        }
    }
}
