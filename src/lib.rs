pub mod core;
pub mod utils;
pub mod gateway;
pub mod calendar;
pub mod books;
pub mod members;
pub mod catalog;
pub mod lending;
