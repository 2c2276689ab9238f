pub mod book;
pub mod config;
pub mod day;
pub mod directory;
pub mod month;
pub mod upcoming;
