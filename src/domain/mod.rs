pub mod app;
pub mod catalog;
pub mod character;
pub mod name_index;
pub mod options;
pub mod profile;
pub mod search;
pub mod session;
pub mod utils;
