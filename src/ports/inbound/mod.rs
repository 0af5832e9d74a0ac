pub mod client;
pub mod display;
