pub mod pages;
pub mod user_handlers;
