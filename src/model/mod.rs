//! Data models for the library.
//!
//! - [`Book`]: a title, linked to its author by `author_id`
//! - [`Author`]: a named writer
//!
//! The link is a plain integer. Nothing enforces that a book's author
//! exists, and removing an author leaves its books untouched.

mod author;
mod book;

pub use author::Author;
pub use book::Book;
