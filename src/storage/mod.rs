//! In-memory storage for books and authors.
//!
//! Everything lives in a [`Library`] owned by the running process and handed
//! to resolvers through the GraphQL context. Nothing is persisted: the data
//! is seeded at startup and lost on exit.
//!
//! ## Components
//!
//! - [`Library`]: the two collections and their id counters
//! - [`SharedLibrary`]: a library behind one async mutex
//! - [`seed`]: the bundled sample authors and books

mod library;
pub mod seed;

pub use library::{Library, SharedLibrary};
