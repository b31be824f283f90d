//! # Booklist - an in-memory books and authors GraphQL API
//!
//! Booklist keeps two related collections, books and authors, in process
//! memory and exposes them through a small GraphQL schema served over HTTP.
//!
//! ## Features
//!
//! - **GraphQL API**: `book`, `author`, `books`, `authors` queries and
//!   `addBook`, `deleteBook`, `addAuthor`, `deleteAuthor` mutations
//! - **GraphiQL**: an interactive explorer on `GET /graphql`
//! - **No persistence**: data is seeded at startup and lost on exit
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API on http://127.0.0.1:5000/graphql
//! booklist serve
//!
//! # Run a one-off query against the sample data
//! booklist query '{ authors { name books { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Book, Author)
//! - [`storage`]: The in-memory library

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads an optional YAML file with server and library settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BooklistError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

/// Data models for books and authors.
pub mod model;

/// In-memory storage.
pub mod storage;

pub mod logging;
