//! GraphQL schema, resolvers and HTTP transport for the library.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://localhost:5000/graphql)
//! booklist serve --port 5000
//!
//! # Execute a query from CLI
//! booklist query '{ books { id name author { name } } }'
//!
//! # Execute a mutation from CLI
//! booklist mutate 'addAuthor(name: "Ursula K. Le Guin") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`, `deleteBook`, `addAuthor`, `deleteAuthor`

mod schema;
mod server;
mod types;

pub use schema::{LibrarySchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
