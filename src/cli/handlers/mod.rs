mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BooklistConfig;
use crate::graphql::{LibrarySchema, build_schema};
use crate::storage::Library;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BooklistConfig,
}

impl CommandContext {
    pub fn new(config: BooklistConfig) -> Self {
        Self { config }
    }

    /// A fresh library, seeded unless the config turns seeding off.
    pub fn library(&self) -> Library {
        if self.config.library.seed {
            Library::seeded()
        } else {
            Library::new()
        }
    }

    pub fn schema(&self) -> LibrarySchema {
        build_schema(self.library().into_shared())
    }
}
