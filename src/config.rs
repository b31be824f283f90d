use crate::error::{BooklistError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BooklistConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql` without a query.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Start with the bundled sample authors and books.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl BooklistConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BooklistError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BooklistConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
