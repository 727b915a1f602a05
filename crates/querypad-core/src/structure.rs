//! Server structure description for the database picker.
//!
//! The structure is a read-only catalog supplied by the connection layer.
//! Consumers treat a missing structure as [`ServerStructure::empty`], never
//! as an error.

use serde::{Deserialize, Serialize};

/// Name of a database within the server structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseName(pub String);

impl From<String> for DatabaseName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DatabaseName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One database in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    /// Database name, non-empty.
    pub name: DatabaseName,

    /// Table names within the database.
    #[serde(default)]
    pub tables: Vec<String>,
}

impl Database {
    /// Create a database entry with no tables.
    pub fn new(name: impl Into<DatabaseName>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Attach table names.
    pub fn with_tables(mut self, tables: Vec<String>) -> Self {
        self.tables = tables;
        self
    }
}

/// The catalog of databases offered to the database picker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerStructure {
    /// Databases in catalog order.
    #[serde(default)]
    pub databases: Vec<Database>,
}

impl ServerStructure {
    /// An empty structure, used when the provider is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a database by name.
    pub fn database(&self, name: &DatabaseName) -> Option<&Database> {
        self.databases.iter().find(|db| &db.name == name)
    }

    /// Check whether the catalog contains a database.
    pub fn contains(&self, name: &DatabaseName) -> bool {
        self.database(name).is_some()
    }
}
