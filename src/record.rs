//! The flat key/value record that drives placeholder substitution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Description written into freshly created projects unless one is given.
pub const DEFAULT_DESCRIPTION: &str = "A Wecon-powered API";

/// Version written into freshly created projects.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Port used by generated projects and by `dev`/`start`.
pub const DEFAULT_PORT: u16 = 3000;

/// Insertion-ordered mapping from keys to scalar (or JSON) values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord(IndexMap<String, Value>);

impl DataRecord {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Canonical record for a new project, with every key the project
    /// templates reference filled with its default.
    pub fn project(name: &str) -> Self {
        Self::new()
            .with("name", name)
            .with("description", DEFAULT_DESCRIPTION)
            .with("author", "")
            .with("version", DEFAULT_VERSION)
            .with("port", DEFAULT_PORT)
            .with("dbName", default_db_name(name))
    }

    /// Record used by the module generator.
    pub fn module(name: &str) -> Self {
        Self::new().with("name", name)
    }

    /// Builder-style insert.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Resolves a dotted path such as `app.name` through nested objects.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DataRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Database name derived from a project name (`my-api` -> `my_api`).
pub fn default_db_name(name: &str) -> String {
    name.replace('-', "_")
}
