//! Named transforms that placeholders can apply to a value,
//! e.g. `{{capitalize name}}`.

use indexmap::IndexMap;
use serde_json::Value;

/// A pure transform from a resolved value to its rendered text.
pub type Helper = fn(&Value) -> String;

/// Immutable, ordered name -> helper table handed to a renderer.
#[derive(Clone)]
pub struct HelperTable {
    helpers: IndexMap<&'static str, Helper>,
}

impl HelperTable {
    /// Table without any helper.
    pub fn empty() -> Self {
        Self { helpers: IndexMap::new() }
    }

    /// The helpers every shipped template may use.
    pub fn builtin() -> Self {
        Self::empty()
            .with("capitalize", capitalize)
            .with("uppercase", uppercase)
            .with("lowercase", lowercase)
            .with("json", json)
    }

    /// Returns a copy of the table with `helper` registered under `name`.
    pub fn with(mut self, name: &'static str, helper: Helper) -> Self {
        self.helpers.insert(name, helper);
        self
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }
}

impl Default for HelperTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for HelperTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.helpers.keys()).finish()
    }
}

/// Text form of a value as it appears in rendered output.
///
/// Null renders as nothing; arrays and objects as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

pub fn capitalize(value: &Value) -> String {
    let text = stringify(value);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn uppercase(value: &Value) -> String {
    stringify(value).to_uppercase()
}

pub fn lowercase(value: &Value) -> String {
    stringify(value).to_lowercase()
}

pub fn json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
