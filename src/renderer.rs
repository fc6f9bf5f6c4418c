//! Template renderer and rendering functionality for Wecon.
//! Substitutes `{{key}}` and `{{helper key}}` placeholders from a
//! [`DataRecord`]. There are no blocks, loops or conditionals.
use crate::error::{Error, Result};
use crate::helpers::{stringify, HelperTable};
use crate::record::DataRecord;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// `{{ expression }}` with the surrounding whitespace trimmed.
static PLACEHOLDER: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}"));

fn placeholder() -> Result<&'static Regex> {
    PLACEHOLDER.as_ref().map_err(|e| Error::TemplateError(e.to_string()))
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given record.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `record` - Values for placeholder substitution
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, record: &DataRecord) -> Result<String>;
}

/// Placeholder-substitution engine backed by an explicit helper table.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    helpers: HelperTable,
}

/// A parsed placeholder expression.
#[derive(Debug, PartialEq, Eq)]
enum Expression<'a> {
    Key(&'a str),
    Helper { name: &'a str, key: &'a str },
}

impl PlaceholderRenderer {
    /// Creates a renderer with the built-in helpers.
    pub fn new() -> Self {
        Self::with_helpers(HelperTable::builtin())
    }

    /// Creates a renderer that resolves helper calls against `helpers`.
    pub fn with_helpers(helpers: HelperTable) -> Self {
        Self { helpers }
    }

    pub fn helpers(&self) -> &HelperTable {
        &self.helpers
    }

    fn parse<'a>(&self, expression: &'a str) -> Result<Expression<'a>> {
        let words: Vec<&str> = expression.split_whitespace().collect();
        match words.as_slice() {
            [key] => Ok(Expression::Key(*key)),
            [name, key] => Ok(Expression::Helper { name: *name, key: *key }),
            [] => Err(Error::TemplateError("empty placeholder '{{}}'".to_string())),
            _ => Err(Error::TemplateError(format!(
                "placeholder '{{{{{expression}}}}}' takes at most a helper and a key"
            ))),
        }
    }

    fn evaluate(&self, expression: &str, record: &DataRecord) -> Result<String> {
        match self.parse(expression)? {
            Expression::Key(key) => {
                let value = record.lookup(key);
                if value.is_none() {
                    log::trace!("Key '{}' is not in the record, substituting nothing", key);
                }
                Ok(value.map(stringify).unwrap_or_default())
            }
            Expression::Helper { name, key } => {
                let helper = self
                    .helpers
                    .get(name)
                    .ok_or_else(|| Error::UnknownHelper { name: name.to_string() })?;
                Ok(helper(record.lookup(key).unwrap_or(&Value::Null)))
            }
        }
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// Renders a template string by replacing every placeholder.
    ///
    /// # Errors
    /// * `Error::TemplateError` for an empty or over-long placeholder
    /// * `Error::UnknownHelper` when a helper name is not registered
    fn render(&self, template: &str, record: &DataRecord) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;
        for captures in placeholder()?.captures_iter(template) {
            let whole = captures.get(0).map_or(0..0, |m| m.range());
            rendered.push_str(&template[last..whole.start]);
            rendered.push_str(&self.evaluate(expression(&captures), record)?);
            last = whole.end;
        }
        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}

fn expression<'t>(captures: &Captures<'t>) -> &'t str {
    captures.get(1).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_pattern_is_compiled_once() {
        let first = placeholder().unwrap();
        let second = placeholder().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_match("{{ capitalize name }}"));
    }

    #[test]
    fn parses_key_and_helper_forms() {
        let renderer = PlaceholderRenderer::new();
        assert_eq!(renderer.parse("name").unwrap(), Expression::Key("name"));
        assert_eq!(
            renderer.parse("capitalize  name").unwrap(),
            Expression::Helper { name: "capitalize", key: "name" }
        );
        assert!(matches!(renderer.parse(""), Err(Error::TemplateError(_))));
        assert!(matches!(renderer.parse("a b c"), Err(Error::TemplateError(_))));
    }
}
