use std::collections::HashMap;

/// Accumulates named field errors over a validation pass.
///
/// Errors are collected rather than short-circuited so a 422 response can
/// report every failing field at once. For a given key the first recorded
/// message wins; later checks on the same field do not overwrite it.
#[derive(Debug, Default)]
pub struct Validator {
    errors: HashMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `key -> message` unless the key already has an error.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(key.into()).or_insert_with(|| message.into());
    }

    /// Record an error for `key` when `ok` is false.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> HashMap<String, String> {
        self.errors
    }
}

/// True iff `value` appears verbatim in `list`.
pub fn permitted(value: &str, list: &[&str]) -> bool {
    list.contains(&value)
}

/// True iff all entries are distinct under case-sensitive comparison.
pub fn unique(values: &[String]) -> bool {
    let mut seen = std::collections::HashSet::new();
    values.iter().all(|value| seen.insert(value.as_str()))
}
