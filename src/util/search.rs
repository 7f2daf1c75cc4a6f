//! Case-insensitive substring search over a record's text fields.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Normalized search needle; blank input matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when any field contains the term, ignoring case.
    pub fn matches<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| field.to_lowercase().contains(&self.0))
    }
}
