//! Ordered attribute options.
//!
//! [`Options`] is the flat, string-keyed mapping every helper accepts. It mixes
//! real HTML attributes with pseudo-attributes (like `tag` or `iconSet`) that
//! configure generation and are stripped before formatting.

use indexmap::IndexMap;

/// A single option value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawAttrValue"))]
pub enum AttrValue {
    /// String value, rendered as-is (escaped by the formatter).
    Str(String),
    /// Boolean value. `false` omits the attribute entirely.
    Bool(bool),
}

impl AttrValue {
    /// Borrow the string value, if this is [`AttrValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Interpret the value as a flag.
    ///
    /// Strings are falsy when empty, `"0"` or `"false"`.
    ///
    /// ```
    /// use bsui_markup::AttrValue;
    ///
    /// assert!(AttrValue::from(true).is_truthy());
    /// assert!(AttrValue::from("yes").is_truthy());
    /// assert!(!AttrValue::from("false").is_truthy());
    /// assert!(!AttrValue::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => !(s.is_empty() || s == "0" || s == "false"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        Self::Str(n.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        Self::Str(n.to_string())
    }
}

/// Wire shape accepted when deserializing option values (numbers become strings).
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawAttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

#[cfg(feature = "serde")]
impl From<RawAttrValue> for AttrValue {
    fn from(raw: RawAttrValue) -> Self {
        match raw {
            RawAttrValue::Bool(b) => Self::Bool(b),
            RawAttrValue::Int(n) => Self::Str(n.to_string()),
            RawAttrValue::Float(n) => Self::Str(n.to_string()),
            RawAttrValue::Str(s) => Self::Str(s),
        }
    }
}

/// Insertion-ordered option mapping.
///
/// Ordering is preserved so rendered attribute strings are deterministic.
///
/// # Example
///
/// ```
/// use bsui_markup::Options;
///
/// let options = Options::new()
///     .with("id", "main")
///     .with("class", "lead")
///     .with_defaults([("class", "ignored"), ("role", "note")]);
///
/// assert_eq!(options.get_str("class"), Some("lead"));
/// assert_eq!(options.get_str("role"), Some("note"));
/// assert_eq!(options.keys().collect::<Vec<_>>(), ["id", "class", "role"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Options(IndexMap<String, AttrValue>);

impl Options {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Fill in keys that are not already present.
    ///
    /// Existing keys keep both their value and their position; missing
    /// defaults are appended in the order given.
    #[must_use]
    pub fn with_defaults<K, V, I>(mut self, defaults: I) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in defaults {
            self.0.entry(key.into()).or_insert_with(|| value.into());
        }
        self
    }

    /// Copy of this mapping with the given keys removed.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Self {
        self.0
            .iter()
            .filter(|(key, _)| !keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Insert or replace a value. Replaced keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Get a string value. Boolean values yield `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AttrValue::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Options {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> Extend<(K, V)> for Options {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Options {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
