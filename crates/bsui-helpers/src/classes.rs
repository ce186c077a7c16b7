//! CSS class merging for option mappings.

use bsui_markup::Options;

/// An ordered list of CSS class tokens.
///
/// Built from a whitespace-separated string or from a sequence of tokens.
///
/// ```
/// use bsui_helpers::ClassList;
///
/// let from_str = ClassList::from("label  label-info");
/// let from_slice = ClassList::from(["label", "label-info"]);
/// assert_eq!(from_str, from_slice);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ClassList {
    fn from(s: &str) -> Self {
        Self(split(s).map(str::to_owned).collect())
    }
}

impl From<&String> for ClassList {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[&str]> for ClassList {
    fn from(tokens: &[&str]) -> Self {
        Self(tokens.iter().flat_map(|t| split(t)).map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(tokens: [&str; N]) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<Vec<&str>> for ClassList {
    fn from(tokens: Vec<&str>) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<Vec<String>> for ClassList {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens.iter().flat_map(|t| split(t)).map(str::to_owned).collect())
    }
}

fn split(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
}

/// Tokens of the `class` entry, empty when absent or not a string.
fn class_tokens(options: &Options) -> impl Iterator<Item = &str> {
    options.get_str("class").into_iter().flat_map(split)
}

/// Merge class tokens into the `class` entry of `options`.
///
/// Existing tokens keep their order and new tokens are appended; every token
/// appears once. Tokens named by the `skip` pseudo-option are not injected,
/// and `skip` is removed from the result. The input mapping is not modified.
///
/// # Example
///
/// ```
/// use bsui_helpers::inject_classes;
/// use bsui_markup::Options;
///
/// let options = Options::from([("class", "pull-right badge"), ("id", "count")]);
/// let merged = inject_classes(["badge", "badge-info"], &options);
///
/// assert_eq!(merged.get_str("class"), Some("pull-right badge badge-info"));
/// assert_eq!(options.get_str("class"), Some("pull-right badge"));
/// ```
pub fn inject_classes(classes: impl Into<ClassList>, options: &Options) -> Options {
    let classes = classes.into();
    let skip: Vec<&str> = options.get_str("skip").into_iter().flat_map(split).collect();

    let mut tokens: Vec<&str> = Vec::new();
    for token in class_tokens(options) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    for token in classes.iter() {
        if !tokens.contains(&token) && !skip.contains(&token) {
            tokens.push(token);
        }
    }

    let mut result = options.clone();
    result.remove("skip");
    result.insert("class", tokens.join(" "));
    result
}

/// Whether the `class` entry contains any of `classes`.
///
/// ```
/// use bsui_helpers::has_any_class;
/// use bsui_markup::Options;
///
/// let options = Options::from([("class", "btn btn-primary")]);
/// assert!(has_any_class(["btn-default", "btn-primary"], &options));
/// assert!(!has_any_class("btn-lg", &options));
/// ```
pub fn has_any_class(classes: impl Into<ClassList>, options: &Options) -> bool {
    let classes = classes.into();
    class_tokens(options).any(|token| classes.iter().any(|class| class == token))
}

/// Replace class tokens according to `class_map` (`from`, `to`).
///
/// Order is preserved; a rename that collides with an existing token is
/// collapsed into one. Options without a `class` entry are returned as-is.
pub fn rename_classes(class_map: &[(&str, &str)], options: &Options) -> Options {
    if !options.contains_key("class") {
        return options.clone();
    }

    let mut tokens: Vec<&str> = Vec::new();
    for token in class_tokens(options) {
        let renamed = class_map
            .iter()
            .find(|(from, _)| *from == token)
            .map_or(token, |(_, to)| *to);
        if !tokens.contains(&renamed) {
            tokens.push(renamed);
        }
    }

    let mut result = options.clone();
    result.insert("class", tokens.join(" "));
    result
}
