use std::collections::BTreeMap;

/// A resolved attribute value from an http_archive declaration.
///
/// The query output's restricted grammar only allows scalar literals,
/// lists of literals, and dicts of literals as keyword-argument values;
/// non-literal elements inside lists and dicts are carried as their
/// stringified form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    Dict(BTreeMap<String, String>),
}

impl AttrValue {
    /// Returns the string content if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element list if this is a list literal
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A declared external dependency recovered from the build graph.
///
/// One instance corresponds to one http_archive call in the output of
/// `bazel query --output=build`. The attribute map carries every keyword
/// argument verbatim; accessors exist only for the attributes the
/// version/purl derivation cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    name: String,
    attributes: BTreeMap<String, AttrValue>,
}

impl DeclaredDependency {
    pub fn new(name: String, attributes: BTreeMap<String, AttrValue>) -> Self {
        Self { name, attributes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw attribute value for a declared keyword argument
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Returns the declared download URLs in declaration order.
    ///
    /// A `urls` list takes precedence; a single `url` attribute is treated
    /// as a one-element list. Returns an empty slice-backed vector when
    /// neither is declared.
    pub fn urls(&self) -> Vec<String> {
        if let Some(urls) = self.attributes.get("urls").and_then(AttrValue::as_list) {
            return urls.to_vec();
        }
        if let Some(url) = self.attributes.get("url").and_then(AttrValue::as_str) {
            return vec![url.to_string()];
        }
        Vec::new()
    }

    /// Returns the strip_prefix hint, if declared
    pub fn strip_prefix(&self) -> Option<&str> {
        self.attributes.get("strip_prefix").and_then(AttrValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep_with(attrs: Vec<(&str, AttrValue)>) -> DeclaredDependency {
        let attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        DeclaredDependency::new("test_dep".to_string(), attributes)
    }

    #[test]
    fn test_urls_from_urls_list() {
        let dep = dep_with(vec![(
            "urls",
            AttrValue::List(vec![
                "https://example.com/a.tar.gz".to_string(),
                "https://mirror.example.com/a.tar.gz".to_string(),
            ]),
        )]);
        assert_eq!(
            dep.urls(),
            vec![
                "https://example.com/a.tar.gz".to_string(),
                "https://mirror.example.com/a.tar.gz".to_string(),
            ]
        );
    }

    #[test]
    fn test_urls_from_single_url() {
        let dep = dep_with(vec![(
            "url",
            AttrValue::String("https://example.com/a.tar.gz".to_string()),
        )]);
        assert_eq!(dep.urls(), vec!["https://example.com/a.tar.gz".to_string()]);
    }

    #[test]
    fn test_urls_list_takes_precedence_over_url() {
        let dep = dep_with(vec![
            (
                "urls",
                AttrValue::List(vec!["https://from-list.example.com".to_string()]),
            ),
            (
                "url",
                AttrValue::String("https://from-scalar.example.com".to_string()),
            ),
        ]);
        assert_eq!(dep.urls(), vec!["https://from-list.example.com".to_string()]);
    }

    #[test]
    fn test_urls_empty_when_undeclared() {
        let dep = dep_with(vec![("sha256", AttrValue::String("abc".to_string()))]);
        assert!(dep.urls().is_empty());
    }

    #[test]
    fn test_strip_prefix() {
        let dep = dep_with(vec![(
            "strip_prefix",
            AttrValue::String("protobuf-3.21.12".to_string()),
        )]);
        assert_eq!(dep.strip_prefix(), Some("protobuf-3.21.12"));
    }

    #[test]
    fn test_strip_prefix_absent() {
        let dep = dep_with(vec![]);
        assert_eq!(dep.strip_prefix(), None);
    }

    #[test]
    fn test_extra_attributes_pass_through() {
        let dep = dep_with(vec![
            ("sha256", AttrValue::String("deadbeef".to_string())),
            ("patch_args", AttrValue::List(vec!["-p1".to_string()])),
        ]);
        assert_eq!(
            dep.attribute("sha256").and_then(AttrValue::as_str),
            Some("deadbeef")
        );
        assert_eq!(
            dep.attribute("patch_args").and_then(AttrValue::as_list),
            Some(&["-p1".to_string()][..])
        );
    }
}
