use crate::sbom_generation::domain::{AttrValue, DeclaredDependency};
use crate::sbom_generation::parsers::build_syntax::{Expr, FetchCall};
use std::collections::BTreeMap;

/// The repository-rule name whose calls declare externally fetched
/// source archives
const FETCH_RULE: &str = "http_archive";

/// DeclaredIndex service for indexing parsed fetch calls by name
///
/// This service contains pure business logic that turns the parsed call
/// sequence into the name-keyed metadata map the assembler looks
/// dependencies up in.
pub struct DeclaredIndex;

impl DeclaredIndex {
    /// Builds the name-indexed map of declared dependencies.
    ///
    /// Only `http_archive` calls are considered. A call without a `name`
    /// keyword argument (or with a non-string one) carries no usable
    /// identity and is discarded. When the same name is declared more
    /// than once, the last declaration in document order wins.
    pub fn build(calls: Vec<FetchCall>) -> BTreeMap<String, DeclaredDependency> {
        let mut index = BTreeMap::new();

        for call in calls {
            if call.function != FETCH_RULE {
                continue;
            }

            let mut attributes = BTreeMap::new();
            for (key, value) in call.kwargs {
                if let Some(resolved) = Self::resolve_value(value) {
                    attributes.insert(key, resolved);
                }
            }

            let Some(name) = attributes.get("name").and_then(AttrValue::as_str) else {
                continue;
            };
            let name = name.to_string();
            index.insert(name.clone(), DeclaredDependency::new(name, attributes));
        }

        index
    }

    /// Resolves an argument expression into an attribute value.
    ///
    /// Scalar literals map to themselves; list and dict literals map to
    /// their element sequences with non-literal members stringified. A
    /// non-literal scalar (an opaque identifier reference) has no value
    /// to carry and resolves to nothing.
    fn resolve_value(expr: Expr) -> Option<AttrValue> {
        match expr {
            Expr::Str(s) => Some(AttrValue::String(s)),
            Expr::Int(value) => Some(AttrValue::Int(value)),
            Expr::Bool(value) => Some(AttrValue::Bool(value)),
            Expr::List(items) => Some(AttrValue::List(
                items.iter().map(Expr::stringify).collect(),
            )),
            Expr::Dict(pairs) => Some(AttrValue::Dict(
                pairs
                    .iter()
                    .map(|(k, v)| (k.stringify(), v.stringify()))
                    .collect(),
            )),
            Expr::Ident(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::parsers::build_syntax::parse;

    #[test]
    fn test_build_indexes_by_name() {
        let calls = parse(
            r#"
http_archive(
    name = "com_github_google_re2",
    strip_prefix = "re2-2024-07-02",
    urls = ["https://github.com/google/re2/archive/2024-07-02.tar.gz"],
)
"#,
        )
        .unwrap();
        let index = DeclaredIndex::build(calls);

        assert_eq!(index.len(), 1);
        let dep = &index["com_github_google_re2"];
        assert_eq!(dep.name(), "com_github_google_re2");
        assert_eq!(dep.strip_prefix(), Some("re2-2024-07-02"));
        assert_eq!(
            dep.urls(),
            vec!["https://github.com/google/re2/archive/2024-07-02.tar.gz".to_string()]
        );
    }

    #[test]
    fn test_calls_without_name_are_discarded() {
        let calls = parse("http_archive(urls = [\"https://example.com/x.tar.gz\"])").unwrap();
        let index = DeclaredIndex::build(calls);
        assert!(index.is_empty());
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let calls = parse(
            r#"
http_archive(name = "zlib", strip_prefix = "zlib-1.2.11")
http_archive(name = "zlib", strip_prefix = "zlib-1.3.1")
"#,
        )
        .unwrap();
        let index = DeclaredIndex::build(calls);
        assert_eq!(index.len(), 1);
        assert_eq!(index["zlib"].strip_prefix(), Some("zlib-1.3.1"));
    }

    #[test]
    fn test_other_rule_kinds_are_ignored() {
        let calls = parse(
            r#"
git_repository(name = "not_an_archive")
http_archive(name = "zlib")
"#,
        )
        .unwrap();
        let index = DeclaredIndex::build(calls);
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("zlib"));
    }

    #[test]
    fn test_non_literal_scalar_values_are_dropped() {
        let calls = parse("http_archive(name = \"zlib\", build_file = BUILD_REF)").unwrap();
        let index = DeclaredIndex::build(calls);
        assert!(index["zlib"].attribute("build_file").is_none());
    }

    #[test]
    fn test_non_literal_list_elements_are_stringified() {
        let calls =
            parse("http_archive(name = \"zlib\", patch_args = [\"-p1\", SOME_FLAG])").unwrap();
        let index = DeclaredIndex::build(calls);
        assert_eq!(
            index["zlib"].attribute("patch_args").unwrap().as_list(),
            Some(&["-p1".to_string(), "SOME_FLAG".to_string()][..])
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let text = r#"
http_archive(name = "a", strip_prefix = "a-1.0")
http_archive(name = "b", url = "https://example.com/b.zip")
"#;
        let first = DeclaredIndex::build(parse(text).unwrap());
        let second = DeclaredIndex::build(parse(text).unwrap());
        assert_eq!(first, second);
    }
}
