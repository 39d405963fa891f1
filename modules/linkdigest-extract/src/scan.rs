//! Deep field scanner: collect every value stored under a given key name,
//! anywhere in an arbitrarily nested JSON tree.
//!
//! The export has no fixed schema — the same key can appear at the top
//! level, inside a shared post, inside attachment metadata, or not at all.
//! Traversal is pre-order (a key's own value before anything nested under
//! it, siblings in document order) and uses an explicit work-list, so deeply
//! nested posts cannot overflow the stack.

use serde_json::Value;

enum Step<'a> {
    Visit(&'a Value),
    Collect(&'a Value),
}

/// All values found under `key` at any depth, in stable pre-order.
/// Duplicates are kept as found; callers dedup downstream.
pub fn find_values<'a>(root: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut out = Vec::new();
    let mut stack = vec![Step::Visit(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Collect(v) => out.push(v),
            Step::Visit(Value::Object(map)) => {
                // Pushed in reverse so entries pop in document order. Per
                // entry the value itself is collected before its children,
                // matching recursive descent.
                for (k, v) in map.iter().rev() {
                    if v.is_object() || v.is_array() {
                        stack.push(Step::Visit(v));
                    }
                    if k == key {
                        stack.push(Step::Collect(v));
                    }
                }
            }
            Step::Visit(Value::Array(items)) => {
                for v in items.iter().rev() {
                    stack.push(Step::Visit(v));
                }
            }
            Step::Visit(_) => {}
        }
    }

    out
}

/// Like [`find_values`], but keeps only string hits. A key holding a number
/// or object where a string was expected is a local shape problem: the value
/// is skipped, the scan continues.
pub fn find_strings<'a>(root: &'a Value, key: &str) -> Vec<&'a str> {
    find_values(root, key)
        .into_iter()
        .filter_map(|v| v.as_str())
        .collect()
}

/// First string hit for `key`, if any.
pub fn first_string(root: &Value, key: &str) -> Option<String> {
    find_strings(root, key).first().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_values_at_any_depth() {
        let v = json!({
            "url": "top",
            "sharedPost": {
                "attachments": [
                    { "url": "deep" }
                ]
            }
        });
        let hits = find_strings(&v, "url");
        assert_eq!(hits, vec!["top", "deep"]);
    }

    #[test]
    fn preorder_descends_before_later_siblings() {
        // The nested hit under "a" comes before the top-level hit that
        // follows "a" in document order.
        let v = json!({
            "a": { "url": "inner" },
            "url": "outer"
        });
        assert_eq!(find_strings(&v, "url"), vec!["inner", "outer"]);
    }

    #[test]
    fn arrays_are_walked_left_to_right() {
        let v = json!([
            { "url": "one" },
            { "nested": [ { "url": "two" } ] },
            { "url": "three" }
        ]);
        assert_eq!(find_strings(&v, "url"), vec!["one", "two", "three"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let v = json!({ "a": { "url": "x" }, "b": { "url": "x" } });
        assert_eq!(find_strings(&v, "url").len(), 2);
    }

    #[test]
    fn non_string_hits_are_skipped_by_the_string_variant() {
        let v = json!({ "url": 42, "a": { "url": "ok" }, "b": { "url": null } });
        assert_eq!(find_values(&v, "url").len(), 3);
        assert_eq!(find_strings(&v, "url"), vec!["ok"]);
    }

    #[test]
    fn survives_heavy_nesting() {
        let mut v = json!({ "url": "leaf" });
        for _ in 0..2_000 {
            v = json!({ "wrap": v });
        }
        assert_eq!(find_strings(&v, "url"), vec!["leaf"]);
    }

    #[test]
    fn scalar_root_yields_nothing() {
        assert!(find_values(&json!("just a string"), "url").is_empty());
        assert!(find_values(&json!(null), "url").is_empty());
    }

    #[test]
    fn first_string_takes_the_earliest_hit() {
        let v = json!({ "title": "first", "sharedPost": { "title": "second" } });
        assert_eq!(first_string(&v, "title").as_deref(), Some("first"));
        assert_eq!(first_string(&v, "missing"), None);
    }
}
