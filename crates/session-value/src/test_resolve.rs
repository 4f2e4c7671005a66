#[cfg(test)]
mod tests {
    use std::fmt;

    use proptest::prelude::*;

    use crate::*;

    /// Session holding `a = { b = "c" }` as a record.
    fn record_session() -> SessionStore {
        [("a", Record::new("Anon").with("b", "c"))]
            .into_iter()
            .collect()
    }

    /// Session holding `a = { b = "c" }` as a map.
    fn map_session() -> SessionStore {
        [("a", Value::map([("b", "c")]))].into_iter().collect()
    }

    #[test]
    fn flat_returns_stored_value() {
        let s: SessionStore = [("a", "b")].into_iter().collect();
        assert_eq!(resolve(Some("a"), false, &s), Some(Value::from("b")));
    }

    #[test]
    fn flat_treats_dots_as_part_of_the_key() {
        let s: SessionStore = [("a.b", "c")].into_iter().collect();
        assert_eq!(resolve(Some("a.b"), false, &s), Some(Value::from("c")));
        assert_eq!(resolve(Some("a.b"), false, &map_session()), None);
    }

    #[test]
    fn flat_returns_whole_object() {
        let s = map_session();
        assert_eq!(resolve(Some("a"), false, &s), Some(Value::map([("b", "c")])));
    }

    #[test]
    fn empty_and_absent_paths_resolve_to_nothing() {
        let s: SessionStore = [("", "empty-key"), ("a", "b")].into_iter().collect();
        for nested in [false, true] {
            assert_eq!(resolve(None, nested, &s), None);
            assert_eq!(resolve(Some(""), nested, &s), None);
            assert_eq!(
                resolve_detailed(Some(""), nested, &s),
                Err(Miss::InvalidPath)
            );
        }
    }

    #[test]
    fn nested_reads_record_member() {
        assert_eq!(
            resolve(Some("a.b"), true, &record_session()),
            Some(Value::from("c"))
        );
    }

    #[test]
    fn nested_reads_map_member() {
        assert_eq!(
            resolve(Some("a.b"), true, &map_session()),
            Some(Value::from("c"))
        );
    }

    #[test]
    fn nested_single_segment_is_a_plain_lookup() {
        let s: SessionStore = [("a", 5)].into_iter().collect();
        assert_eq!(resolve(Some("a"), true, &s), Some(Value::Int(5)));
    }

    #[test]
    fn nested_strings_have_no_members() {
        for s in [record_session(), map_session()] {
            assert_eq!(
                resolve_detailed(Some("a.b.c"), true, &s),
                Err(Miss::MemberNotFound)
            );
        }
    }

    #[test]
    fn nested_rejects_empty_segments_before_lookup() {
        let s = record_session();
        for path in ["a.b..c", ".a", "a.", "a..b", "."] {
            assert_eq!(
                resolve_detailed(Some(path), true, &s),
                Err(Miss::InvalidPath),
                "{path:?}"
            );
        }
    }

    #[test]
    fn nested_missing_root() {
        let s = record_session();
        assert_eq!(resolve_detailed(Some("x"), true, &s), Err(Miss::KeyNotFound));
        assert_eq!(
            resolve_detailed(Some("x.b.c"), true, &s),
            Err(Miss::KeyNotFound)
        );
    }

    #[test]
    fn nested_missing_member() {
        let s = record_session();
        assert_eq!(
            resolve_detailed(Some("a.missing"), true, &s),
            Err(Miss::MemberNotFound)
        );
    }

    #[test]
    fn member_names_are_case_sensitive() {
        let s = record_session();
        assert_eq!(resolve(Some("a.B"), true, &s), None);
        assert_eq!(resolve(Some("A.b"), true, &s), None);
    }

    #[test]
    fn null_leaf_is_found_but_null_cannot_be_walked() {
        let s: SessionStore = [
            ("n", Value::Null),
            ("a", Value::from(Record::new("Anon").with("b", Value::Null))),
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve(Some("n"), true, &s), Some(Value::Null));
        assert_eq!(resolve(Some("a.b"), true, &s), Some(Value::Null));
        assert_eq!(
            resolve_detailed(Some("n.x"), true, &s),
            Err(Miss::NullTraversal)
        );
        assert_eq!(
            resolve_detailed(Some("a.b.c"), true, &s),
            Err(Miss::NullTraversal)
        );
    }

    #[test]
    fn lists_have_no_members() {
        let s: SessionStore = [("l", Value::List(vec![Value::from(1)]))]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_detailed(Some("l.0"), true, &s),
            Err(Miss::MemberNotFound)
        );
    }

    #[test]
    fn walks_records_inside_maps_inside_records() {
        let inner = Record::new("Address").with("city", "Oslo");
        let outer = Record::new("User").with(
            "profile",
            Value::map([("address", Value::from(inner))]),
        );
        let s: SessionStore = [("user", outer)].into_iter().collect();
        assert_eq!(
            resolve(Some("user.profile.address.city"), true, &s),
            Some(Value::from("Oslo"))
        );
        assert_eq!(
            resolve_detailed(Some("user.profile.address.zip"), true, &s),
            Err(Miss::MemberNotFound)
        );
    }

    #[test]
    fn host_records_answer_member_lookups() {
        #[derive(Debug)]
        struct Request {
            id: i64,
        }
        impl fmt::Display for Request {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "request #{}", self.id)
            }
        }
        impl MemberAccessible for Request {
            fn member(&self, name: &str) -> Option<Value> {
                match name {
                    "id" => Some(Value::Int(self.id)),
                    _ => None,
                }
            }
        }

        let s: SessionStore = [("req", Value::record(Request { id: 42 }))]
            .into_iter()
            .collect();
        assert_eq!(resolve(Some("req.id"), true, &s), Some(Value::Int(42)));
        assert_eq!(resolve(Some("req.path"), true, &s), None);
    }

    #[test]
    fn shared_store_resolves() {
        let shared = SharedStore::from(map_session());
        assert_eq!(resolve(Some("a.b"), true, &shared), Some(Value::from("c")));
        shared.remove("a");
        assert_eq!(resolve(Some("a.b"), true, &shared), None);
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.]{1,16}"
    }

    proptest! {
        #[test]
        fn flat_mode_returns_any_stored_value(key in key_strategy(), n in any::<i64>()) {
            let s: SessionStore = [(key.clone(), n)].into_iter().collect();
            prop_assert_eq!(resolve(Some(key.as_str()), false, &s), Some(Value::Int(n)));
        }

        #[test]
        fn resolution_is_idempotent(path in "[ab.]{0,8}", nested in any::<bool>()) {
            let s = record_session();
            let first = resolve_detailed(Some(path.as_str()), nested, &s);
            let second = resolve_detailed(Some(path.as_str()), nested, &s);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn empty_segment_is_always_invalid(head in "[a-z]{0,4}", tail in "[a-z]{0,4}") {
            let path = format!("{head}..{tail}");
            let s: SessionStore = [(head.clone(), Value::map([("", 1)]))].into_iter().collect();
            prop_assert_eq!(resolve_detailed(Some(path.as_str()), true, &s), Err(Miss::InvalidPath));
        }
    }
}
