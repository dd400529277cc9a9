use std::collections::HashSet;

use fullname::diagnostics::{EMPTY_NAME, INVALID_CHARACTER, INVALID_FIRST_CHARACTER};
use fullname::naming::{FromEnclosingNamespace, FromLiteralName, FromNamespace, Name, build};

fn qualified(name: &str, namespace: &str, enclosing: &str) -> String {
    Name::with_namespace(name, namespace, enclosing)
        .unwrap()
        .canonical_string()
        .to_string()
}

#[test]
fn explicit_namespace_qualifies_the_name() {
    let name = build(&[&FromLiteralName("Foo"), &FromNamespace("com.example")]).unwrap();
    assert_eq!(name.canonical_string(), "com.example.Foo");
    assert_eq!(name.namespace(), "com.example");
}

#[test]
fn enclosing_namespace_is_used_without_explicit_namespace() {
    let name = build(&[
        &FromLiteralName("Foo"),
        &FromNamespace(""),
        &FromEnclosingNamespace("com.example"),
    ])
    .unwrap();
    assert_eq!(name.canonical_string(), "com.example.Foo");
    assert_eq!(name.namespace(), "");
    assert_eq!(name.enclosing_namespace(), "com.example");
}

#[test]
fn dotted_name_ignores_both_namespaces() {
    let name = build(&[
        &FromLiteralName("com.example.Foo"),
        &FromNamespace("ignored.ns"),
        &FromEnclosingNamespace("also.ignored"),
    ])
    .unwrap();
    assert_eq!(name.canonical_string(), "com.example.Foo");
    assert_eq!(name.derived_namespace(), "com.example");
    // The raw fragments are still recorded.
    assert_eq!(name.namespace(), "ignored.ns");
}

#[test]
fn precedence_table() {
    assert_eq!(qualified("Foo", "ns", "outer"), "ns.Foo");
    assert_eq!(qualified("Foo", "ns", ""), "ns.Foo");
    assert_eq!(qualified("Foo", "", "outer"), "outer.Foo");
    assert_eq!(qualified("Foo", "", ""), "Foo");
    assert_eq!(qualified("a.Foo", "ns", "outer"), "a.Foo");
    assert_eq!(qualified("a.Foo", "", ""), "a.Foo");
}

#[test]
fn invalid_literals_fail() {
    assert!(Name::new("").unwrap_err().is(&EMPTY_NAME));
    assert!(Name::new("1abc").unwrap_err().is(&INVALID_FIRST_CHARACTER));
    assert!(Name::new("ab$c").unwrap_err().is(&INVALID_CHARACTER));
    assert!(Name::new("com.example.").unwrap_err().is(&EMPTY_NAME));
}

#[test]
fn namespace_text_is_not_validated() {
    let name = Name::with_namespace("Foo", "not a-valid$namespace", "").unwrap();
    assert_eq!(name.canonical_string(), "not a-valid$namespace.Foo");

    let name = Name::new("9.$.Foo").unwrap();
    assert_eq!(name.canonical_string(), "9.$.Foo");
}

#[test]
fn derived_namespace_round_trips() {
    for (namespace, local) in [("com.example", "Foo"), ("a", "_b"), ("x.y.z", "Z9")] {
        let name = Name::with_namespace(local, namespace, "ignored").unwrap();
        assert_eq!(name.derived_namespace(), namespace);
        assert_eq!(name.local_name(), local);
        assert_eq!(name.canonical_string(), format!("{namespace}.{local}"));
    }

    let bare = Name::new("Foo").unwrap();
    assert_eq!(bare.derived_namespace(), "");
    assert_eq!(bare.local_name(), "Foo");
}

#[test]
fn equality_is_qualified_string_equality() {
    let a = Name::with_namespace("Foo", "com.example", "").unwrap();
    let b = Name::with_namespace("Foo", "", "com.example").unwrap();
    let c = Name::new("com.example.Foo").unwrap();
    let other = Name::new("com.example.foo").unwrap();

    // Reflexive, symmetric, transitive.
    assert!(a.equals(&a));
    assert!(a.equals(&b) && b.equals(&a));
    assert!(b.equals(&c) && a.equals(&c));
    assert_eq!(a, c);
    // Case-sensitive.
    assert_ne!(a, other);
    assert!(!a.equals(&other));

    assert_eq!(a, "com.example.Foo");

    let set: HashSet<Name> = [a, b, c, other].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains("com.example.Foo"));
}

#[test]
fn display_and_from_str() {
    let name: Name = "com.example.Foo".parse().unwrap();
    assert_eq!(name.to_string(), "com.example.Foo");
    assert_eq!(format!("{name}"), name.canonical_string());
    assert!("1abc".parse::<Name>().is_err());
}

#[test]
fn fluent_builder_matches_step_list() {
    let name = Name::builder()
        .name("Foo")
        .namespace("")
        .enclosing_namespace("com.example")
        .build()
        .unwrap();
    assert_eq!(name.canonical_string(), "com.example.Foo");

    let err = Name::builder().name("Foo$").namespace("ns").build().unwrap_err();
    assert!(err.is(&INVALID_CHARACTER));
}

#[test]
fn names_are_shareable_across_threads() {
    let name = Name::with_namespace("Foo", "com.example", "").unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(name.derived_namespace(), "com.example"));
        }
    });
}
