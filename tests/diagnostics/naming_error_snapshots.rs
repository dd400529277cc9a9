use fullname::naming::{FromSchemaFields, Name, NameRegistry, build};
use insta::assert_snapshot;
use serde_json::json;

fn render(err: fullname::NamingError) -> String {
    let mut out = format!("[{}] {}: {}", err.code(), err.title(), err);
    if let Some(hint) = err.hint() {
        out.push_str("\n  hint: ");
        out.push_str(hint);
    }
    out
}

#[test]
fn snapshot_empty_name() {
    assert_snapshot!(
        render(Name::new("").unwrap_err()),
        @"[N001] EMPTY NAME: The name portion of a fullname, record field names, and enum symbols must not be empty"
    );
}

#[test]
fn snapshot_bad_first_character() {
    assert_snapshot!(render(Name::new("1abc").unwrap_err()), @r"
    [N002] INVALID FIRST CHARACTER: The name portion of a fullname, record field names, and enum symbols must start with [A-Za-z_]
      hint: `1abc` begins with `1`.
    ");
}

#[test]
fn snapshot_bad_other_character() {
    assert_snapshot!(render(Name::new("com.example.ab$c").unwrap_err()), @r"
    [N003] INVALID CHARACTER: The name portion of a fullname, record field names, and enum symbols must have second and remaining characters contain only [A-Za-z0-9_]
      hint: `ab$c` contains `$`.
    ");
}

#[test]
fn snapshot_schema_errors() {
    let fields = json!({"name": 42});
    let fields = fields.as_object().unwrap();
    assert_snapshot!(render(build(&[&FromSchemaFields(fields)]).unwrap_err()), @r"
    [N101] NAME NOT STRING: name ought to be non-empty string
      hint: Found a JSON number.
    ");
}

#[test]
fn snapshot_unknown_reference() {
    let registry = NameRegistry::new();
    assert_snapshot!(render(registry.resolve("Foo", "com.example").unwrap_err()), @r"
    [N201] UNKNOWN NAME: unknown type name: com.example.Foo
      hint: Named types must be defined before they are referenced.
    ");
}
