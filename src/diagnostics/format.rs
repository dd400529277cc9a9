/// Format error message by replacing {} placeholders with values
///
/// Placeholders are filled left to right. Inserted values are never rescanned, so a
/// value that itself contains `{}` is copied verbatim. Placeholders without a value
/// are kept as-is and surplus values are ignored.
///
/// # Example
/// ```
/// use fullname::diagnostics::format_message;
/// let msg = format_message("unknown type name: {}", &["com.example.Foo"]);
/// assert_eq!(msg, "unknown type name: com.example.Foo");
/// ```
pub fn format_message(template: &str, values: &[&str]) -> String {
    let mut pieces = template.split("{}");
    let mut values = values.iter();
    let mut result = String::with_capacity(template.len());

    if let Some(head) = pieces.next() {
        result.push_str(head);
    }
    for piece in pieces {
        result.push_str(values.next().copied().unwrap_or("{}"));
        result.push_str(piece);
    }
    result
}
