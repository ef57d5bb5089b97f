//! Escaping and number formatting shared by every rendered fragment

/// Escape text for use in HTML content or a double-quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Round to the nearest integer with halves going up, like the browser's `Math.round`.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    // f64::round sends halves away from zero; negative halves go back up
    let rounded = value.round();
    if rounded - value == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// Shortest decimal form of a number, without a negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// `name(arg, latitude, longitude)` ready to be placed in an event attribute.
///
/// The name becomes a JavaScript string literal before the whole call is
/// attribute-escaped.
#[must_use]
pub fn collaborator_call(function: &str, name: &str, latitude: f64, longitude: f64) -> String {
    let literal = serde_json::Value::String(name.to_owned());
    let call = format!(
        "{function}({literal}, {}, {})",
        format_number(latitude),
        format_number(longitude)
    );
    escape_html(&call)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Plain", "Plain")]
    #[case("<b>", "&lt;b&gt;")]
    #[case("Rock & Roll", "Rock &amp; Roll")]
    #[case(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case("L'Aquila", "L&#39;Aquila")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[rstest]
    #[case(2.5, 3)]
    #[case(-2.5, -2)]
    #[case(-1.5, -1)]
    #[case(-2.3, -2)]
    #[case(0.49, 0)]
    #[case(0.499_999_999_999_999_94, 0)]
    #[case(-0.5, 0)]
    #[case(17.0, 17)]
    fn test_round_half_up(#[case] input: f64, #[case] expected: i64) {
        assert_eq!(round_half_up(input), expected);
    }

    #[rstest]
    #[case(55.75, "55.75")]
    #[case(3.0, "3")]
    #[case(-0.0, "0")]
    #[case(-12.5, "-12.5")]
    fn test_format_number(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(format_number(input), expected);
    }

    #[test]
    fn test_collaborator_call_escapes_name() {
        assert_eq!(
            collaborator_call("deleteLocation", "Moscow", 55.75, 37.62),
            "deleteLocation(&quot;Moscow&quot;, 55.75, 37.62)"
        );
        assert_eq!(
            collaborator_call("addLocation", r#"a"); alert("x"#, 1.0, -2.0),
            r#"addLocation(&quot;a\&quot;); alert(\&quot;x&quot;, 1, -2)"#
        );
    }
}
