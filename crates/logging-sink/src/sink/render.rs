//! crates/logging-sink/src/sink/render.rs
//! Space-joined rendering of `Display` values.

use std::fmt::{self, Display, Write as _};

/// Appends `values` to `buffer`, separated by single spaces.
///
/// The buffer is not cleared first so callers can prefix their own text.
pub fn render_values(buffer: &mut String, values: &[&dyn Display]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            buffer.push(' ');
        }
        write!(buffer, "{value}")?;
    }
    Ok(())
}

/// Renders `values` into a fresh [`String`], separated by single spaces.
///
/// # Examples
///
/// ```
/// use logging_sink::join_values;
///
/// assert_eq!(join_values(&[&"test", &"string"]), "test string");
/// assert_eq!(join_values(&[&1.5, &'x', &-2]), "1.5 x -2");
/// assert_eq!(join_values(&[]), "");
/// ```
#[must_use]
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut rendered = String::new();
    // Writing into a String only fails if a Display impl reports an error;
    // whatever was rendered up to that point is kept.
    let _ = render_values(&mut rendered, values);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn single_value_has_no_separator() {
        assert_eq!(join_values(&[&"alone"]), "alone");
    }

    #[test]
    fn values_are_space_joined() {
        assert_eq!(join_values(&[&"a", &2, &"c"]), "a 2 c");
    }

    #[test]
    fn empty_values_render_empty_string() {
        assert_eq!(join_values(&[]), "");
    }

    #[test]
    fn empty_strings_keep_their_separators() {
        assert_eq!(join_values(&[&"", &""]), " ");
    }

    #[test]
    fn render_values_appends_to_existing_text() {
        let mut buffer = String::from("> ");
        render_values(&mut buffer, &[&"one", &"two"]).expect("render succeeds");
        assert_eq!(buffer, "> one two");
    }

    #[test]
    fn failing_display_is_reported_by_render_values() {
        let mut buffer = String::new();
        assert!(render_values(&mut buffer, &[&"ok", &Failing]).is_err());
        assert_eq!(buffer, "ok ");
    }

    #[test]
    fn join_values_keeps_partial_output_on_display_error() {
        assert_eq!(join_values(&[&"ok", &Failing, &"later"]), "ok ");
    }
}
