//! crates/logging-sink/src/line_mode.rs
//! Line termination policy.

/// How a [`MessageSink`](crate::MessageSink) ends each line it writes.
///
/// Sessions always use [`LineMode::WithNewline`]. [`LineMode::WithoutNewline`]
/// suits progress output that the caller terminates itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineMode {
    /// End every line with `\n`.
    #[default]
    WithNewline,
    /// Write the line as rendered.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether a `\n` follows each line.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Text written after each line.
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::WithNewline.terminator(), "\n");
    /// assert_eq!(LineMode::WithoutNewline.terminator(), "");
    /// ```
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::WithNewline => "\n",
            Self::WithoutNewline => "",
        }
    }
}

impl From<bool> for LineMode {
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
