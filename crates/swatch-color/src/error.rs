// SPDX-License-Identifier: MIT
//
// Errors raised while reading colors from text.
//
// Only parsing can fail. Every conversion between Rgb and Hsl is total.

use std::fmt;

/// A color string that could not be turned into a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a `#RRGGBB` hex string.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat {
        /// The rejected input, verbatim.
        input: String,
        /// What exactly was wrong with it.
        reason: FormatIssue,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: FormatIssue) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
            reason,
        }
    }

    /// The specific formatting problem.
    #[must_use]
    pub const fn reason(&self) -> FormatIssue {
        match self {
            Self::InvalidColorFormat { reason, .. } => *reason,
        }
    }
}

/// The way a hex color string is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The string does not start with `#`.
    MissingHash,
    /// The number of characters after `#` is not 6.
    Length(usize),
    /// A character after `#` is not a hex digit.
    Digit(char),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => f.write_str("expected a leading `#`"),
            Self::Length(n) => write!(f, "expected 6 hex digits after `#`, found {n}"),
            Self::Digit(c) => write!(f, "{c:?} is not a hex digit"),
        }
    }
}
