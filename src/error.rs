/// An error that can occur while setting up or running a benchmark.
///
/// There are six kinds of errors, and only one of them is expected during
/// normal operation:
///
/// * An unknown case or engine name was given.
/// * A case was asked for an outcome it doesn't support. This indicates a
/// bug in whatever selected the combination, since a well formed sweep
/// never asks for one. See [`crate::case::combinations`].
/// * An engine rejected a pattern's syntax. This is expected and is handled
/// by [`crate::Instance`], which excludes the engine for that case.
/// * An engine failed while searching, e.g., because it hit a backtracking
/// limit.
/// * An engine reported a result that disagrees with the expected outcome.
/// This is always fatal, since timing an incorrect engine is meaningless.
///
/// Callers can distinguish between these via [`Error::kind`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of an [`Error`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// No case with this name exists in the table.
    UnknownCase { name: String },
    /// No enabled engine has this name.
    UnknownEngine { name: String },
    /// The case does not support the requested outcome.
    InvalidCombination { case: &'static str, found: bool },
    /// The engine refused to compile the pattern.
    CompileRejected { engine: &'static str, message: String },
    /// The engine failed while executing a search.
    Search { engine: &'static str, message: String },
    /// The engine returned the wrong answer.
    OutcomeMismatch {
        engine: &'static str,
        case: &'static str,
        expected: bool,
    },
}

impl Error {
    pub(crate) fn unknown_case(name: &str) -> Error {
        Error { kind: ErrorKind::UnknownCase { name: name.to_string() } }
    }

    pub(crate) fn unknown_engine(name: &str) -> Error {
        Error { kind: ErrorKind::UnknownEngine { name: name.to_string() } }
    }

    pub(crate) fn invalid_combination(case: &'static str, found: bool) -> Error {
        Error { kind: ErrorKind::InvalidCombination { case, found } }
    }

    /// Create an error for an engine that rejected a pattern.
    ///
    /// This is public so that adapters outside this crate can report
    /// rejections the same way.
    pub fn compile(engine: &'static str, err: impl std::fmt::Display) -> Error {
        let message = err.to_string();
        Error { kind: ErrorKind::CompileRejected { engine, message } }
    }

    /// Create an error for an engine that failed during a search.
    pub fn search(engine: &'static str, err: impl std::fmt::Display) -> Error {
        let message = err.to_string();
        Error { kind: ErrorKind::Search { engine, message } }
    }

    pub(crate) fn outcome_mismatch(
        engine: &'static str,
        case: &'static str,
        expected: bool,
    ) -> Error {
        Error { kind: ErrorKind::OutcomeMismatch { engine, case, expected } }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns true if and only if this error is an engine rejecting a
    /// pattern's syntax.
    pub fn is_compile_rejected(&self) -> bool {
        matches!(self.kind, ErrorKind::CompileRejected { .. })
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::UnknownCase { ref name } => {
                write!(f, "unknown benchmark case '{}'", name)
            }
            ErrorKind::UnknownEngine { ref name } => {
                write!(f, "unknown or disabled regex engine '{}'", name)
            }
            ErrorKind::InvalidCombination { case, found } => write!(
                f,
                "invalid combination: case '{}' does not support found={}",
                case, found,
            ),
            ErrorKind::CompileRejected { engine, ref message } => {
                write!(f, "{} rejected pattern: {}", engine, message)
            }
            ErrorKind::Search { engine, ref message } => {
                write!(f, "{} failed to search: {}", engine, message)
            }
            ErrorKind::OutcomeMismatch { engine, case, expected } => {
                let (want, got) = if expected {
                    ("match", "no match")
                } else {
                    ("no match", "match")
                };
                write!(
                    f,
                    "{} is wrong for case '{}': expected {}, got {}",
                    engine, case, want, got,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_outcomes() {
        let err = Error::outcome_mismatch("regex", "[0-9]+", true);
        assert_eq!(
            "regex is wrong for case '[0-9]+': expected match, got no match",
            err.to_string(),
        );
        let err = Error::outcome_mismatch("regex", "[0-9]+", false);
        assert!(err.to_string().ends_with("expected no match, got match"));
    }

    #[test]
    fn compile_rejection_is_distinguishable() {
        let err = Error::compile("regex-lite", "look-around is not supported");
        assert!(err.is_compile_rejected());
        assert!(!Error::invalid_combination("extract 0", false)
            .is_compile_rejected());
    }
}
