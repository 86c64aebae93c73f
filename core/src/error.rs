//! Error types for tree construction, registration, and parsing.
//!
//! Errors are split in three families so callers can tell a misconfigured
//! program ([`OptionError`], [`VerbError`]) apart from bad user input
//! ([`ParseError`]). [`Error`] wraps all three.

use thiserror::Error;

/// Errors raised when constructing an [`ArgOption`](crate::ArgOption).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The option has neither a token nor a name.
    #[error("option must define a token or a name")]
    MissingIdentifier,
    /// The flag combination is not valid (e.g., `DEFAULT` without `HAS_VALUE`).
    #[error("invalid option flags: {0}")]
    InvalidFlags(String),
}

/// Errors raised when registering verbs and options into a
/// [`VerbTree`](crate::VerbTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerbError {
    /// A sub-verb name is empty or whitespace-only.
    #[error("verb name cannot be empty")]
    InvalidVerbName,
    /// The verb, or one with the same name, is already registered.
    #[error("verb '{0}' is already registered")]
    DuplicateVerb(String),
    /// The verb is already registered under another parent.
    #[error("verb '{verb}' is already registered under '{parent}'")]
    AlreadyParented {
        /// Name of the verb being registered.
        verb: String,
        /// Name of its current parent.
        parent: String,
    },
    /// The option, its token, or its name is already registered in the verb.
    #[error("duplicate option in verb: {0}")]
    DuplicateOption(String),
    /// A default option accepting multiple values or usages is already
    /// registered, so no further default option can be reached.
    #[error("default option '{0}' accepting multiple values is already registered")]
    ExistingDefaultMultipleOption(String),
    /// The registration would make a verb its own ancestor.
    #[error("verb cycle detected at path: {0}")]
    VerbCycle(String),
}

/// Errors raised while parsing command-line arguments.
///
/// These are the errors a program should report to its user before exiting
/// with a non-zero status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An argument is malformed (e.g., a second `--`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No option with this token or name exists in the current verb.
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// A non-repeatable option was given more than once.
    #[error("option '{0}' was used more than once")]
    RepeatedSingularOption(String),
    /// A single-value option received a second value.
    #[error("option '{0}' can only have one value")]
    OptionValueOverflow(String),
    /// A value-taking option was the last argument.
    #[error("missing value for option '{0}'")]
    NotEnoughArguments(String),
    /// A value-taking short option was not the last one in its cluster.
    #[error("short option '{0}' takes a value and must end its group")]
    OptionHasValueAndMoreShorts(char),
    /// A bare argument matched neither a sub-verb nor an available default
    /// option.
    #[error("no verb or default option accepts '{argument}' in verb '{verb}'")]
    NoDefaultOptionFound {
        /// Name of the verb the argument was parsed in.
        verb: String,
        /// The unclaimed argument.
        argument: String,
    },
    /// A required option was not given along the matched verb path.
    #[error("required option '{0}' was not given")]
    MissingRequiredOption(String),
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Option construction failure.
    #[error(transparent)]
    Option(#[from] OptionError),
    /// Verb registration failure.
    #[error(transparent)]
    Verb(#[from] VerbError),
    /// Argument parsing failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if the error comes from user input rather than from the
    /// way the tree was declared.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
