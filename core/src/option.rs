//! Option declarations and their per-run usage state.

use crate::{OptionError, OptionFlags};

/// A flag or switch that can be registered into one or more verbs.
///
/// An option is identified by a short `token` (used as `-t`) and/or a long
/// `name` (used as `--name`). Its declaration never changes after
/// construction; the collected [`arguments`](Self::arguments) and
/// [`occurrences`](Self::occurrences) are filled in by the parser and reset
/// by [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use verbargs_core::{ArgOption, OptionFlags};
///
/// let output = ArgOption::new(Some('o'), Some("output"), "Output file", OptionFlags::HAS_VALUE)?;
/// assert_eq!(output.full_name(true), "-o|--output");
/// assert!(output.can_have_value());
/// assert!(!output.was_used());
/// # Ok::<(), verbargs_core::OptionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgOption {
    token: Option<char>,
    name: Option<String>,
    description: String,
    flags: OptionFlags,
    arguments: Vec<String>,
    occurrences: usize,
}

impl ArgOption {
    /// Creates an option.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::MissingIdentifier`] if both `token` and `name`
    /// are `None`, and [`OptionError::InvalidFlags`] if
    /// [`OptionFlags::DEFAULT`] is set without [`OptionFlags::HAS_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use verbargs_core::{ArgOption, OptionError, OptionFlags};
    ///
    /// assert_eq!(
    ///     ArgOption::new(None, None, "", OptionFlags::NONE),
    ///     Err(OptionError::MissingIdentifier)
    /// );
    /// assert!(matches!(
    ///     ArgOption::new(Some('f'), None, "", OptionFlags::DEFAULT),
    ///     Err(OptionError::InvalidFlags(_))
    /// ));
    /// ```
    pub fn new(
        token: Option<char>,
        name: Option<&str>,
        description: &str,
        flags: OptionFlags,
    ) -> Result<Self, OptionError> {
        let option = Self {
            token,
            name: name.map(String::from),
            description: description.to_string(),
            flags,
            arguments: Vec::new(),
            occurrences: 0,
        };

        if !option.has_token() && !option.has_name() {
            return Err(OptionError::MissingIdentifier);
        }

        if option.is_default() && !option.can_have_value() {
            return Err(OptionError::InvalidFlags(format!(
                "default option '{}' must take a value",
                option.full_name(false)
            )));
        }

        Ok(option)
    }

    /// Short token, used as `-t`.
    pub fn token(&self) -> Option<char> {
        self.token
    }

    /// Long name, used as `--name`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description shown in help text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Behavior flags.
    pub fn flags(&self) -> OptionFlags {
        self.flags
    }

    /// Values collected during the last parse, in command-line order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// First collected value, if any.
    pub fn value(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    /// Number of times the option was matched during the last parse.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Renders the option's identifiers as `t`, `name`, or `t|name`.
    ///
    /// With `with_prefixes`, the token and name are rendered as `-t` and
    /// `--name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbargs_core::{ArgOption, OptionFlags};
    ///
    /// let verbose = ArgOption::new(Some('v'), Some("verbose"), "", OptionFlags::NONE)?;
    /// assert_eq!(verbose.full_name(false), "v|verbose");
    ///
    /// let short_only = ArgOption::new(Some('v'), None, "", OptionFlags::NONE)?;
    /// assert_eq!(short_only.full_name(true), "-v");
    /// # Ok::<(), verbargs_core::OptionError>(())
    /// ```
    pub fn full_name(&self, with_prefixes: bool) -> String {
        let (short_prefix, long_prefix) = if with_prefixes { ("-", "--") } else { ("", "") };
        match (self.token, self.name.as_deref()) {
            (Some(token), Some(name)) => format!("{short_prefix}{token}|{long_prefix}{name}"),
            (Some(token), None) => format!("{short_prefix}{token}"),
            (None, Some(name)) => format!("{long_prefix}{name}"),
            (None, None) => String::new(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.flags.contains(OptionFlags::DEFAULT)
    }

    pub fn can_have_value(&self) -> bool {
        self.flags.contains(OptionFlags::HAS_VALUE)
    }

    pub fn is_repeatable(&self) -> bool {
        self.flags.contains(OptionFlags::REPEATABLE)
    }

    /// Takes a value and may be repeated, so it can collect several values.
    pub fn can_have_multiple_values(&self) -> bool {
        self.can_have_value() && self.is_repeatable()
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(OptionFlags::HIDDEN)
    }

    pub fn is_required(&self) -> bool {
        self.flags.contains(OptionFlags::REQUIRED)
    }

    pub fn should_stop_parsing(&self) -> bool {
        self.flags.contains(OptionFlags::STOPS_PARSING)
    }

    pub fn allows_verbs_after(&self) -> bool {
        self.flags.contains(OptionFlags::ALLOW_VERBS_AFTER)
    }

    /// Returns `true` if at least one value was collected.
    pub fn has_value(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Returns `true` if the option was matched at least once.
    pub fn was_used(&self) -> bool {
        self.occurrences >= 1
    }

    /// Forgets collected values and occurrences.
    pub fn clear(&mut self) {
        self.arguments.clear();
        self.occurrences = 0;
    }

    /// Counts one match of the option, without a value.
    pub(crate) fn record_occurrence(&mut self) {
        self.occurrences += 1;
    }

    pub(crate) fn push_argument(&mut self, value: impl Into<String>) {
        self.arguments.push(value.into());
    }

    /// A default option is a catch-all when it can absorb any number of
    /// positional values.
    pub(crate) fn is_catch_all(&self) -> bool {
        self.can_have_multiple_values() || self.is_repeatable()
    }
}
