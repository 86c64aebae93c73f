//! Command-line argument parsing against a [`VerbTree`].
//!
//! The parser walks the raw arguments once, left to right:
//!
//! - `--` ends option parsing; every later argument that is not a short
//!   option group, `--name` included, is a value for the current verb's
//!   default option.
//! - `--name` matches a long option. A value-taking option consumes the
//!   next argument verbatim.
//! - `-abc` matches a group of short options. Only the last one of a group
//!   may take a value, which is the next argument.
//! - Any other argument is a sub-verb name if verbs are still being
//!   dispatched, and otherwise a value for the current verb's default option.
//!
//! Matching an option without [`ALLOW_VERBS_AFTER`](crate::OptionFlags::ALLOW_VERBS_AFTER)
//! ends verb dispatch. Matching an option with
//! [`STOPS_PARSING`](crate::OptionFlags::STOPS_PARSING) ends parsing once its
//! value, if any, is attached; when arguments remain after it, required
//! options are not checked.
//!
//! Usage state is written into the tree as the parse goes and is not rolled
//! back on failure. Call [`VerbTree::clear`] before parsing the same tree
//! again.

use tracing::{debug, trace};

use crate::{OptionId, ParseError, VerbId, VerbTree};

/// Parses `args` starting from the root verb of `tree`.
///
/// Returns the deepest verb reached. Options and verbs along the way record
/// their usage in `tree`.
///
/// # Errors
///
/// Returns the first [`ParseError`] met; parsing stops there.
///
/// # Examples
///
/// ```
/// use verbargs_core::*;
///
/// let mut tree = VerbTree::new();
/// let root = tree.root();
/// let create = tree.add_verb(Verb::new("create", "Create an element"));
/// let name = tree.add_option(ArgOption::new(
///     Some('n'),
///     Some("name"),
///     "Element's name",
///     OptionFlags::DEFAULT | OptionFlags::HAS_VALUE,
/// )?);
/// tree.register_verb(root, create)?.register_option(create, name)?;
///
/// let verb = parse_arguments(&mut tree, &["create", "report.txt"])?;
/// assert_eq!(verb, create);
/// assert_eq!(tree.option(name).value(), Some("report.txt"));
/// # Ok::<(), verbargs_core::Error>(())
/// ```
pub fn parse_arguments<S: AsRef<str>>(tree: &mut VerbTree, args: &[S]) -> Result<VerbId, ParseError> {
    let root = tree.root();
    parse_arguments_from(tree, root, args)
}

/// Parses the current process arguments, program name excluded.
///
/// Arguments that are not valid UTF-8 are converted lossily.
///
/// # Errors
///
/// Same as [`parse_arguments`].
pub fn parse_env_arguments(tree: &mut VerbTree) -> Result<VerbId, ParseError> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    parse_arguments(tree, &args)
}

/// Parses `args` starting from `start` instead of the root verb.
///
/// Required options are still checked on every ancestor of the verb reached,
/// including the ancestors of `start`.
///
/// # Errors
///
/// Same as [`parse_arguments`].
pub fn parse_arguments_from<S: AsRef<str>>(
    tree: &mut VerbTree,
    start: VerbId,
    args: &[S],
) -> Result<VerbId, ParseError> {
    let mut state = ParseState::new(tree, start);

    let mut index = 0;
    while index < args.len() {
        state.tree.verb_mut(state.current_verb).mark_used();

        if state.take_stopping_option() {
            return Ok(state.current_verb);
        }

        let argument = args[index].as_ref();
        let next = args.get(index + 1).map(AsRef::as_ref);
        trace!(
            argument = %argument,
            verb = %state.tree.verb(state.current_verb).name(),
            "Parsing argument"
        );

        let consumed_next = if argument == "--" {
            state.end_options()?;
            false
        } else if state.has_reached_end_of_options && argument.starts_with("--") {
            state.push_default_value(argument)?;
            false
        } else if let Some(name) = argument.strip_prefix("--") {
            state.long_option(name, next)?
        } else if let Some(cluster) = argument.strip_prefix('-') {
            state.short_options(cluster, next)?
        } else {
            state.bare_argument(argument)?;
            false
        };

        index += if consumed_next { 2 } else { 1 };
    }

    state.check_required()?;
    Ok(state.current_verb)
}

/// How an option was spelled on the command line.
#[derive(Debug, Clone, Copy)]
enum Spelling<'a> {
    Long(&'a str),
    Short { token: char, ends_group: bool },
}

impl Spelling<'_> {
    fn display(self) -> String {
        match self {
            Spelling::Long(name) => format!("--{name}"),
            Spelling::Short { token, .. } => format!("-{token}"),
        }
    }
}

struct ParseState<'t> {
    tree: &'t mut VerbTree,
    current_verb: VerbId,
    has_finished_parsing_verbs: bool,
    has_reached_end_of_options: bool,
    relevant_option: Option<OptionId>,
}

impl<'t> ParseState<'t> {
    fn new(tree: &'t mut VerbTree, start: VerbId) -> Self {
        Self {
            tree,
            current_verb: start,
            has_finished_parsing_verbs: false,
            has_reached_end_of_options: false,
            relevant_option: None,
        }
    }

    /// Forgets the option matched by the previous argument and reports
    /// whether it ends parsing.
    fn take_stopping_option(&mut self) -> bool {
        let Some(id) = self.relevant_option.take() else {
            return false;
        };
        let option = self.tree.option(id);
        if option.should_stop_parsing() {
            debug!(option = %option.full_name(true), "Stopped parsing");
            return true;
        }
        false
    }

    fn end_options(&mut self) -> Result<(), ParseError> {
        if self.has_reached_end_of_options {
            return Err(ParseError::InvalidArgument(
                "'--' was given more than once".to_string(),
            ));
        }

        debug!("Reached end of options");
        self.has_reached_end_of_options = true;
        self.has_finished_parsing_verbs = true;
        Ok(())
    }

    /// Handles `--name`. Returns `true` if the next argument was consumed.
    fn long_option(&mut self, name: &str, next: Option<&str>) -> Result<bool, ParseError> {
        let id = self
            .tree
            .option_by_name(self.current_verb, name)
            .ok_or_else(|| ParseError::UnknownOption(format!("--{name}")))?;

        self.match_option(id, Spelling::Long(name), next)
    }

    /// Handles a `-abc` group. Returns `true` if the next argument was
    /// consumed by the last option of the group.
    fn short_options(&mut self, cluster: &str, next: Option<&str>) -> Result<bool, ParseError> {
        let mut tokens = cluster.chars().peekable();
        while let Some(token) = tokens.next() {
            let id = self
                .tree
                .option_by_token(self.current_verb, token)
                .ok_or_else(|| ParseError::UnknownOption(format!("-{token}")))?;

            let ends_group = tokens.peek().is_none();
            if self.match_option(id, Spelling::Short { token, ends_group }, next)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Records one use of an explicitly named option and attaches its value.
    fn match_option(
        &mut self,
        id: OptionId,
        spelling: Spelling<'_>,
        next: Option<&str>,
    ) -> Result<bool, ParseError> {
        self.relevant_option = Some(id);
        let option = self.tree.option_mut(id);

        if option.was_used() && !option.is_repeatable() {
            return Err(ParseError::RepeatedSingularOption(spelling.display()));
        }

        option.record_occurrence();

        if !option.allows_verbs_after() {
            self.has_finished_parsing_verbs = true;
        }

        if !option.can_have_value() {
            return Ok(false);
        }

        if let Spelling::Short {
            token,
            ends_group: false,
        } = spelling
        {
            return Err(ParseError::OptionHasValueAndMoreShorts(token));
        }

        if !option.can_have_multiple_values() && option.has_value() {
            return Err(ParseError::OptionValueOverflow(spelling.display()));
        }

        let Some(value) = next else {
            return Err(ParseError::NotEnoughArguments(spelling.display()));
        };

        option.push_argument(value);
        Ok(true)
    }

    /// Handles an argument without a leading dash: a sub-verb name while
    /// verbs are still dispatched, a default option value otherwise.
    fn bare_argument(&mut self, argument: &str) -> Result<(), ParseError> {
        if !self.has_finished_parsing_verbs {
            if let Some(verb) = self.tree.sub_verb_by_name(self.current_verb, argument) {
                debug!(verb = argument, "Entered verb");
                self.tree.verb_mut(verb).mark_used();
                self.current_verb = verb;
                return Ok(());
            }
        }

        self.push_default_value(argument)
    }

    fn push_default_value(&mut self, argument: &str) -> Result<(), ParseError> {
        let Some(id) = self.tree.relevant_default_option(self.current_verb) else {
            return Err(ParseError::NoDefaultOptionFound {
                verb: self.tree.verb(self.current_verb).name().to_string(),
                argument: argument.to_string(),
            });
        };

        self.relevant_option = Some(id);
        let option = self.tree.option_mut(id);
        option.record_occurrence();
        option.push_argument(argument);

        if !option.allows_verbs_after() {
            self.has_finished_parsing_verbs = true;
        }

        Ok(())
    }

    /// Fails on the first required option left unused on the current verb
    /// or any of its ancestors.
    fn check_required(&self) -> Result<(), ParseError> {
        for verb in self.tree.ancestors(self.current_verb) {
            if let Some(missing) = self
                .tree
                .options_of(verb)
                .find(|option| option.is_required() && !option.was_used())
            {
                return Err(ParseError::MissingRequiredOption(missing.full_name(true)));
            }
        }

        Ok(())
    }
}
