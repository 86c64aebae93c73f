//! Rendering of usage lines, option tables, and verb tables.

use tracing::trace;
use verbargs_core::{ArgOption, VerbId, VerbTree};

use crate::config::HelpConfig;
use crate::text::wrap_text;

/// Placeholder shown for an option's value: `<NAME>` or `<VALUE>`, followed
/// by `...` when the option repeats.
fn value_placeholder(option: &ArgOption) -> String {
    let placeholder = match option.name() {
        Some(name) => format!("<{}>", name.to_uppercase()),
        None => "<VALUE>".to_string(),
    };
    if option.is_repeatable() {
        format!("{placeholder}...")
    } else {
        placeholder
    }
}

/// The `-t` half of a details entry, with the value placeholder when the
/// long name cannot carry it.
fn short_part(option: &ArgOption, add_value_to_short: bool) -> Option<String> {
    let token = option.token()?;
    let mut part = format!("-{token}");
    if option.can_have_value() && (add_value_to_short || !option.has_name()) {
        part.push(' ');
        part.push_str(&value_placeholder(option));
    }
    Some(part)
}

/// Renders an option as it appears in a usage line.
///
/// Required options are wrapped in `<>`, optional ones in `[]`.
///
/// # Examples
///
/// ```
/// use verbargs_core::{ArgOption, OptionFlags};
/// use verbargs_help::option_usage_part;
///
/// let output = ArgOption::new(Some('o'), Some("output"), "", OptionFlags::HAS_VALUE)?;
/// assert_eq!(option_usage_part(&output), "[-o|--output <OUTPUT>]");
///
/// let files = ArgOption::new(
///     None,
///     Some("file"),
///     "",
///     OptionFlags::HAS_MULTIPLE_VALUE | OptionFlags::REQUIRED,
/// )?;
/// assert_eq!(option_usage_part(&files), "<--file <FILE>...>");
/// # Ok::<(), verbargs_core::OptionError>(())
/// ```
pub fn option_usage_part(option: &ArgOption) -> String {
    let (open, close) = if option.is_required() { ('<', '>') } else { ('[', ']') };
    let mut part = String::new();
    part.push(open);
    part.push_str(&option.full_name(true));
    if option.can_have_value() {
        part.push(' ');
        part.push_str(&value_placeholder(option));
    } else if option.is_repeatable() {
        part.push_str("...");
    }
    part.push(close);
    part
}

/// Renders the identifier column of an option's details entry, such as
/// `-o, --output <OUTPUT>`.
///
/// Options without a short token are indented by `short_padding` spaces so
/// their long names line up with the others.
pub fn option_details_part(option: &ArgOption, short_padding: usize, add_value_to_short: bool) -> String {
    let mut part = match short_part(option, add_value_to_short) {
        Some(short) => short,
        None => " ".repeat(short_padding),
    };
    if option.has_token() && option.has_name() {
        part.push_str(", ");
    }
    if let Some(name) = option.name() {
        part.push_str("--");
        part.push_str(name);
        if option.can_have_value() {
            part.push(' ');
            part.push_str(&value_placeholder(option));
        }
    }
    part
}

/// Renders help text for the verbs of a [`VerbTree`].
///
/// # Examples
///
/// ```
/// use verbargs_core::{ArgOption, OptionFlags, Verb, VerbTree};
/// use verbargs_help::{HelpConfig, HelpRenderer};
///
/// let mut tree = VerbTree::with_root(Verb::new("app", ""));
/// let root = tree.root();
/// let verbose = tree.add_option(ArgOption::new(
///     Some('v'),
///     Some("verbose"),
///     "Prints more output",
///     OptionFlags::NONE,
/// )?);
/// let build = tree.add_verb(Verb::new("build", "Builds the project"));
/// tree.register_option(root, verbose)?.register_verb(root, build)?;
///
/// let renderer = HelpRenderer::new(&tree, HelpConfig::default());
/// assert_eq!(
///     renderer.full_help(root, "app"),
///     "app [build] [-v|--verbose]\n\
///      \n\
///      Actions:\n  \
///      build  Builds the project\n\
///      \n\
///      Options:\n  \
///      -v, --verbose  Prints more output"
/// );
/// # Ok::<(), verbargs_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HelpRenderer<'a> {
    tree: &'a VerbTree,
    config: HelpConfig,
}

impl<'a> HelpRenderer<'a> {
    pub fn new(tree: &'a VerbTree, config: HelpConfig) -> Self {
        Self { tree, config }
    }

    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    /// Options of `verb` that appear in help, in registration order.
    fn visible_options(&self, verb: VerbId) -> Vec<&'a ArgOption> {
        let show_hidden = self.config.show_hidden;
        self.tree
            .options_of(verb)
            .filter(|option| show_hidden || !option.is_hidden())
            .collect()
    }

    fn lists_verbs(&self, verb: VerbId) -> bool {
        self.config.add_verbs && !self.tree.verb(verb).sub_verbs().is_empty()
    }

    /// Program name followed by the path to `verb`, e.g. `git remote add`.
    pub fn command_name(&self, verb: VerbId, program_name: &str) -> String {
        std::iter::once(program_name)
            .chain(self.tree.path(verb))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Usage lines for `verb`, wrapped at the console width.
    ///
    /// The first line starts with `program_name`; continuation lines are
    /// indented to match it. Sub-verbs come first as `[a|b]`, then the
    /// non-default options, then the default ones.
    pub fn usage_lines(&self, verb: VerbId, program_name: &str) -> Vec<String> {
        let mut parts = Vec::new();
        if self.lists_verbs(verb) {
            let names: Vec<&str> = self.tree.sub_verbs_of(verb).map(|sub| sub.name()).collect();
            parts.push(format!("[{}]", names.join("|")));
        }
        let options = self.visible_options(verb);
        parts.extend(
            options
                .iter()
                .filter(|option| !option.is_default())
                .map(|option| option_usage_part(option)),
        );
        parts.extend(
            options
                .iter()
                .filter(|option| option.is_default())
                .map(|option| option_usage_part(option)),
        );

        let indent_width = program_name.chars().count();
        let mut lines = Vec::new();
        let mut line = program_name.to_string();
        let mut line_width = indent_width;
        let mut line_has_part = false;

        for part in parts {
            let part_width = part.chars().count();
            if line_has_part && line_width + 1 + part_width > self.config.console_width {
                lines.push(line);
                line = " ".repeat(indent_width);
                line_width = indent_width;
            }
            line.push(' ');
            line.push_str(&part);
            line_width += 1 + part_width;
            line_has_part = true;
        }
        lines.push(line);

        trace!(verb = self.tree.verb(verb).name(), lines = lines.len(), "Rendered usage");
        lines
    }

    pub fn usage(&self, verb: VerbId, program_name: &str) -> String {
        self.usage_lines(verb, program_name).join("\n")
    }

    /// One or more lines per visible option of `verb`: the identifiers,
    /// then the description wrapped into its own column.
    pub fn options_details_lines(&self, verb: VerbId) -> Vec<String> {
        let options = self.visible_options(verb);
        let add_value_to_short = self.config.add_value_to_short;

        let short_padding = options
            .iter()
            .filter(|option| option.has_name())
            .filter_map(|option| short_part(option, add_value_to_short))
            .map(|short| short.chars().count() + 2)
            .max()
            .unwrap_or(0);

        let details: Vec<String> = options
            .iter()
            .map(|option| option_details_part(option, short_padding, add_value_to_short))
            .collect();
        let details_width = details.iter().map(|d| d.chars().count()).max().unwrap_or(0);

        let column = self.config.left_space + details_width + self.config.inner_space;
        let description_width = self.config.console_width.saturating_sub(column);
        let description_prefix = " ".repeat(column);

        let mut lines = Vec::new();
        for (option, details) in options.iter().zip(&details) {
            let description = wrap_text(option.description(), description_width, &description_prefix);
            let entry = format!(
                "{:left$}{details:<details_width$}{:inner$}{description}",
                "",
                "",
                left = self.config.left_space,
                inner = self.config.inner_space,
            );
            lines.extend(entry.split('\n').map(|line| line.trim_end().to_string()));
        }
        lines
    }

    pub fn options_details(&self, verb: VerbId) -> String {
        self.options_details_lines(verb).join("\n")
    }

    /// One or more lines per sub-verb of `verb`: its name, then its
    /// description wrapped into its own column.
    pub fn verbs_details_lines(&self, verb: VerbId) -> Vec<String> {
        let name_width = self
            .tree
            .sub_verbs_of(verb)
            .map(|sub| sub.name().chars().count())
            .max()
            .unwrap_or(0);

        let column = self.config.left_space + name_width + self.config.inner_space;
        let description_width = self.config.console_width.saturating_sub(column);
        let description_prefix = " ".repeat(column);

        let mut lines = Vec::new();
        for sub in self.tree.sub_verbs_of(verb) {
            let description = wrap_text(sub.description(), description_width, &description_prefix);
            let entry = format!(
                "{:left$}{:<name_width$}{:inner$}{description}",
                "",
                sub.name(),
                "",
                left = self.config.left_space,
                inner = self.config.inner_space,
            );
            lines.extend(entry.split('\n').map(|line| line.trim_end().to_string()));
        }
        lines
    }

    pub fn verbs_details(&self, verb: VerbId) -> String {
        self.verbs_details_lines(verb).join("\n")
    }

    /// Usage, then an `Actions:` section for sub-verbs, then an `Options:`
    /// section. Empty sections are left out.
    pub fn full_help(&self, verb: VerbId, program_name: &str) -> String {
        let mut sections = vec![self.usage(verb, program_name)];
        if self.lists_verbs(verb) {
            sections.push(format!("Actions:\n{}", self.verbs_details(verb)));
        }
        if !self.visible_options(verb).is_empty() {
            sections.push(format!("Options:\n{}", self.options_details(verb)));
        }
        sections.join("\n\n")
    }
}
