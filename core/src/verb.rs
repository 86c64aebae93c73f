//! Verb declarations and the arena that owns the whole verb/option tree.
//!
//! A [`VerbTree`] owns every [`Verb`] and [`ArgOption`] of a program and hands
//! out copyable [`VerbId`] and [`OptionId`] handles. A verb refers to its
//! options by handle, so an option registered into several verbs (see
//! [`VerbTree::register_option_recursively`]) is a single record: using it
//! under one verb is visible from all of them.
//!
//! Registration validates eagerly and rejects duplicate verbs and options,
//! blank verb names, verb cycles, and default options that could never be
//! reached.
//!
//! # Example
//!
//! ```
//! use verbargs_core::*;
//!
//! let mut tree = VerbTree::new();
//! let root = tree.root();
//! let verbose = tree.add_option(ArgOption::new(Some('v'), Some("verbose"), "", OptionFlags::NONE)?);
//! let create = tree.add_verb(Verb::new("create", "Create an element"));
//!
//! tree.register_verb(root, create)?
//!     .register_option_recursively(root, verbose, false)?;
//!
//! assert_eq!(tree.sub_verb_by_name(root, "create"), Some(create));
//! assert_eq!(tree.option_by_token(create, 'v'), Some(verbose));
//! # Ok::<(), verbargs_core::Error>(())
//! ```

use tracing::debug;

use crate::{ArgOption, VerbError};

/// Handle to a [`Verb`] stored in a [`VerbTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerbId(usize);

/// Handle to an [`ArgOption`] stored in a [`VerbTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(usize);

/// A sub-command, or the root context of a program.
///
/// Only the name and description are set by the caller; registered options,
/// sub-verbs and the parent link are managed by the owning [`VerbTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    name: String,
    description: String,
    options: Vec<OptionId>,
    sub_verbs: Vec<VerbId>,
    was_used: bool,
    parent: Option<VerbId>,
}

impl Verb {
    /// Declares a verb. Names are only validated when the verb is registered
    /// under a parent.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: Vec::new(),
            sub_verbs: Vec::new(),
            was_used: false,
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Registered options, in registration order.
    pub fn options(&self) -> &[OptionId] {
        &self.options
    }

    /// Registered sub-verbs, in registration order.
    pub fn sub_verbs(&self) -> &[VerbId] {
        &self.sub_verbs
    }

    /// Returns `true` if the verb was part of the path matched by the last
    /// parse.
    pub fn was_used(&self) -> bool {
        self.was_used
    }

    /// The verb this one is registered under, `None` for a root.
    pub fn parent(&self) -> Option<VerbId> {
        self.parent
    }

    pub(crate) fn mark_used(&mut self) {
        self.was_used = true;
    }
}

/// Arena owning a program's verbs and options.
///
/// All methods taking a [`VerbId`] or [`OptionId`] panic if the handle was
/// not issued by this tree.
#[derive(Debug, Clone)]
pub struct VerbTree {
    verbs: Vec<Verb>,
    options: Vec<ArgOption>,
    root: VerbId,
}

impl Default for VerbTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VerbTree {
    /// Creates a tree whose root verb has an empty name.
    pub fn new() -> Self {
        Self::with_root(Verb::new("", ""))
    }

    /// Creates a tree around an explicit root verb, e.g. one carrying the
    /// program's name and description.
    pub fn with_root(root: Verb) -> Self {
        Self {
            verbs: vec![root],
            options: Vec::new(),
            root: VerbId(0),
        }
    }

    pub fn root(&self) -> VerbId {
        self.root
    }

    /// Moves an option into the tree. It is not reachable by the parser
    /// until registered into a verb.
    pub fn add_option(&mut self, option: ArgOption) -> OptionId {
        self.options.push(option);
        OptionId(self.options.len() - 1)
    }

    /// Moves a verb into the tree. It is not reachable by the parser until
    /// registered under a parent.
    pub fn add_verb(&mut self, verb: Verb) -> VerbId {
        self.verbs.push(verb);
        VerbId(self.verbs.len() - 1)
    }

    pub fn option(&self, id: OptionId) -> &ArgOption {
        &self.options[id.0]
    }

    /// Mutable access to an option, e.g. to [`clear`](ArgOption::clear) it
    /// alone.
    pub fn option_mut(&mut self, id: OptionId) -> &mut ArgOption {
        &mut self.options[id.0]
    }

    pub fn verb(&self, id: VerbId) -> &Verb {
        &self.verbs[id.0]
    }

    pub(crate) fn verb_mut(&mut self, id: VerbId) -> &mut Verb {
        &mut self.verbs[id.0]
    }

    /// Iterates over the options registered in `verb`.
    pub fn options_of(&self, verb: VerbId) -> impl Iterator<Item = &ArgOption> + '_ {
        self.verb(verb).options.iter().map(|id| self.option(*id))
    }

    /// Iterates over the sub-verbs registered in `verb`.
    pub fn sub_verbs_of(&self, verb: VerbId) -> impl Iterator<Item = &Verb> + '_ {
        self.verb(verb).sub_verbs.iter().map(|id| self.verb(*id))
    }

    pub fn parent(&self, verb: VerbId) -> Option<VerbId> {
        self.verb(verb).parent
    }

    /// Iterates from `verb` up to its root, `verb` included.
    pub fn ancestors(&self, verb: VerbId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(verb),
        }
    }

    /// Names of the verbs leading from the root to `verb`, root excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbargs_core::{Verb, VerbTree};
    ///
    /// let mut tree = VerbTree::new();
    /// let root = tree.root();
    /// let remote = tree.add_verb(Verb::new("remote", ""));
    /// let add = tree.add_verb(Verb::new("add", ""));
    /// tree.register_verb(remote, add)?.register_verb(root, remote)?;
    ///
    /// assert_eq!(tree.path(add), vec!["remote", "add"]);
    /// assert!(tree.path(root).is_empty());
    /// # Ok::<(), verbargs_core::VerbError>(())
    /// ```
    pub fn path(&self, verb: VerbId) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .ancestors(verb)
            .filter(|id| self.verb(*id).parent.is_some())
            .map(|id| self.verb(id).name.as_str())
            .collect();
        names.reverse();
        names
    }

    /// Registers `child` as a sub-verb of `parent`.
    ///
    /// # Errors
    ///
    /// - [`VerbError::InvalidVerbName`] if the child's name is blank.
    /// - [`VerbError::VerbCycle`] if `child` is `parent` or one of its
    ///   ancestors.
    /// - [`VerbError::DuplicateVerb`] if `child`, or a verb with the same
    ///   name, is already registered in `parent`.
    /// - [`VerbError::AlreadyParented`] if `child` is registered under
    ///   another verb.
    pub fn register_verb(&mut self, parent: VerbId, child: VerbId) -> Result<&mut Self, VerbError> {
        let child_name = self.verb(child).name.clone();
        if child_name.trim().is_empty() {
            return Err(VerbError::InvalidVerbName);
        }

        if self.ancestors(parent).any(|id| id == child) {
            let mut cycle_path: Vec<&str> = self
                .ancestors(parent)
                .map(|id| self.verb(id).name.as_str())
                .collect();
            cycle_path.reverse();
            cycle_path.push(&child_name);
            return Err(VerbError::VerbCycle(cycle_path.join(" ").trim().to_string()));
        }

        if self.verb(parent).sub_verbs.contains(&child)
            || self.sub_verb_by_name(parent, &child_name).is_some()
        {
            return Err(VerbError::DuplicateVerb(child_name));
        }

        if let Some(current_parent) = self.verb(child).parent {
            return Err(VerbError::AlreadyParented {
                verb: child_name,
                parent: self.verb(current_parent).name.clone(),
            });
        }

        self.verb_mut(child).parent = Some(parent);
        self.verb_mut(parent).sub_verbs.push(child);
        debug!(parent = %self.verb(parent).name, verb = %child_name, "Registered verb");

        Ok(self)
    }

    /// Registers `option` into `verb`.
    ///
    /// # Errors
    ///
    /// - [`VerbError::DuplicateOption`] if the option itself, its token, or
    ///   its name is already registered in `verb`.
    /// - [`VerbError::ExistingDefaultMultipleOption`] if the option is a
    ///   default option and `verb` already holds a default option that is
    ///   repeatable or takes multiple values.
    pub fn register_option(&mut self, verb: VerbId, option: OptionId) -> Result<&mut Self, VerbError> {
        let candidate = self.option(option);

        if self.verb(verb).options.contains(&option) {
            return Err(VerbError::DuplicateOption(candidate.full_name(true)));
        }

        if let Some(token) = candidate.token() {
            if self.has_option_by_token(verb, token) {
                return Err(VerbError::DuplicateOption(format!("-{token}")));
            }
        }

        if let Some(name) = candidate.name() {
            if self.has_option_by_name(verb, name) {
                return Err(VerbError::DuplicateOption(format!("--{name}")));
            }
        }

        if candidate.is_default() {
            if let Some(existing) = self
                .options_of(verb)
                .find(|existing| existing.is_default() && existing.is_catch_all())
            {
                return Err(VerbError::ExistingDefaultMultipleOption(existing.full_name(true)));
            }
        }

        debug!(
            verb = %self.verb(verb).name,
            option = %candidate.full_name(true),
            flags = ?candidate.flags(),
            "Registered option"
        );
        self.verb_mut(verb).options.push(option);

        Ok(self)
    }

    /// Registers `option` into `verb` and into every verb currently below it.
    ///
    /// Verbs registered afterwards do not receive the option. When
    /// `ignore_duplicates` is set, verbs that already hold a conflicting
    /// option are skipped instead of failing, and the walk continues into
    /// their sub-verbs.
    ///
    /// # Errors
    ///
    /// Same as [`register_option`](Self::register_option), except that
    /// [`VerbError::DuplicateOption`] is swallowed when `ignore_duplicates`
    /// is set.
    pub fn register_option_recursively(
        &mut self,
        verb: VerbId,
        option: OptionId,
        ignore_duplicates: bool,
    ) -> Result<&mut Self, VerbError> {
        let registered = self.register_option(verb, option).map(|_| ());
        match registered {
            Ok(()) => {}
            Err(VerbError::DuplicateOption(duplicate)) if ignore_duplicates => {
                debug!(verb = %self.verb(verb).name, option = %duplicate, "Skipped duplicate option");
            }
            Err(err) => return Err(err),
        }

        let children = self.verb(verb).sub_verbs.clone();
        for child in children {
            self.register_option_recursively(child, option, ignore_duplicates)?;
        }

        Ok(self)
    }

    /// Finds a sub-verb of `verb` by exact name.
    pub fn sub_verb_by_name(&self, verb: VerbId, name: &str) -> Option<VerbId> {
        self.verb(verb)
            .sub_verbs
            .iter()
            .copied()
            .find(|id| self.verb(*id).name == name)
    }

    /// Finds an option of `verb` by its short token.
    pub fn option_by_token(&self, verb: VerbId, token: char) -> Option<OptionId> {
        self.verb(verb)
            .options
            .iter()
            .copied()
            .find(|id| self.option(*id).token() == Some(token))
    }

    /// Finds an option of `verb` by its long name.
    pub fn option_by_name(&self, verb: VerbId, name: &str) -> Option<OptionId> {
        self.verb(verb)
            .options
            .iter()
            .copied()
            .find(|id| self.option(*id).name() == Some(name))
    }

    pub fn has_option_by_token(&self, verb: VerbId, token: char) -> bool {
        self.option_by_token(verb, token).is_some()
    }

    pub fn has_option_by_name(&self, verb: VerbId, name: &str) -> bool {
        self.option_by_name(verb, name).is_some()
    }

    /// Returns the default option that should receive the next bare
    /// argument in `verb`.
    ///
    /// Default options are scanned in registration order. A catch-all
    /// (repeatable or multi-value) default always qualifies; a single-value
    /// default only qualifies until it has been used.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbargs_core::*;
    ///
    /// let mut tree = VerbTree::new();
    /// let root = tree.root();
    /// let source = tree.add_option(ArgOption::new(
    ///     None,
    ///     Some("source"),
    ///     "",
    ///     OptionFlags::DEFAULT | OptionFlags::HAS_VALUE,
    /// )?);
    /// let rest = tree.add_option(ArgOption::new(
    ///     None,
    ///     Some("rest"),
    ///     "",
    ///     OptionFlags::DEFAULT | OptionFlags::HAS_MULTIPLE_VALUE,
    /// )?);
    /// tree.register_option(root, source)?.register_option(root, rest)?;
    ///
    /// assert_eq!(tree.relevant_default_option(root), Some(source));
    /// parse_arguments(&mut tree, &["a.txt"])?;
    /// assert_eq!(tree.relevant_default_option(root), Some(rest));
    /// # Ok::<(), verbargs_core::Error>(())
    /// ```
    pub fn relevant_default_option(&self, verb: VerbId) -> Option<OptionId> {
        self.verb(verb).options.iter().copied().find(|id| {
            let option = self.option(*id);
            option.is_default()
                && (option.is_catch_all() || (option.can_have_value() && !option.was_used()))
        })
    }

    /// Clears the usage state of `verb`, its options, and everything below
    /// it.
    ///
    /// Options shared with verbs outside of this subtree are cleared as well,
    /// since they are the same record.
    pub fn clear_verb(&mut self, verb: VerbId) {
        let option_ids = self.verb(verb).options.clone();
        for id in option_ids {
            self.option_mut(id).clear();
        }

        let children = self.verb(verb).sub_verbs.clone();
        for child in children {
            self.clear_verb(child);
        }

        self.verb_mut(verb).was_used = false;
    }

    /// Clears the usage state of the whole tree, starting at the root.
    pub fn clear(&mut self) {
        self.clear_verb(self.root);
    }
}

/// Iterator over a verb and its ancestors, returned by
/// [`VerbTree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a VerbTree,
    next: Option<VerbId>,
}

impl Iterator for Ancestors<'_> {
    type Item = VerbId;

    fn next(&mut self) -> Option<VerbId> {
        let current = self.next?;
        self.next = self.tree.verb(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::OptionFlags;

    use super::*;

    fn flag(tree: &mut VerbTree, token: Option<char>, name: Option<&str>) -> OptionId {
        tree.add_option(ArgOption::new(token, name, "", OptionFlags::NONE).unwrap())
    }

    fn with_flags(tree: &mut VerbTree, token: char, flags: OptionFlags) -> OptionId {
        tree.add_option(ArgOption::new(Some(token), None, "", flags).unwrap())
    }

    #[test]
    fn test_register_verb_rejects_blank_names() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let empty = tree.add_verb(Verb::new("", ""));
        let blank = tree.add_verb(Verb::new("  \t", ""));

        assert_eq!(
            tree.register_verb(root, empty).err(),
            Some(VerbError::InvalidVerbName)
        );
        assert_eq!(
            tree.register_verb(root, blank).err(),
            Some(VerbError::InvalidVerbName)
        );
        assert!(tree.verb(root).sub_verbs().is_empty());
    }

    #[test]
    fn test_register_verb_rejects_duplicates() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let create = tree.add_verb(Verb::new("create", ""));
        let other_create = tree.add_verb(Verb::new("create", "again"));

        tree.register_verb(root, create).unwrap();
        assert_eq!(
            tree.register_verb(root, create).err(),
            Some(VerbError::DuplicateVerb("create".to_string()))
        );
        assert_eq!(
            tree.register_verb(root, other_create).err(),
            Some(VerbError::DuplicateVerb("create".to_string()))
        );
        assert_eq!(tree.verb(create).parent(), Some(root));
    }

    #[test]
    fn test_register_verb_rejects_second_parent() {
        let mut tree = VerbTree::with_root(Verb::new("app", ""));
        let root = tree.root();
        let first = tree.add_verb(Verb::new("first", ""));
        let shared = tree.add_verb(Verb::new("shared", ""));
        tree.register_verb(root, first).unwrap();
        tree.register_verb(root, shared).unwrap();

        assert_eq!(
            tree.register_verb(first, shared).err(),
            Some(VerbError::AlreadyParented {
                verb: "shared".to_string(),
                parent: "app".to_string(),
            })
        );
        assert!(tree.verb(first).sub_verbs().is_empty());
        assert_eq!(tree.parent(shared), Some(root));
    }

    #[test]
    fn test_register_verb_rejects_cycles() {
        let mut tree = VerbTree::with_root(Verb::new("git", ""));
        let root = tree.root();
        let remote = tree.add_verb(Verb::new("remote", ""));
        tree.register_verb(root, remote).unwrap();

        assert_eq!(
            tree.register_verb(remote, root).err(),
            Some(VerbError::VerbCycle("git remote git".to_string()))
        );
        assert_eq!(
            tree.register_verb(remote, remote).err(),
            Some(VerbError::VerbCycle("git remote remote".to_string()))
        );
    }

    #[test]
    fn test_register_option_rejects_duplicates() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let alpha = flag(&mut tree, Some('a'), Some("alpha"));
        let same_token = flag(&mut tree, Some('a'), None);
        let same_name = flag(&mut tree, None, Some("alpha"));

        tree.register_option(root, alpha).unwrap();
        assert_eq!(
            tree.register_option(root, alpha).err(),
            Some(VerbError::DuplicateOption("-a|--alpha".to_string()))
        );
        assert_eq!(
            tree.register_option(root, same_token).err(),
            Some(VerbError::DuplicateOption("-a".to_string()))
        );
        assert_eq!(
            tree.register_option(root, same_name).err(),
            Some(VerbError::DuplicateOption("--alpha".to_string()))
        );
        assert_eq!(tree.verb(root).options(), &[alpha]);
    }

    #[test]
    fn test_default_options_after_catch_all_are_rejected() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let single_a = with_flags(&mut tree, 'a', OptionFlags::HAS_VALUE | OptionFlags::DEFAULT);
        let single_b = with_flags(&mut tree, 'b', OptionFlags::HAS_VALUE | OptionFlags::DEFAULT);
        let single_c = with_flags(&mut tree, 'c', OptionFlags::HAS_VALUE | OptionFlags::DEFAULT);
        let multiple_d = with_flags(
            &mut tree,
            'd',
            OptionFlags::HAS_MULTIPLE_VALUE | OptionFlags::DEFAULT,
        );
        let multiple_e = with_flags(
            &mut tree,
            'e',
            OptionFlags::HAS_MULTIPLE_VALUE | OptionFlags::DEFAULT,
        );
        let plain_f = with_flags(&mut tree, 'f', OptionFlags::NONE);

        tree.register_option(root, single_a).unwrap();
        tree.register_option(root, single_b).unwrap();
        tree.register_option(root, multiple_d).unwrap();

        assert_eq!(
            tree.register_option(root, single_c).err(),
            Some(VerbError::ExistingDefaultMultipleOption("-d".to_string()))
        );
        assert_eq!(
            tree.register_option(root, multiple_e).err(),
            Some(VerbError::ExistingDefaultMultipleOption("-d".to_string()))
        );
        assert!(tree.register_option(root, plain_f).is_ok());
    }

    #[test]
    fn test_recursive_registration_reaches_existing_children_only() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let sub = tree.add_verb(Verb::new("sub", ""));
        let sub_sub = tree.add_verb(Verb::new("sub-sub", ""));
        let late = tree.add_verb(Verb::new("late", ""));
        tree.register_verb(sub, sub_sub).unwrap();
        tree.register_verb(root, sub).unwrap();

        let verbose = flag(&mut tree, Some('v'), None);
        tree.register_option_recursively(root, verbose, false).unwrap();
        tree.register_verb(root, late).unwrap();

        for verb in [root, sub, sub_sub] {
            assert_eq!(tree.verb(verb).options(), &[verbose]);
        }
        assert!(tree.verb(late).options().is_empty());
    }

    #[test]
    fn test_recursive_registration_duplicate_handling() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let sub = tree.add_verb(Verb::new("sub", ""));
        tree.register_verb(root, sub).unwrap();

        let local = flag(&mut tree, Some('a'), None);
        let global = flag(&mut tree, Some('a'), None);
        tree.register_option(root, local).unwrap();

        assert!(matches!(
            tree.register_option_recursively(root, global, false),
            Err(VerbError::DuplicateOption(_))
        ));
        assert!(tree.verb(sub).options().is_empty());

        tree.register_option_recursively(root, global, true).unwrap();
        assert_eq!(tree.verb(root).options(), &[local]);
        assert_eq!(tree.verb(sub).options(), &[global]);
    }

    #[test]
    fn test_relevant_default_option_skips_used_singles() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let first = with_flags(&mut tree, 'a', OptionFlags::HAS_VALUE | OptionFlags::DEFAULT);
        let second = with_flags(&mut tree, 'b', OptionFlags::HAS_VALUE | OptionFlags::DEFAULT);
        tree.register_option(root, first).unwrap();
        tree.register_option(root, second).unwrap();

        assert_eq!(tree.relevant_default_option(root), Some(first));
        tree.option_mut(first).record_occurrence();
        assert_eq!(tree.relevant_default_option(root), Some(second));
        tree.option_mut(second).record_occurrence();
        assert_eq!(tree.relevant_default_option(root), None);
    }

    #[test]
    fn test_clear_is_recursive_and_idempotent() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let sub = tree.add_verb(Verb::new("sub", ""));
        tree.register_verb(root, sub).unwrap();
        let value = with_flags(&mut tree, 'x', OptionFlags::HAS_VALUE);
        tree.register_option(sub, value).unwrap();

        tree.option_mut(value).record_occurrence();
        tree.option_mut(value).push_argument("42");
        tree.verb_mut(sub).was_used = true;
        tree.verb_mut(root).was_used = true;

        tree.clear();
        assert!(!tree.verb(root).was_used());
        assert!(!tree.verb(sub).was_used());
        assert!(!tree.option(value).was_used());
        assert!(tree.option(value).arguments().is_empty());

        tree.clear();
        assert_eq!(tree.option(value).occurrences(), 0);
    }

    #[test]
    fn test_ancestors_and_path() {
        let mut tree = VerbTree::new();
        let root = tree.root();
        let remote = tree.add_verb(Verb::new("remote", ""));
        let add = tree.add_verb(Verb::new("add", ""));
        tree.register_verb(root, remote).unwrap();
        tree.register_verb(remote, add).unwrap();

        assert_eq!(tree.ancestors(add).collect::<Vec<_>>(), vec![add, remote, root]);
        assert_eq!(tree.path(add), vec!["remote", "add"]);
        assert_eq!(tree.parent(root), None);
    }
}
