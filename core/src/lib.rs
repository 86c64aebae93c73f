//! Verb/option trees and a POSIX-style command-line argument parser.
//!
//! This crate defines the declaration model and the parser:
//!
//! - [`ArgOption`] - a flag identified by a short token (`-v`) and/or a long
//!   name (`--verbose`), with [`OptionFlags`] controlling values, repetition,
//!   defaults, and requirements.
//! - [`Verb`] - a sub-command owning options and nested verbs.
//! - [`VerbTree`] - the arena owning all verbs and options, addressed by
//!   [`VerbId`] and [`OptionId`] handles. Registration
//!   ([`register_verb`](VerbTree::register_verb),
//!   [`register_option`](VerbTree::register_option)) validates eagerly.
//! - [`parse_arguments`] - walks raw arguments through the tree, recording
//!   option usage and returning the deepest verb reached.
//!
//! Errors come in three families: [`OptionError`] and [`VerbError`] for
//! mistakes in the declared tree, [`ParseError`] for bad user input.
//!
//! # Example
//!
//! ```
//! use verbargs_core::*;
//!
//! let mut tree = VerbTree::with_root(Verb::new("app", "Element manager"));
//! let root = tree.root();
//! let help = tree.add_option(ArgOption::new(
//!     Some('h'),
//!     Some("help"),
//!     "Shows this help text",
//!     OptionFlags::STOPS_PARSING,
//! )?);
//! let create = tree.add_verb(Verb::new("create", "Create an element"));
//! let name = tree.add_option(ArgOption::new(
//!     Some('n'),
//!     Some("name"),
//!     "Element's name",
//!     OptionFlags::DEFAULT | OptionFlags::HAS_VALUE | OptionFlags::REQUIRED,
//! )?);
//! let overwrite = tree.add_option(ArgOption::new(Some('O'), Some("overwrite"), "", OptionFlags::NONE)?);
//!
//! tree.register_option(root, help)?
//!     .register_verb(root, create)?
//!     .register_option(create, name)?
//!     .register_option(create, overwrite)?;
//!
//! let verb = parse_arguments(&mut tree, &["create", "-O", "notes"])?;
//! assert_eq!(verb, create);
//! assert_eq!(tree.option(name).value(), Some("notes"));
//! assert!(tree.option(overwrite).was_used());
//!
//! tree.clear();
//! let err = parse_arguments(&mut tree, &["create"]).unwrap_err();
//! assert_eq!(err, ParseError::MissingRequiredOption("-n|--name".into()));
//! # Ok::<(), verbargs_core::Error>(())
//! ```

mod error;
mod flags;
mod option;
mod parser;
mod verb;

pub use error::{Error, OptionError, ParseError, Result, VerbError};
pub use flags::OptionFlags;
pub use option::ArgOption;
pub use parser::{parse_arguments, parse_arguments_from, parse_env_arguments};
pub use verb::{Ancestors, OptionId, Verb, VerbId, VerbTree};
