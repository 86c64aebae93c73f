//! Help text rendering for [`verbargs_core`] verb trees.
//!
//! - [`HelpRenderer`] - usage lines, option and verb tables, and the full
//!   help page for any verb of a tree.
//! - [`HelpConfig`] - layout settings, loadable from YAML.
//! - [`wrap_text`] - the word wrapper used for descriptions.
//!
//! # Example
//!
//! ```
//! use verbargs_core::{ArgOption, OptionFlags, Verb, VerbTree};
//! use verbargs_help::{HelpConfig, HelpRenderer};
//!
//! let mut tree = VerbTree::with_root(Verb::new("cp", "Copies files"));
//! let root = tree.root();
//! let files = tree.add_option(ArgOption::new(
//!     None,
//!     Some("file"),
//!     "Files to copy",
//!     OptionFlags::DEFAULT | OptionFlags::HAS_MULTIPLE_VALUE | OptionFlags::REQUIRED,
//! )?);
//! let recursive = tree.add_option(ArgOption::new(Some('r'), None, "Copy directories", OptionFlags::NONE)?);
//! tree.register_option(root, files)?.register_option(root, recursive)?;
//!
//! let renderer = HelpRenderer::new(&tree, HelpConfig::default());
//! assert_eq!(renderer.usage(root, "cp"), "cp [-r] <--file <FILE>...>");
//! assert_eq!(
//!     renderer.options_details_lines(root),
//!     vec!["  --file <FILE>...  Files to copy", "  -r                Copy directories"]
//! );
//! # Ok::<(), verbargs_core::Error>(())
//! ```

mod config;
mod error;
mod render;
mod text;

pub use config::HelpConfig;
pub use error::{HelpError, Result};
pub use render::{HelpRenderer, option_details_part, option_usage_part};
pub use text::wrap_text;
