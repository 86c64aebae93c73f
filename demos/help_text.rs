//! Help text rendering example.
//!
//! Renders the help page of a tree mixing every identifier style, a long
//! wrapped description, and a hidden option that only shows up with
//! `--debug`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p verbargs-demos --example help_text
//! cargo run -p verbargs-demos --example help_text -- --debug
//! ```

use verbargs_core::{ArgOption, OptionFlags, Verb, VerbTree, parse_env_arguments};
use verbargs_help::{HelpConfig, HelpRenderer};

fn main() {
    let mut tree = VerbTree::with_root(Verb::new("root", ""));
    let root = tree.root();

    let long_description = ["This is a long description."; 12].join(" ");
    let declarations = [
        (Some('a'), Some("alpha"), "Option with token and name.", OptionFlags::NONE),
        (Some('b'), None, "Option with token only.", OptionFlags::NONE),
        (None, Some("charlie"), "Option with a name only.", OptionFlags::NONE),
        (Some('ß'), Some("weiß"), "Option with non-ASCII token and name.", OptionFlags::NONE),
        (Some('e'), Some("echo"), long_description.as_str(), OptionFlags::HAS_VALUE),
        (Some('d'), Some("debug"), "Secret debugging option.", OptionFlags::HIDDEN),
    ];
    let mut debug = None;
    for (token, name, description, flags) in declarations {
        let id = tree.add_option(ArgOption::new(token, name, description, flags).unwrap());
        tree.register_option(root, id).unwrap();
        if flags.contains(OptionFlags::HIDDEN) {
            debug = Some(id);
        }
    }

    if let Err(err) = parse_env_arguments(&mut tree) {
        eprintln!("Failed to process launch arguments: {err}");
        return;
    }

    let config = HelpConfig {
        show_hidden: debug.is_some_and(|id| tree.option(id).was_used()),
        ..HelpConfig::default()
    };
    let renderer = HelpRenderer::new(&tree, config);
    println!("{}", renderer.full_help(root, "example"));
}
