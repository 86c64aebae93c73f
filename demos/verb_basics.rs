//! Verb dispatch example.
//!
//! Declares a root verb with one option, a `sub` verb with its own option,
//! and a `--help` option registered into both. Prints which options were
//! used, or the help page of the verb that was reached.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p verbargs-demos --example verb_basics -- sub -b
//! cargo run -p verbargs-demos --example verb_basics -- sub --help
//! ```

use std::process::ExitCode;

use verbargs_core::{ArgOption, OptionFlags, Verb, VerbTree, parse_env_arguments};
use verbargs_help::{HelpConfig, HelpRenderer};

fn main() -> ExitCode {
    let mut tree = VerbTree::with_root(Verb::new("app", "Verb basics demo"));
    let root = tree.root();

    let help = tree.add_option(
        ArgOption::new(Some('h'), Some("help"), "Shows this help text", OptionFlags::STOPS_PARSING).unwrap(),
    );
    let alpha = tree.add_option(ArgOption::new(Some('a'), Some("alpha"), "Root's option", OptionFlags::NONE).unwrap());
    let sub = tree.add_verb(Verb::new("sub", "Sub-verb"));
    let bravo = tree.add_option(
        ArgOption::new(Some('b'), Some("bravo"), "Sub-verb's option", OptionFlags::NONE).unwrap(),
    );

    tree.register_option(sub, bravo)
        .unwrap()
        .register_verb(root, sub)
        .unwrap()
        .register_option(root, alpha)
        .unwrap()
        .register_option_recursively(root, help, false)
        .unwrap();

    let verb = match parse_env_arguments(&mut tree) {
        Ok(verb) => verb,
        Err(err) => {
            eprintln!("Failed to process launch arguments: {err}");
            return ExitCode::FAILURE;
        }
    };

    // The help option is shared, so one check covers every verb.
    if tree.option(help).was_used() {
        let renderer = HelpRenderer::new(&tree, HelpConfig::default());
        let program = renderer.command_name(verb, "app");
        println!("{}", renderer.full_help(verb, &program));
        return ExitCode::SUCCESS;
    }

    if verb == root && tree.option(alpha).was_used() {
        println!("The root's option was used");
    } else if verb == sub && tree.option(bravo).was_used() {
        println!("The sub-verb's option was used");
    }

    println!("Reached verb: {}", tree.path(verb).join(" "));
    ExitCode::SUCCESS
}
