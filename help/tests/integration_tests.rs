use verbargs_core::{ArgOption, OptionFlags, Verb, VerbId, VerbTree};
use verbargs_help::{HelpConfig, HelpRenderer};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct SampleTree {
    tree: VerbTree,
    root: VerbId,
    delete: VerbId,
}

/// Root with every identifier/value combination and three sub-verbs.
fn sample_tree() -> SampleTree {
    let mut tree = VerbTree::with_root(Verb::new("test", "Test program"));
    let root = tree.root();

    let declarations = [
        (Some('a'), Some("alpha"), "Lorem Ipsum", OptionFlags::NONE),
        (Some('b'), None, "Test 123", OptionFlags::NONE),
        (None, Some("charlie"), "Hello world", OptionFlags::NONE),
        (
            Some('d'),
            Some("delta"),
            "The quick brown fox jumps over the lazy dog",
            OptionFlags::NONE,
        ),
        (Some('e'), Some("echo"), "Lorem Ipsum", OptionFlags::HAS_VALUE),
        (Some('f'), None, "Test 123", OptionFlags::HAS_MULTIPLE_VALUE),
        (None, Some("golf"), "Hello world", OptionFlags::HAS_VALUE),
    ];
    for (token, name, description, flags) in declarations {
        let id = tree.add_option(ArgOption::new(token, name, description, flags).unwrap());
        tree.register_option(root, id).unwrap();
    }

    let create = tree.add_verb(Verb::new("create", "Create something"));
    let delete = tree.add_verb(Verb::new("delete", "Delete something"));
    let update = tree.add_verb(Verb::new(
        "update",
        "Testing line return a b c d e f g h i j k l m n o p q r s t u v w x y z",
    ));
    tree.register_verb(root, create)
        .unwrap()
        .register_verb(root, delete)
        .unwrap()
        .register_verb(root, update)
        .unwrap();

    let force = tree.add_option(
        ArgOption::new(Some('f'), Some("force"), "Skip confirmation", OptionFlags::NONE).unwrap(),
    );
    tree.register_option(delete, force).unwrap();

    SampleTree { tree, root, delete }
}

fn config(console_width: usize) -> HelpConfig {
    HelpConfig::default().with_console_width(console_width)
}

/// A details row whose description starts at column 21.
fn row(details: &str, description: &str) -> String {
    format!("{details:<21}{description}")
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

#[test]
fn test_usage_wraps_under_program_name() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(40));

    assert_eq!(
        renderer.usage_lines(sample.root, "test.exe"),
        vec![
            "test.exe [create|delete|update]",
            "         [-a|--alpha] [-b] [--charlie]",
            "         [-d|--delta] [-e|--echo <ECHO>]",
            "         [-f <VALUE>...] [--golf <GOLF>]",
        ]
    );
}

#[test]
fn test_usage_fits_on_one_line_when_wide() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(200));

    assert_eq!(renderer.usage_lines(sample.root, "test.exe").len(), 1);
}

// ---------------------------------------------------------------------------
// Details tables
// ---------------------------------------------------------------------------

#[test]
fn test_options_details_align_and_wrap() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(60));

    assert_eq!(
        renderer.options_details_lines(sample.root),
        vec![
            row("  -a, --alpha", "Lorem Ipsum"),
            row("  -b", "Test 123"),
            row("      --charlie", "Hello world"),
            row("  -d, --delta", "The quick brown fox jumps over the lazy"),
            row("", "dog"),
            row("  -e, --echo <ECHO>", "Lorem Ipsum"),
            row("  -f <VALUE>...", "Test 123"),
            row("      --golf <GOLF>", "Hello world"),
        ]
    );
}

#[test]
fn test_verbs_details_wrap() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(60));

    assert_eq!(
        renderer.verbs_details(sample.root),
        "  create  Create something\n\
         \x20 delete  Delete something\n\
         \x20 update  Testing line return a b c d e f g h i j k l m n o\n\
         \x20         p q r s t u v w x y z"
    );
}

#[test]
fn test_full_help_for_sub_verb() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(60));
    let program = renderer.command_name(sample.delete, "test.exe");

    assert_eq!(
        renderer.full_help(sample.delete, &program),
        "test.exe delete [-f|--force]\n\nOptions:\n  -f, --force  Skip confirmation"
    );
}

#[test]
fn test_full_help_sections_in_order() {
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config(60));
    let help = renderer.full_help(sample.root, "test.exe");

    let actions = help.find("\n\nActions:\n").unwrap();
    let options = help.find("\n\nOptions:\n").unwrap();
    assert!(actions < options);
    assert!(help.starts_with(&renderer.usage(sample.root, "test.exe")));
    assert!(help.ends_with(&row("      --golf <GOLF>", "Hello world")));
}

// ---------------------------------------------------------------------------
// Configuration files
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_drives_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("help.yaml");
    std::fs::write(&path, "console_width: 40\nleft_space: 4\n").unwrap();

    let config = HelpConfig::load(&path).unwrap();
    let sample = sample_tree();
    let renderer = HelpRenderer::new(&sample.tree, config);

    assert_eq!(
        renderer.verbs_details_lines(sample.root)[2..],
        [
            "    update  Testing line return a b c d",
            "            e f g h i j k l m n o p q r",
            "            s t u v w x y z",
        ]
    );
}
