use manta_config::config::InstallLayout;
use manta_config::options::{
    absolutize, sanitize_path_option, MantaWorkflowOptions, OptionMap, OptionValue,
    WorkflowOptions, RUN_DIR_KEY,
};
use std::path::{Path, PathBuf};

const CWD: &str = "/home/analyst/project";

#[test]
fn relative_run_dirs_resolve_against_cwd() {
    let cwd = Path::new(CWD);
    let cases = [
        ("out", "/home/analyst/project/out"),
        ("./out", "/home/analyst/project/out"),
        ("../x/out", "/home/analyst/x/out"),
        ("a/../b/./c/", "/home/analyst/project/b/c"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            absolutize(Path::new(input), cwd),
            PathBuf::from(expected),
            "input {input}"
        );
    }
}

#[test]
fn absolute_paths_ignore_cwd_and_are_idempotent() {
    let cwd = Path::new(CWD);
    let absolute = absolutize(Path::new("/data/runs/r1"), cwd);
    assert_eq!(absolute, PathBuf::from("/data/runs/r1"));
    assert_eq!(absolutize(&absolute, Path::new("/elsewhere")), absolute);

    let traversal = absolutize(Path::new("/data/runs/../r2"), cwd);
    assert_eq!(traversal, PathBuf::from("/data/r2"));
    assert_eq!(absolutize(&traversal, cwd), traversal);
}

#[test]
fn run_dir_is_rewritten_in_place() {
    let workflow = MantaWorkflowOptions::new(InstallLayout::new("/opt/manta/libexec"));
    let mut options = OptionMap::new();
    options.insert(RUN_DIR_KEY, OptionValue::text("myrun"));
    options.insert("other", OptionValue::text("relative"));

    workflow.validate_and_sanitize_existing_options(&mut options, Path::new(CWD));
    assert_eq!(
        options.get_text(RUN_DIR_KEY),
        Some("/home/analyst/project/myrun")
    );
    assert_eq!(options.get_text("other"), Some("relative"));
}

#[test]
fn absent_and_blank_run_dirs_are_left_untouched() {
    let mut absent = OptionMap::new();
    sanitize_path_option(&mut absent, RUN_DIR_KEY, Path::new(CWD));
    assert!(absent.is_empty());

    let mut blank = OptionMap::new();
    blank.insert(RUN_DIR_KEY, OptionValue::text(""));
    sanitize_path_option(&mut blank, RUN_DIR_KEY, Path::new(CWD));
    assert_eq!(blank.get_text(RUN_DIR_KEY), Some(""));
}

#[test]
fn numeric_run_dir_is_treated_as_a_path() {
    let mut options = OptionMap::new();
    options.insert(RUN_DIR_KEY, OptionValue::Integer(2024));
    sanitize_path_option(&mut options, RUN_DIR_KEY, Path::new(CWD));
    assert_eq!(
        options.get_text(RUN_DIR_KEY),
        Some("/home/analyst/project/2024")
    );
}
