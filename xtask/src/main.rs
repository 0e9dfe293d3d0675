//! Workspace maintenance commands (`cargo run -p xtask -- <command>`).
//!
//! The binary validates button style sheets and prints the resolved class matrix so style
//! changes can be reviewed without rendering a page.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod styles;

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "check-styles" => check_styles(&root, rest),
        "matrix" => matrix(&root, rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives under workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo run -p xtask -- <command> [args]\n\
         \n\
         Commands:\n\
           check-styles [PATH...]  Validate button style sheets (default: {default})\n\
           matrix [PATH]           Print every button configuration with its classes as JSON\n",
        default = styles::DEFAULT_STYLES_PATH
    );
}

fn check_styles(root: &Path, args: Vec<String>) -> Result<(), String> {
    let paths = if args.is_empty() {
        vec![styles::DEFAULT_STYLES_PATH.to_string()]
    } else {
        args
    };
    styles::check_styles(root, &paths)
}

fn matrix(root: &Path, args: Vec<String>) -> Result<(), String> {
    match args.as_slice() {
        [] => styles::print_matrix(root, styles::DEFAULT_STYLES_PATH),
        [path] => styles::print_matrix(root, path),
        _ => Err("matrix accepts at most one style sheet path".to_string()),
    }
}
