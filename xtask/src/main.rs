//! Release maintenance commands (`cargo xtask`).
//!
//! The `xtask` binary wraps the distribution packaging helpers so the
//! repository exposes stable entrypoints through Cargo: banner injection for
//! dist files and SRI hash generation for the docs site config.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod banner;
mod error;
mod sri;

use error::{XtaskError, XtaskResult};

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result: XtaskResult<()> = match cmd.as_str() {
        "banner" => banner::run(&root, &rest),
        "sri" => sri::run(&root, &rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))),
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
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           banner [dist-dir]   Prepend the distribution banner to dist files\n\
           sri                 Regenerate SRI hashes in docs/config.yml\n"
    );
}
