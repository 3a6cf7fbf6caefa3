#[macro_use]
mod macros;

mod check;
mod clean;
mod cli;
mod layout;
mod prelude;
mod section;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use xshell::Shell;

use crate::cli::Action;

pub const CARGO: &str = env!("CARGO");

static VERBOSE: AtomicBool = AtomicBool::new(false);

fn main() -> anyhow::Result<()> {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            cli::print_help();
            return Err(e);
        }
    };

    VERBOSE.store(args.verbose, Ordering::Release);

    let sh = Shell::new()?;

    sh.change_dir(project_root());

    match args.action {
        Action::ShowHelp => cli::print_help(),
        Action::CheckFmt => check::fmt(&sh)?,
        Action::CheckLints => check::lints(&sh)?,
        Action::CheckLocks => check::lock_files(&sh)?,
        Action::CheckTests { no_run } => {
            if no_run {
                check::tests_compile(&sh)?;
            } else {
                check::tests_run(&sh)?;
            }
        }
        Action::Ci => {
            check::fmt(&sh)?;
            check::tests_compile(&sh)?;
            check::tests_run(&sh)?;
            check::lints(&sh)?;
            layout::check(&sh, false)?;
            check::lock_files(&sh)?;
        }
        Action::Clean => clean::workspace(&sh)?,
        Action::Layout { release } => layout::check(&sh, release)?,
    }

    Ok(())
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Acquire)
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}
