const HELP: &str = "\
cargo xtask

USAGE:
  cargo xtask [OPTIONS] [TASK]

FLAGS:
  -h, --help      Prints help information
  -v, --verbose   Prints additional execution traces

TASKS:
  check fmt               Check formatting
  check lints             Check lints
  check locks             Check for dirty or staged lock files not yet committed
  check tests [--no-run]  Compile tests and, unless specified otherwise, run them
  ci                      Run all checks required on CI
  clean                   Clean workspace
  layout [--release]      Check the struct catalog under 8-byte and 4-byte packing
";

pub fn print_help() {
    println!("{HELP}");
}

pub struct Args {
    pub verbose: bool,
    pub action: Action,
}

pub enum Action {
    ShowHelp,
    CheckFmt,
    CheckLints,
    CheckLocks,
    CheckTests { no_run: bool },
    Ci,
    Clean,
    Layout { release: bool },
}

pub fn parse_args() -> anyhow::Result<Args> {
    let mut args = pico_args::Arguments::from_env();

    let action = if args.contains(["-h", "--help"]) {
        Action::ShowHelp
    } else {
        match args.subcommand()?.as_deref() {
            Some("check") => match args.subcommand()?.as_deref() {
                Some("fmt") => Action::CheckFmt,
                Some("lints") => Action::CheckLints,
                Some("locks") => Action::CheckLocks,
                Some("tests") => Action::CheckTests {
                    no_run: args.contains("--no-run"),
                },
                Some(unknown) => anyhow::bail!("unknown check action: {unknown}"),
                None => Action::ShowHelp,
            },
            Some("ci") => Action::Ci,
            Some("clean") => Action::Clean,
            Some("layout") => Action::Layout {
                release: args.contains("--release"),
            },
            None | Some(_) => Action::ShowHelp,
        }
    };

    let verbose = args.contains(["-v", "--verbose"]);

    Ok(Args { verbose, action })
}
