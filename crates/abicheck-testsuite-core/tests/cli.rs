use abicheck_cli::app;
use abicheck_cli::config::{Command, Config};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn run_to_string(command: &Command) -> (i32, String) {
    let mut out = Vec::new();
    let code = app::run(command, &mut out).unwrap();

    (code.as_raw(), String::from_utf8(out).unwrap())
}

#[rstest]
#[case(&["abicheck", "layout"], Command::Layout { structs: vec![], quiet: false })]
#[case(
    &["abicheck", "layout", "--struct", "SDL_Point", "--struct", "SDL_Rect", "-q"],
    Command::Layout { structs: vec!["SDL_Point".to_owned(), "SDL_Rect".to_owned()], quiet: true },
)]
#[case(&["abicheck", "list", "--fields"], Command::List { fields: true })]
#[case(&["abicheck", "ascii"], Command::Ascii { chars: None })]
#[case(&["abicheck", "ascii", "~"], Command::Ascii { chars: Some("~".to_owned()) })]
#[case(&["abicheck", "type", "hello"], Command::Type { text: "hello".to_owned() })]
fn parse_command(#[case] args: &[&str], #[case] expected: Command) {
    let config = Config::parse_from(args).unwrap();

    assert_eq!(config.command, expected);
    assert_eq!(config.log_file, None);
}

#[test]
fn parse_global_log_file() -> anyhow::Result<()> {
    let config = Config::parse_from(["abicheck", "--log-file", "abicheck.log", "list"])?;

    assert_eq!(config.log_file.as_deref(), Some("abicheck.log"));
    assert_eq!(config.command, Command::List { fields: false });

    Ok(())
}

#[rstest]
#[case(&["abicheck"])]
#[case(&["abicheck", "frobnicate"])]
#[case(&["abicheck", "type"])]
fn parse_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Config::parse_from(args).is_err());
}

#[test]
fn layout_of_one_struct() {
    let command = Command::Layout {
        structs: vec!["sdl_point".to_owned()],
        quiet: false,
    };

    let (code, output) = run_to_string(&command);

    assert_eq!(code, 0);
    assert_eq!(output, "1 structs, 2 fields checked, 0 mismatches\n");
}

#[test]
fn layout_quiet_prints_nothing_when_conformant() {
    let command = Command::Layout {
        structs: vec!["SDL_Color".to_owned(), "SDL_FColor".to_owned()],
        quiet: true,
    };

    assert_eq!(run_to_string(&command), (0, String::new()));
}

#[test]
fn layout_of_unknown_struct_fails() {
    let command = Command::Layout {
        structs: vec!["SDL_Point".to_owned(), "SDL_Nothing".to_owned()],
        quiet: false,
    };

    let error = app::run(&command, &mut Vec::new()).unwrap_err();

    assert_eq!(error.to_string(), "unknown struct SDL_Nothing");
}

#[test]
fn list_catalog() {
    let (code, output) = run_to_string(&Command::List { fields: false });

    assert_eq!(code, 0);
    assert_eq!(output.lines().count(), abicheck_sdl::catalog().len());
    assert!(output.starts_with("SDL_CommonEvent "));
    assert!(output.lines().all(|line| line.trim_end().ends_with(char::is_numeric)));
}

#[test]
fn list_catalog_with_fields() {
    let (_, output) = run_to_string(&Command::List { fields: true });
    let first: Vec<&str> = output.lines().take(4).collect();

    assert_eq!(
        first,
        [
            "SDL_CommonEvent                            16",
            "       0  type",
            "       4  reserved",
            "       8  timestamp",
        ]
    );
}

#[test]
fn ascii_lookup() {
    let (code, output) = run_to_string(&Command::Ascii {
        chars: Some("aA".to_owned()),
    });

    assert_eq!(code, 0);
    assert_eq!(output, " 97 a      A NONE\n 65 A      A LSHIFT | RSHIFT\n");
}

#[test]
fn ascii_lookup_outside_table() {
    let (_, output) = run_to_string(&Command::Ascii {
        chars: Some("\u{1b}\u{e9}".to_owned()),
    });

    assert_eq!(output, " 27 \\u{1b} -\n233 \\u{e9} not an ASCII character\n");
}

#[test]
fn ascii_full_table() {
    let (_, output) = run_to_string(&Command::Ascii { chars: None });
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 128);
    assert_eq!(lines[32], " 32        Space NONE");
    assert_eq!(lines[96], " 96 `      ` LSHIFT | RSHIFT");
    assert_eq!(lines[126], "126 ~      ` LSHIFT | RSHIFT");
    assert_eq!(lines[127], "127 \\u{7f} Backspace LSHIFT | RSHIFT");
}

#[test]
fn type_text() {
    let (code, output) = run_to_string(&Command::Type { text: "A".to_owned() });

    assert_eq!(code, 0);
    assert_eq!(output, "press   Left Shift\npress   A\nrelease A\nrelease Left Shift\n");
}
