use std::io::Write;

use abicheck_keyboard::{keystrokes_for_text, AsciiKeyInfo, Operation, ASCII_KEY_INFO_TABLE};
use abicheck_layout::{CatalogEntry, LayoutReport, LayoutValidator, Packing};
use anyhow::Context as _;
use proc_exit::Code;

use crate::config::Command;

/// Runs one command, writing its output to `out`.
///
/// Returns the exit code the process should terminate with.
pub fn run(command: &Command, out: &mut dyn Write) -> anyhow::Result<Code> {
    debug!(?command, "Run");

    match command {
        Command::Layout { structs, quiet } => layout(structs, *quiet, out),
        Command::List { fields } => list(*fields, out).map(|()| Code::SUCCESS),
        Command::Ascii { chars } => ascii(chars.as_deref(), out).map(|()| Code::SUCCESS),
        Command::Type { text } => type_text(text, out).map(|()| Code::SUCCESS),
    }
}

fn layout(structs: &[String], quiet: bool, out: &mut dyn Write) -> anyhow::Result<Code> {
    let report = if structs.is_empty() {
        abicheck_sdl::validate_catalog()
    } else {
        let entries = structs
            .iter()
            .map(|name| abicheck_sdl::find(name).with_context(|| format!("unknown struct {name}")))
            .collect::<anyhow::Result<Vec<&CatalogEntry>>>()?;

        let mut validator = LayoutValidator::new();
        validator.check_all(entries.into_iter().copied());
        validator.finish()
    };

    write_report(&report, quiet, out)?;

    match report.into_result() {
        Ok(_) => Ok(Code::SUCCESS),
        Err(error) => {
            info!(%error);
            Ok(Code::FAILURE)
        }
    }
}

fn write_report(report: &LayoutReport, quiet: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    for line in report.lines() {
        writeln!(out, "{line}")?;
    }

    if !quiet {
        writeln!(out, "{report}")?;
    }

    Ok(())
}

fn list(fields: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    for entry in abicheck_sdl::catalog() {
        let layout = entry.layout(Packing::Default);

        writeln!(out, "{:<40} {:>4}", entry.name(), layout.size())?;

        if fields {
            for field in layout.fields() {
                writeln!(out, "    {:>4}  {}", field.offset(), field.name())?;
            }
        }
    }

    Ok(())
}

fn ascii(chars: Option<&str>, out: &mut dyn Write) -> anyhow::Result<()> {
    match chars {
        Some(chars) => {
            for ch in chars.chars() {
                match AsciiKeyInfo::for_char(ch) {
                    Some(info) => write_key_info(ch, info, out)?,
                    None => writeln!(
                        out,
                        "{:>3} {:<6} not an ASCII character",
                        u32::from(ch),
                        ch.escape_default().to_string()
                    )?,
                }
            }
        }
        None => {
            for (byte, info) in (0u8..).zip(ASCII_KEY_INFO_TABLE.iter()) {
                write_key_info(char::from(byte), *info, out)?;
            }
        }
    }

    Ok(())
}

fn write_key_info(ch: char, info: AsciiKeyInfo, out: &mut dyn Write) -> anyhow::Result<()> {
    let code = u32::from(ch);
    let shown = ch.escape_default().to_string();

    if info.code.is_unknown() {
        writeln!(out, "{code:>3} {shown:<6} -")?;
    } else {
        writeln!(out, "{code:>3} {shown:<6} {} {}", info.code, info.modifiers)?;
    }

    Ok(())
}

fn type_text(text: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    for operation in keystrokes_for_text(text) {
        match operation {
            Operation::KeyPressed(scancode) => writeln!(out, "press   {scancode}")?,
            Operation::KeyReleased(scancode) => writeln!(out, "release {scancode}")?,
        }
    }

    Ok(())
}
