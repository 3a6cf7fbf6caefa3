use crate::prelude::*;

/// Runs the packing checker over the whole struct catalog, failing on any mismatch.
pub fn check(sh: &Shell, release: bool) -> anyhow::Result<()> {
    let _s = Section::new("LAYOUT");

    let profile: &[&str] = if release { &["--release"] } else { &[] };
    let log_level = if is_verbose() { "debug" } else { "warn" };

    trace!("ABICHECK_LOG={log_level}");

    cmd!(sh, "{CARGO} run --locked {profile...} --package abicheck-cli --bin abicheck -- layout")
        .env("ABICHECK_LOG", log_level)
        .run()?;

    println!("All good!");

    Ok(())
}
