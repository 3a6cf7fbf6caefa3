use crate::prelude::*;

pub fn workspace(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("CLEAN");

    trace!("Remove log files…");
    for log_file in sh.read_dir(".")? {
        if log_file.extension().is_some_and(|ext| ext == "log") {
            sh.remove_path(log_file)?;
        }
    }

    cmd!(sh, "{CARGO} clean").run()?;

    Ok(())
}
