//! `amapr log` – print or clear the redirect log.

use amapr_core::logging;
use anyhow::Result;

pub fn run_log(clear: bool) -> Result<()> {
    if clear {
        logging::clear_log()?;
        println!("Log cleared.");
        return Ok(());
    }

    let text = logging::read_log()?;
    if text.trim().is_empty() {
        println!("No logs yet.");
    } else {
        print!("{text}");
    }
    Ok(())
}
