//! Where command output goes: a file (parent directories created) or stdout.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn emit(json: &str, out: Option<&Path>) -> Result<()> {
    let Some(path) = out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
