// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Component, Path},
};

use serde::Serialize;

use crate::error::{Result, RosterError};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(RosterError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| RosterError::io(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write the whole document, replacing whatever was there.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| RosterError::io(path, e))
}

/// `target` as a `/`-separated path relative to the directory `base`, worked out
/// lexically. `None` when that can't be done without touching the filesystem
/// (mixed absolute and relative paths, or `..` left over in `base`).
pub fn relative_href(base: &Path, target: &Path) -> Option<String> {
    let base: Vec<Component> = base.components().filter(|c| *c != Component::CurDir).collect();
    let target: Vec<Component> = target.components().filter(|c| *c != Component::CurDir).collect();
    let common = base.iter().zip(&target).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    for c in &base[common..] {
        match c {
            Component::Normal(_) => parts.push(s!("..")),
            _ => return None,
        }
    }
    for c in &target[common..] {
        match c {
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
            Component::ParentDir => parts.push(s!("..")),
            _ => return None,
        }
    }
    Some(parts.join("/"))
}

/// Pretty JSON dump of anything serializable.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| RosterError::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n").map_err(|e| RosterError::io(path, e))?;
    out.flush().map_err(|e| RosterError::io(path, e))
}
