use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use walkdir::WalkDir;

const PACKAGE_FILE: &str = "package.json";

pub struct WorkspaceBuilder {
    dir: PathBuf,
}

impl WorkspaceBuilder {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create the workspace (including its nested `build` directory)
    /// and copy the application template over it. Existing files are
    /// overwritten, nothing is deleted.
    pub fn prepare(&self, template_dir: &Path) -> Result<(), String> {
        info!("workspace: preparing {}", self.dir.display());
        fs::create_dir_all(self.dir.join("build"))
            .map_err(|e| format!("failed to create workspace: {e}"))?;
        copy_tree(template_dir, &self.dir)
    }

    /// Rewrite the package descriptor for this instance: `name` and
    /// `homepage` are replaced, every other key is kept as-is.
    pub fn update_package(&self, name: &str, homepage: &str) -> Result<(), String> {
        let path = self.dir.join(PACKAGE_FILE);
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let mut package: serde_json::Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| format!("invalid {}: {e}", path.display()))?;

        package.insert("name".to_owned(), Value::String(name.to_owned()));
        package.insert("homepage".to_owned(), Value::String(homepage.to_owned()));

        debug!("workspace: updating {} for {}", PACKAGE_FILE, name);
        fs::write(&path, to_pretty_json(&package)?)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))
    }
}

// The template ships with 4-space indentation; keep it stable.
fn to_pretty_json(package: &serde_json::Map<String, Value>) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    package
        .serialize(&mut ser)
        .map_err(|e| format!("failed to serialize {PACKAGE_FILE}: {e}"))?;
    Ok(buf)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<(), String> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| format!("failed to walk {}: {e}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| format!("failed to relativize {}: {e}", entry.path().display()))?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| format!("failed to create {}: {e}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| {
                format!(
                    "failed to copy {} to {}: {e}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}
