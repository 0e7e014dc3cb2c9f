use std::path::{Path, PathBuf};

/// Sentinel file marking the repository root.
pub const ROOT_MARKER: &str = "FelixBuild.ini";

/// Directory holding the static Electron application template,
/// resolved relative to the current working directory.
pub const TEMPLATE_DIR: &str = "app";

/// Walk upward from `start` until a directory containing the root
/// marker is found.
pub fn find_root_dir(start: &Path) -> Result<PathBuf, String> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(ROOT_MARKER).exists() {
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => {
                return Err(format!(
                    "could not find {ROOT_MARKER} above {}",
                    start.display()
                ));
            }
        }
    }
}

/// Returns the build workspace for an instance named `name`.
pub fn workspace_dir(root: &Path, name: &str) -> PathBuf {
    root.join("bin").join("GoupilePortable").join(name)
}
