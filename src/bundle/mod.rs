use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::env;
use crate::icon;
use crate::networking::NetworkClient;
use crate::process::BuildRunner;
use crate::workspace::WorkspaceBuilder;

pub mod models;

/// Run the whole bundling pipeline for one instance.
pub async fn run(url: &str, output_file: Option<&Path>) -> Result<(), String> {
    let current_dir =
        std::env::current_dir().map_err(|e| format!("cannot read current directory: {e}"))?;
    let root_dir = env::find_root_dir(&current_dir)?;
    info!("bundle: repository root at {}", root_dir.display());

    // Both downloads must succeed before the workspace is touched.
    let network = NetworkClient::new();
    let manifest = network.fetch_manifest(url).await?;
    let icon_png = network.fetch_icon(url).await?;
    info!("bundle: packaging instance {}", manifest.name);

    let workspace_dir = env::workspace_dir(&root_dir, &manifest.name);
    let builder = WorkspaceBuilder::new(workspace_dir.clone());
    builder.prepare(Path::new(env::TEMPLATE_DIR))?;
    builder.update_package(&manifest.name, url)?;

    icon::write_icon_set(&workspace_dir.join("build"), &icon_png)?;

    let runner = BuildRunner::new(workspace_dir.clone());
    runner.install_dependencies()?;
    runner.build_distribution()?;

    let output = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(&workspace_dir, &manifest.name),
    };
    publish_artifact(&workspace_dir, &manifest.name, &output)?;
    info!("bundle: wrote {}", output.display());

    Ok(())
}

/// Default destination when no output file is requested: next to the
/// workspace, named after the instance.
pub fn default_output_path(workspace_dir: &Path, name: &str) -> PathBuf {
    workspace_dir.join("..").join(format!("{name}Portable.exe"))
}

/// Copy the packaged executable out of the workspace. A missing
/// artifact (for example after a failed npm build) surfaces here.
fn publish_artifact(workspace_dir: &Path, name: &str, output: &Path) -> Result<(), String> {
    let artifact = workspace_dir.join("dist").join(format!("{name}.exe"));
    fs::copy(&artifact, output).map_err(|e| {
        format!(
            "failed to copy {} to {}: {e}",
            artifact.display(),
            output.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_workspace() {
        let workspace = Path::new("/repo/bin/GoupilePortable/demo");
        assert_eq!(
            default_output_path(workspace, "demo"),
            Path::new("/repo/bin/GoupilePortable/demo/../demoPortable.exe")
        );
    }

    #[test]
    fn publishes_artifact_to_requested_path() {
        let tmp = tempfile::tempdir().unwrap();
        let workspace = tmp.path().join("demo");
        fs::create_dir_all(workspace.join("dist")).unwrap();
        fs::write(workspace.join("dist").join("demo.exe"), b"binary").unwrap();

        let output = tmp.path().join("out.exe");
        publish_artifact(&workspace, "demo", &output).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"binary");
    }

    #[test]
    fn publish_fails_when_artifact_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let workspace = tmp.path().join("demo");
        fs::create_dir_all(workspace.join("dist")).unwrap();

        let output = tmp.path().join("out.exe");
        let err = publish_artifact(&workspace, "demo", &output).unwrap_err();
        assert!(err.contains("demo.exe"));
    }
}
