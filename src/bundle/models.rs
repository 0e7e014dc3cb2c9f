use serde::Deserialize;

/// Instance descriptor served at `{url}/manifest.json`. Only the name
/// matters here; it drives the workspace path and the package rename.
#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
}
