use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Only the container command lines are read; every other field of the pod
/// is ignored so it can never fail the parse.
#[derive(Debug, Default, Deserialize)]
pub struct PodManifest {
    #[serde(default)]
    pub spec: PodSpec,
}

#[derive(Debug, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Container {
    pub fn cli(&self) -> impl Iterator<Item = &str> {
        self.command.iter().chain(self.args.iter()).map(|s| s.as_str())
    }
}

impl PodManifest {
    pub fn from_yaml_str(content: &str) -> std::result::Result<PodManifest, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn cli_args(&self) -> impl Iterator<Item = &str> {
        self.spec.containers.iter().flat_map(|c| c.cli())
    }

    pub fn has_arg_prefix(&self, prefix: &str) -> bool {
        self.cli_args().any(|arg| arg.starts_with(prefix))
    }
}

/// Read and parse a static pod manifest. Failing to open or read the file
/// is a `NotFound`; anything the YAML parser rejects is a `Parse`.
pub fn read_static_pod_from_disk(path: &Path) -> Result<PodManifest> {
    let mut content = String::new();
    {
        let mut file = File::open(path).map_err(|e| Error::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        file.read_to_string(&mut content).map_err(|e| Error::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    debug!("read {} bytes from {}", content.len(), path.display());

    PodManifest::from_yaml_str(&content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
