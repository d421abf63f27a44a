//! kubeadm-style configuration: where this node advertises itself and how
//! its etcd is run.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InitConfiguration {
    #[serde(rename = "localAPIEndpoint", default)]
    pub local_api_endpoint: ApiEndpoint,
    #[serde(default)]
    pub etcd: EtcdConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiEndpoint {
    #[serde(rename = "advertiseAddress", default)]
    pub advertise_address: String,
    #[serde(rename = "bindPort", default)]
    pub bind_port: u16,
}

/// At most one of `external` and `local` is set. Neither set means no etcd
/// is configured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EtcdConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalEtcd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalEtcd>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExternalEtcd {
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(rename = "caFile", default)]
    pub ca_file: String,
    #[serde(rename = "certFile", default)]
    pub cert_file: String,
    #[serde(rename = "keyFile", default)]
    pub key_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocalEtcd {
    #[serde(rename = "dataDir", default)]
    pub data_dir: String,
    #[serde(rename = "extraArgs", default)]
    pub extra_args: BTreeMap<String, String>,
    #[serde(rename = "serverCertSANs", default)]
    pub server_cert_sans: Vec<String>,
    #[serde(rename = "peerCertSANs", default)]
    pub peer_cert_sans: Vec<String>,
}

impl EtcdConfig {
    pub fn is_highly_available(&self) -> bool {
        match self.external {
            Some(ref external) => external.endpoints.len() > 1,
            None => false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match (&self.external, &self.local) {
            (Some(_), Some(_)) => Err(Error::Invalid(
                "etcd.external and etcd.local are mutually exclusive".to_string(),
            )),
            (Some(external), None) if external.endpoints.is_empty() => Err(Error::Invalid(
                "etcd.external.endpoints must not be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

pub fn check_configuration_is_ha(cfg: &EtcdConfig) -> bool {
    cfg.is_highly_available()
}

impl InitConfiguration {
    // .json is JSON, anything else YAML
    pub fn load(path: &Path) -> Result<InitConfiguration> {
        let mut content = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut content))
            .map_err(|e| Error::NotFound {
                path: path.to_path_buf(),
                source: e,
            })?;

        let is_json = path.extension().map_or(false, |ext| ext == "json");
        let parsed: std::result::Result<InitConfiguration, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };
        let cfg = parsed.map_err(|message| Error::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        cfg.etcd.validate()?;
        debug!(
            "loaded {}: advertise address {:?}, external etcd: {}",
            path.display(),
            cfg.local_api_endpoint.advertise_address,
            cfg.etcd.external.is_some()
        );
        Ok(cfg)
    }
}
