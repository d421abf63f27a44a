//! etcdutil: small helpers for inspecting and addressing a kubeadm-style etcd.
//!
//! - [`tls`] checks whether the etcd static pod manifest enables TLS
//! - [`url`] renders client and peer URLs, bracketing IPv6 literals
//! - [`config`] holds the etcd configuration types and the HA predicate
//! - [`staticpod`] is the minimal pod manifest schema and its reader

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;
extern crate serde_yaml;
extern crate thiserror;

pub mod config;
pub mod constants;
pub mod error;
pub mod staticpod;
pub mod tls;
pub mod url;

pub use config::{check_configuration_is_ha, EtcdConfig, InitConfiguration};
pub use error::{Error, Result};
pub use staticpod::PodManifest;
pub use tls::{pod_manifests_have_tls, ManifestInspector, TlsReport};
pub use url::{build_url, get_client_url, get_client_url_by_ip, get_peer_url, EtcdPorts};
