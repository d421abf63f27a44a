//! Detect whether the etcd static pod serves TLS.
//!
//! Detection looks only at container command line flags. Liveness probes,
//! advertise URLs and the like have no bearing on the answer.

use std::path::{Path, PathBuf};

use crate::constants::{etcd_manifest_name, CERT_FILE_FLAG, TLS_FLAGS};
use crate::error::Result;
use crate::staticpod::{read_static_pod_from_disk, PodManifest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsReport {
    pub present: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl TlsReport {
    pub fn from_manifest(pod: &PodManifest) -> TlsReport {
        let (present, missing): (Vec<&'static str>, Vec<&'static str>) = TLS_FLAGS
            .iter()
            .copied()
            .partition(|flag| pod.has_arg_prefix(flag));
        TlsReport { present, missing }
    }

    pub fn has_tls(&self) -> bool {
        self.present.contains(&CERT_FILE_FLAG)
    }

    /// Client and peer traffic are both fully secured.
    pub fn fully_secured(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInspector {
    pub manifest_name: String,
}

impl Default for ManifestInspector {
    fn default() -> Self {
        ManifestInspector {
            manifest_name: etcd_manifest_name(),
        }
    }
}

impl ManifestInspector {
    pub fn new<S: Into<String>>(manifest_name: S) -> Self {
        ManifestInspector {
            manifest_name: manifest_name.into(),
        }
    }

    pub fn manifest_path(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.manifest_name)
    }

    pub fn tls_report(&self, manifest_dir: &Path) -> Result<TlsReport> {
        let path = self.manifest_path(manifest_dir);
        let pod = read_static_pod_from_disk(&path)?;
        let report = TlsReport::from_manifest(&pod);
        if !report.missing.is_empty() {
            debug!("{} does not set {:?}", path.display(), report.missing);
        }
        Ok(report)
    }

    pub fn has_tls(&self, manifest_dir: &Path) -> Result<bool> {
        self.tls_report(manifest_dir).map(|r| r.has_tls())
    }
}

/// Whether the etcd manifest in `manifest_dir` configures a server
/// certificate. A missing manifest is an error, not a `false`.
pub fn pod_manifests_have_tls<P: AsRef<Path>>(manifest_dir: P) -> Result<bool> {
    ManifestInspector::default().has_tls(manifest_dir.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(args: &[&str]) -> PodManifest {
        let mut yaml = String::from("spec:\n  containers:\n  - name: etcd\n    command:\n");
        for a in args {
            yaml.push_str(&format!("    - \"{}\"\n", a));
        }
        PodManifest::from_yaml_str(&yaml).unwrap()
    }

    #[test]
    fn test_report_all_flags() {
        let args: Vec<String> = TLS_FLAGS.iter().map(|f| format!("{}x", f)).collect();
        let mut refs: Vec<&str> = vec!["etcd"];
        refs.extend(args.iter().map(|s| s.as_str()));
        let report = TlsReport::from_manifest(&pod(&refs));
        assert!(report.has_tls());
        assert!(report.fully_secured());
        assert_eq!(report.present.len(), TLS_FLAGS.len());
    }

    #[test]
    fn test_report_cert_only() {
        let report = TlsReport::from_manifest(&pod(&[
            "etcd",
            "--cert-file=/etc/kubernetes/pki/etcd/server.crt",
        ]));
        assert!(report.has_tls());
        assert!(!report.fully_secured());
        assert_eq!(report.present, vec![CERT_FILE_FLAG]);
    }

    #[test]
    fn test_peer_cert_does_not_count_as_server_cert() {
        let report = TlsReport::from_manifest(&pod(&[
            "etcd",
            "--peer-cert-file=/etc/kubernetes/pki/etcd/peer.crt",
        ]));
        assert!(!report.has_tls());
        assert_eq!(report.present, vec!["--peer-cert-file="]);
    }

    #[test]
    fn test_flag_must_be_prefix() {
        let report = TlsReport::from_manifest(&pod(&["etcd", "x--cert-file=/a"]));
        assert!(!report.has_tls());
    }

    #[test]
    fn test_no_containers() {
        let report = TlsReport::from_manifest(&PodManifest::default());
        assert!(!report.has_tls());
        assert_eq!(report.missing.len(), TLS_FLAGS.len());
    }

    #[test]
    fn test_inspector_default_path() {
        let inspector = ManifestInspector::default();
        assert_eq!(
            inspector.manifest_path(Path::new("/etc/kubernetes/manifests")),
            PathBuf::from("/etc/kubernetes/manifests/etcd.yaml")
        );
        assert_eq!(
            ManifestInspector::new("kube-apiserver.yaml").manifest_path(Path::new("/m")),
            PathBuf::from("/m/kube-apiserver.yaml")
        );
    }
}
