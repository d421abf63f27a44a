//! Well-known names and ports for a kubeadm-managed etcd.

pub const ETCD: &str = "etcd";

pub const MANIFEST_EXTENSION: &str = "yaml";

/// Where kubeadm writes static pod manifests.
pub const DEFAULT_MANIFEST_DIR: &str = "/etc/kubernetes/manifests";

pub const ETCD_LISTEN_CLIENT_PORT: u16 = 2379;

pub const ETCD_LISTEN_PEER_PORT: u16 = 2380;

pub const URL_SCHEME: &str = "https";

/// Flag whose presence marks the etcd server as serving TLS.
pub const CERT_FILE_FLAG: &str = "--cert-file=";

/// Every flag a fully secured etcd is started with.
pub const TLS_FLAGS: &[&str] = &[
    CERT_FILE_FLAG,
    "--key-file=",
    "--trusted-ca-file=",
    "--client-cert-auth=",
    "--peer-cert-file=",
    "--peer-key-file=",
    "--peer-trusted-ca-file=",
    "--peer-client-cert-auth=",
];

pub fn etcd_manifest_name() -> String {
    format!("{}.{}", ETCD, MANIFEST_EXTENSION)
}
