extern crate etcdutil;
extern crate tempfile;

use std::fs;

use etcdutil::{check_configuration_is_ha, get_client_url, get_peer_url, Error, InitConfiguration};
use tempfile::TempDir;

#[test]
fn test_load_yaml_external_ha() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("kubeadm.yaml");
    fs::write(
        &path,
        "localAPIEndpoint:
  advertiseAddress: '2001:db8::2'
etcd:
  external:
    endpoints:
    - https://10.100.0.1:2379
    - https://10.100.0.2:2379
    - https://10.100.0.3:2379
    caFile: /etc/kubernetes/pki/etcd/ca.crt
",
    )
    .unwrap();

    let cfg = InitConfiguration::load(&path).unwrap();
    assert!(check_configuration_is_ha(&cfg.etcd));
    assert_eq!(get_client_url(&cfg), "https://[2001:db8::2]:2379");
    assert_eq!(get_peer_url(&cfg), "https://[2001:db8::2]:2380");
}

#[test]
fn test_load_json_local() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("kubeadm.json");
    fs::write(
        &path,
        r#"{"localAPIEndpoint": {"advertiseAddress": "10.10.10.10"}, "etcd": {"local": {"dataDir": "/var/lib/etcd"}}}"#,
    )
    .unwrap();

    let cfg = InitConfiguration::load(&path).unwrap();
    assert!(!check_configuration_is_ha(&cfg.etcd));
    assert_eq!(get_client_url(&cfg), "https://10.10.10.10:2379");
}

#[test]
fn test_load_empty_etcd_is_not_ha() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("kubeadm.yaml");
    fs::write(&path, "localAPIEndpoint:\n  advertiseAddress: 127.0.0.1\n").unwrap();

    let cfg = InitConfiguration::load(&path).unwrap();
    assert!(cfg.etcd.external.is_none() && cfg.etcd.local.is_none());
    assert!(!check_configuration_is_ha(&cfg.etcd));
}

#[test]
fn test_load_errors() {
    let tmp = TempDir::new().unwrap();

    let missing = InitConfiguration::load(&tmp.path().join("nope.yaml")).unwrap_err();
    assert!(missing.is_not_found());

    let bad_json = tmp.path().join("bad.json");
    fs::write(&bad_json, "{ not json").unwrap();
    assert!(InitConfiguration::load(&bad_json).unwrap_err().is_parse());

    let both = tmp.path().join("both.yaml");
    fs::write(
        &both,
        "etcd:\n  local:\n    dataDir: /var/lib/etcd\n  external:\n    endpoints:\n    - https://10.100.0.1:2379\n",
    )
    .unwrap();
    match InitConfiguration::load(&both) {
        Err(Error::Invalid(_)) => {}
        other => panic!("expected invalid configuration, got {:?}", other),
    }
}
