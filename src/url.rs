//! Client and peer URLs for an etcd member.

use crate::config::InitConfiguration;
use crate::constants::{ETCD_LISTEN_CLIENT_PORT, ETCD_LISTEN_PEER_PORT, URL_SCHEME};

/// Render `https://address:port`, bracketing the address if it contains a
/// colon. The address is assumed to be validated already; garbage in gives
/// a well-formed-looking string out.
pub fn build_url(address: &str, port: u16) -> String {
    if address.contains(':') {
        format!("{}://[{}]:{}", URL_SCHEME, address, port)
    } else {
        format!("{}://{}:{}", URL_SCHEME, address, port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtcdPorts {
    pub client: u16,
    pub peer: u16,
}

impl Default for EtcdPorts {
    fn default() -> Self {
        EtcdPorts {
            client: ETCD_LISTEN_CLIENT_PORT,
            peer: ETCD_LISTEN_PEER_PORT,
        }
    }
}

impl EtcdPorts {
    pub fn client_url(&self, cfg: &InitConfiguration) -> String {
        build_url(&cfg.local_api_endpoint.advertise_address, self.client)
    }

    pub fn peer_url(&self, cfg: &InitConfiguration) -> String {
        build_url(&cfg.local_api_endpoint.advertise_address, self.peer)
    }

    pub fn client_url_by_ip(&self, ip: &str) -> String {
        build_url(ip, self.client)
    }
}

pub fn get_client_url(cfg: &InitConfiguration) -> String {
    EtcdPorts::default().client_url(cfg)
}

pub fn get_peer_url(cfg: &InitConfiguration) -> String {
    EtcdPorts::default().peer_url(cfg)
}

pub fn get_client_url_by_ip(ip: &str) -> String {
    EtcdPorts::default().client_url_by_ip(ip)
}
