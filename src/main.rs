#[macro_use]
extern crate log;
extern crate docopt;
extern crate env_logger;
extern crate etcdutil;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate tempfile;

use std::path::Path;

use etcdutil::constants::DEFAULT_MANIFEST_DIR;
use etcdutil::{EtcdPorts, InitConfiguration, ManifestInspector};

const USAGE: &'static str = "
Usage:
    etcdutil has-tls [--manifest-dir=<dir>] [--report] [--debug]
    etcdutil client-url <config> [--debug]
    etcdutil peer-url <config> [--debug]
    etcdutil url-by-ip <ip> [--debug]
    etcdutil is-ha <config> [--debug]
    etcdutil (-h | --help)

Options:
    --manifest-dir=<dir>  static pod manifest directory [default: /etc/kubernetes/manifests]
    --report              list which etcd TLS flags are set and which are missing
    --debug               debug logging
    -h --help             show this help
";

const EXIT_FAILURE: i32 = 254;

#[derive(Deserialize, Debug)]
struct Args {
    cmd_has_tls: bool,
    cmd_client_url: bool,
    cmd_peer_url: bool,
    cmd_url_by_ip: bool,
    cmd_is_ha: bool,
    arg_config: Option<String>,
    arg_ip: Option<String>,
    flag_manifest_dir: Option<String>,
    flag_report: bool,
    flag_debug: bool,
}

fn main() {
    let args: Args = docopt::Docopt::new(USAGE)
        .and_then(|d| d.argv(std::env::args()).deserialize())
        .unwrap_or_else(|e| e.exit());

    {
        let mut logger = env_logger::Builder::from_default_env();
        if args.flag_debug {
            logger.filter(None, log::LevelFilter::Debug);
        }
        if let Err(e) = logger.try_init() {
            println!("unable to init logger: {}", e);
        }
    }
    debug!("called with args: {:?}", args);

    std::process::exit(match run(&args) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            println!("{}", e);
            EXIT_FAILURE
        }
    });
}

// Returns what should go to stdout. Booleans are output, never exit codes.
fn run(args: &Args) -> etcdutil::Result<String> {
    let ports = EtcdPorts::default();
    let mut out = String::new();

    if args.cmd_has_tls {
        let dir = args
            .flag_manifest_dir
            .as_ref()
            .map(|d| d.as_str())
            .unwrap_or(DEFAULT_MANIFEST_DIR);
        let report = ManifestInspector::default().tls_report(Path::new(dir))?;
        out.push_str(&format!("{}\n", report.has_tls()));
        if args.flag_report {
            for flag in &report.present {
                out.push_str(&format!("set     {}\n", flag));
            }
            for flag in &report.missing {
                out.push_str(&format!("missing {}\n", flag));
            }
        }
    } else if args.cmd_client_url {
        out.push_str(&format!("{}\n", ports.client_url(&load_config(args)?)));
    } else if args.cmd_peer_url {
        out.push_str(&format!("{}\n", ports.peer_url(&load_config(args)?)));
    } else if args.cmd_url_by_ip {
        let ip = required(&args.arg_ip, "<ip>")?;
        out.push_str(&format!("{}\n", ports.client_url_by_ip(ip)));
    } else if args.cmd_is_ha {
        let cfg = load_config(args)?;
        if cfg.etcd.local.is_some() {
            warn!("local etcd is a single member and never highly available");
        }
        out.push_str(&format!("{}\n", etcdutil::check_configuration_is_ha(&cfg.etcd)));
    }
    Ok(out)
}

fn load_config(args: &Args) -> etcdutil::Result<InitConfiguration> {
    InitConfiguration::load(Path::new(required(&args.arg_config, "<config>")?))
}

// docopt enforces positionals, so this only trips if USAGE and Args drift apart.
fn required<'a>(arg: &'a Option<String>, name: &str) -> etcdutil::Result<&'a str> {
    arg.as_ref()
        .map(|s| s.as_str())
        .ok_or_else(|| etcdutil::Error::Invalid(format!("missing argument {}", name)))
}
