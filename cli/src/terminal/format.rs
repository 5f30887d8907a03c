use colored::*;
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use arpwarden_common::config::Config;
use arpwarden_common::report::Severity;

use crate::terminal::{colors, print};

pub type Detail = (String, ColoredString);

pub fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Ok => severity.as_str().green().bold(),
        Severity::Warning => severity.as_str().yellow().bold(),
        Severity::Danger => severity.as_str().red().bold(),
    }
}

pub fn mac_value(mac: &str, cfg: &Config) -> ColoredString {
    if cfg.redact {
        redact_mac(mac).color(colors::MAC_ADDR)
    } else {
        mac.color(colors::MAC_ADDR)
    }
}

/// Keeps the vendor half of the address, masks the device half.
pub fn redact_mac(mac: &str) -> String {
    mac.split(':')
        .enumerate()
        .map(|(i, octet)| if i < 3 { octet } else { "**" })
        .collect::<Vec<&str>>()
        .join(":")
}

pub fn networks_to_details(networks: &[IpNetwork]) -> Vec<Detail> {
    networks
        .iter()
        .map(|network| match network {
            IpNetwork::V4(v4) => {
                let value = format!("{}/{}", v4.ip(), v4.prefix()).color(colors::IPV4_ADDR);
                (String::from("IPv4"), value)
            }
            IpNetwork::V6(v6) => {
                let value = format!("{}/{}", v6.ip(), v6.prefix()).color(colors::IPV6_ADDR);
                (String::from("IPv6"), value)
            }
        })
        .collect()
}

pub fn print_interface(interface: &NetworkInterface, idx: usize, cfg: &Config) {
    print::tree_head(idx, &interface.name);

    let mut details: Vec<Detail> = networks_to_details(&interface.ips);
    if let Some(mac_addr) = interface.mac {
        details.push((String::from("MAC"), mac_value(&mac_addr.to_string(), cfg)));
    }

    print::as_tree_one_level(details);
}

/*
████████╗███████╗███████╗████████╗███████╗
╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
   ██║   █████╗  ███████╗   ██║   ███████╗
   ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
   ██║   ███████╗███████║   ██║   ███████║
   ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
*/
