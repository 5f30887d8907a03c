//! Capture interface selection.
//!
//! Passive ARP capture wants an ordinary LAN-facing ethernet device: up,
//! physical, broadcast-capable and holding a private IPv4 address. Anything
//! else (tunnels, bridges, loopback) either hears nothing or hears the
//! wrong network.

use anyhow::Context;
use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use thiserror::Error;

#[cfg(target_os = "linux")]
use linux_impl::{is_physical, is_wireless};
#[cfg(target_os = "macos")]
use macos_impl::{is_physical, is_wireless};

use crate::warn;

/// Why an interface was rejected for capture.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    #[error("operationally down")]
    IsDown,
    /// Loopback never carries ARP worth watching.
    #[error("loopback device")]
    IsLoopback,
    /// Filtered out as "not physical" by the platform probe.
    #[error("not a physical device")]
    NotPhysical,
    /// The interface has no hardware address.
    #[error("no hardware address")]
    NoMacAddress,
    /// Broadcast support is required to hear ARP at all.
    #[error("no broadcast support")]
    NotBroadcast,
    /// Point-to-point links (VPNs and the like) bypass the LAN.
    #[error("point-to-point link")]
    IsPointToPoint,
    /// No private IPv4 address, so no LAN segment to reason about.
    #[error("no private IPv4 address")]
    NoLanIpv4,
}

/// Picks the interface a scan should listen on: the best viable candidate,
/// wired preferred over wireless.
pub fn select_capture_interface() -> anyhow::Result<NetworkInterface> {
    let candidates = capture_interfaces();
    select_best_interface(candidates, is_wired).context("no viable capture interface found")
}

/// Looks an interface up by name. An explicitly named interface is honored
/// even when it fails the viability check, but the operator gets told.
pub fn find_by_name(name: &str) -> anyhow::Result<NetworkInterface> {
    let interface = datalink::interfaces()
        .into_iter()
        .find(|interface| interface.name == name)
        .with_context(|| format!("no interface named '{name}'"))?;

    if let Err(reason) = is_viable_capture_interface(&interface, is_physical) {
        warn!("Interface '{name}' looks unsuitable for capture: {reason}");
    }

    Ok(interface)
}

/// All interfaces that pass the viability check.
pub fn capture_interfaces() -> Vec<NetworkInterface> {
    classify_interfaces()
        .into_iter()
        .filter_map(|(interface, viability)| viability.ok().map(|_| interface))
        .collect()
}

/// Every interface on the machine together with its viability verdict.
pub fn classify_interfaces() -> Vec<(NetworkInterface, Result<(), ViabilityError>)> {
    datalink::interfaces()
        .into_iter()
        .map(|interface| {
            let viability = is_viable_capture_interface(&interface, is_physical);
            (interface, viability)
        })
        .collect()
}

/// The private IPv4 network attached to `interface`, when it has one.
pub fn lan_network(interface: &NetworkInterface) -> Option<Ipv4Network> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(*v4),
        _ => None,
    })
}

fn is_viable_capture_interface(
    interface: &NetworkInterface,
    is_physical: impl Fn(&NetworkInterface) -> bool,
) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if !is_physical(interface) {
        return Err(ViabilityError::NotPhysical);
    }
    if interface.mac.is_none() {
        return Err(ViabilityError::NoMacAddress);
    }
    if !interface.is_broadcast() {
        return Err(ViabilityError::NotBroadcast);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if lan_network(interface).is_none() {
        return Err(ViabilityError::NoLanIpv4);
    }

    Ok(())
}

fn select_best_interface(
    interfaces: Vec<NetworkInterface>,
    is_wired: impl Fn(&NetworkInterface) -> bool,
) -> Option<NetworkInterface> {
    match interfaces.len() {
        0 => None,
        1 => Some(interfaces[0].clone()),
        _ => interfaces
            .iter()
            .find(|&interface| is_wired(interface))
            .cloned()
            .or(Some(interfaces[0].clone())),
    }
}

fn is_wired(interface: &NetworkInterface) -> bool {
    is_physical(interface) && !is_wireless(interface)
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/device", interface.name)).exists()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(target_os = "macos")]
mod macos_impl {
    use super::*;
    use std::collections::HashSet;
    use std::process::Command;
    use std::sync::OnceLock;

    /// Hardware info gathered once per process.
    struct HardwareInfo {
        physical_devices: HashSet<String>,
        wireless_devices: HashSet<String>,
    }

    fn get_hardware_info() -> &'static HardwareInfo {
        static HARDWARE_INFO: OnceLock<HardwareInfo> = OnceLock::new();

        HARDWARE_INFO.get_or_init(|| {
            let mut physical = HashSet::new();
            let mut wireless = HashSet::new();

            if let Ok(output) = Command::new("networksetup").arg("-listallhardwareports").output() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                for line in stdout.lines() {
                    if let Some(device) = line.strip_prefix("Device: ") {
                        physical.insert(device.trim().to_string());
                    }
                }
            }

            for device in &physical {
                let is_wifi = Command::new("networksetup")
                    .arg("-getairportnetwork")
                    .arg(device)
                    .output()
                    .map(|out| out.status.success())
                    .unwrap_or(false);

                if is_wifi {
                    wireless.insert(device.clone());
                }
            }

            HardwareInfo {
                physical_devices: physical,
                wireless_devices: wireless,
            }
        })
    }

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        get_hardware_info().physical_devices.contains(&interface.name)
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        get_hardware_info().wireless_devices.contains(&interface.name)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
