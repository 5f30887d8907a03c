//! Expected-gateway discovery.
//!
//! Analysis compares observed traffic against one expected gateway address;
//! this module finds that address. Primary source is the default route of
//! the operating system, fallback is the first host of the attached subnet.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

const RTF_UP: u32 = 0x1;
const RTF_GATEWAY: u32 = 0x2;

/// Reads the default gateway from the route table of the operating system.
///
/// `Ok(None)` means no usable default route exists; `Err` means the table
/// could not be read at all.
#[cfg(target_os = "linux")]
pub fn default_gateway() -> anyhow::Result<Option<Ipv4Addr>> {
    use anyhow::Context;

    let table =
        std::fs::read_to_string("/proc/net/route").context("reading /proc/net/route")?;
    Ok(parse_route_table(&table))
}

/// Reads the default gateway from the route table of the operating system.
///
/// `Ok(None)` means no usable default route exists; `Err` means the route
/// lookup could not be run at all.
#[cfg(target_os = "macos")]
pub fn default_gateway() -> anyhow::Result<Option<Ipv4Addr>> {
    use anyhow::Context;
    use std::process::Command;

    let output = Command::new("route")
        .args(["-n", "get", "default"])
        .output()
        .context("running 'route -n get default'")?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(parse_route_get(&String::from_utf8_lossy(&output.stdout)))
}

/// Extracts the default gateway from kernel route-table text as found in
/// `/proc/net/route`: one route per line, addresses as native-endian hex,
/// the default route carries destination `00000000` and the gateway flag.
pub fn parse_route_table(table: &str) -> Option<Ipv4Addr> {
    table.lines().skip(1).find_map(parse_route_line)
}

fn parse_route_line(line: &str) -> Option<Ipv4Addr> {
    let mut fields = line.split_whitespace();
    let _iface = fields.next()?;
    let destination = fields.next()?;
    let gateway = fields.next()?;
    let flags = u32::from_str_radix(fields.next()?, 16).ok()?;

    if destination != "00000000" || flags & (RTF_UP | RTF_GATEWAY) != (RTF_UP | RTF_GATEWAY) {
        return None;
    }

    let raw = u32::from_str_radix(gateway, 16).ok()?;
    if raw == 0 {
        return None;
    }
    // The kernel prints the address as one native-endian word.
    Some(Ipv4Addr::from(raw.to_ne_bytes()))
}

/// Extracts the gateway line from `route -n get default` output.
pub fn parse_route_get(output: &str) -> Option<Ipv4Addr> {
    output.lines().find_map(|line| {
        let value = line.trim().strip_prefix("gateway:")?;
        value.trim().parse().ok()
    })
}

/// The conventional guess when no route table helps: the first host of the
/// attached network.
pub fn infer_gateway(network: Ipv4Network) -> Ipv4Addr {
    let base = u32::from(network.network());
    Ipv4Addr::from(base.saturating_add(1))
}
