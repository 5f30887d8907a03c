use colored::*;

use arpwarden_common::config::Config;
use arpwarden_common::network::{gateway, interface};
use arpwarden_common::warn;

use crate::terminal::{colors, format, print};
use crate::wprint;

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let classified = interface::classify_interfaces();
    if classified.is_empty() {
        warn!("No network interfaces found on this device");
        return Ok(());
    }

    let mut shown = 0usize;
    for (interface, viability) in &classified {
        if viability.is_ok() {
            if shown > 0 {
                wprint!();
            }
            format::print_interface(interface, shown, cfg);
            shown += 1;
        }
    }

    if shown == 0 {
        warn!("No interface on this device is viable for capture");
    }

    if cfg.quiet == 0 {
        wprint!();
        for (interface, viability) in &classified {
            if let Err(reason) = viability {
                print::print_status(&format!("{} skipped: {}", interface.name.bold(), reason));
            }
        }
    }

    wprint!();
    match gateway::default_gateway() {
        Ok(Some(gateway_ip)) => {
            print::aligned_line("Gateway", gateway_ip.to_string().color(colors::IPV4_ADDR));
        }
        Ok(None) => warn!("No default route found"),
        Err(e) => warn!("Could not read the route table: {e}"),
    }

    print::end_of_program();
    Ok(())
}
