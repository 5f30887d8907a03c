use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use anyhow::bail;
use colored::*;
use pnet::datalink::NetworkInterface;

use arpwarden_common::config::Config;
use arpwarden_common::network::{gateway, interface};
use arpwarden_common::{error, info, success, warn};
use arpwarden_core::capture::DatalinkSource;
use arpwarden_core::scan::{ScanOutcome, ScanService};
use arpwarden_core::vendors::MacOuiRepo;

use crate::terminal::format::Detail;
use crate::terminal::{colors, format, input, print, spinner};
use crate::wprint;

pub async fn scan(
    duration: u64,
    interface: Option<String>,
    gateway: Option<Ipv4Addr>,
    cfg: &Config,
) -> anyhow::Result<()> {
    if !is_root::is_root() {
        bail!("live capture needs raw socket access, re-run with sudo");
    }

    let interface = resolve_interface(interface)?;
    let gateway_ip = resolve_gateway(gateway, &interface)?.to_string();

    info!("Listening on '{}' for {}s", interface.name.bold(), duration);
    info!("Expecting the gateway at {}", gateway_ip.color(colors::IPV4_ADDR));

    let service = ScanService::new(
        Box::new(DatalinkSource::new(interface).with_progress(spinner::report_capture_progress)),
        Box::new(MacOuiRepo),
    );

    let listener = input::spawn_stop_listener(cfg);
    spinner::start_capture_spinner(duration);

    let started = Instant::now();
    let result = service.perform_scan(&gateway_ip, Duration::from_secs(duration)).await;
    let elapsed = started.elapsed();

    spinner::stop();
    input::release_stop_listener(listener);

    match result {
        Ok(outcome) => {
            scan_ends(&outcome, &gateway_ip, elapsed, cfg);
            Ok(())
        }
        Err(e) => {
            error!("Packet capture failed: {e}");
            bail!("packet capture failed");
        }
    }
}

fn resolve_interface(name: Option<String>) -> anyhow::Result<NetworkInterface> {
    match name {
        Some(name) => interface::find_by_name(&name),
        None => {
            let selected = interface::select_capture_interface()?;
            info!("Auto-selected interface '{}'", selected.name.bold());
            Ok(selected)
        }
    }
}

/// Resolution order: explicit flag, default route, first host of the LAN.
fn resolve_gateway(
    requested: Option<Ipv4Addr>,
    interface: &NetworkInterface,
) -> anyhow::Result<Ipv4Addr> {
    if let Some(gateway_ip) = requested {
        return Ok(gateway_ip);
    }

    match gateway::default_gateway() {
        Ok(Some(gateway_ip)) => return Ok(gateway_ip),
        Ok(None) => {}
        Err(e) => warn!("Could not read the route table: {e}"),
    }

    if let Some(network) = interface::lan_network(interface) {
        let guessed = gateway::infer_gateway(network);
        warn!("No default route found, assuming the gateway at {guessed}");
        return Ok(guessed);
    }

    bail!("could not determine the expected gateway, pass --gateway");
}

fn scan_ends(outcome: &ScanOutcome, gateway_ip: &str, elapsed: Duration, cfg: &Config) {
    wprint!();
    print::header("scan report", cfg.quiet);

    print::aligned_line("Status", format::severity_label(outcome.report.severity()));
    print::aligned_line("Gateway", gateway_ip.color(colors::IPV4_ADDR));
    for reason in outcome.report.reasons() {
        print::print_status(reason);
    }

    if outcome.bindings.is_empty() {
        if cfg.quiet == 0 {
            print::no_results();
        }
    } else if cfg.quiet < 2 {
        wprint!();
        print::header("observed hosts", cfg.quiet);
        print_bindings(outcome, cfg);
    }

    print_summary(outcome, elapsed, cfg);
}

fn print_bindings(outcome: &ScanOutcome, cfg: &Config) {
    for (idx, binding) in outcome.bindings.iter().enumerate() {
        print::tree_head(idx, &binding.ip);

        let mut details: Vec<Detail> =
            vec![("MAC".to_string(), format::mac_value(&binding.mac, cfg))];
        if let Some(vendor) = &binding.vendor {
            details.push(("Vendor".to_string(), vendor.color(colors::VENDOR)));
        }

        print::as_tree_one_level(details);
        if idx + 1 != outcome.bindings.len() {
            wprint!();
        }
    }
}

fn print_summary(outcome: &ScanOutcome, elapsed: Duration, cfg: &Config) {
    let hosts = format!("{} hosts", outcome.bindings.len()).bold().green();
    let announcements = format!("{} announcements", outcome.observation_count).bold();
    let took = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let verdict = format::severity_label(outcome.report.severity());
    let output = format!("Heard {announcements} from {hosts} in {took}, verdict: {verdict}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            print::end_of_program();
        }
        _ => {
            wprint!();
            success!("{output}");
        }
    }
}
