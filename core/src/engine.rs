//! # MITM Detection Engine
//!
//! Judges one batch of ARP observations. Every invocation owns its state:
//! the binding table and the report live and die with the call, so
//! concurrent scans cannot bleed into each other.

use std::collections::HashMap;

use arpwarden_common::network::observation::ArpObservation;
use arpwarden_common::report::{Report, Severity};

/// Analyzes one capture batch against the expected gateway.
///
/// Walks the observations in arrival order, building an IP-to-MAC table
/// where the first claim for an address is the baseline. A later claim with
/// a different MAC is the classic spoofing signature and raises DANGER; the
/// baseline is kept, so a persistent spoofer keeps raising findings. After
/// the walk, a gateway that never spoke raises WARNING, always as the last
/// reason.
///
/// Total over its input: malformed or empty strings bind like any other
/// key, and nothing in here panics or errors.
pub fn analyze(observations: &[ArpObservation], gateway_ip: &str) -> Report {
    let mut bindings: HashMap<&str, &str> = HashMap::new();
    let mut report = Report::new();

    for observation in observations {
        match bindings.get(observation.source_ip.as_str()) {
            Some(&baseline_mac) if baseline_mac != observation.source_mac => {
                report.raise(
                    Severity::Danger,
                    format!(
                        "ARP spoofing detected for {} ({} → {})",
                        observation.source_ip, baseline_mac, observation.source_mac
                    ),
                );
            }
            _ => {
                bindings.insert(&observation.source_ip, &observation.source_mac);
            }
        }
    }

    if !bindings.contains_key(gateway_ip) {
        report.raise(Severity::Warning, "Gateway ARP responses not observed");
    }

    report.finalize()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use arpwarden_common::report::NO_INDICATORS;

    const GATEWAY: &str = "192.168.1.1";

    fn obs(ip: &str, mac: &str) -> ArpObservation {
        ArpObservation::new(ip, mac)
    }

    #[test]
    fn empty_batch_warns_about_the_gateway() {
        let report = analyze(&[], GATEWAY);
        assert_eq!(report.severity(), Severity::Warning);
        assert_eq!(report.reasons(), &["Gateway ARP responses not observed"]);
    }

    #[test]
    fn quiet_network_reports_no_indicators() {
        let observations = [
            obs("192.168.1.50", "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "bb:bb:bb:bb:bb:bb"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Ok);
        assert_eq!(report.reasons(), &[NO_INDICATORS]);
    }

    #[test]
    fn conflicting_claims_raise_danger() {
        let observations = [
            obs(GATEWAY, "cc:cc:cc:cc:cc:cc"),
            obs("192.168.1.50", "aa:aa:aa:aa:aa:aa"),
            obs("192.168.1.50", "bb:bb:bb:bb:bb:bb"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Danger);
        assert_eq!(
            report.reasons(),
            &["ARP spoofing detected for 192.168.1.50 (aa:aa:aa:aa:aa:aa → bb:bb:bb:bb:bb:bb)"]
        );
    }

    #[test]
    fn missing_gateway_warns() {
        let observations = [obs("192.168.1.50", "aa:aa:aa:aa:aa:aa")];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Warning);
        assert_eq!(report.reasons().len(), 1);
    }

    #[test]
    fn danger_outranks_a_missing_gateway() {
        let observations = [
            obs("192.168.1.50", "aa:aa:aa:aa:aa:aa"),
            obs("192.168.1.50", "bb:bb:bb:bb:bb:bb"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Danger);
        assert_eq!(report.reasons().len(), 2);
        assert!(report.reasons()[0].contains("ARP spoofing detected"));
        assert_eq!(report.reasons()[1], "Gateway ARP responses not observed");
    }

    #[test]
    fn repeated_identical_claims_are_noops() {
        let observations = [
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Ok);
        assert_eq!(report.reasons(), &[NO_INDICATORS]);
    }

    #[test]
    fn first_claim_stays_the_baseline() {
        // The true owner reappearing after a spoof attempt matches the
        // baseline and raises nothing new.
        let observations = [
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "bb:bb:bb:bb:bb:bb"),
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Danger);
        assert_eq!(report.reasons().len(), 1);

        // A persistent spoofer keeps getting measured against the baseline.
        let observations = [
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "bb:bb:bb:bb:bb:bb"),
            obs(GATEWAY, "bb:bb:bb:bb:bb:bb"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.reasons().len(), 2);
        assert!(
            report.reasons()[1]
                .contains("(aa:aa:aa:aa:aa:aa → bb:bb:bb:bb:bb:bb)")
        );
    }

    #[test]
    fn reasons_follow_arrival_order_with_gateway_last() {
        let observations = [
            obs("192.168.1.50", "aa:aa:aa:aa:aa:aa"),
            obs("192.168.1.60", "cc:cc:cc:cc:cc:cc"),
            obs("192.168.1.50", "bb:bb:bb:bb:bb:bb"),
            obs("192.168.1.60", "dd:dd:dd:dd:dd:dd"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.reasons().len(), 3);
        assert!(report.reasons()[0].contains("192.168.1.50"));
        assert!(report.reasons()[1].contains("192.168.1.60"));
        assert_eq!(report.reasons()[2], "Gateway ARP responses not observed");
    }

    #[test]
    fn a_contested_gateway_still_counts_as_observed() {
        let observations = [
            obs(GATEWAY, "aa:aa:aa:aa:aa:aa"),
            obs(GATEWAY, "bb:bb:bb:bb:bb:bb"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Danger);
        assert_eq!(report.reasons().len(), 1);
    }

    #[test]
    fn empty_strings_bind_like_any_key() {
        let observations = [
            obs("", "aa:aa:aa:aa:aa:aa"),
            obs("", "bb:bb:bb:bb:bb:bb"),
            obs(GATEWAY, "cc:cc:cc:cc:cc:cc"),
        ];
        let report = analyze(&observations, GATEWAY);
        assert_eq!(report.severity(), Severity::Danger);
        assert_eq!(report.reasons().len(), 1);
    }
}
