#![cfg(test)]
use std::time::Duration;

use arpwarden_common::report::{NO_INDICATORS, Severity};
use arpwarden_common::scanning::CaptureError;
use arpwarden_core::scan::ScanService;

use crate::util::{CannedWire, DeadWire, TinyVendorDb, obs};

const GATEWAY: &str = "10.0.0.1";
const WINDOW: Duration = Duration::from_millis(10);

fn service_for(wire: CannedWire) -> ScanService {
    ScanService::new(Box::new(wire), Box::new(TinyVendorDb))
}

/// This test verifies the full pipeline on a healthy network: capture,
/// analysis, address table assembly and vendor enrichment.
#[tokio::test]
async fn healthy_network_comes_back_clean() -> anyhow::Result<()> {
    let wire = CannedWire(vec![
        obs(GATEWAY, "dc:a6:32:01:02:03"),
        obs("10.0.0.23", "aa:bb:cc:dd:ee:ff"),
        obs(GATEWAY, "dc:a6:32:01:02:03"),
    ]);

    let outcome = service_for(wire).perform_scan(GATEWAY, WINDOW).await?;

    assert!(outcome.report.is_clean());
    assert_eq!(outcome.report.severity(), Severity::Ok);
    assert_eq!(outcome.report.reasons(), &[NO_INDICATORS]);
    assert_eq!(outcome.observation_count, 3);

    assert_eq!(outcome.bindings.len(), 2);
    assert_eq!(outcome.bindings[0].ip, GATEWAY);
    assert_eq!(
        outcome.bindings[0].vendor.as_deref(),
        Some("Raspberry Pi Trading Ltd")
    );
    assert_eq!(outcome.bindings[1].ip, "10.0.0.23");
    assert_eq!(outcome.bindings[1].vendor, None);
    Ok(())
}

/// A second device re-claiming the gateway address must come back as a
/// DANGER verdict naming both hardware addresses, while the table keeps
/// the original owner.
#[tokio::test]
async fn a_spoofed_gateway_is_flagged() {
    let wire = CannedWire(vec![
        obs(GATEWAY, "dc:a6:32:01:02:03"),
        obs("10.0.0.23", "aa:bb:cc:dd:ee:ff"),
        obs(GATEWAY, "66:66:66:66:66:66"),
    ]);

    let outcome = service_for(wire)
        .perform_scan(GATEWAY, WINDOW)
        .await
        .expect("scan should succeed");

    assert_eq!(outcome.report.severity(), Severity::Danger);
    assert_eq!(outcome.report.reasons().len(), 1);
    assert_eq!(
        outcome.report.reasons()[0],
        "ARP spoofing detected for 10.0.0.1 (dc:a6:32:01:02:03 → 66:66:66:66:66:66)"
    );

    assert_eq!(outcome.bindings.len(), 2);
    assert_eq!(outcome.bindings[0].mac, "dc:a6:32:01:02:03");
}

/// Ten seconds of silence is not a clean bill of health: the gateway
/// never spoke, and the report has to say so.
#[tokio::test]
async fn a_silent_wire_warns_about_the_gateway() {
    let outcome = service_for(CannedWire(Vec::new()))
        .perform_scan(GATEWAY, WINDOW)
        .await
        .expect("scan should succeed");

    assert_eq!(outcome.report.severity(), Severity::Warning);
    assert_eq!(
        outcome.report.reasons(),
        &["Gateway ARP responses not observed"]
    );
    assert!(outcome.bindings.is_empty());
    assert_eq!(outcome.observation_count, 0);
}

/// Capture trouble is an error, never a report that could be mistaken
/// for a verdict about the network.
#[tokio::test]
async fn capture_failure_surfaces_as_an_error() {
    let service = ScanService::new(Box::new(DeadWire), Box::new(TinyVendorDb));

    let result = service.perform_scan(GATEWAY, WINDOW).await;

    assert!(matches!(result, Err(CaptureError::ChannelClosed)));
}

/// Chatty hosts repeat themselves constantly. The table must stay one
/// row per address while the raw announcement count keeps the real
/// traffic volume.
#[tokio::test]
async fn repeated_announcements_do_not_inflate_the_table() {
    let mut announcements = vec![obs(GATEWAY, "dc:a6:32:01:02:03")];
    for _ in 0..40 {
        announcements.push(obs("10.0.0.23", "aa:bb:cc:dd:ee:ff"));
    }

    let outcome = service_for(CannedWire(announcements))
        .perform_scan(GATEWAY, WINDOW)
        .await
        .expect("scan should succeed");

    assert!(outcome.report.is_clean());
    assert_eq!(outcome.bindings.len(), 2);
    assert_eq!(outcome.observation_count, 41);
}
