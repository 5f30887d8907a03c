//! # Scan Workflow
//!
//! Implements the "one bounded scan" use case: capture a window of ARP
//! traffic, analyze it against the expected gateway, and shape the result
//! for presentation.

use std::time::Duration;

use arpwarden_common::network::observation::{ArpObservation, ObservedBinding};
use arpwarden_common::report::Report;
use arpwarden_common::scanning::{CaptureError, ObservationSource};
use arpwarden_common::vendors::VendorRepository;

use crate::engine;

/// Everything one scan produced: the verdict plus the address table that
/// backs it.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: Report,
    pub bindings: Vec<ObservedBinding>,
    pub observation_count: usize,
}

/// Application service for one bounded scan.
///
/// Orchestrates the run by:
/// 1. delegating the raw capture to the [`ObservationSource`] trait.
/// 2. handing the batch to the detection engine.
/// 3. enriching the resulting address table with vendor lookups.
pub struct ScanService {
    source: Box<dyn ObservationSource>,
    vendor_repo: Box<dyn VendorRepository>,
}

impl ScanService {
    pub fn new(
        source: Box<dyn ObservationSource>,
        vendor_repo: Box<dyn VendorRepository>,
    ) -> Self {
        Self {
            source,
            vendor_repo,
        }
    }

    /// Runs one scan bounded by `window`.
    ///
    /// Capture failure propagates as an error and yields no report at all;
    /// findings travel inside the report and never become errors.
    pub async fn perform_scan(
        &self,
        gateway_ip: &str,
        window: Duration,
    ) -> Result<ScanOutcome, CaptureError> {
        let observations = self.source.capture(window).await?;
        let report = engine::analyze(&observations, gateway_ip);

        let mut bindings = baseline_bindings(&observations);
        self.enrich_vendors(&mut bindings);

        Ok(ScanOutcome {
            report,
            bindings,
            observation_count: observations.len(),
        })
    }

    fn enrich_vendors(&self, bindings: &mut [ObservedBinding]) {
        for binding in bindings.iter_mut() {
            binding.vendor = self.vendor_repo.get_vendor(&binding.mac);
        }
    }
}

/// The address table a batch settles on: the first observation per IP wins,
/// rows stay in first-seen order.
fn baseline_bindings(observations: &[ArpObservation]) -> Vec<ObservedBinding> {
    let mut bindings: Vec<ObservedBinding> = Vec::new();
    for observation in observations {
        if !bindings.iter().any(|b| b.ip == observation.source_ip) {
            bindings.push(ObservedBinding::new(
                observation.source_ip.as_str(),
                observation.source_mac.as_str(),
            ));
        }
    }
    bindings
}
