use std::time::Duration;

use async_trait::async_trait;

use arpwarden_common::network::observation::ArpObservation;
use arpwarden_common::scanning::{CaptureError, ObservationSource};
use arpwarden_common::vendors::VendorRepository;

pub fn obs(ip: &str, mac: &str) -> ArpObservation {
    ArpObservation::new(ip, mac)
}

/// Replays a canned batch of announcements instead of touching the network.
pub struct CannedWire(pub Vec<ArpObservation>);

#[async_trait]
impl ObservationSource for CannedWire {
    async fn capture(&self, _window: Duration) -> Result<Vec<ArpObservation>, CaptureError> {
        Ok(self.0.clone())
    }
}

/// Fails every capture attempt as if the reader thread had died.
pub struct DeadWire;

#[async_trait]
impl ObservationSource for DeadWire {
    async fn capture(&self, _window: Duration) -> Result<Vec<ArpObservation>, CaptureError> {
        Err(CaptureError::ChannelClosed)
    }
}

/// Knows a single vendor prefix and nothing else.
pub struct TinyVendorDb;

impl VendorRepository for TinyVendorDb {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        mac.starts_with("dc:a6:32")
            .then(|| String::from("Raspberry Pi Trading Ltd"))
    }
}
