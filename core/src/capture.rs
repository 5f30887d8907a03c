//! Live capture source.
//!
//! Listens passively on one interface for a bounded window and hands every
//! decodable ARP announcement to the caller. Requires root privileges, raw
//! sockets sit underneath.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pnet::datalink::NetworkInterface;
use tracing::debug;

use arpwarden_common::network::observation::ArpObservation;
use arpwarden_common::scanning::{CaptureError, ObservationSource};
use arpwarden_protocols as protocol;

use crate::network::channel;

/// Raised by the terminal layer to end the capture window early. Checked
/// between frames; a capture stopped early returns what it has.
pub static STOP_SIGNAL: AtomicBool = AtomicBool::new(false);

const STOP_POLL_INTERVAL: Duration = Duration::from_millis(150);

type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// [`ObservationSource`] reading a live pnet datalink channel.
pub struct DatalinkSource {
    interface: NetworkInterface,
    on_observation: Option<ProgressFn>,
}

impl DatalinkSource {
    pub fn new(interface: NetworkInterface) -> Self {
        Self {
            interface,
            on_observation: None,
        }
    }

    /// Registers a callback fired with the running observation count.
    pub fn with_progress(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_observation = Some(Box::new(callback));
        self
    }
}

#[async_trait]
impl ObservationSource for DatalinkSource {
    async fn capture(&self, window: Duration) -> Result<Vec<ArpObservation>, CaptureError> {
        let mut handle = channel::start_capture(&self.interface)?;
        debug!("capture channel open on '{}'", self.interface.name);

        let mut observations: Vec<ArpObservation> = Vec::new();

        let deadline = tokio::time::sleep(window);
        tokio::pin!(deadline);

        loop {
            if STOP_SIGNAL.load(Ordering::Relaxed) {
                break;
            }

            let stop_poll = tokio::time::sleep(STOP_POLL_INTERVAL);

            tokio::select! {
                frame = handle.rx.recv() => {
                    match frame {
                        Some(bytes) => {
                            // Non-ARP and mangled frames fall through here.
                            if let Ok(observation) = protocol::arp::get_arp_observation(&bytes) {
                                observations.push(observation);
                                if let Some(callback) = &self.on_observation {
                                    callback(observations.len());
                                }
                            }
                        }
                        None => return Err(CaptureError::ChannelClosed),
                    }
                }

                _ = &mut deadline => {
                    break;
                }

                _ = stop_poll => {}
            }
        }

        debug!(
            "capture window closed with {} observations",
            observations.len()
        );
        Ok(observations)
    }
}
