//! Capture capability consumed by the scan workflow.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::network::observation::ArpObservation;

/// Failure classes of a capture attempt.
///
/// These are operational errors, never analysis findings: a failed capture
/// produces no report at all.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The datalink channel could not be opened, usually missing privileges
    /// or a vanished interface.
    #[error("failed to open a capture channel on '{interface}': {source}")]
    ChannelOpen {
        interface: String,
        #[source]
        source: std::io::Error,
    },
    /// The platform handed back something other than an ethernet channel.
    #[error("interface '{0}' does not provide an ethernet channel")]
    UnsupportedChannel(String),
    /// The reader went away before the capture window elapsed.
    #[error("capture channel closed before the window elapsed")]
    ChannelClosed,
}

/// Source of ARP observations for one bounded capture window.
///
/// Implementations own the transport, a live datalink channel in production
/// or canned frames in tests. `capture` returns everything heard within
/// `window`; an early stop request may shorten the batch, an error means no
/// batch exists.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn capture(&self, window: Duration) -> Result<Vec<ArpObservation>, CaptureError>;
}
