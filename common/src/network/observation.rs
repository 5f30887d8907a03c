//! ARP traffic as the analysis layer sees it.

/// One ARP announcement lifted off the wire: who claims to own which IPv4
/// address right now. Requests and replies both count, the sender fields
/// are what matters.
///
/// Fields are plain strings on purpose. The capture layer always emits
/// well-formed dotted-quad / colon-hex values, but analysis must stay total
/// over whatever it is handed, so nothing here validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpObservation {
    pub source_ip: String,
    pub source_mac: String,
}

impl ArpObservation {
    pub fn new(source_ip: impl Into<String>, source_mac: impl Into<String>) -> Self {
        Self {
            source_ip: source_ip.into(),
            source_mac: source_mac.into(),
        }
    }
}

/// One row of the address table a scan ends up with: the baseline binding
/// for an IP in first-seen order, optionally enriched with the adapter
/// vendor behind the MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedBinding {
    pub ip: String,
    pub mac: String,
    pub vendor: Option<String>,
}

impl ObservedBinding {
    pub fn new(ip: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            mac: mac.into(),
            vendor: None,
        }
    }
}
