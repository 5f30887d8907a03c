use anyhow::Context;
use pnet::packet::ethernet::EthernetPacket;

/// Octets of an untagged ethernet header.
pub const ETHERNET_HEADER_LEN: usize = 14;

/// Wraps raw wire bytes as an ethernet frame.
pub fn get_ethernet_frame(bytes: &[u8]) -> anyhow::Result<EthernetPacket<'_>> {
    EthernetPacket::new(bytes).with_context(|| {
        format!(
            "frame too short for an ethernet header: {} bytes",
            bytes.len()
        )
    })
}
