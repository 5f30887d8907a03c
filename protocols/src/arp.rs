//! ARP announcement extraction.
//!
//! Every ARP packet names its sender in the payload; requests and replies
//! alike claim "this MAC owns this IP". Analysis only needs that claim, so
//! decoding stops there.

use anyhow::{Context, ensure};
use arpwarden_common::network::observation::ArpObservation;
use pnet::packet::Packet;
use pnet::packet::arp::ArpPacket;
use pnet::packet::ethernet::EtherTypes;

use crate::ethernet;

/// Octets of an ARP packet for IPv4 over ethernet.
pub const ARP_PACKET_LEN: usize = 28;

/// Reads the sender claim out of one raw frame. Fails on anything that is
/// not a complete ARP-over-ethernet packet.
pub fn get_arp_observation(bytes: &[u8]) -> anyhow::Result<ArpObservation> {
    let frame = ethernet::get_ethernet_frame(bytes)?;
    ensure!(
        frame.get_ethertype() == EtherTypes::Arp,
        "not an ARP frame (ethertype 0x{:04x})",
        frame.get_ethertype().0
    );

    let arp = ArpPacket::new(frame.payload()).context("truncated ARP payload")?;

    Ok(ArpObservation::new(
        arp.get_sender_proto_addr().to_string(),
        arp.get_sender_hw_addr().to_string(),
    ))
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
    use std::net::Ipv4Addr;

    use pnet::packet::MutablePacket;
    use pnet::packet::arp::{ArpHardwareTypes, ArpOperation, ArpOperations, MutableArpPacket};
    use pnet::packet::ethernet::MutableEthernetPacket;
    use pnet::util::MacAddr;

    fn build_arp_frame(
        sender_mac: MacAddr,
        sender_ip: Ipv4Addr,
        operation: ArpOperation,
    ) -> Vec<u8> {
        let mut buffer = vec![0u8; ethernet::ETHERNET_HEADER_LEN + ARP_PACKET_LEN];

        let mut frame = MutableEthernetPacket::new(&mut buffer).unwrap();
        frame.set_destination(MacAddr::broadcast());
        frame.set_source(sender_mac);
        frame.set_ethertype(EtherTypes::Arp);

        let mut arp = MutableArpPacket::new(frame.payload_mut()).unwrap();
        arp.set_hardware_type(ArpHardwareTypes::Ethernet);
        arp.set_protocol_type(EtherTypes::Ipv4);
        arp.set_hw_addr_len(6);
        arp.set_proto_addr_len(4);
        arp.set_operation(operation);
        arp.set_sender_hw_addr(sender_mac);
        arp.set_sender_proto_addr(sender_ip);
        arp.set_target_hw_addr(MacAddr::zero());
        arp.set_target_proto_addr(Ipv4Addr::new(192, 168, 1, 1));

        buffer
    }

    #[test]
    fn reads_the_sender_claim_from_a_reply() {
        let frame = build_arp_frame(
            MacAddr::new(0xaa, 0xbb, 0xcc, 0x01, 0x02, 0x03),
            Ipv4Addr::new(192, 168, 1, 50),
            ArpOperations::Reply,
        );

        let observation = get_arp_observation(&frame).unwrap();
        assert_eq!(observation.source_ip, "192.168.1.50");
        assert_eq!(observation.source_mac, "aa:bb:cc:01:02:03");
    }

    #[test]
    fn requests_count_as_announcements_too() {
        let frame = build_arp_frame(
            MacAddr::new(0xde, 0xad, 0xbe, 0xef, 0x00, 0x01),
            Ipv4Addr::new(10, 0, 0, 7),
            ArpOperations::Request,
        );

        let observation = get_arp_observation(&frame).unwrap();
        assert_eq!(observation.source_ip, "10.0.0.7");
        assert_eq!(observation.source_mac, "de:ad:be:ef:00:01");
    }

    #[test]
    fn rejects_non_arp_frames() {
        let mut frame = build_arp_frame(
            MacAddr::new(0xaa, 0xbb, 0xcc, 0x01, 0x02, 0x03),
            Ipv4Addr::new(192, 168, 1, 50),
            ArpOperations::Reply,
        );
        // Flip the ethertype to IPv4.
        frame[12] = 0x08;
        frame[13] = 0x00;

        let result = get_arp_observation(&frame);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not an ARP frame"));
    }

    #[test]
    fn rejects_truncated_frames() {
        let frame = build_arp_frame(
            MacAddr::new(0xaa, 0xbb, 0xcc, 0x01, 0x02, 0x03),
            Ipv4Addr::new(192, 168, 1, 50),
            ArpOperations::Reply,
        );

        // Ethernet header intact, ARP payload cut short.
        assert!(get_arp_observation(&frame[..20]).is_err());
        // Shorter than the ethernet header itself.
        assert!(get_arp_observation(&frame[..8]).is_err());
    }
}
