pub mod interfaces;
pub mod scan;

use std::net::Ipv4Addr;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arpwarden")]
#[command(version)]
#[command(about = "A passive ARP spoofing and MITM detector.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, pass twice for findings and errors only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Mask the device half of hardware addresses in the output
    #[arg(long, global = true)]
    pub redact: bool,

    /// Disable the early-stop key during capture
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture ARP traffic for a while and check it for MITM indicators
    #[command(alias = "s")]
    Scan {
        /// Capture window in seconds
        #[arg(short, long, default_value_t = 10)]
        duration: u64,

        /// Interface to listen on, auto-selected when omitted
        #[arg(short, long)]
        interface: Option<String>,

        /// Expected gateway address, discovered when omitted
        #[arg(short, long)]
        gateway: Option<Ipv4Addr>,
    },

    /// List capture-viable interfaces and the expected gateway
    #[command(alias = "i")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
