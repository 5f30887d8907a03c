//! Datalink plumbing.
//!
//! pnet receivers block, so reading happens on a plain thread that feeds an
//! unbounded tokio channel. The thread exits once the datalink side errors
//! out or the receiving half is dropped.

use std::io;
use std::time::Duration;

use pnet::datalink::{self, Channel, Config, DataLinkReceiver, NetworkInterface};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use arpwarden_common::scanning::CaptureError;

const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// Receiving side of one live capture.
pub struct EthernetHandle {
    pub rx: UnboundedReceiver<Vec<u8>>,
}

/// Opens a passive ethernet channel on `intf` and spawns the blocking
/// reader behind it.
pub fn start_capture(intf: &NetworkInterface) -> Result<EthernetHandle, CaptureError> {
    let receiver = open_eth_receiver(intf, capture_config(), datalink::channel)?;
    let (tx, rx) = mpsc::unbounded_channel();
    spawn_reader(receiver, tx);
    Ok(EthernetHandle { rx })
}

fn open_eth_receiver<F>(
    intf: &NetworkInterface,
    cfg: Config,
    channel_opener: F,
) -> Result<Box<dyn DataLinkReceiver>, CaptureError>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    match channel_opener(intf, cfg) {
        Ok(Channel::Ethernet(_tx, rx)) => Ok(rx),
        Ok(_) => Err(CaptureError::UnsupportedChannel(intf.name.clone())),
        Err(source) => Err(CaptureError::ChannelOpen {
            interface: intf.name.clone(),
            source,
        }),
    }
}

fn spawn_reader(mut receiver: Box<dyn DataLinkReceiver>, tx: UnboundedSender<Vec<u8>>) {
    std::thread::spawn(move || {
        loop {
            match receiver.next() {
                Ok(frame) => {
                    if tx.send(frame.to_vec()).is_err() {
                        break;
                    }
                }
                // Read timeouts are the pacing mechanism, not failures.
                Err(e)
                    if e.kind() == io::ErrorKind::TimedOut
                        || e.kind() == io::ErrorKind::WouldBlock =>
                {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}

fn capture_config() -> Config {
    Config {
        read_timeout: Some(READ_TIMEOUT),
        ..Default::default()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
