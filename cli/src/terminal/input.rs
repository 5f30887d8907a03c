use std::io::stdin;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;

use arpwarden_common::config::Config;
use arpwarden_core::capture::STOP_SIGNAL;

const KEY_POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Watches the keyboard for 'q' or Ctrl-C and raises the capture stop
/// flag. Returns `None` when stdin is not a terminal or input is off.
pub fn spawn_stop_listener(cfg: &Config) -> Option<thread::JoinHandle<()>> {
    if cfg.disable_input || !stdin().is_tty() {
        return None;
    }

    Some(thread::spawn(|| {
        if enable_raw_mode().is_err() {
            return;
        }

        while !STOP_SIGNAL.load(Ordering::Relaxed) {
            match event::poll(KEY_POLL_INTERVAL) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        // Raw mode swallows the usual SIGINT, so Ctrl-C
                        // has to be handled as a key here.
                        let is_q = key.code == KeyCode::Char('q');
                        let is_ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);

                        if is_q || is_ctrl_c {
                            STOP_SIGNAL.store(true, Ordering::Relaxed);
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }

        let _ = disable_raw_mode();
    }))
}

/// Raises the stop flag and waits for the listener to hand the
/// terminal back.
pub fn release_stop_listener(handle: Option<thread::JoinHandle<()>>) {
    let Some(handle) = handle else {
        return;
    };

    STOP_SIGNAL.store(true, Ordering::Relaxed);
    let _ = handle.join();
    let _ = disable_raw_mode();
}
