use std::sync::OnceLock;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// How long a progress update stays visible before the queue advances.
const MESSAGE_HOLD: Duration = Duration::from_secs(1);
/// Idle time before the spinner falls back to showing a tip.
const TIP_INTERVAL: Duration = Duration::from_secs(4);

const TIPS: &[&str] = &[
    "Press 'q' to close the capture window early",
    "Pass --redact to mask hardware addresses in the report",
];

pub struct SpinnerHandle {
    pub spinner: ProgressBar,
    tx: Sender<String>,
}

impl SpinnerHandle {
    pub fn send_to_queue(&self, message: String) {
        let _ = self.tx.send(message);
    }

    pub fn println(&self, msg: &str) {
        self.spinner.println(msg);
    }

    pub fn finish_and_clear(&self) {
        self.spinner.finish_and_clear();
    }

    pub fn set_message(&self, msg: String) {
        self.spinner.set_message(msg);
    }
}

pub(crate) static SPINNER: OnceLock<SpinnerHandle> = OnceLock::new();

pub fn get_spinner() -> &'static SpinnerHandle {
    SPINNER.get_or_init(init_spinner)
}

/// Clears the spinner line if one was ever drawn. Never creates one.
pub fn stop() {
    if let Some(handle) = SPINNER.get() {
        handle.finish_and_clear();
    }
}

pub fn start_capture_spinner(duration: u64) {
    get_spinner().set_message(format!("Capturing ARP traffic for {duration}s..."));
}

pub fn report_capture_progress(count: usize) {
    get_spinner().send_to_queue(format!(
        "Heard {} ARP announcements so far...",
        count.to_string().green().bold()
    ));
}

fn init_spinner() -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));

    let (tx, rx) = mpsc::channel::<String>();
    let pb_clone = pb.clone();

    // The pump owns the message line: progress updates win over tips,
    // bursts collapse to the latest update.
    thread::spawn(move || {
        let mut tip_index = 0;

        loop {
            if pb_clone.is_finished() {
                break;
            }

            match rx.recv_timeout(TIP_INTERVAL) {
                Ok(mut msg) => {
                    while let Ok(newer_msg) = rx.try_recv() {
                        msg = newer_msg;
                    }
                    pb_clone.set_message(msg);
                    thread::sleep(MESSAGE_HOLD);
                }
                Err(RecvTimeoutError::Timeout) => {
                    let tip = TIPS[tip_index % TIPS.len()];
                    pb_clone.set_message(format!("{}", tip.italic().white()));
                    tip_index += 1;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }
    });

    SpinnerHandle { spinner: pb, tx }
}

pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        get_spinner().println(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
