#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// 0 prints everything, 1 drops headers and per-host detail,
    /// 2 keeps findings and errors only.
    pub quiet: u8,
    /// Masks the device half of hardware addresses in terminal output.
    pub redact: bool,
    /// Disables the 'q' early-stop listener while capturing.
    pub disable_input: bool,
}
