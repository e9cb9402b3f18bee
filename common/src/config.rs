pub struct Config {
    /// Verbosity reduction level.
    ///
    /// 0 shows the full transcript, 1 keeps warnings and errors,
    /// 2 and above keeps errors only.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
}
