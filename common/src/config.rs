#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops headers and banners, `2` only prints results.
    pub quiet: u8,
    /// Hides the banner printed at startup.
    pub no_banner: bool,
}
