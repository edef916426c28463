pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the geolocation service.
    ///
    /// Requests go to `{endpoint}/json/{address}`.
    pub endpoint: String,
    /// Output reduction level, `-q` once hides headers, twice hides everything but results.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            quiet: 0,
            no_banner: false,
        }
    }
}
