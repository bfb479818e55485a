/// Region the target buckets live in.
pub const REGION: &str = "us-west-2";

/// The configuration parameters for the application.
///
/// Everything here is fixed at deploy time. The handler takes no required
/// environment variables of its own; credentials are resolved from the
/// process environment by the SDK credentials provider when the client is
/// constructed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region object downloads are issued against
    pub region: &'static str,
}

impl Config {
    /// Returns the configuration compiled into this build.
    pub fn fixed() -> Self {
        Config { region: REGION }
    }
}
