//! Clap argument types.

use clap::Parser;

/// Fetch user records and list those whose city starts with a prefix.
///
/// With no arguments, queries the default endpoint and filters on "S".
#[derive(Parser, Debug)]
#[command(name = "userfetch", version = userfetch::constants::VERSION)]
pub struct Cli {
    /// Endpoint returning a JSON array of users (overrides config and USERFETCH_URL).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// City prefix to match, case-insensitively (overrides config and USERFETCH_FILTER).
    #[arg(long, value_name = "PREFIX")]
    pub filter: Option<String>,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Log request details to stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
