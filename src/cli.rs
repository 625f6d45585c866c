// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The surface is deliberately small: one required positional argument (the
// seed URL) and the depth ceiling. clap rejects a missing URL with a usage
// diagnostic and a non-zero exit before any crawling starts.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "link-walker",
    version,
    about = "Recursively crawl a web page and print the links it discovers",
    long_about = "link-walker fetches a seed page, extracts its hyperlinks, and follows \
                  them depth-first up to a configurable depth, printing one line per \
                  discovered link, indented by depth."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    pub url: String,

    /// Maximum crawl depth; links found at this depth are not reported
    /// and never followed
    #[arg(long, default_value_t = 2)]
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_depth_defaults_to_two() {
        let cli = Cli::try_parse_from(["link-walker", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.max_depth, 2);
    }

    #[test]
    fn max_depth_flag_overrides_default() {
        let cli =
            Cli::try_parse_from(["link-walker", "https://example.com", "--max-depth", "3"])
                .unwrap();
        assert_eq!(cli.max_depth, 3);
    }

    #[test]
    fn missing_url_is_a_parse_error() {
        assert!(Cli::try_parse_from(["link-walker"]).is_err());
    }
}
