//! Command-line argument parsing for pixdeck.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

/// Options for running the TUI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TuiOptions {
    /// Initial route (e.g. "/gallery/3"); defaults to "/gallery/1"
    pub route: Option<String>,
    /// Analytics collector endpoint; absent means events are not forwarded
    pub collector: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui(TuiOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Returns
///
/// The `CliCommand` to execute based on the arguments.
///
/// # Examples
///
/// ```
/// use pixdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pixdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    let mut args = args.skip(1); // Skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--collector" => {
                options.collector = args.next();
            }
            route if route.starts_with('/') => {
                options.route = Some(route.to_string());
            }
            _ => {}
        }
    }

    CliCommand::RunTui(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_flag() {
        let args = vec!["pixdeck".to_string(), "--version".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_version_short_flag() {
        let args = vec!["pixdeck".to_string(), "-V".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        let args = vec!["pixdeck".to_string()];
        assert_eq!(
            parse_args(args.into_iter()),
            CliCommand::RunTui(TuiOptions::default())
        );
    }

    #[test]
    fn test_parse_route() {
        let args = vec!["pixdeck".to_string(), "/gallery/5".to_string()];
        match parse_args(args.into_iter()) {
            CliCommand::RunTui(options) => {
                assert_eq!(options.route.as_deref(), Some("/gallery/5"));
                assert!(options.collector.is_none());
            }
            other => panic!("Expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_collector() {
        let args = vec![
            "pixdeck".to_string(),
            "--collector".to_string(),
            "http://localhost:9000/collect".to_string(),
        ];
        match parse_args(args.into_iter()) {
            CliCommand::RunTui(options) => {
                assert_eq!(
                    options.collector.as_deref(),
                    Some("http://localhost:9000/collect")
                );
            }
            other => panic!("Expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_collector_missing_value() {
        let args = vec!["pixdeck".to_string(), "--collector".to_string()];
        match parse_args(args.into_iter()) {
            CliCommand::RunTui(options) => assert!(options.collector.is_none()),
            other => panic!("Expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_flag() {
        let args = vec!["pixdeck".to_string(), "--unknown".to_string()];
        assert_eq!(
            parse_args(args.into_iter()),
            CliCommand::RunTui(TuiOptions::default())
        );
    }

    #[test]
    fn test_parse_route_and_collector() {
        let args = vec![
            "pixdeck".to_string(),
            "--collector".to_string(),
            "http://localhost:9000".to_string(),
            "/gallery/2".to_string(),
        ];
        match parse_args(args.into_iter()) {
            CliCommand::RunTui(options) => {
                assert_eq!(options.route.as_deref(), Some("/gallery/2"));
                assert_eq!(options.collector.as_deref(), Some("http://localhost:9000"));
            }
            other => panic!("Expected RunTui, got {:?}", other),
        }
    }
}
