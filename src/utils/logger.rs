use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. A configured filter wins over `verbose`.
pub fn default_filter(verbose: bool, filter: Option<&str>) -> String {
    match (filter, verbose) {
        (Some(filter), _) => filter.to_string(),
        (None, true) => "cfunctions=debug".to_string(),
        (None, false) => "cfunctions=info".to_string(),
    }
}

/// Installs the global subscriber. Logs always go to stderr so that stdout
/// carries nothing but script output.
pub fn init_cli_logger(verbose: bool, filter: Option<&str>, json: bool) {
    let default_filter = default_filter(verbose, filter);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, None), "cfunctions=info");
        assert_eq!(default_filter(true, None), "cfunctions=debug");
        assert_eq!(
            default_filter(true, Some("cfunctions=trace")),
            "cfunctions=trace"
        );
    }
}
