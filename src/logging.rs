use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_filter`. Output goes to stderr so reports on
/// stdout stay machine readable.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Pick the default filter from the verbosity flag and configured level
pub fn default_filter(verbose: bool, configured: &str) -> String {
    if verbose {
        "docstatus=info".to_string()
    } else {
        configured.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true, "warn"), "docstatus=info");
        assert_eq!(default_filter(false, "docstatus=debug"), "docstatus=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("debug");
    }
}
