use env_logger::{Builder, Env};

/// Log level used when `RUST_LOG` is unset. Kept at `warn` so log lines do
/// not interleave with the interactive prompts.
pub const DEFAULT_FILTER: &str = "warn";

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp(None).format_target(false);
    builder
}

/// Install the `env_logger` backend. A second call is a no-op.
pub fn setup_logging() {
    if builder().try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_twice_does_not_panic() {
        setup_logging();
        setup_logging();
    }
}
