//! Logging setup for the regconv tool
//!
//! Logs go to stderr so that decoded values on stdout stay pipeable.

use anyhow::{Context, Result};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::CliConfig;

/// Directives added on top of the base filter by `--verbose`
const VERBOSE_DIRECTIVES: [&str; 2] = ["regconv=debug", "voltage_regconv=debug"];

/// Build the log filter
///
/// The base is `env_directive` (`RUST_LOG`) when set, otherwise the configured
/// level. `verbose` raises the tool and the decoder library to debug on top of
/// either base.
pub fn build_filter(
    config: &CliConfig,
    verbose: bool,
    env_directive: Option<&str>,
) -> Result<EnvFilter> {
    let base = env_directive.unwrap_or(config.log_level.as_str());
    let mut filter =
        EnvFilter::try_new(base).with_context(|| format!("Invalid log filter '{}'", base))?;

    if verbose {
        for directive in VERBOSE_DIRECTIVES {
            let directive: Directive = directive
                .parse()
                .with_context(|| format!("Invalid log directive '{}'", directive))?;
            filter = filter.add_directive(directive);
        }
    }
    Ok(filter)
}

/// Install the global subscriber
pub fn init_logging(config: &CliConfig, verbose: bool) -> Result<()> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, verbose, env_directive.as_deref())?;

    let layer = if config.log_json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}
