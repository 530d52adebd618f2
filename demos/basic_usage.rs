//! Basic usage example
//!
//! Demonstrates severity-banded handlers over terminal streams.
//!
//! Run with: cargo run --example basic_usage

use logmux::prelude::*;

fn main() -> Result<()> {
    println!("=== Logmux - Basic Usage Example ===\n");

    let registry = Registry::new();

    // Everything INFO and above goes to stdout; errors additionally go
    // to stderr, undiluted by lower severities.
    let all = Handler::attach(
        &registry,
        Box::new(DirectStream::stdout()),
        HandlerConfig::new(Severity::Info),
    );
    let _errors = Handler::attach(
        &registry,
        Box::new(DirectStream::stderr()),
        HandlerConfig::new(Severity::Error),
    );

    let logger = Logger::new("basic_usage", &registry);

    println!("1. Logging at different levels:");
    logger.debug("This debug message is below every band")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This error message reaches both handlers")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Temporarily silencing a handler:");
    all.disable()?;
    logger.info("Hidden while the stdout handler is disabled")?;
    all.enable()?;
    logger.info("Visible again")?;

    println!("\n3. Undecorated output through `print`:");
    logger.print("plain text, no timestamp, no level")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
