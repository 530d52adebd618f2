//! File logging example
//!
//! Demonstrates an on-demand logfile next to a terminal handler, plus a
//! crash file that only materializes when something goes wrong.
//!
//! Run with: cargo run --example file_logging

use logmux::prelude::*;

fn main() -> Result<()> {
    println!("=== Logmux - File Logging Example ===\n");

    let registry = Registry::new();

    let _console = Handler::attach(
        &registry,
        Box::new(DirectStream::stdout()),
        HandlerConfig::new(Severity::Info),
    );

    // Opened on the first delivered record; every write is synced.
    let logfile = OnDemandFile::with_options(
        "application.log",
        FileOptions::new().with_banner(BannerConfig::new().with_app_name("file_logging")),
    );
    let _file = Handler::attach(&registry, Box::new(logfile), HandlerConfig::new(Severity::Debug));

    // Only CRITICAL records reach the crash file, so a clean run creates
    // no crash_NNN.log at all.
    let crash = CrashLogFile::new("crash_", ".log")
        .with_options(FileOptions::new().with_banner(BannerConfig::new().with_app_name("file_logging")));
    let _crash = Handler::attach(&registry, Box::new(crash), HandlerConfig::new(Severity::Critical));

    let logger = Logger::new("file_logging", &registry);

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.info("Configuration loaded successfully")?;
    logger.warning("Using default settings for some options")?;

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warning("Item 3 took longer than expected")?;
        }
    }

    logger.info("All operations completed")?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' (next to the executable) for the full log output");

    Ok(())
}
