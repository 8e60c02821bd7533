use anyhow::Result;
use browser_grid::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    browser_grid::debug::init_log_bridge(options.log_level);

    log::info!("Starting browser-grid {}", browser_grid::VERSION);

    let stdout = std::io::stdout();
    let result = cli::run::run(options, &mut stdout.lock());
    if let Err(ref e) = result {
        log::error!("Command failed: {e:#}");
        eprintln!("browser-grid: error: {e:#}");
    }
    result
}
