use anyhow::Result;
use clap::Parser;
use termprefs::app::App;
use termprefs::cli::{self, Cli};

fn main() -> Result<()> {
    // Parse first so --help/--version output stays clean of log setup
    let cli = Cli::parse();

    // Routes log::info!() etc. to the debug log file; CLI --log-level wins over env
    termprefs::debug::init_log_bridge(cli.log_level);
    log::info!("Running command {:?}", cli.command);

    let app = App::new(cli.config);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&app, &cli.command, &mut stdout) {
        log::error!("Command failed: {e:#}");
        log::logger().flush();
        eprintln!("termprefs: error: {e:#}");
        std::process::exit(1);
    }

    log::logger().flush();
    Ok(())
}
