use std::io;

use clap::Parser;
use tracing::{error, info, warn};

use govchain_common::utils::time;
use govchain_engine::Governance;
use govchain_node::{
    cli::{Cli, Commands},
    logging,
    seed::demo_proposals,
    setup::ensure_config,
    shell, view,
};

fn main() {
    let cli = Cli::parse();
    let log = logging::init();

    let config = match ensure_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };
    if let Err(e) = log.apply_config_filter(&config.log_filter) {
        warn!("Keeping default log filter: {}", e);
    }
    info!("Config: {}", cli.config.display());

    let proposals = if config.seed_demo_data {
        demo_proposals()
    } else {
        Vec::new()
    };
    let mut gov = Governance::new(config.user.clone(), proposals, config.governance.clone());

    let result = match cli.command {
        Commands::List(filters) => gov
            .proposals(&filters.to_query())
            .map(|visible| println!("{}", view::render_list(&visible, gov.user(), time::now()))),
        Commands::Stats => gov.stats().map(|stats| println!("{}", view::render_stats(&stats))),
        Commands::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut gov, stdin.lock(), &mut stdout)
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        std::process::exit(1);
    }
}
