use clap::Parser;
use grundlag::cli::{ask, chat, search, status, watch, Cli, Commands};
use grundlag::config::ConsoleConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match ConsoleConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_env_overrides(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags beat file and environment
    if let Some(url) = &cli.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = grundlag::logging::init(&config.logging) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match &cli.command {
        Commands::Ask(args) => ask::run_ask(&config, args).await,
        Commands::Chat(args) => chat::run_chat(&config, args).await,
        Commands::Watch(args) => watch::run_watch(&config, args).await,
        Commands::Search(args) => search::run_search(&config, args).await,
        Commands::Health(args) => status::run_health(&config, args).await,
        Commands::Models(args) => status::run_models(&config, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
