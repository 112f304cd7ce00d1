//! Binary entrypoint for the pigeonhole CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `status` - print the configured office and its registered users
//! - `demo` - run a scripted message exchange against the configured users
//!
//! See the library crate docs for module-level details: `pigeonhole::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use pigeonhole::config::Config;
use pigeonhole::office::{Message, PostOffice};

#[derive(Parser)]
#[command(name = "pigeonhole")]
#[command(about = "An in-memory post office with urgent delivery and read tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new pigeonhole configuration
    Init,
    /// Show the configured office and its registered users
    Status,
    /// Run a scripted exchange between the first two configured users
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Init => {
            info!("Initializing new pigeonhole configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Status => {
            let config = match pre_config {
                Some(config) => config,
                None => Config::load(&cli.config).await?,
            };
            println!("Office: {}", config.office.name);
            println!("Registered users ({}):", config.office.usernames.len());
            for user in &config.office.usernames {
                println!("  {}", user);
            }
        }
        Commands::Demo => {
            let config = match pre_config {
                Some(config) => config,
                None => Config::load(&cli.config).await?,
            };
            run_demo(&config)?;
        }
    }

    Ok(())
}

/// Deliver a pair of messages between the first two configured users, then
/// walk through inbox retrieval and search to show the lifecycle.
fn run_demo(config: &Config) -> Result<()> {
    let users = &config.office.usernames;
    if users.len() < 2 {
        anyhow::bail!("demo needs at least two configured usernames");
    }
    let (first, second) = (users[0].as_str(), users[1].as_str());

    let mut office = PostOffice::new(users.iter().cloned());
    info!("Office \"{}\" open with {} boxes", config.office.name, users.len());

    let id = office.deliver(Message::urgent(
        second,
        first,
        "Postman",
        &format!("Hello {first}"),
    ))?;
    info!("Delivered urgent message, id {}", id);

    let id = office.deliver(Message::new(
        first,
        second,
        "Reply",
        &format!("Hello {second}"),
    ))?;
    info!("Delivered normal message, id {}", id);

    for user in [first, second] {
        println!("Inbox for {user}:");
        for message in office.read_inbox(user, None)? {
            println!("{message}");
        }
    }

    let hits = office.search_inbox(first, "Hello")?;
    println!("Search \"Hello\" in {first}'s box: {} match(es)", hits.len());

    Ok(())
}

/// Set up env_logger. CLI verbosity overrides the configured level; an
/// optional log file from config receives every line, with console echo
/// only when stdout is a TTY.
fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    if let Some(file) = config.as_ref().and_then(|cfg| cfg.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)?;
                }
                Ok(())
            });
        }
    }

    let _ = builder.try_init();
}
