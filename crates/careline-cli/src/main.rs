use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use careline_core::Engine;
use careline_server::config::ServerConfig;
use careline_server::state::AppState;

#[derive(Parser)]
#[command(name = "careline", version, about = "careline conversational triage service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Start {
        #[arg(long, help = "Bind host (overrides config file)")]
        host: Option<String>,
        #[arg(long, help = "Bind port (overrides config file)")]
        port: Option<u16>,
        #[arg(long, help = "Path to a YAML config file")]
        config: Option<PathBuf>,
    },
    #[command(about = "Local REPL for testing the classifiers (no server needed)")]
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Start { host, port, config } => {
            let mut config = match config {
                Some(path) => ServerConfig::load(&path)?,
                None => ServerConfig::default(),
            };
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            let state = AppState::new()?;
            careline_server::serve(state, &config.bind_addr()).await?;
        }
        Commands::Chat => {
            run_repl()?;
        }
    }

    Ok(())
}

fn run_repl() -> Result<()> {
    let engine = Engine::new()?;

    println!("careline REPL. Type 'quit' to exit.");
    println!("---");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "quit" || input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let out = engine.triage(input);
        println!("{}", out.reply);
        println!(
            "  [intent: {}, sentiment: {} ({:.1})]",
            out.intent.unwrap_or("none"),
            out.sentiment.label.as_str(),
            out.sentiment.score
        );
    }

    Ok(())
}
