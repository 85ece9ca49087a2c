use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gptwebapp::connector::web;
use gptwebapp::{Commands, Container, ContainerConfig, Provider, Router};

#[derive(Parser)]
#[command(name = "gptwebapp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Credential for the upstream model API
    #[arg(long, global = true, env = "APIKEY", hide_env_values = true)]
    api_key: Option<String>,

    /// openai or anthropic
    #[arg(long, global = true, default_value = "openai")]
    provider: Provider,

    #[arg(long, global = true, env = "GPT_MODEL")]
    model: Option<String>,

    /// Override the provider's API base URL
    #[arg(long, global = true, env = "GPT_BASE_URL")]
    base_url: Option<String>,

    /// Upper bound on a single model call, in seconds (at least 1)
    #[arg(
        long,
        global = true,
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Answer with an offline echo client instead of calling a provider
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        provider: cli.provider,
        api_key: cli.api_key,
        model: cli.model,
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        mock: cli.mock,
    });

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                Ipv4Addr::UNSPECIFIED
            } else {
                Ipv4Addr::LOCALHOST
            };
            if let Some(provider) = container.provider_name() {
                info!("Answering prompts with the {} client", provider);
            }
            web::serve(Arc::new(container), SocketAddr::from((ip, port))).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_port_defaults_to_5001() {
        let cli = Cli::try_parse_from(["gptwebapp", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, public } => {
                assert_eq!(port, 5001);
                assert!(!public);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn ask_parses_mode_and_provider() {
        let cli = Cli::try_parse_from([
            "gptwebapp",
            "--provider",
            "anthropic",
            "ask",
            "--mode",
            "formula",
            "2+2",
        ])
        .unwrap();

        assert_eq!(cli.provider, Provider::Anthropic);
        match cli.command {
            Commands::Ask { prompt, mode } => {
                assert_eq!(prompt, "2+2");
                assert_eq!(mode, gptwebapp::QueryMode::Formula);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let res = Cli::try_parse_from(["gptwebapp", "ask", "--mode", "poem", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let res = Cli::try_parse_from(["gptwebapp", "--timeout-secs", "0", "serve"]);
        assert!(res.is_err());

        let cli = Cli::try_parse_from(["gptwebapp", "--timeout-secs", "1", "serve"]).unwrap();
        assert_eq!(cli.timeout_secs, 1);
    }
}
