use clap::Parser;
use ferrous_dig_application::use_cases::ResolveUseCase;
use ferrous_dig_domain::CliOverrides;
use ferrous_dig_infrastructure::dns::UdpTransport;
use ferrous_dig_infrastructure::system::ResolvConfReader;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

mod bootstrap;
mod exit;
mod report;

#[derive(Parser, Debug)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - minimal DNS lookup utility")]
struct Cli {
    /// Name to look up, optionally preceded by @SERVER
    #[arg(value_name = "[@SERVER] NAME", required = true, num_args = 1..=2)]
    targets: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Nameserver port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Reply timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// resolv.conf-format file to read nameservers from
    #[arg(long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Query target taken from the positional arguments.
#[derive(Debug, PartialEq, Eq)]
struct Target {
    server: Option<String>,
    name: String,
}

fn parse_targets(targets: &[String]) -> anyhow::Result<Target> {
    let mut server = None;
    let mut name = None;

    for arg in targets {
        if let Some(addr) = arg.strip_prefix('@') {
            if addr.is_empty() {
                anyhow::bail!("missing server after '@'");
            }
            if server.replace(addr.to_string()).is_some() {
                anyhow::bail!("more than one @SERVER given");
            }
        } else if name.replace(arg.clone()).is_some() {
            anyhow::bail!("more than one name given");
        }
    }

    let name = name.ok_or_else(|| anyhow::anyhow!("no name to look up"))?;
    Ok(Target { server, name })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(exit::USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print!("{}", report::render_failure(&e));
            exit::exit_code(&e)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let target = parse_targets(&cli.targets)?;

    let cli_overrides = CliOverrides {
        port: cli.port,
        timeout_ms: cli.timeout,
        resolv_conf: cli.resolv_conf.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    debug!(config = ?config, "Configuration loaded");

    let resolver = &config.resolver;
    let use_case = ResolveUseCase::new(
        Arc::new(ResolvConfReader::new(resolver.resolv_conf.clone())),
        Arc::new(UdpTransport::new(resolver.max_response_size)),
        resolver.port,
        resolver.timeout(),
    );

    print!(
        "{}",
        report::render_banner(env!("CARGO_PKG_VERSION"), &cli.targets)
    );

    let lookup = match &target.server {
        Some(server) => use_case.execute_with_server(server, &target.name).await?,
        None => use_case.execute(&target.name).await?,
    };

    print!("{}", report::render_lookup(&lookup));
    Ok(())
}
