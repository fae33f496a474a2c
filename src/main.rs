use clap::{Arg, Command};
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strava_fetch::{
    auth::{resolve_grant, OAuthClient, TokenFlow},
    config::Config,
    error::{Error, Result},
    strava::{report, ActivitiesClient},
};

#[derive(Debug)]
pub struct Args {
    log_level: String,
    dry_run: bool,
}

/// Decide which token flow to run from the loaded configuration.
pub fn resolve_token_flow(config: &Config) -> Result<TokenFlow> {
    TokenFlow::select(config.refresh_token.clone(), config.code.clone())
}

/// Instructions shown after a code exchange; the one-time code is now
/// spent, so the returned refresh token must be stored for future runs.
pub fn persistence_hint(refresh_token: &str) -> String {
    format!(
        "Save this refresh token to your .env file for future runs:\n\
         STRAVA_REFRESH_TOKEN={}\n\
         Then remove STRAVA_CODE from your .env.",
        refresh_token
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args();

    // Initialize logging
    init_logging(&args.log_level)?;

    // Pick up a local .env file if present
    let _ = dotenvy::dotenv();

    info!("Starting strava-fetch v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;

    if args.dry_run {
        info!("Configuration is valid. Dry run complete.");
        return Ok(());
    }

    // Resolve the token flow before touching the network
    let flow = resolve_token_flow(&config)?;

    // Run the selected flow
    let provider = OAuthClient::new(config.credentials())?;
    let grant = resolve_grant(&provider, &flow).await?;

    if matches!(flow, TokenFlow::Exchange(_)) {
        println!("\n{}\n", persistence_hint(&grant.refresh_token));
    }

    // Fetch and report the activities
    let client = ActivitiesClient::new()?;
    let activities = client.list_activities(&grant.access_token).await?;

    info!("Fetched {} activities", activities.len());
    print!("{}", report::render(&activities));

    Ok(())
}

fn parse_args() -> Args {
    let matches = Command::new("strava-fetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch and summarize Strava activities via OAuth2")
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
                .default_value("info")
                .num_args(1),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Validate configuration and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    Args {
        log_level: matches.get_one::<String>("log-level").unwrap().clone(),
        dry_run: matches.get_flag("dry-run"),
    }
}

fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => return Err(Error::Config(format!("Invalid log level: {}", log_level))),
    };

    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("strava_fetch={}", level).parse().unwrap());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();

    Ok(())
}
