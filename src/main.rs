use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use prometeo_dashboard::{Credentials, DashboardClient, DashboardError, Report};
use url::Url;

const AUTH_FAILED_MSG: &str = "Username and password are incorrect";
const GENERIC_FAILURE_MSG: &str = "Something happened with the request. Try again later";

const EXIT_FAILURE: u8 = 1;
const EXIT_AUTH_FAILED: u8 = 3;
const EXIT_INTERRUPTED: u8 = 130;

/// Print the API key, account holder name and this month's request history
/// of a Prometeo dashboard account as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Dashboard login (email)
    #[arg(env = "PROMETEO_USERNAME")]
    username: String,

    /// Dashboard password
    #[arg(env = "PROMETEO_PASSWORD", hide_env_values = true)]
    password: String,

    /// Dashboard host
    #[arg(long, env = "PROMETEO_BASE_URL")]
    base_url: Option<Url>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

async fn run(args: &Args) -> Result<Report, DashboardError> {
    let mut builder = DashboardClient::builder().timeout(Duration::from_secs(args.timeout));
    if let Some(url) = &args.base_url {
        builder = builder.base_url(url.clone());
    }

    let client = builder
        .login(Credentials::new(&args.username, &args.password))
        .await?;
    client.fetch_report().await
}

fn print_report(report: &Report, pretty: bool) -> Result<(), serde_json::Error> {
    let out = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{out}");
    Ok(())
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "tracing-subscriber")]
    init_tracing();

    let outcome = tokio::select! {
        res = run(&args) => res,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            return ExitCode::from(EXIT_INTERRUPTED);
        }
    };

    match outcome {
        Ok(report) => match print_report(&report, args.pretty) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "failed to encode report");
                println!("{GENERIC_FAILURE_MSG}");
                ExitCode::from(EXIT_FAILURE)
            }
        },
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, "dashboard run failed");
            if e.is_authentication() {
                println!("{AUTH_FAILED_MSG}");
                ExitCode::from(EXIT_AUTH_FAILED)
            } else {
                println!("{GENERIC_FAILURE_MSG}");
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}
