use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use fixbroken::api::FixApi;
use fixbroken::commands::{CmdMessage, MessageLevel};
use fixbroken::config::ReconcileConfig;
use fixbroken::error::{FixError, Result};
use fixbroken::service::http::HttpService;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
use args::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    let config = ReconcileConfig::new(cli.token, cli.project_id, cli.project_dir)
        .with_api_url(&cli.api_url)
        .with_policy(cli.policy)
        .with_dry_run(cli.dry_run)
        .with_sample(cli.sample)
        .with_limit(cli.limit)
        .with_timeout(cli.timeout.map(Duration::from_secs));
    tracing::debug!(?config, "starting");

    let service = HttpService::from_config(&config)?;
    let mut api = FixApi::new(service, config);
    let report = api.reconcile()?;

    print_messages(&report.messages());
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(env.as_deref(), verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| FixError::Config(format!("cannot init logging: {e}")))
}

/// `RUST_LOG` when set and valid, otherwise our own crate at info (debug with `-v`).
fn log_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    if let Some(filter) = env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
    {
        return filter;
    }
    if verbose {
        EnvFilter::new("fixbroken=debug")
    } else {
        EnvFilter::new("fixbroken=info")
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_wins_over_defaults() {
        let filter = log_filter(Some("fixbroken=trace"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = log_filter(Some("fixbroken=warn"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn defaults_follow_verbose_flag() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("  "), false).max_level_hint(), Some(LevelFilter::INFO));
    }
}
