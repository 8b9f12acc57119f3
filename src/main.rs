//! rquote - Random Quote Viewer
//!
//! Fetches random quotes into a terminal view with favorites and a particle backdrop.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use rquote::config::{AppConfig, CliOverrides};
use rquote::render::ui::TerminalUI;
use rquote::Application;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("rquote")
        .version(rquote::VERSION)
        .about("A random quote viewer for the terminal")
        .long_about(
            "rquote fetches random quotes from a quote service, lets you keep a list of \
             favorites that survives restarts, and switches between light and dark themes.",
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the quote service (GET {URL}/quote)"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Application title shown in the header and window title"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("File used to persist favorites"),
        )
        .arg(
            Arg::new("dark")
                .long("dark")
                .action(ArgAction::SetTrue)
                .help("Start in the dark theme"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read configuration from this TOML file"),
        )
}

fn overrides(matches: &ArgMatches) -> CliOverrides {
    CliOverrides {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        api_url: matches.get_one::<String>("api-url").cloned(),
        app_title: matches.get_one::<String>("title").cloned(),
        dark: matches.get_flag("dark"),
        store_path: matches.get_one::<PathBuf>("store").cloned(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so the alternate screen stays clean
    env_logger::init();

    let matches = cli().get_matches();
    let config = AppConfig::load(&overrides(&matches)).context("failed to load configuration")?;
    log::debug!("starting with {:?}", config);

    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(config, ui_renderer)?;

    app.run().await?;

    Ok(())
}
