//! Command-line interface

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Parsed startup options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerArgs {
    pub addr: SocketAddr,
    pub config: Option<PathBuf>,
    pub log_json: bool,
}

impl ServerArgs {
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let host = matches
            .get_one::<IpAddr>("host")
            .copied()
            .unwrap_or(IpAddr::from([0, 0, 0, 0]));
        let port = matches
            .get_one::<u16>("port")
            .copied()
            .unwrap_or(DEFAULT_PORT);
        Self {
            addr: SocketAddr::new(host, port),
            config: matches.get_one::<PathBuf>("config").cloned(),
            log_json: matches.get_flag("log-json"),
        }
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new("promptforge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("PromptForge API: turn an idea into a deployed single-page app")
        .arg(
            Arg::new("host")
                .long("host")
                .default_value(DEFAULT_HOST)
                .value_parser(value_parser!(IpAddr))
                .help("Address to bind"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .default_value("8000")
                .value_parser(value_parser!(u16))
                .help("Port to listen on"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
}
