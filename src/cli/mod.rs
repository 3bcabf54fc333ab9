// SPDX-License-Identifier: GPL-3.0-only

pub mod query;

use anyhow::Context;
use eox_client::Client;
use log::info;
use std::{
    env,
    io::{self, BufRead, Write},
    process,
};

use crate::config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

const USAGE: &str = "Usage: eox-query [CONFIG]";

pub fn run() {
    let mut args = env::args().skip(1);
    let path = match args.next().as_deref() {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            println!(
                "Looks up end-of-life records. CONFIG defaults to `{}`.",
                DEFAULT_CONFIG_PATH
            );
            return;
        }
        Some(path) => path.to_string(),
        None => DEFAULT_CONFIG_PATH.to_string(),
    };
    if args.next().is_some() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    println!("Cisco EOX Query Engine Starting...\n");

    if let Err(err) = start(&path) {
        eprintln!("eox-query: {:#}", err);
        process::exit(1);
    }
}

fn start(path: &str) -> anyhow::Result<()> {
    let config = load_config(path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&config, stdin.lock(), &mut stdout.lock())
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    Config::load(path).map_err(|err| {
        let context = match &err {
            ConfigError::Read(ini::Error::Io(_)) => format!("Failed to read `{}`", path),
            _ => format!("`{}` is not formatted appropriately", path),
        };
        anyhow::Error::new(err).context(context)
    })
}

/// Authenticates once, then serves queries from `input` with that token.
pub fn session<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    let client = Client::new(config.endpoints.clone())?;
    let token = client
        .acquire_token(&config.credentials)
        .context("Failed to authenticate with server")?;
    info!("authenticated as '{}'", config.credentials.client_id);

    query::run(input, output, |kind, value| client.lookup(&token, value, kind))
}
