//! 命令行入口

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing::Level;

use jhc2html::core::{
    print_error_message, print_info_message, PackError, PackRequest, PACK_FAILURE_MESSAGE,
};
use jhc2html::env::{generate_env_docs, EnvConfig};

/// Packs a website or game (HTML, stylesheets, scripts, images and fonts) into a single HTML file
#[derive(Parser, Debug)]
#[command(name = "jhc2html", version, about, after_help = generate_env_docs())]
struct Cli {
    /// HTML document to pack
    input: PathBuf,

    /// Convert every asset into base64 data URIs
    #[arg(short = 'b', long = "base64", conflicts_with = "no_base64")]
    base64: bool,

    /// Only inline stylesheets and scripts
    #[arg(short = 'B', long = "no-base64")]
    no_base64: bool,

    /// Write output to <FILE>; %title%, %timestamp%, %extension% and %ext% get substituted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,

    /// Suppress the confirmation message
    #[arg(short = 's', long = "silent")]
    silent: bool,
}

impl Cli {
    fn into_request(self, config: &EnvConfig) -> PackRequest {
        let base64 = if self.base64 {
            true
        } else if self.no_base64 {
            false
        } else {
            config.base64
        };

        let request = PackRequest::new(self.input, base64);

        match self.output.or_else(|| config.output_template.clone()) {
            Some(output) => request.with_output(output),
            None => request,
        }
    }
}

fn init_tracing(config: &EnvConfig) {
    let level = Level::from_str(&config.log_level).unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!config.no_color)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error_message(&e.to_string());
            process::exit(1);
        }
    };

    init_tracing(&config);

    let silent = cli.silent;
    let request = cli.into_request(&config);

    match request.execute() {
        Ok(outcome) => match outcome.destination {
            Some(destination) => {
                if !silent {
                    print_info_message(&format!("File saved to: {}", destination.display()));
                }
            }
            None => {
                let mut stdout = io::stdout().lock();
                if let Err(e) = stdout
                    .write_all(outcome.document.as_bytes())
                    .and_then(|_| stdout.flush())
                {
                    print_error_message(&format!("failed to write to stdout: {e}"));
                    process::exit(1);
                }
            }
        },
        Err(e @ PackError::Read { .. }) => {
            tracing::error!("{e}");
            print_error_message(PACK_FAILURE_MESSAGE);
            process::exit(1);
        }
        Err(e) => {
            print_error_message(&e.to_string());
            process::exit(1);
        }
    }
}
