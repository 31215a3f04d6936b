mod config;
mod convert;
mod error;

use clap::Parser;
use config::{ConvertArgs, Effective};

#[derive(Parser)]
#[command(name = "radix", about = "Convert integers between radixes")]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let eff = match Effective::new(&cli.args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for value in &cli.args.values {
        match convert::run(&eff, value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
