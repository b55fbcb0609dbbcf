//! Odds Binary
//!
//! Reads one odds request as JSON, from the first argument or from stdin
//! when the argument is absent or `-`, and prints the response JSON.
//! Unreadable or rejected requests print the error JSON to stdout and exit
//! non-zero.

use anyhow::Context;
use clap::Parser;
use pokerpal::dto::ErrorResponse;
use pokerpal::dto::OddsRequest;
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about = "Monte Carlo hold'em odds for a JSON request", long_about = None)]
struct Args {
    /// request JSON, or `-` to read stdin
    request: Option<String>,
    /// ceiling on simulated trials
    #[arg(long, default_value_t = pokerpal::TRIAL_BUDGET)]
    budget: usize,
}

fn main() -> anyhow::Result<()> {
    pokerpal::log(log::LevelFilter::Warn);
    let args = Args::parse();
    let json = match args.request.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read request from stdin")?;
            buffer
        }
        Some(json) => json.to_string(),
    };
    let request = match serde_json::from_str::<OddsRequest>(&json) {
        Ok(request) => request,
        Err(e) => {
            println!("{}", serde_json::to_string(&ErrorResponse::from(&e))?);
            return Err(anyhow::Error::new(e).context("parse odds request"));
        }
    };
    log::debug!("{:?}", request);
    match request.simulate(args.budget) {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string(&ErrorResponse::from(&e))?);
            Err(anyhow::Error::new(e).context("odds request rejected"))
        }
    }
}
