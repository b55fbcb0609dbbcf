//! Range Binary
//!
//! Averaged equity of one shorthand range against another.
//!
//! Example: range --hero "Premium" --villain "22,33,A5s,KQ" --board "Ah 7d 2c"

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use pokerpal::cards::board::Board;
use pokerpal::dto::RangeResponse;
use pokerpal::ranges::range::Range;
use pokerpal::ranges::versus::Versus;

#[derive(Parser)]
#[command(author, version, about = "Range versus range equity", long_about = None)]
struct Args {
    /// hero range: comma separated classes or a preset name
    #[arg(long)]
    hero: String,
    /// villain range: comma separated classes or a preset name
    #[arg(long)]
    villain: String,
    /// known community cards, e.g. "Ah 7d 2c"
    #[arg(long, default_value = "")]
    board: String,
    /// trials per concrete pairing
    #[arg(long, default_value_t = pokerpal::RANGE_TRIALS)]
    sims: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// ceiling on pairings times trials
    #[arg(long, default_value_t = pokerpal::TRIAL_BUDGET)]
    budget: usize,
    /// print the response as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    pokerpal::log(log::LevelFilter::Info);
    let args = Args::parse();
    let hero = Range::try_from(args.hero.as_str()).context("hero range")?;
    let villain = Range::try_from(args.villain.as_str()).context("villain range")?;
    let board = Board::try_from(args.board.as_str()).context("board")?;
    let matchup = Versus::from((hero, villain))
        .board(board)
        .trials(args.sims)
        .seed(args.seed)
        .budget(args.budget)
        .run()?;
    let response = RangeResponse::from((args.hero, args.villain, matchup));
    match args.json {
        true => println!("{}", serde_json::to_string(&response)?),
        false => {
            println!("{} pairings", response.total_hands.to_string().bold());
            for (i, name) in [&response.range1, &response.range2].into_iter().enumerate() {
                println!(
                    "{:<24} win {}  tie {:>6.2}%",
                    name,
                    format!("{:>6.2}%", response.win_percentages[i]).green(),
                    response.tie_percentages[i],
                );
            }
        }
    }
    Ok(())
}
