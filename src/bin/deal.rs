//! Deal Binary
//!
//! Deals random hole cards to a table and walks the board street by street,
//! showing every player's odds as the cards come out.

use clap::Parser;
use colored::Colorize;
use pokerpal::EquityError;
use pokerpal::MAX_PLAYERS;
use pokerpal::MIN_PLAYERS;
use pokerpal::cards::board::Board;
use pokerpal::cards::deck::Deck;
use pokerpal::cards::hole::Hole;
use pokerpal::cards::street::Street;
use pokerpal::equity::report::Report;
use pokerpal::equity::simulation::Simulation;
use pokerpal::equity::substream;
use pokerpal::equity::table::Table;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Deal a random hand and watch the odds move", long_about = None)]
struct Args {
    /// players at the table; prompts when absent
    #[arg(long)]
    players: Option<usize>,
    /// trials per street
    #[arg(long, default_value_t = pokerpal::DEFAULT_TRIALS)]
    sims: usize,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    pokerpal::log(log::LevelFilter::Info);
    let args = Args::parse();
    let n = match args.players {
        Some(n) => n,
        None => dialoguer::Input::<usize>::new()
            .with_prompt("How many players?")
            .validate_with(|n: &usize| match (MIN_PLAYERS..=MAX_PLAYERS).contains(n) {
                true => Ok(()),
                false => Err(format!("between {} and {}", MIN_PLAYERS, MAX_PLAYERS)),
            })
            .interact_text()?,
    };
    if n < MIN_PLAYERS {
        return Err(EquityError::InsufficientPlayers { min: MIN_PLAYERS, got: n }.into());
    }
    if n > MAX_PLAYERS {
        return Err(EquityError::TooManyPlayers { max: MAX_PLAYERS, got: n }.into());
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("dealing {} players (seed {})", n, seed);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut deck = Deck::new();
    let holes = (0..n).map(|_| deck.hole(rng)).collect::<Vec<Hole>>();
    let mut board = Board::new();
    let mut street = Street::Pref;
    loop {
        let table = Table::new(holes.clone(), board.clone(), args.sims as i64)?;
        let report = Simulation::from(table)
            .seed(Some(substream(seed, street as usize)))
            .report()?;
        show(street, &holes, &board, &report);
        if street == Street::Rive {
            break;
        }
        board.extend(deck.deal(street, rng));
        street = street.next();
    }
    Ok(())
}

fn show(street: Street, holes: &[Hole], board: &Board, report: &Report) {
    println!();
    println!("{} {}", street.to_string().to_uppercase().bold(), board);
    let best = report
        .win_percentages
        .iter()
        .copied()
        .fold(0., f64::max);
    for (i, hole) in holes.iter().enumerate() {
        let label = match street {
            Street::Pref => hole.describe(),
            _ => report.hand_rankings[i].to_string(),
        };
        let win = format!("{:>6.2}%", report.win_percentages[i]);
        let win = match report.win_percentages[i] == best && best > 0. {
            true => win.green(),
            false => win.normal(),
        };
        println!(
            "P{:<2} {}  win {}  tie {:>6.2}%  {}",
            i + 1,
            hole,
            win,
            report.tie_percentages[i],
            label.dimmed(),
        );
    }
}
