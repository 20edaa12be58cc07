use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_matchup, Config, Contestant, MatchScore, PlayerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// Number of rows of cells
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Number of columns of cells
    #[arg(long, default_value_t = 3)]
    columns: usize,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the tournament as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn print_match_score(player_1: &Contestant, player_2: &Contestant, match_score: &MatchScore) {
    let paren_1 = if match_score.illegal_moves[1] > 0 {
        format!(
            " ({} through illegal moves by player 2)",
            match_score.illegal_moves[1]
        )
    } else {
        String::new()
    };
    let paren_2 = if match_score.illegal_moves[0] > 0 {
        format!(
            " ({} through illegal moves by player 1)",
            match_score.illegal_moves[0]
        )
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} ties",
        match_score.wins[0],
        player_1.name,
        paren_1,
        match_score.wins[1],
        player_2.name,
        paren_2,
        match_score.ties
    );
}

/// One line per matchup: wins, ties, and the share of cells each side ended up with.
fn print_tournament_results(
    player_configs: &[PlayerConfig],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results:\n");
    println!(
        " {:>15} vs {:<15} | {:>5} {:>5} {:>5} | {:>13}",
        "p1", "p2", "p1 %", "p2 %", "tie %", "cells p1/p2 %"
    );
    println!("{}", "-".repeat(72));
    for ((i, j), score) in match_results.iter().sorted_by_key(|(key, _)| **key) {
        print!(
            " {:>15} vs {:<15} |",
            player_configs[*i].nick, player_configs[*j].nick
        );
        let num_games = score.num_games();
        if num_games == 0 {
            println!(" {:>17} |", "N/A");
            continue;
        }
        let percent = |count: usize| count as f32 / num_games as f32 * 100.0;
        print!(
            " {:5.1} {:5.1} {:5.1} |",
            percent(score.wins[0]),
            percent(score.wins[1]),
            percent(score.ties)
        );
        match score.cell_percentages() {
            Some([cells_1, cells_2]) => println!(" {:5.1} / {:5.1}", cells_1, cells_2),
            None => println!(" {:>13}", "N/A"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let config = Config {
        rows: args.rows,
        columns: args.columns,
        num_games: args.num_games,
        stop_on_illegal_move: args.stop_on_illegal_move,
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;

    let matchups: Vec<(usize, usize)> = (0..player_configs.len()).tuple_combinations().collect();

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in matchups {
        let mut player_1 = Contestant::from_config(&player_configs[i1], &mut rng);
        let mut player_2 = Contestant::from_config(&player_configs[i2], &mut rng);

        let match_score = play_matchup(&mut player_1, &mut player_2, &config, &mut rng)?;
        print_match_score(&player_1, &player_2, &match_score);

        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        print_tournament_results(&player_configs, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
