use clap::{Parser, Subcommand};
use word_duel::duel::DuelError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_OUTPUT: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask both players for a word and announce the winner (default if no subcommand)
    Play,
    /// Print the score of each word
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the tile values
    Table,
}

#[derive(Parser, Debug)]
#[command(name = "word-duel")]
#[command(about = "Two players, two words, highest tile score wins", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let table = word_duel::scoring::TileTable::standard();
    let use_colors = word_duel::output::should_use_colors();

    match command {
        Commands::Play => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();

            let result = match word_duel::duel::run_interactive(&mut input, &mut output, &table) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!();
                    eprintln!("{}", e);
                    let code = match e {
                        DuelError::Input(_) => EXIT_INPUT,
                        DuelError::Output(_) => EXIT_OUTPUT,
                    };
                    std::process::exit(code);
                }
            };

            if cli.verbose {
                eprintln!("{}", word_duel::output::format_breakdown(&result.player1, false));
                eprintln!("{}", word_duel::output::format_breakdown(&result.player2, false));
            }
        }
        Commands::Score { words } => {
            for word in &words {
                let result = word_duel::scoring::calculate_score(word, &table);
                println!(
                    "{}",
                    word_duel::output::format_score_line(word, result.score, use_colors)
                );
                if cli.verbose {
                    eprintln!("{}", word_duel::output::format_breakdown(&result, false));
                }
            }
        }
        Commands::Table => {
            println!("{}", word_duel::output::format_tile_table(&table, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
