use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use twenty48::engine::Move;
use twenty48::game::Game;

/// Play 2048 in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Seed for a reproducible session (defaults to OS entropy).
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Shift(Move),
    Restart,
    Quit,
}

fn parse_command(c: char) -> Option<Command> {
    match c.to_ascii_uppercase() {
        'W' => Some(Command::Shift(Move::Up)),
        'A' => Some(Command::Shift(Move::Left)),
        'S' => Some(Command::Shift(Move::Down)),
        'D' => Some(Command::Shift(Move::Right)),
        'R' => Some(Command::Restart),
        'Q' => Some(Command::Quit),
        _ => None,
    }
}

fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(&mut rng);
    let mut move_count = 0u64;
    let mut playing = true;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while playing && !game.is_over() {
        println!("\nSCORE: {}\n{}", game.score(), game.grid());
        print!("move (W=Up, A=Left, S=Down, D=Right, R=Restart, Q=Quit): ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            playing = false;
            break;
        };
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            match parse_command(c) {
                Some(Command::Shift(direction)) => {
                    if game.apply(direction, &mut rng) {
                        move_count += 1;
                    }
                }
                Some(Command::Restart) => {
                    game = Game::new(&mut rng);
                    move_count = 0;
                }
                Some(Command::Quit) => {
                    playing = false;
                }
                None => println!("Invalid command: {}", c),
            }
        }
    }

    println!("\nSCORE: {}\n{}", game.score(), game.grid());
    if game.is_over() {
        println!("GAME OVER");
    } else {
        println!("YOU QUIT THE GAME");
    }
    println!(
        "Moves made: {}, Final score: {}, Highest tile: {}",
        move_count,
        game.score(),
        game.grid().highest_tile().unwrap_or(0)
    );
}
