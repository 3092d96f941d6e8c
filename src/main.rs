use std::io::stdin;
use std::str::FromStr;

use hasami::{Game, GameStatus, Play, BOARD_LEN};
use tracing_subscriber::EnvFilter;

fn input(prompt: &str) -> std::io::Result<String> {
    println!("{prompt}");
    let mut s: String = String::new();
    stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

fn get_play() -> Play {
    loop {
        if let Ok(play_str) = input("Please enter your move (eg, \"i1-e1\"):") {
            match Play::from_str(&play_str) {
                Ok(play) => return play,
                Err(e) => println!("Invalid move ({e}). Try again."),
            }
        } else {
            println!("Error reading input. Try again.");
        }
    }
}

/// Print the board with row letters and column digits along the edges.
fn print_board(game: &Game) {
    let mut header = String::from("  ");
    for col in 1..=BOARD_LEN {
        header.push_str(&col.to_string());
    }
    println!("{header}");
    for (i, line) in game.board().to_string().lines().enumerate() {
        println!("{} {line}", (b'A' + i as u8) as char);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("hasami demo");
    let mut game = Game::new();
    loop {
        println!("Board:");
        print_board(&game);
        println!("{} to play.", game.side_to_play());

        let play = get_play();
        match game.do_play(play) {
            Ok(GameStatus::Ongoing) => {}
            Ok(GameStatus::Won(winner)) => {
                println!("Game over. Winner is {winner}.");
                println!("Final board:");
                print_board(&game);
                return;
            }
            Err(e) => println!("Invalid move ({e}). Try again."),
        }
    }
}
