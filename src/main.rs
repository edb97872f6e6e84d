//! Treasure Hunter menu loop.
//!
//! All game state and branching lives in the library; this binary only reads
//! commands, dispatches them to the engine, and prints the resulting news.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use treasure_hunter::build_info::{BUILD_COMMIT, BUILD_DATE};
use treasure_hunter::constants::BRAWL_TICK_DELAY_MS;
use treasure_hunter::game_mode::GameConfig;
use treasure_hunter::town::BrawlOutcome;
use treasure_hunter::{Difficulty, Game, GameEnd};

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to TREASURE HUNTER!");
    println!("(build {} {})", BUILD_COMMIT, BUILD_DATE);
    println!("Going hunting for the big treasure, eh?");

    let name = prompt(&mut lines, "What's your name, Hunter? ");
    let difficulty = prompt_difficulty(&mut lines);
    let config = load_config_override(difficulty);

    let mut rng = rand::thread_rng();
    let mut game = Game::with_config(&name, difficulty, config, &mut rng);

    while !game.is_over() {
        println!();
        println!("{}", game.latest_news());
        println!("***");
        println!("{}", game.hunter());
        println!("{}", game.town());
        println!("(B)uy something at the shop.");
        println!("(S)ell something at the shop.");
        println!("(M)ove on to a different town.");
        println!("(L)ook for trouble!");
        println!("(H)unt for treasure!");
        println!("Give up the hunt and e(X)it.");
        println!();

        let choice = prompt(&mut lines, "What's your next move? ");
        process_choice(&mut game, &mut rng, &mut lines, &choice);
    }

    match game.end() {
        Some(GameEnd::Won) => {
            println!();
            println!("You found all 3 treasures across the world!");
            println!("You win!");
        }
        Some(GameEnd::Lost) => {
            println!();
            println!("You lost all your gold!");
            println!("Now you no longer have the funds required to adventure");
            println!("You lose!");
        }
        _ => println!("Fare thee well, {}!", game.hunter().name()),
    }
}

fn process_choice(
    game: &mut Game,
    rng: &mut impl rand::Rng,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    choice: &str,
) {
    match choice.trim().to_lowercase().as_str() {
        "b" => {
            println!("Welcome to the shop! We have the finest wares in town.");
            println!("Currently we have the following items:");
            println!("{}", game.town().shop().price_sheet(game.hunter()));
            let item = prompt(lines, "What're you lookin' to buy? ");
            game.buy(&item);
            println!("{}", game.latest_news());
        }
        "s" => {
            println!(
                "You currently have the following items: {}",
                game.hunter().inventory_listing()
            );
            let item = prompt(lines, "What're you lookin' to sell? ");
            game.sell(&item);
            println!("{}", game.latest_news());
        }
        "m" => {
            // The old town's crossing news is gone once the new one greets
            // us, so print it here.
            if let Some(crossing_news) = game.move_on(rng) {
                println!("{}", crossing_news);
            }
        }
        "l" => {
            let outcome = game.look_for_trouble(rng);
            print_brawl(game.latest_news(), outcome);
        }
        "h" => {
            game.hunt_for_treasure(rng);
            println!("{}", game.latest_news());
        }
        "x" => game.give_up(),
        _ => println!("Yikes! That's an invalid option! Try again."),
    }
}

/// Prints brawl news line by line with a short pause between damage ticks.
/// The outcome is already fully resolved; the pacing is pure show.
fn print_brawl(news: &str, outcome: BrawlOutcome) {
    if outcome == BrawlOutcome::NoTrouble {
        println!("{}", news);
        return;
    }
    for line in news.lines() {
        println!("{}", line);
        thread::sleep(Duration::from_millis(BRAWL_TICK_DELAY_MS));
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => line,
        // Stdin closed; treat it as giving up.
        _ => "x".to_string(),
    }
}

fn prompt_difficulty(lines: &mut impl Iterator<Item = io::Result<String>>) -> Difficulty {
    let mut input = prompt(
        lines,
        "What difficulty would you like to play on? ([e]asy/[n]ormal/[h]ard): ",
    );
    loop {
        match Difficulty::parse(&input) {
            Some(difficulty) => return difficulty,
            None => {
                input = prompt(lines, "Not a valid difficulty, please retry: ");
            }
        }
    }
}

/// Picks up an optional JSON knob override passed as the first argument.
fn load_config_override(difficulty: Difficulty) -> GameConfig {
    match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring config override {}: {}", path, e);
                difficulty.config()
            }
        },
        None => difficulty.config(),
    }
}
