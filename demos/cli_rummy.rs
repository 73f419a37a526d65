//! CLI rummy example.
//!
//! Set `RUST_LOG=debug` to follow the engine's moves.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rummy::{Card, Game, GameOptions, RULES, Suit};

fn main() {
    env_logger::init();

    println!("Simple Rummy (type 'q' to quit)");
    println!("{RULES}");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    game.start_game();

    loop {
        print_table(&game);

        if game.is_winner() {
            println!("{}", colorize("You Win!", "32"));
        } else {
            println!("{}", game.turn_phase().prompt());
        }
        println!(
            "Actions: {} {} [card]discard [n]ew game [q]uit",
            format_action("deck", "d", game.can_draw_from_deck()),
            format_action("pile", "p", game.can_draw_from_discard()),
        );

        let input = prompt_line("> ");
        let result = match input.as_str() {
            "q" | "quit" => break,
            "n" | "new" => {
                game.start_game();
                Ok(())
            }
            "d" | "deck" => game
                .draw_from_deck()
                .map(|card| println!("You drew {}.", format_card(&card)))
                .map_err(|err| err.to_string()),
            "p" | "pile" => game
                .draw_from_discard()
                .map(|card| println!("You took {}.", format_card(&card)))
                .map_err(|err| err.to_string()),
            text => Card::parse(text)
                .map_err(|err| err.to_string())
                .and_then(|card| game.discard(card).map_err(|err| err.to_string())),
        };

        if let Err(err) = result {
            println!("Cannot do that: {err}");
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    println!("\nDeck: {} cards", snapshot.deck_len);

    let top = snapshot
        .top_discard
        .as_ref()
        .map_or_else(|| "No discard yet".to_string(), format_card);
    println!("Discard pile: {top}");

    let hand = snapshot
        .player_hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Your hand: {hand}\n");
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
