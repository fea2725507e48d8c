//! CLI draw poker example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawpoker::{Card, Game, Hand, RoundState, Suit, TableOptions, WinningHand};

fn main() {
    env_logger::init();

    println!("Draw poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        println!("\nBalance: {}", game.balance());
        let prompt = format!(
            "Bet {} credit(s)? ([enter] to deal, q to quit): ",
            game.options.bet_cost
        );
        if matches!(prompt_line(&prompt).as_str(), "q" | "quit") {
            println!("Goodbye.");
            break;
        }

        let initial = match game.bet() {
            Ok(initial) => initial,
            Err(err) => {
                println!("Bet error: {err}");
                break;
            }
        };

        if initial.is_winning() {
            println!(
                "I see a {}. Maybe we can get something even better.",
                initial.title()
            );
        } else {
            println!("Select the cards you'd like to hold on to.");
        }

        while game.state() == RoundState::AwaitingRedraw {
            if let Some(hand) = game.hand() {
                print_hand(hand, Some(&initial));
            }

            let input = prompt_line("Toggle hold (1-5), [enter] to draw: ");
            match input.as_str() {
                "" | "d" | "draw" => match game.redraw() {
                    Ok(result) => {
                        if let Some(hand) = game.hand() {
                            print_hand(hand, Some(&result.outcome));
                        }
                        if result.payout == 0 {
                            println!("Too bad. Let's try again?");
                        } else {
                            println!(
                                "And that's a {} for {} in winnings!",
                                result.outcome.title(),
                                result.payout
                            );
                        }
                    }
                    Err(err) => println!("Redraw error: {err}"),
                },
                "q" | "quit" => return,
                other => match other.parse::<usize>() {
                    Ok(position @ 1..=5) => {
                        if let Err(err) = game.toggle_hold(position - 1) {
                            println!("Hold error: {err}");
                        }
                    }
                    _ => println!("Unknown input."),
                },
            }
        }

        if let Err(err) = game.finish() {
            println!("Finish error: {err}");
        }
    }
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

fn print_hand(hand: &Hand, highlight: Option<&WinningHand>) {
    let cards = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let text = format_card(card);
            let text = if highlight.is_some_and(|winning| winning.contains(card)) {
                colorize(&text, "1")
            } else {
                text
            };
            if hand.is_held(index) {
                format!("{}:[{text}]", index + 1)
            } else {
                format!("{}: {text} ", index + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("\n{cards}\n");
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
