//! CLI blackjack example.

use std::collections::HashSet;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjround::{Card, Game, GameOptions, Snapshot, Suit};

const REVEAL_STEP: Duration = Duration::from_millis(350);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut reveals = RevealQueue::default();

    loop {
        let snapshot = game.snapshot();
        if !snapshot.can_deal {
            println!("You are out of money. Game over.");
            break;
        }

        let prompt = format!("Bet amount (1-{}, 0 to quit): ", snapshot.balance);
        let Some(bet) = prompt_usize(&prompt) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let mut snapshot = match game.deal(bet) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        };
        reveals.play(&snapshot);

        while snapshot.can_hit {
            print_table(&snapshot);
            println!("{}", format_actions(&snapshot));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => {
                    reveals.play(&next);
                    snapshot = next;
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&snapshot);
        println!("{}", snapshot.message);
        if let Some(result) = snapshot.result {
            println!("Payout: {} (net {})", result.payout, result.net());
        }

        game.next_round();
        reveals.clear();
    }
}

/// Staged card reveal: prints each card the first time it shows up, one step
/// at a time. Reads finished snapshots only.
#[derive(Default)]
struct RevealQueue {
    shown: HashSet<usize>,
}

impl RevealQueue {
    fn play(&mut self, snapshot: &Snapshot) {
        let player = snapshot.player_cards.iter().map(|card| ("You", Some(card)));
        let dealer = snapshot
            .visible_dealer_cards()
            .map(|card| ("Dealer", card));

        for (owner, card) in player.chain(dealer) {
            let Some(card) = card else {
                continue;
            };
            if self.shown.insert(card.id()) {
                thread::sleep(REVEAL_STEP);
                println!("  {owner}: {}", format_card(card));
            }
        }
    }

    fn clear(&mut self) {
        self.shown.clear();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!("\nDeck: {} cards remaining", snapshot.cards_remaining);
    println!(
        "Balance: {} | Bet: {}",
        snapshot.balance, snapshot.current_bet
    );

    let dealer_view = snapshot
        .visible_dealer_cards()
        .map(|card| card.map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nDealer: {dealer_view} (value {})", snapshot.dealer_value);

    let player_view = snapshot
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    {player_view} (value {})", snapshot.player_value);
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let parts = [
        format_action("hit", "h", snapshot.can_hit),
        format_action("stand", "s", snapshot.can_stand),
        format_action("double", "d", snapshot.can_double),
    ];
    format!("Actions: {}", parts.join(" "))
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
