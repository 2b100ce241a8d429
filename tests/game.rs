//! Game integration tests.

#![allow(clippy::float_cmp)]

use bjround::{
    ActionError, Card, DealError, DealerRule, Deck, Game, GameOptions, Phase, Rank, RoundOutcome,
    RoundingMode, Suit,
};

/// Stacked decks are padded to this size so no reshuffle kicks in mid-test.
const STACKED_DECK_SIZE: usize = 30;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn ranks(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(|c| c.rank).collect()
}

fn stack_deck(game: &mut Game, draws: &[Card]) {
    let mut cards = draws.to_vec();
    while cards.len() < STACKED_DECK_SIZE {
        cards.push(Card::new(Rank::Two, Suit::Clubs));
    }
    game.replace_deck(Deck::from_cards(cards));
}

fn game_with(options: GameOptions, draws: &[Rank]) -> Game {
    init_logging();
    let mut game = Game::new(options, 7);
    let cards: Vec<Card> = draws.iter().map(|&rank| card(rank)).collect();
    stack_deck(&mut game, &cards);
    game
}

fn game_with_draws(draws: &[Rank]) -> Game {
    game_with(GameOptions::default(), draws)
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_starting_balance(300)
        .with_low_water_mark(20)
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Up)
        .with_stand_on_soft_17(false)
        .with_dealer_rule(DealerRule::ChasePlayer);

    assert_eq!(options.starting_balance, 300);
    assert_eq!(options.low_water_mark, 20);
    assert_eq!(options.blackjack_pays, 1.2);
    assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    assert!(!options.stand_on_soft_17);
    assert_eq!(options.dealer_rule, DealerRule::ChasePlayer);
}

#[test]
fn new_game_starts_idle() {
    let game = Game::new(GameOptions::default(), 1);
    let snapshot = game.snapshot();

    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.balance, 1000);
    assert_eq!(snapshot.current_bet, 0);
    assert_eq!(snapshot.cards_remaining, 52);
    assert!(snapshot.player_cards.is_empty());
    assert!(snapshot.can_deal);
    assert!(!snapshot.can_hit);
    assert!(!snapshot.can_start_next_round);
}

#[test]
fn deal_commits_wager_and_interleaves_cards() {
    let mut game = game_with_draws(&[Rank::Eight, Rank::Six, Rank::Seven, Rank::Ten]);

    let snapshot = game.deal(100).unwrap();

    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.current_bet, 100);
    assert_eq!(snapshot.cards_remaining, STACKED_DECK_SIZE - 4);
    assert_eq!(ranks(&snapshot.player_cards), [Rank::Eight, Rank::Seven]);
    assert_eq!(ranks(&snapshot.dealer_cards), [Rank::Six, Rank::Ten]);
    assert!(snapshot.hole_card_hidden);
    assert_eq!(snapshot.player_value, 15);
    assert_eq!(snapshot.dealer_value, 6);
    assert_eq!(game.dealer_hand().value(), 16);
    assert!(snapshot.result.is_none());
}

#[test]
fn turn_flags_during_player_turn() {
    let mut game = game_with_draws(&[Rank::Eight, Rank::Six, Rank::Seven, Rank::Ten]);

    let snapshot = game.deal(100).unwrap();

    assert!(!snapshot.can_deal);
    assert!(snapshot.can_hit);
    assert!(snapshot.can_stand);
    assert!(snapshot.can_double);
    assert!(!snapshot.can_start_next_round);
    assert_eq!(snapshot.visible_dealer_cards().filter(Option::is_none).count(), 1);
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let mut game = game_with_draws(&[Rank::Ace, Rank::Nine, Rank::King, Rank::Eight]);

    let snapshot = game.deal(100).unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    // 1000 - 100 at the deal, then 100 back plus the 150 bonus.
    assert_eq!(snapshot.balance, 1150);
    assert!(!snapshot.hole_card_hidden);
    assert_eq!(snapshot.message, "Blackjack! You win +150.");
    let result = snapshot.result.unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerBlackjack);
    assert_eq!(result.payout, 250);
    assert_eq!(result.net(), 150);
    assert!(snapshot.can_start_next_round);
}

#[test]
fn blackjack_payout_follows_rounding_mode() {
    let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut game = game_with(options, &[Rank::Ace, Rank::Nine, Rank::Queen, Rank::Eight]);

    let snapshot = game.deal(15).unwrap();

    // 15 * 1.5 = 22.5, rounded up to 23.
    assert_eq!(snapshot.result.unwrap().payout, 38);
    assert_eq!(snapshot.balance, 1023);
}

#[test]
fn dealer_blackjack_takes_wager() {
    let mut game = game_with_draws(&[Rank::Nine, Rank::Ace, Rank::Eight, Rank::Queen]);

    let snapshot = game.deal(100).unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.balance, 900);
    assert!(!snapshot.hole_card_hidden);
    assert_eq!(
        snapshot.result.unwrap().outcome,
        RoundOutcome::DealerBlackjack
    );
}

#[test]
fn both_blackjack_push() {
    let mut game = game_with_draws(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);

    let snapshot = game.deal(100).unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.balance, 1000);
    let result = snapshot.result.unwrap();
    assert_eq!(result.outcome, RoundOutcome::BothBlackjack);
    assert!(result.outcome.is_push());
}

#[test]
fn stand_dealer_busts() {
    let mut game = game_with_draws(&[
        Rank::King,  // player
        Rank::Ten,   // dealer up
        Rank::Queen, // player
        Rank::Four,  // dealer hole
        Rank::Queen, // dealer draw
    ]);

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(ranks(&snapshot.dealer_cards), [Rank::Ten, Rank::Four, Rank::Queen]);
    assert_eq!(snapshot.dealer_value, 24);
    assert_eq!(snapshot.balance, 1100);
    let result = snapshot.result.unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerBust);
    assert_eq!(result.payout, 200);
    assert!(result.outcome.is_win());
}

#[test]
fn stand_dealer_wins_without_drawing() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Ten, Rank::Seven, Rank::Nine]);

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.result.unwrap().outcome, RoundOutcome::DealerWins);
    assert_eq!(snapshot.message, "You lose.");
}

#[test]
fn equal_totals_push() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Nine, Rank::Eight, Rank::Nine]);

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.balance, 1000);
    assert_eq!(snapshot.result.unwrap().outcome, RoundOutcome::Push);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Ace, Rank::Eight, Rank::Six, Rank::Three]);

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.balance, 1100);
    assert_eq!(snapshot.result.unwrap().outcome, RoundOutcome::PlayerWins);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let options = GameOptions::default().with_stand_on_soft_17(false);
    let mut game = game_with(
        options,
        &[Rank::Ten, Rank::Ace, Rank::Eight, Rank::Six, Rank::Three],
    );

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(ranks(&snapshot.dealer_cards), [Rank::Ace, Rank::Six, Rank::Three]);
    assert_eq!(snapshot.dealer_value, 20);
    assert_eq!(snapshot.balance, 900);
}

#[test]
fn standard_dealer_ignores_player_total() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven, Rank::Three]);

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.dealer_value, 17);
    assert_eq!(snapshot.balance, 1100);
}

#[test]
fn chasing_dealer_draws_past_17_to_beat_player() {
    let options = GameOptions::default().with_dealer_rule(DealerRule::ChasePlayer);
    let mut game = game_with(
        options,
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven, Rank::Three],
    );

    game.deal(100).unwrap();
    let snapshot = game.stand().unwrap();

    assert_eq!(snapshot.dealer_value, 20);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.result.unwrap().outcome, RoundOutcome::DealerWins);
}

#[test]
fn hit_bust_settles_as_loss() {
    let mut game = game_with_draws(&[
        Rank::Ten,   // player
        Rank::Ten,   // dealer up
        Rank::Six,   // player
        Rank::Seven, // dealer hole
        Rank::King,  // player hit
    ]);

    game.deal(100).unwrap();
    let snapshot = game.hit().unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.player_value, 26);
    assert!(!snapshot.hole_card_hidden);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.result.unwrap().outcome, RoundOutcome::PlayerBust);
    assert_eq!(snapshot.message, "Bust! You lose.");
}

#[test]
fn hitting_to_21_keeps_the_turn() {
    let mut game = game_with_draws(&[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven, Rank::King]);

    game.deal(100).unwrap();
    let snapshot = game.hit().unwrap();

    assert_eq!(snapshot.player_value, 21);
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert!(snapshot.hole_card_hidden);
    assert!(!snapshot.can_double);
}

#[test]
fn double_down_draws_one_card_and_settles_doubled() {
    let mut game = game_with_draws(&[
        Rank::Five,  // player
        Rank::Ten,   // dealer up
        Rank::Six,   // player
        Rank::Seven, // dealer hole
        Rank::Ten,   // double draw
    ]);

    game.deal(100).unwrap();
    let snapshot = game.double_down().unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.player_cards.len(), 3);
    assert_eq!(snapshot.current_bet, 200);
    assert_eq!(snapshot.balance, 1200);
    let result = snapshot.result.unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert_eq!(result.wager, 200);
    assert_eq!(result.payout, 400);
    assert!(result.doubled);
}

#[test]
fn double_down_bust_forfeits_doubled_wager() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Ten, Rank::Six, Rank::Seven, Rank::King]);

    game.deal(100).unwrap();
    let snapshot = game.double_down().unwrap();

    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.balance, 800);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.message, "Bust after double! You lose.");
    assert_eq!(snapshot.result.unwrap().wager, 200);
}

#[test]
fn double_down_rejected_after_hit() {
    let mut game = game_with_draws(&[Rank::Two, Rank::Ten, Rank::Three, Rank::Seven, Rank::Four]);

    game.deal(100).unwrap();
    game.hit().unwrap();
    let before = game.snapshot();

    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn double_down_rejected_without_funds() {
    let options = GameOptions::default().with_starting_balance(150);
    let mut game = game_with(options, &[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven]);

    let snapshot = game.deal(100).unwrap();
    assert!(!snapshot.can_double);

    let before = game.snapshot();
    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );
    let snapshot = game.snapshot();
    assert_eq!(snapshot, before);
    assert!(!game.has_doubled());
    assert_eq!(snapshot.cards_remaining, STACKED_DECK_SIZE - 4);
    assert_eq!(snapshot.balance, 50);
    assert_eq!(snapshot.current_bet, 100);
    assert_eq!(snapshot.player_cards.len(), 2);
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
}

#[test]
fn deal_errors() {
    let mut game = game_with_draws(&[Rank::Eight, Rank::Six, Rank::Seven, Rank::Ten]);

    assert_eq!(game.deal(0).unwrap_err(), DealError::InvalidWager);
    assert_eq!(game.deal(1001).unwrap_err(), DealError::InsufficientFunds);
    assert_eq!(game.balance(), 1000);
    assert_eq!(game.cards_remaining(), STACKED_DECK_SIZE);

    game.deal(1000).unwrap();
    assert_eq!(game.deal(10).unwrap_err(), DealError::InvalidPhase);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut game = game_with_draws(&[Rank::Ace, Rank::Nine, Rank::King, Rank::Eight]);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidPhase);

    game.deal(100).unwrap();
    let settled = game.snapshot();
    assert_eq!(settled.phase, Phase::Settled);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.snapshot(), settled);
}

#[test]
fn next_round_clears_table() {
    let mut game = game_with_draws(&[Rank::Ten, Rank::Ten, Rank::Six, Rank::Seven, Rank::King]);

    game.deal(100).unwrap();
    game.hit().unwrap();
    let remaining = game.cards_remaining();

    let snapshot = game.next_round();

    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.player_cards.is_empty());
    assert!(snapshot.dealer_cards.is_empty());
    assert!(snapshot.hole_card_hidden);
    assert_eq!(snapshot.current_bet, 0);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.cards_remaining, remaining);
    assert!(snapshot.result.is_none());
    assert!(snapshot.can_deal);
    assert!(!game.has_doubled());
}

#[test]
fn next_round_resets_mid_round_without_refund() {
    let mut game = game_with_draws(&[Rank::Eight, Rank::Six, Rank::Seven, Rank::Ten]);

    game.deal(100).unwrap();
    let snapshot = game.next_round();

    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.balance, 900);
    assert_eq!(snapshot.current_bet, 0);
}

#[test]
fn deal_reshuffles_short_deck() {
    init_logging();
    let mut game = Game::new(GameOptions::default(), 3);
    game.replace_deck(Deck::from_cards((0..10).map(|_| card(Rank::Two))));

    let snapshot = game.deal(10).unwrap();

    assert_eq!(snapshot.cards_remaining, 48);
}

#[test]
fn hit_reshuffles_below_low_water_mark() {
    init_logging();
    let mut game = Game::new(GameOptions::default(), 3);
    let mut cards = vec![card(Rank::Two), card(Rank::Ten), card(Rank::Three), card(Rank::Seven)];
    cards.extend((0..14).map(|_| card(Rank::Four)));
    game.replace_deck(Deck::from_cards(cards));

    let snapshot = game.deal(10).unwrap();
    assert_eq!(snapshot.cards_remaining, 14);

    let snapshot = game.hit().unwrap();

    assert_eq!(snapshot.cards_remaining, 51);
    assert_eq!(snapshot.player_cards.len(), 3);
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
}

#[test]
fn stand_reshuffles_before_dealer_draws() {
    init_logging();
    let mut game = Game::new(GameOptions::default(), 3);
    let mut cards = vec![card(Rank::Ten), card(Rank::Two), card(Rank::Queen), card(Rank::Three)];
    cards.extend((0..14).map(|_| Card::new(Rank::Four, Suit::Clubs)));
    game.replace_deck(Deck::from_cards(cards));

    let snapshot = game.deal(10).unwrap();
    assert_eq!(snapshot.cards_remaining, 14);

    let snapshot = game.stand().unwrap();

    let dealer_draws = snapshot.dealer_cards.len() - 2;
    assert!(dealer_draws >= 1);
    assert_eq!(snapshot.cards_remaining, 52 - dealer_draws);
    assert_eq!(snapshot.phase, Phase::Settled);
    assert!(snapshot.dealer_value >= 17);
}

#[test]
fn double_down_reshuffles_below_low_water_mark() {
    init_logging();
    let mut game = Game::new(GameOptions::default(), 3);
    let mut cards = vec![card(Rank::Five), card(Rank::Ten), card(Rank::Six), card(Rank::Seven)];
    cards.extend((0..14).map(|_| Card::new(Rank::Four, Suit::Clubs)));
    game.replace_deck(Deck::from_cards(cards));

    let snapshot = game.deal(10).unwrap();
    assert_eq!(snapshot.cards_remaining, 14);

    let snapshot = game.double_down().unwrap();

    assert_eq!(snapshot.cards_remaining, 51);
    assert_eq!(snapshot.player_cards.len(), 3);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.current_bet, 20);
    assert_eq!(snapshot.phase, Phase::Settled);
}

#[test]
fn huge_wager_payout_saturates() {
    let options = GameOptions::default().with_starting_balance(usize::MAX);
    let mut game = game_with(options, &[Rank::Ten, Rank::Ten, Rank::King, Rank::Seven]);
    let wager = usize::MAX / 2 + 10;

    game.deal(wager).unwrap();
    let snapshot = game.stand().unwrap();

    let result = snapshot.result.unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert_eq!(result.payout, usize::MAX);
    assert_eq!(snapshot.balance, usize::MAX);
}

#[test]
fn same_seed_replays_same_round() {
    let mut first = Game::new(GameOptions::default(), 99);
    let mut second = Game::new(GameOptions::default(), 99);

    let a = first.deal(10).unwrap();
    let b = second.deal(10).unwrap();

    assert!(
        a.player_cards
            .iter()
            .zip(&b.player_cards)
            .all(|(x, y)| x.same_face(y))
    );
    assert!(
        a.dealer_cards
            .iter()
            .zip(&b.dealer_cards)
            .all(|(x, y)| x.same_face(y))
    );
    assert_eq!(a.phase, b.phase);
}

#[test]
fn random_rounds_keep_money_consistent() {
    init_logging();
    let mut game = Game::new(GameOptions::default(), 2024);

    for round in 0..200 {
        let before = game.balance();
        if before == 0 {
            break;
        }
        let snapshot = game.deal(before.min(10)).unwrap();
        let snapshot = if snapshot.can_hit {
            if round % 3 == 0 && snapshot.can_double {
                game.double_down().unwrap()
            } else if snapshot.player_value < 15 {
                let hit = game.hit().unwrap();
                if hit.can_stand { game.stand().unwrap() } else { hit }
            } else {
                game.stand().unwrap()
            }
        } else {
            snapshot
        };

        assert_eq!(snapshot.phase, Phase::Settled);
        let result = snapshot.result.unwrap();
        assert_eq!(
            snapshot.balance as isize,
            before as isize + result.net(),
            "round {round}: {result:?}"
        );
        let dealer_played = matches!(
            result.outcome,
            RoundOutcome::DealerBust
                | RoundOutcome::PlayerWins
                | RoundOutcome::DealerWins
                | RoundOutcome::Push
        );
        if dealer_played {
            assert!(game.dealer_hand().value() >= 17);
        }

        game.next_round();
    }
}
