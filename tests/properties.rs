//! Property-based tests for the betting and resolution rules.

use bjchat::game::{DEALER_STANDS_ON, compare_totals};
use bjchat::{
    BUST_LIMIT, CardSource, Game, GameOptions, GameState, Hand, RandomCards, RoundOutcome, Step,
};
use proptest::prelude::*;

fn card() -> impl Strategy<Value = u8> {
    1u8..=10
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Welcome),
        Just(Step::AwaitingBet),
        Just(Step::AwaitingDecision),
    ]
}

// Two player cards and one dealer card, as dealt at the start of a round.
fn fresh_state(balance: usize) -> impl Strategy<Value = GameState> {
    (card(), card(), card()).prop_map(move |(a, b, d)| GameState {
        player_hand: Hand::from(vec![a, b]),
        dealer_hand: Hand::from(vec![d]),
        bet: 0,
        balance,
    })
}

fn invalid_bet(balance: usize) -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z$#]{1,8}".prop_filter("quit is a keyword", |s| s != "quit" && s != "restart"),
        Just("0".to_string()),
        (1usize..100_000).prop_map(|n| format!("-{n}")),
        (1usize..100_000).prop_map(move |n| (balance + n).to_string()),
    ]
}

fn game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed)
}

proptest! {
    #[test]
    fn valid_bet_moves_to_decision(
        (balance, bet) in (1usize..10_000).prop_flat_map(|balance| (Just(balance), 1..=balance)),
        state in fresh_state(0),
        seed in any::<u64>(),
    ) {
        let state = GameState { balance, ..state };
        let transition = game(seed).apply_input(Step::AwaitingBet, state, &bet.to_string());

        prop_assert_eq!(transition.step, Step::AwaitingDecision);
        let placed = transition.state.unwrap();
        prop_assert_eq!(placed.bet, bet);
        prop_assert_eq!(placed.balance, balance);
    }

    #[test]
    fn invalid_bet_changes_nothing(
        (balance, text) in (1usize..10_000).prop_flat_map(|balance| (Just(balance), invalid_bet(balance))),
        state in fresh_state(0),
    ) {
        let state = GameState { balance, ..state };
        let transition = game(0).apply_input(Step::AwaitingBet, state.clone(), &text);

        prop_assert_eq!(transition.step, Step::AwaitingBet);
        prop_assert_eq!(transition.state, Some(state));
        prop_assert!(transition.reply.starts_with("Invalid bet."));
    }

    #[test]
    fn bust_charges_bet_exactly_once(
        (balance, bet) in (1usize..5_000).prop_flat_map(|balance| (Just(balance), 1..=balance)),
        state in fresh_state(0),
        seed in any::<u64>(),
    ) {
        let game = game(seed);
        let mut state = GameState { balance, bet, ..state };
        let mut step = Step::AwaitingDecision;

        // Hit until the round ends; a bust is the only way out.
        while step == Step::AwaitingDecision {
            let before = state.player_hand.value();
            let transition = game.apply_input(step, state, "h");
            step = transition.step;
            state = transition.state.unwrap();

            if step == Step::AwaitingDecision {
                prop_assert!(state.player_hand.value() <= BUST_LIMIT);
                prop_assert!(state.player_hand.value() > before);
                prop_assert_eq!(state.balance, balance);
            }
        }

        prop_assert_eq!(state.balance, balance - bet);
        if state.balance == 0 {
            prop_assert_eq!(step, Step::Welcome);
            prop_assert!(state.player_hand.is_bust());
        } else {
            prop_assert_eq!(step, Step::AwaitingBet);
            prop_assert_eq!(state.player_hand.len(), 2);
            prop_assert_eq!(state.bet, 0);
        }
    }

    #[test]
    fn stand_settles_by_totals(
        (balance, bet) in (1usize..5_000).prop_flat_map(|balance| (Just(balance), 1..=balance)),
        state in fresh_state(0),
        seed in any::<u64>(),
    ) {
        let player_value = state.player_hand.value();

        // Replay the dealer's draws from an identical stream.
        let mut shadow = RandomCards::new(seed);
        let mut dealer_value = state.dealer_hand.value();
        while dealer_value < DEALER_STANDS_ON {
            dealer_value += u32::from(shadow.draw_card());
        }
        let outcome = compare_totals(player_value, dealer_value);

        let state = GameState { balance, bet, ..state };
        let transition = game(seed).apply_input(Step::AwaitingDecision, state, "s");
        let expected = outcome.settle(balance, bet);

        let dealer_line = format!("(Total: {dealer_value})");
        prop_assert!(expected == 0 || transition.reply.contains(&dealer_line));
        match transition.state {
            Some(next) => {
                prop_assert_eq!(transition.step, Step::AwaitingBet);
                prop_assert_eq!(next.balance, expected);
                prop_assert!(expected > 0);
            }
            None => {
                prop_assert_eq!(transition.step, Step::Welcome);
                prop_assert_eq!(expected, 0);
                prop_assert_eq!(outcome, RoundOutcome::Lose);
            }
        }
        match outcome {
            RoundOutcome::Win => prop_assert_eq!(expected, balance + bet),
            RoundOutcome::Lose => prop_assert_eq!(expected, balance - bet),
            RoundOutcome::Tie => prop_assert_eq!(expected, balance),
        }
    }

    #[test]
    fn zero_balance_always_lands_on_welcome(
        inputs in prop::collection::vec(
            prop::sample::select(vec!["h", "s", "1", "50", "400", "1000", "x", "quit", "restart"]),
            1..60,
        ),
        seed in any::<u64>(),
    ) {
        let game = game(seed);
        let mut step = Step::Welcome;
        let mut state = game.start_new_game(1000);

        for input in inputs {
            let before = state.balance;
            let transition = game.apply_input(step, state.clone(), input);
            step = transition.step;
            match transition.state {
                Some(next) => {
                    if before > 0 && next.balance == 0 {
                        prop_assert_eq!(step, Step::Welcome);
                    }
                    if next.balance == 0 {
                        prop_assert_ne!(step, Step::AwaitingDecision);
                    }
                    if step == Step::AwaitingDecision {
                        prop_assert!(next.bet > 0 && next.bet <= next.balance);
                    }
                    state = next;
                }
                None => {
                    prop_assert_eq!(step, Step::Welcome);
                    state = game.start_new_game(1000);
                }
            }
        }
    }

    #[test]
    fn restart_always_resets(
        from in step(),
        state in fresh_state(0),
        balance in 0usize..100_000,
        bet in 0usize..100,
        seed in any::<u64>(),
        upper in any::<bool>(),
    ) {
        let state = GameState { balance, bet, ..state };
        let text = if upper { "RESTART" } else { "restart" };
        let transition = game(seed).apply_input(from, state, text);

        prop_assert_eq!(transition.step, Step::AwaitingBet);
        prop_assert!(transition.reply.starts_with("Welcome to blackjack! Your balance is $1000."));
        let fresh = transition.state.unwrap();
        prop_assert_eq!(fresh.balance, 1000);
        prop_assert_eq!(fresh.bet, 0);
        prop_assert_eq!(fresh.player_hand.len(), 2);
        prop_assert_eq!(fresh.dealer_hand.len(), 1);
    }
}
