//! Game integration tests.

use wizrs::{
    Card, DECK_SIZE, Deck, ErrorKind, Game, Phase, PlayError, PlayOutcome, PredictionError,
    RoundError, ScoreError, SetupError, Suit,
};

const PLAYERS: [&str; 3] = ["Ada", "Brian", "Cleo"];

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a full deck whose first draws are `draws`, in order.
fn stacked(draws: &[Card]) -> Deck {
    let mut rest = Deck::new().cards().to_vec();
    for drawn in draws {
        let index = rest
            .iter()
            .position(|c| c == drawn)
            .expect("card stacked more times than it exists");
        rest.remove(index);
    }
    rest.extend(draws.iter().rev());
    Deck::from_cards(rest)
}

fn total_cards(game: &Game) -> usize {
    let in_hands: usize = game
        .players()
        .iter()
        .map(|p| game.hand(p).unwrap().len())
        .sum();
    game.cards_remaining()
        + usize::from(game.trump().is_some())
        + in_hands
        + game.played_cards().len()
        + game.current_trick().len()
}

/// Plays out the current round with zero predictions and the first legal card.
fn finish_round(game: &mut Game) {
    let players = game.players().to_vec();
    for player in &players {
        if game.prediction(player).is_none() {
            game.make_prediction(player, 0).unwrap();
        }
    }
    while !game.is_round_complete() {
        let player = game.current_player().unwrap().to_owned();
        let card = game.playable_cards(&player).unwrap()[0];
        game.play_card(&player, card).unwrap();
    }
    game.calculate_round_scores().unwrap();
}

/// Round two for three players: Brian leads.
///
/// Ada: Blue 5, Red 9. Brian: Blue 10, Green 3. Cleo: Blue 2, Jester.
/// Trump: Yellow 1.
fn round_two_game() -> Game {
    let mut game = Game::new(PLAYERS, 3).unwrap();
    game.start_round().unwrap();
    finish_round(&mut game);

    game.start_round_with_deck(stacked(&[
        card(Suit::Blue, 5),
        card(Suit::Blue, 10),
        card(Suit::Blue, 2),
        card(Suit::Red, 9),
        card(Suit::Green, 3),
        Card::jester(),
        card(Suit::Yellow, 1),
    ]))
    .unwrap();
    game
}

#[test]
fn create_rejects_bad_rosters() {
    let err = Game::new(["Ada", "Brian"], 1).unwrap_err();
    assert_eq!(err, SetupError::InvalidPlayerCount(2));
    assert_eq!(err.kind(), ErrorKind::ContractViolation);

    assert_eq!(
        Game::new(["a", "b", "c", "d", "e", "f", "g"], 1).unwrap_err(),
        SetupError::InvalidPlayerCount(7)
    );
    assert_eq!(
        Game::new(["Ada", "Brian", "Ada"], 1).unwrap_err(),
        SetupError::DuplicatePlayer
    );
}

#[test]
fn new_game_starts_empty() {
    let game = Game::new(PLAYERS, 1).unwrap();

    assert_eq!(game.current_round(), 0);
    assert_eq!(game.trump(), None);
    assert_eq!(game.current_player(), None);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.is_round_complete());
    assert!(!game.is_game_complete());
    for player in PLAYERS {
        assert_eq!(game.score(player), Some(0));
        assert_eq!(game.prediction(player), None);
        assert_eq!(game.tricks_won(player), Some(0));
        assert!(game.hand(player).unwrap().is_empty());
    }
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn max_rounds_depend_on_player_count() {
    let rounds: Vec<usize> = (3..=6)
        .map(|n| {
            let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
            Game::new(names, 1).unwrap().max_rounds()
        })
        .collect();
    assert_eq!(rounds, [20, 15, 12, 10]);
}

#[test]
fn round_limit_is_enforced() {
    let mut game = Game::new(["a", "b", "c", "d", "e", "f"], 9).unwrap();
    for _ in 0..10 {
        game.start_round().unwrap();
    }
    assert_eq!(game.current_round(), 10);

    let err = game.start_round().unwrap_err();
    assert_eq!(err, RoundError::RoundLimitExceeded { max: 10 });
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
    assert_eq!(game.current_round(), 10);
}

#[test]
fn starting_seat_rotates_each_round() {
    let mut game = Game::new(["Ada", "Brian", "Cleo", "Dev"], 5).unwrap();
    let mut leaders = Vec::new();
    for _ in 0..5 {
        game.start_round().unwrap();
        leaders.push(game.current_player().unwrap().to_owned());
    }
    assert_eq!(leaders, ["Ada", "Brian", "Cleo", "Dev", "Ada"]);
}

#[test]
fn deal_is_round_robin_and_turns_up_trump() {
    let mut game = round_two_game();

    assert_eq!(game.current_round(), 2);
    assert_eq!(
        game.hand("Ada").unwrap().cards(),
        [card(Suit::Blue, 5), card(Suit::Red, 9)]
    );
    assert_eq!(
        game.hand("Brian").unwrap().cards(),
        [card(Suit::Blue, 10), card(Suit::Green, 3)]
    );
    assert_eq!(
        game.hand("Cleo").unwrap().cards(),
        [card(Suit::Blue, 2), Card::jester()]
    );
    assert_eq!(game.trump(), Some(card(Suit::Yellow, 1)));
    assert_eq!(game.trump_suit(), Some(Suit::Yellow));
    assert_eq!(game.current_player(), Some("Brian"));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 7);
    assert_eq!(game.phase(), Phase::Predicting);
    assert_eq!(total_cards(&game), DECK_SIZE);

    // Round state from the previous round is cleared.
    for player in PLAYERS {
        assert_eq!(game.prediction(player), None);
        assert_eq!(game.tricks_won(player), Some(0));
    }
    assert!(game.played_cards().is_empty());
    finish_round(&mut game);
}

#[test]
fn stacked_deck_must_be_complete() {
    let mut game = Game::new(PLAYERS, 1).unwrap();
    let mut cards = Deck::new().cards().to_vec();
    cards.pop();

    assert_eq!(
        game.start_round_with_deck(Deck::from_cards(cards)).unwrap_err(),
        RoundError::IncompleteDeck
    );
    assert_eq!(game.current_round(), 0);
}

#[test]
fn prediction_errors() {
    let mut game = Game::new(PLAYERS, 2).unwrap();
    game.start_round().unwrap();

    let err = game.make_prediction("Zed", 0).unwrap_err();
    assert_eq!(err, PredictionError::UnknownPlayer);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    assert_eq!(
        game.make_prediction("Ada", 2).unwrap_err(),
        PredictionError::OutOfRange { max: 1 }
    );

    game.make_prediction("Ada", 1).unwrap();
    assert_eq!(
        game.make_prediction("Ada", 0).unwrap_err(),
        PredictionError::AlreadyPredicted
    );
    assert_eq!(game.prediction("Ada"), Some(1));
    assert!(!game.predictions_complete());
}

#[test]
fn play_errors_leave_state_untouched() {
    let mut game = round_two_game();

    assert_eq!(
        game.play_card("Ada", card(Suit::Blue, 5)).unwrap_err(),
        PlayError::NotYourTurn
    );
    assert_eq!(
        game.play_card("Zed", card(Suit::Blue, 5)).unwrap_err(),
        PlayError::NotYourTurn
    );
    assert_eq!(
        game.play_card("Brian", card(Suit::Blue, 5)).unwrap_err(),
        PlayError::CardNotInHand
    );

    game.play_card("Brian", card(Suit::Blue, 10)).unwrap();
    // Jesters may be played even when holding the lead suit.
    game.play_card("Cleo", Card::jester()).unwrap();

    let err = game.play_card("Ada", card(Suit::Red, 9)).unwrap_err();
    assert_eq!(err, PlayError::MustFollowSuit);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(game.hand("Ada").unwrap().len(), 2);
    assert_eq!(game.current_trick().len(), 2);
    assert_eq!(game.current_player(), Some("Ada"));
    assert_eq!(
        game.playable_cards("Ada").unwrap(),
        [card(Suit::Blue, 5)]
    );
}

#[test]
fn play_without_round_is_rejected() {
    let mut game = Game::new(PLAYERS, 1).unwrap();
    assert_eq!(
        game.play_card("Ada", card(Suit::Blue, 1)).unwrap_err(),
        PlayError::NotYourTurn
    );
}

#[test]
fn scripted_round_plays_and_scores() {
    let mut game = round_two_game();
    let before: Vec<isize> = PLAYERS.iter().map(|p| game.score(p).unwrap()).collect();

    game.make_prediction("Ada", 0).unwrap();
    game.make_prediction("Brian", 2).unwrap();
    game.make_prediction("Cleo", 2).unwrap();
    assert_eq!(game.phase(), Phase::Playing);

    assert_eq!(
        game.play_card("Brian", card(Suit::Blue, 10)).unwrap(),
        PlayOutcome::NextPlayer("Cleo".to_owned())
    );
    game.play_card("Cleo", Card::jester()).unwrap();
    let PlayOutcome::TrickComplete(trick) = game.play_card("Ada", card(Suit::Blue, 5)).unwrap()
    else {
        panic!("trick should be complete");
    };
    assert_eq!(trick.winner, "Brian");
    assert_eq!(trick.winning_card, card(Suit::Blue, 10));
    assert_eq!(
        trick.cards,
        [card(Suit::Blue, 10), Card::jester(), card(Suit::Blue, 5)]
    );
    assert_eq!(game.tricks_won("Brian"), Some(1));
    assert_eq!(game.current_player(), Some("Brian"));
    assert!(game.current_trick().is_empty());
    assert_eq!(game.played_cards().len(), 3);
    assert_eq!(total_cards(&game), DECK_SIZE);

    // Cleo has no green and may discard; neither off-suit card beats the lead.
    game.play_card("Brian", card(Suit::Green, 3)).unwrap();
    game.play_card("Cleo", card(Suit::Blue, 2)).unwrap();
    let outcome = game.play_card("Ada", card(Suit::Red, 9)).unwrap();
    assert!(matches!(outcome, PlayOutcome::TrickComplete(ref t) if t.winner == "Brian"));

    assert!(game.is_round_complete());
    assert_eq!(game.phase(), Phase::RoundOver);

    let result = game.calculate_round_scores().unwrap();
    assert_eq!(result.round, 2);
    let deltas: Vec<isize> = result.players.iter().map(|p| p.delta).collect();
    assert_eq!(deltas, [20, 40, -20]);
    assert!(result.players[1].hit());
    assert!(!result.players[2].hit());
    for (i, player) in PLAYERS.iter().enumerate() {
        assert_eq!(game.score(player), Some(before[i] + deltas[i]));
        assert_eq!(result.players[i].total, before[i] + deltas[i]);
    }
}

#[test]
fn trump_beats_lead_suit_in_game() {
    let mut game = Game::new(PLAYERS, 4).unwrap();
    game.start_round_with_deck(stacked(&[
        card(Suit::Blue, 10),
        card(Suit::Red, 2),
        card(Suit::Blue, 13),
        card(Suit::Red, 7),
    ]))
    .unwrap();

    game.play_card("Ada", card(Suit::Blue, 10)).unwrap();
    game.play_card("Brian", card(Suit::Red, 2)).unwrap();
    let outcome = game.play_card("Cleo", card(Suit::Blue, 13)).unwrap();

    assert!(matches!(outcome, PlayOutcome::TrickComplete(ref t) if t.winner == "Brian"));
    assert_eq!(game.tricks_won("Brian"), Some(1));
}

#[test]
fn special_trump_card_sets_no_trump_suit() {
    let mut game = Game::new(PLAYERS, 4).unwrap();
    game.start_round_with_deck(stacked(&[
        card(Suit::Blue, 10),
        card(Suit::Red, 2),
        card(Suit::Blue, 13),
        Card::wizard(),
    ]))
    .unwrap();

    assert_eq!(game.trump(), Some(Card::wizard()));
    assert_eq!(game.trump_suit(), None);
}

#[test]
fn score_errors() {
    let mut game = Game::new(PLAYERS, 6).unwrap();
    assert_eq!(
        game.calculate_round_scores().unwrap_err(),
        ScoreError::RoundNotStarted
    );

    game.start_round().unwrap();
    let err = game.calculate_round_scores().unwrap_err();
    assert_eq!(err, ScoreError::RoundNotComplete);
    assert_eq!(err.kind(), ErrorKind::ContractViolation);

    while !game.is_round_complete() {
        let player = game.current_player().unwrap().to_owned();
        let card = game.playable_cards(&player).unwrap()[0];
        game.play_card(&player, card).unwrap();
    }
    assert_eq!(
        game.calculate_round_scores().unwrap_err(),
        ScoreError::MissingPrediction
    );
    for player in PLAYERS {
        assert_eq!(game.score(player), Some(0));
    }
}

#[test]
fn missed_predictions_go_negative() {
    let mut game = Game::new(PLAYERS, 8).unwrap();
    game.start_round().unwrap();
    for player in PLAYERS {
        game.make_prediction(player, 1).unwrap();
    }
    while !game.is_round_complete() {
        let player = game.current_player().unwrap().to_owned();
        let card = game.playable_cards(&player).unwrap()[0];
        game.play_card(&player, card).unwrap();
    }
    game.calculate_round_scores().unwrap();

    let mut scores: Vec<isize> = PLAYERS.iter().map(|p| game.score(p).unwrap()).collect();
    scores.sort_unstable();
    assert_eq!(scores, [-10, -10, 30]);
}

#[test]
fn scoring_twice_applies_points_twice() {
    let mut game = round_two_game();
    let before = game.score("Ada").unwrap();
    finish_round(&mut game);
    let once = game.score("Ada").unwrap();

    game.calculate_round_scores().unwrap();
    assert_eq!(game.score("Ada").unwrap() - once, once - before);
}

#[test]
fn snapshot_copies_state() {
    let mut game = round_two_game();
    game.make_prediction("Brian", 1).unwrap();
    game.play_card("Brian", card(Suit::Blue, 10)).unwrap();

    let snapshot = game.game_state();
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.max_rounds, 20);
    assert_eq!(snapshot.trump, Some(card(Suit::Yellow, 1)));
    assert_eq!(snapshot.current_player.as_deref(), Some("Cleo"));
    assert_eq!(snapshot.current_trick.len(), 1);
    assert_eq!(snapshot.current_trick[0].player, "Brian");
    assert_eq!(snapshot.current_trick[0].card, card(Suit::Blue, 10));

    let names: Vec<&str> = snapshot.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, PLAYERS);
    assert_eq!(snapshot.players[1].prediction, Some(1));
    assert_eq!(snapshot.players[1].hand, [card(Suit::Green, 3)]);
    assert_eq!(snapshot.players[0].hand.len(), 2);

    game.play_card("Cleo", Card::jester()).unwrap();
    assert_eq!(snapshot.current_trick.len(), 1);
    assert_eq!(snapshot.players[2].hand.len(), 2);
}

#[test]
fn leader_prefers_earliest_seat_on_ties() {
    let game = Game::new(PLAYERS, 1).unwrap();
    assert_eq!(game.leader(), ("Ada", 0));

    let mut game = round_two_game();
    finish_round(&mut game);
    let (name, score) = game.leader();
    assert_eq!(game.score(name), Some(score));
    for player in PLAYERS {
        assert!(game.score(player).unwrap() <= score);
    }
}

#[test]
fn full_three_player_game_runs_twenty_rounds() {
    let mut game = Game::new(PLAYERS, 2024).unwrap();
    let mut rounds = 0;

    while !game.is_game_complete() {
        game.start_round().unwrap();
        rounds += 1;
        assert_eq!(game.current_round(), rounds);
        assert_eq!(game.trump().is_some(), rounds < 20);
        assert_eq!(total_cards(&game), DECK_SIZE);

        finish_round(&mut game);
        assert_eq!(game.is_game_complete(), rounds == 20);
    }

    assert_eq!(rounds, 20);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(
        game.start_round().unwrap_err(),
        RoundError::RoundLimitExceeded { max: 20 }
    );
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Game::new(PLAYERS, 77).unwrap();
    let mut b = Game::new(PLAYERS, 77).unwrap();
    a.start_round().unwrap();
    b.start_round().unwrap();
    a.start_round().unwrap();
    b.start_round().unwrap();
    assert_eq!(a.game_state(), b.game_state());
}

#[test]
fn errors_display_messages() {
    assert_eq!(
        RoundError::RoundLimitExceeded { max: 20 }.to_string(),
        "the game cannot exceed 20 rounds"
    );
    assert_eq!(
        PredictionError::OutOfRange { max: 3 }.to_string(),
        "prediction must be between 0 and 3"
    );
    assert_eq!(
        PlayError::MustFollowSuit.to_string(),
        "must follow suit if possible"
    );
}
