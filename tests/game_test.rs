//! Tests for the hangman game state machine.

use hangman_worker::{Game, Outcome};

#[test]
fn test_new_game_starts_clean() {
    let game = Game::new("banana").expect("Valid word");
    assert_eq!(game.word(), "banana");
    assert!(game.guesses().is_empty());
    assert_eq!(game.msg(), "New game!");
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_empty_word_rejected() {
    assert!(Game::new("").is_err());
}

#[test]
fn test_non_alphabet_word_rejected() {
    assert!(Game::new("Banana").is_err());
    assert!(Game::new("ba nana").is_err());
    assert!(Game::new("caf\u{e9}").is_err());
    assert!(Game::new("word:with:colons").is_err());
}

#[test]
fn test_guess_hit_and_miss() {
    let mut game = Game::new("banana").expect("Valid word");

    game.event("a");
    assert!(game.guesses().contains(&'a'));
    assert_eq!(game.msg(), "Word contains at least one 'a'! :D");

    game.event("z");
    assert!(game.guesses().contains(&'z'));
    assert_eq!(game.msg(), "Word contains no 'z'. :(");
}

#[test]
fn test_input_is_lowercased() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("A");
    assert!(game.guesses().contains(&'a'));
    assert_eq!(game.msg(), "Word contains at least one 'a'! :D");
}

#[test]
fn test_empty_input_prompts() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("");
    assert_eq!(game.msg(), "Some input required please.");
    assert!(game.guesses().is_empty());
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_multi_character_input_prompts() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("ab");
    assert_eq!(game.msg(), "Single characters only please.");
    assert!(game.guesses().is_empty());
}

#[test]
fn test_non_letter_input_prompts() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("7");
    assert_eq!(game.msg(), "Letters of the alphabet only please.");
    game.event("!");
    assert_eq!(game.msg(), "Letters of the alphabet only please.");
    assert!(game.guesses().is_empty());
}

#[test]
fn test_duplicate_guess_prompts() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("a");
    game.event("a");
    assert_eq!(game.msg(), "You've already guessed 'a'.");
    assert_eq!(game.guesses().len(), 1);
}

#[test]
fn test_guesses_grow_monotonically() {
    let mut game = Game::new("cat").expect("Valid word");
    let inputs = ["x", "", "ab", "7", "x", "c", "C", "!"];
    let mut seen = 0;
    for input in inputs {
        game.event(input);
        assert!(game.guesses().len() >= seen, "Guess set never shrinks");
        seen = game.guesses().len();
    }
    assert_eq!(seen, 2); // x and c
}

#[test]
fn test_quit_from_any_state() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("a");
    game.event("0");
    assert_eq!(game.outcome(), Outcome::Finished);
    assert_eq!(game.msg(), "Game ended.");
}

#[test]
fn test_win_detected_on_completing_turn() {
    let mut game = Game::new("cat").expect("Valid word");
    game.event("c");
    game.event("a");
    assert!(!game.won());
    game.event("t");
    assert!(game.won());
    // The winning turn shows the victory message but stays in
    // progress; only the next input flips the outcome.
    assert_eq!(game.msg(), "Flawless victory!");
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_win_is_monotonic() {
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["c", "a", "t"] {
        game.event(input);
    }
    assert!(game.won());
    game.event("z");
    assert!(game.won(), "Winning cannot be undone by further guesses");
}

#[test]
fn test_any_input_after_win_requests_new_game() {
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["c", "a", "t"] {
        game.event(input);
    }
    assert_eq!(game.outcome(), Outcome::InProgress);

    game.event("x");
    assert_eq!(game.outcome(), Outcome::FinishedWantsNew);
}

#[test]
fn test_repeated_letters_need_one_guess() {
    let mut game = Game::new("banana").expect("Valid word");
    for input in ["b", "a", "n"] {
        game.event(input);
    }
    assert!(game.won());
}

#[test]
fn test_victory_tiers() {
    // cat has 3 distinct letters; guessing exactly those is flawless.
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["c", "a", "t"] {
        game.event(input);
    }
    assert_eq!(game.msg(), "Flawless victory!");

    // 5 guesses: 5 > 3 * 1.5 but 5 <= 3 * 2, so standard.
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["x", "y", "c", "a", "t"] {
        game.event(input);
    }
    assert_eq!(game.msg(), "Standard victory!");

    // 4 guesses: 4 <= 3 * 1.5 = 4.5, so epic (ties resolve downward).
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["x", "c", "a", "t"] {
        game.event(input);
    }
    assert_eq!(game.msg(), "Epic victory!");
}

#[test]
fn test_button_mashing_tier() {
    // One distinct letter, more than 4 guesses needed to beat every
    // threshold.
    let mut game = Game::new("aaa").expect("Valid word");
    for input in ["b", "c", "d", "e", "a"] {
        game.event(input);
    }
    assert!(game.won());
    assert_eq!(game.msg(), "Button mashing!");
}

#[test]
fn test_board_masks_unguessed_letters() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("a");
    let board = game.draw_board();
    assert!(board.contains("Word: _a_a_a"), "board was: {}", board);
    assert!(board.contains("Letters guessed so far: a"));
    assert!(board.contains("Word contains at least one 'a'! :D"));
    assert!(board.contains("Enter next guess (0 to quit):"));
}

#[test]
fn test_board_guesses_are_sorted() {
    let mut game = Game::new("banana").expect("Valid word");
    for input in ["n", "b", "a"] {
        game.event(input);
    }
    let board = game.draw_board();
    assert!(board.contains("Letters guessed so far: abn"), "board was: {}", board);
}

#[test]
fn test_won_board_prompts_for_new_game() {
    let mut game = Game::new("cat").expect("Valid word");
    for input in ["c", "a", "t"] {
        game.event(input);
    }
    let board = game.draw_board();
    assert!(board.contains("Word: cat"));
    assert!(board.contains("Enter anything to start a new game (0 to quit):"));
}

#[test]
fn test_terminal_board_is_farewell() {
    let mut game = Game::new("banana").expect("Valid word");
    game.event("0");
    assert_eq!(game.draw_board(), "Adieu!");
}
