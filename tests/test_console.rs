use std::io::Cursor;

use power_up::console::run;
use power_up::entities::Preset;
use power_up::error::InputError;

use rand::rngs::mock::StepRng;

/// Feed `input` to the console and return everything it printed.
fn play(input: &str, preset: Option<Preset>) -> String {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();
    run(&mut reader, &mut out, preset, &mut StepRng::new(0, 0)).unwrap();
    String::from_utf8(out).unwrap()
}

// ── character menu ────────────────────────────────────────────────────────────

#[test]
fn bad_menu_keys_are_reprompted() {
    let out = play("x\n9\n1\nend\n", None);
    assert!(out.starts_with("Choose a character: (1) Mario, (2) Luigi, (3) Toad, (4) Peach"));
    assert!(out.contains(&InputError::NotANumber.to_string()));
    assert!(out.contains(&InputError::UnknownCharacter(9).to_string()));
    assert!(out.contains("Mario: Let's-a go!"));
    assert!(out.contains("Let's start!"));
}

#[test]
fn no_input_at_menu_plays_nothing() {
    let out = play("", None);
    assert!(!out.contains("Let's start!"));
    assert!(!out.contains("Round:"));
}

// ── actions ───────────────────────────────────────────────────────────────────

#[test]
fn unknown_action_is_reprompted_without_a_round() {
    let out = play("jump\nend\n", Some(Preset::Mario));
    assert!(out.contains(&InputError::UnknownAction("jump".to_string()).to_string()));
    assert_eq!(out.matches("Round: 1\n").count(), 2);
    assert!(!out.contains("Round: 2"));
}

#[test]
fn flavor_action_rejected_for_mario_and_luigi() {
    for preset in [Preset::Mario, Preset::Luigi] {
        let out = play("4\nend\n", Some(preset));
        assert!(out.contains(&InputError::UnknownAction("4".to_string()).to_string()));
        assert!(!out.contains("(4)"));
        assert!(!out.contains("Round: 2"));
    }
}

#[test]
fn flavor_action_offered_to_peach() {
    let out = play("4\nend\n", Some(Preset::Peach));
    assert!(out.contains("(4) Float"));
    assert!(out.contains("I'm floating in the air!"));
    assert!(out.contains("Round: 2"));
}

#[test]
fn status_line_tracks_state() {
    let out = play("1\n1\nend\n", Some(Preset::Toad));
    assert!(out.contains("LIVES: 3 COINS: 0 STATUS: SMALL"));
    assert!(out.contains("LIVES: 3 COINS: 2 STATUS: SMALL"));
}

#[test]
fn power_up_is_narrated() {
    let out = play("2\nend\n", Some(Preset::Luigi));
    assert!(out.contains("Luigi collected a One-up Mushroom\nOh Yeah! I got a life!\n"));
    assert!(out.contains("LIVES: 4 COINS: 0 STATUS: SMALL"));
}

// ── termination ───────────────────────────────────────────────────────────────

#[test]
fn end_command_says_goodbye() {
    let out = play("end\n", Some(Preset::Mario));
    assert!(out.ends_with("Ending the game. Bye bye!\n"));
}

#[test]
fn end_of_input_ends_the_session() {
    let out = play("1\n", Some(Preset::Mario));
    assert!(out.contains("LIVES: 3 COINS: 1 STATUS: SMALL"));
    assert!(out.ends_with("Ending the game. Bye bye!\n"));
}

#[test]
fn losing_every_life_is_game_over() {
    let out = play("3\n3\n3\n1\n", Some(Preset::Mario));
    assert_eq!(out.matches("Mama mia! I lost a life!").count(), 3);
    assert!(out.ends_with("Game Over!\n"));
    assert!(!out.contains("Bye bye"));
    assert!(!out.contains("Round: 4"));
}
