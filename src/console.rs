/// Line-oriented front end: prompts on stdout, one command per line on stdin.
///
/// Bad input is reported and re-prompted; it never reaches the session.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::entities::Preset;
use crate::error::InputError;
use crate::session::{GameEvent, Intent, Session};

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_events<W: Write>(out: &mut W, events: &[GameEvent]) -> std::io::Result<()> {
    for line in events.iter().flat_map(GameEvent::describe) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn choose_character<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Option<Preset>> {
    let menu: Vec<String> = Preset::ALL
        .iter()
        .map(|p| format!("({}) {}", p.key(), p.name()))
        .collect();
    writeln!(out, "Choose a character: {}", menu.join(", "))?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<Preset>() {
            Ok(preset) => return Ok(Some(preset)),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn action_prompt(preset: Preset) -> String {
    let mut prompt = String::from("Choose an action: (1) Collect Coin, (2) Collect Power-Up, (3) Hit Enemy, ");
    if let Some(label) = preset.flavor_label() {
        prompt.push_str(&format!("(4) {}, ", label));
    }
    prompt.push_str("or type 'end' to exit.: ");
    prompt
}

/// Play one session.  `preset` skips the character menu.  End of input
/// ends the session as if `end` had been typed.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    preset: Option<Preset>,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    let preset = match preset {
        Some(p) => p,
        None => match choose_character(input, out)? {
            Some(p) => p,
            None => return Ok(()),
        },
    };

    let (mut session, events) = Session::start(preset);
    writeln!(out, "******************************")?;
    print_events(out, &events)?;
    writeln!(out, "Let's start!")?;

    while !session.is_over() {
        let state = &session.state;
        writeln!(out, "Round: {}", session.round)?;
        writeln!(
            out,
            "LIVES: {} COINS: {} STATUS: {}",
            state.lives, state.coins, state.tier
        )?;
        write!(out, "{}", action_prompt(preset))?;
        out.flush()?;

        let intent = match read_line(input)? {
            None => Intent::EndSession,
            Some(line) => match line.parse::<Intent>() {
                Ok(Intent::FlavorAction) if preset.flavor_line().is_none() => {
                    writeln!(out, "{}", InputError::UnknownAction(line))?;
                    continue;
                }
                Ok(intent) => intent,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
        };

        let events = session.step(intent, rng);
        print_events(out, &events)?;
    }

    out.flush()
}
