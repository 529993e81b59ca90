mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use power_up::config::Args;
use power_up::console;
use power_up::entities::Preset;
use power_up::session::{GameEvent, Intent, Session};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Both front ends own the terminal, so without `--log-file` nothing is
/// logged.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "power_up=info".into());

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum MenuResult {
    Start(Preset),
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  POWER  UP  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Choose a character:"))?;

    let colors = [Color::Red, Color::Green, Color::Blue, Color::Magenta];
    for (i, (preset, color)) in Preset::ALL.iter().zip(colors).enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", preset.key())))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("{:<6}", preset.name())))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(" \"{}\"", preset.message())))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 4))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("1-4 : Select   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    wait_for_choice(rx)
}

/// Block until the user makes a choice.  A closed channel counts as quit.
fn wait_for_choice(rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    loop {
        let ev = match rx.recv() {
            Ok(ev) => ev,
            Err(_) => return Ok(MenuResult::Quit), // input thread gone
        };
        if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = ev {
            match code {
                KeyCode::Char(c @ '1'..='4') => {
                    let key = c as u8 - b'0';
                    if let Ok(preset) = Preset::try_from(key) {
                        return Ok(MenuResult::Start(preset));
                    }
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn intent_for(code: KeyCode, preset: Preset) -> Option<Intent> {
    match code {
        KeyCode::Char('1') => Some(Intent::CollectCoin),
        KeyCode::Char('2') => Some(Intent::CollectPowerUp),
        KeyCode::Char('3') => Some(Intent::HitEnemy),
        KeyCode::Char('4') if preset.flavor_line().is_some() => Some(Intent::FlavorAction),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Intent::EndSession),
        _ => None,
    }
}

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Turn-based: each key press is handled to completion and the screen
/// redrawn before the next event is taken off the channel.
fn game_loop<W: Write>(
    out: &mut W,
    preset: Preset,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<bool> {
    let (mut session, events) = Session::start(preset);
    let mut log: Vec<String> = events.iter().flat_map(GameEvent::describe).collect();
    log.push("Let's start!".to_string());

    let (mut width, mut height) = terminal::size()?;
    display::render(out, &session, &log, width, height)?;

    loop {
        let ev = match rx.recv() {
            Ok(ev) => ev,
            Err(_) => return Ok(true), // input thread gone
        };

        match ev {
            Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if session.is_over() => {
                        return Ok(false);
                    }
                    _ => {}
                }
                if let Some(intent) = intent_for(code, preset) {
                    let round = session.round;
                    let events = session.step(intent, rng);
                    if !events.is_empty() {
                        log.push(format!("── Round {} ──", round));
                    }
                    log.extend(events.iter().flat_map(GameEvent::describe));
                    display::trim_log(&mut log);
                }
            }
            Event::Resize(w, h) => {
                width = w;
                height = h;
            }
            _ => continue,
        }

        display::render(out, &session, &log, width, height)?;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    info!(seed = ?args.seed, plain = args.plain, "starting");

    let mut rng = args.rng();

    if args.plain {
        let stdin = std::io::stdin();
        let mut out = stdout();
        console::run(&mut stdin.lock(), &mut out, args.preset(), &mut rng)
            .context("console session failed")?;
        return Ok(());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so there is a single consumer of terminal input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, args.preset(), &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal session failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    mut preselected: Option<Preset>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    loop {
        let preset = match preselected.take() {
            Some(preset) => preset,
            None => match show_menu(out, rx)? {
                MenuResult::Quit => break,
                MenuResult::Start(preset) => preset,
            },
        };

        if game_loop(out, preset, rx, rng)? {
            break;
        }
        // Otherwise loop back to the menu
    }
    Ok(())
}
