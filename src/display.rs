/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use power_up::entities::{GameStatus, Tier, COINS_PER_LIFE};
use power_up::session::Session;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_ROUND: Color = Color::White;
const C_HUD_COINS: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_LOG: Color = Color::Grey;
const C_LOG_LATEST: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_STAR: Color = Color::Yellow;

/// Narrated lines kept for the event log; older ones are dropped.
pub const LOG_CAPACITY: usize = 200;

/// Past this many lives the HUD shows a count instead of hearts.
const MAX_HEARTS: u32 = 5;

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Small => Color::Cyan,
        Tier::Big => Color::Green,
        Tier::Fire => Color::Red,
        Tier::Invincible => Color::Yellow,
    }
}

/// Drop the oldest lines so at most `LOG_CAPACITY` remain.
pub fn trim_log(log: &mut Vec<String>) {
    let excess = log.len().saturating_sub(LOG_CAPACITY);
    log.drain(..excess);
}

fn lives_label(lives: u32) -> String {
    if lives > MAX_HEARTS {
        format!("Lives:♥×{}", lives)
    } else {
        format!("Lives:{}", "♥".repeat(lives as usize))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete screen.  `log` holds every narrated line so far;
/// only the tail that fits is drawn.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    log: &[String],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, session, width)?;
    draw_log(out, log, width, height)?;
    draw_controls_hint(out, session, height)?;

    if session.is_over() {
        draw_game_over(out, session, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &Session, width: u16) -> std::io::Result<()> {
    let state = &session.state;

    // Round, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_ROUND))?;
    out.queue(Print(format!("Round:{:>4}", session.round)))?;

    // Name and tier, centre
    let tier_str = format!("{} [ {} ]", state.name, state.tier);
    let tx = (width / 2).saturating_sub(tier_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(tier_color(state.tier)))?;
    out.queue(Print(&tier_str))?;

    // Star countdown, coins and lives, right-aligned
    let star_tag = if state.tier == Tier::Invincible {
        format!("[★ {}] ", state.invincibility_rounds_left)
    } else {
        String::new()
    };
    let purse: String = (0..COINS_PER_LIFE)
        .map(|i| if i < state.coins { '●' } else { '○' })
        .collect();
    let coins_str = format!("Coins:{} ", purse);
    let lives_str = lives_label(state.lives);

    let total = star_tag.chars().count() + coins_str.chars().count() + lives_str.chars().count();
    let rx = width.saturating_sub(u16::try_from(total + 1).unwrap_or(u16::MAX));
    out.queue(cursor::MoveTo(rx, 0))?;

    if !star_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_STAR))?;
        out.queue(Print(&star_tag))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_COINS))?;
    out.queue(Print(&coins_str))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Event log (inside the border) ─────────────────────────────────────────────

fn draw_log<W: Write>(
    out: &mut W,
    log: &[String],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cols = width.saturating_sub(4) as usize;
    let rows = height.saturating_sub(4) as usize;
    let start = log.len().saturating_sub(rows);

    for (i, line) in log[start..].iter().enumerate() {
        let latest = start + i + 1 == log.len();
        out.queue(cursor::MoveTo(2, 2 + i as u16))?;
        out.queue(style::SetForegroundColor(if latest { C_LOG_LATEST } else { C_LOG }))?;
        out.queue(Print(line.chars().take(cols).collect::<String>()))?;
    }

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    session: &Session,
    height: u16,
) -> std::io::Result<()> {
    let mut hint = String::from("1 : Coin   2 : Power-Up   3 : Enemy   ");
    if let Some(label) = session.preset.flavor_label() {
        hint.push_str(&format!("4 : {}   ", label));
    }
    hint.push_str("E : End   Q : Quit");

    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &Session,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (banner, color) = match session.status {
        GameStatus::GameOver => ("║    GAME  OVER      ║", Color::Red),
        _ => ("║   SESSION  ENDED   ║", Color::Cyan),
    };
    let lines: &[&str] = &["╔════════════════════╗", banner, "╚════════════════════╝"];
    let rounds_line = format!("Rounds played: {:>4}", session.round.saturating_sub(1));
    let hint = "R - Play Again  Q - Quit";

    let cx = width / 2;
    let total_rows = lines.len() + 2; // 3 box lines + rounds + hint
    let start_row = (height / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(color))?;
    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(*msg))?;
    }

    let rounds_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(rounds_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, rounds_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&rounds_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, rounds_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
