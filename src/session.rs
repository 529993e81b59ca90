/// The driving-loop contract: intents go in, events come out.
///
/// A `Session` owns the single `CharacterState` for one run.  Front ends
/// translate key presses or typed commands into `Intent`s, call
/// [`Session::step`], and render whatever `GameEvent`s come back.

use std::str::FromStr;

use rand::Rng;
use tracing::{debug, info};

use crate::compute::{collect_coin, collect_power_up, create_preset, hit_enemy, tick_invincibility};
use crate::entities::{CharacterState, GameStatus, HitOutcome, Preset, Tier};
use crate::error::InputError;

// ── Intents ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    CollectCoin,
    CollectPowerUp,
    HitEnemy,
    /// The character's flavor action (Toad and Peach only).  No state effect.
    FlavorAction,
    EndSession,
}

impl FromStr for Intent {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Intent::CollectCoin),
            "2" => Ok(Intent::CollectPowerUp),
            "3" => Ok(Intent::HitEnemy),
            "4" => Ok(Intent::FlavorAction),
            "end" => Ok(Intent::EndSession),
            other => Err(InputError::UnknownAction(other.to_string())),
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Greeting {
        name: String,
        message: String,
    },
    StateChanged {
        name: String,
        tier: Tier,
        coins: u32,
        lives: u32,
    },
    PowerUpCollected {
        name: String,
        variant_name: &'static str,
        dialogue: &'static str,
    },
    EnemyHit(HitOutcome),
    Flavor(&'static str),
    InvincibilityExpired,
    GameOver,
    SessionEnded,
}

impl GameEvent {
    /// Console lines announcing this event.  `StateChanged` has none: front
    /// ends show state in their own status line.
    pub fn describe(&self) -> Vec<String> {
        match self {
            GameEvent::Greeting { name, message } => vec![format!("{}: {}", name, message)],
            GameEvent::StateChanged { .. } => Vec::new(),
            GameEvent::PowerUpCollected {
                name,
                variant_name,
                dialogue,
            } => vec![
                format!("{} collected a {}", name, variant_name),
                dialogue.to_string(),
            ],
            GameEvent::EnemyHit(outcome) => std::iter::once("Oh enemy!")
                .chain(outcome.lines().iter().copied())
                .map(str::to_string)
                .collect(),
            GameEvent::Flavor(line) => vec![line.to_string()],
            GameEvent::InvincibilityExpired => vec!["Oh! Star effect has gone!".to_string()],
            GameEvent::GameOver => vec!["Game Over!".to_string()],
            GameEvent::SessionEnded => vec!["Ending the game. Bye bye!".to_string()],
        }
    }
}

fn state_changed(state: &CharacterState) -> GameEvent {
    GameEvent::StateChanged {
        name: state.name.clone(),
        tier: state.tier,
        coins: state.coins,
        lives: state.lives,
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Session {
    pub preset: Preset,
    pub state: CharacterState,
    /// 1-based; advanced once per processed gameplay intent.
    pub round: u64,
    pub status: GameStatus,
}

impl Session {
    /// Create the character for `preset` and return the opening events.
    pub fn start(preset: Preset) -> (Session, Vec<GameEvent>) {
        let state = create_preset(preset);
        info!(character = %state.name, "session started");

        let events = vec![
            GameEvent::Greeting {
                name: state.name.clone(),
                message: state.message.clone(),
            },
            state_changed(&state),
        ];
        let session = Session {
            preset,
            state,
            round: 1,
            status: GameStatus::Playing,
        };
        (session, events)
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Process one intent to completion.
    ///
    /// Order: apply the intent, report it, advance the round, then count
    /// down invincibility if it is active.  Ignored once the session is over.
    pub fn step(&mut self, intent: Intent, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.is_over() {
            return Vec::new();
        }
        debug!(round = self.round, ?intent, "processing intent");

        let mut events = Vec::new();

        match intent {
            Intent::EndSession => {
                info!(round = self.round, "session ended by player");
                self.status = GameStatus::Ended;
                events.push(GameEvent::SessionEnded);
                return events;
            }
            Intent::CollectCoin => {
                self.state = collect_coin(&self.state);
            }
            Intent::CollectPowerUp => {
                let (state, power_up) = collect_power_up(&self.state, rng);
                info!(character = %state.name, power_up = power_up.name(), "power-up collected");
                self.state = state;
                events.push(GameEvent::PowerUpCollected {
                    name: self.state.name.clone(),
                    variant_name: power_up.name(),
                    dialogue: power_up.dialogue(),
                });
            }
            Intent::HitEnemy => {
                let (state, outcome) = hit_enemy(&self.state);
                debug!(?outcome, tier = %state.tier, lives = state.lives, "enemy hit");
                self.state = state;
                events.push(GameEvent::EnemyHit(outcome));
            }
            Intent::FlavorAction => {
                if let Some(line) = self.preset.flavor_line() {
                    events.push(GameEvent::Flavor(line));
                }
            }
        }
        events.push(state_changed(&self.state));

        self.round += 1;

        if self.state.tier == Tier::Invincible {
            let (state, expired) = tick_invincibility(&self.state);
            self.state = state;
            if expired {
                info!(restored = %self.state.tier, "invincibility expired");
                events.push(GameEvent::InvincibilityExpired);
                events.push(state_changed(&self.state));
            }
        }

        if self.state.lives == 0 {
            info!(round = self.round, "game over");
            self.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver);
        }

        events
    }
}
