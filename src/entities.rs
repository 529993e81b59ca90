/// All character and power-up types: pure data, no transition logic.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

// ── Tuning constants ──────────────────────────────────────────────────────────

pub const INITIAL_LIVES: u32 = 3;

/// Rounds a Star lasts.  The round in which the Star is collected counts as
/// one of them, so the effect survives three further actions.
pub const INVINCIBILITY_ROUNDS: u32 = 4;

/// Coins needed for an extra life.
pub const COINS_PER_LIFE: u32 = 5;

// ── Tier ──────────────────────────────────────────────────────────────────────

/// The character's power level.  Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Small,
    Big,
    Fire,
    Invincible,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Small => "SMALL",
            Tier::Big => "BIG",
            Tier::Fire => "FIRE",
            Tier::Invincible => "INVINCIBLE",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUp {
    /// One-up Mushroom: +1 life.
    ExtraLife,
    /// Super Mushroom: SMALL becomes BIG, otherwise nothing.
    Grow,
    /// Flower: any tier but INVINCIBLE becomes FIRE.
    FireFlower,
    /// Star: INVINCIBLE for `INVINCIBILITY_ROUNDS` rounds, then back to the
    /// tier held when it was collected.
    StarInvincibility,
}

impl PowerUp {
    /// Every variant, in selection order.
    pub const ALL: [PowerUp; 4] = [
        PowerUp::ExtraLife,
        PowerUp::Grow,
        PowerUp::FireFlower,
        PowerUp::StarInvincibility,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerUp::ExtraLife => "One-up Mushroom",
            PowerUp::Grow => "Super Mushroom",
            PowerUp::FireFlower => "Flower",
            PowerUp::StarInvincibility => "Star",
        }
    }

    pub fn dialogue(self) -> &'static str {
        match self {
            PowerUp::ExtraLife => "Oh Yeah! I got a life!",
            PowerUp::Grow => "Oh Yeah! I grow bigger!",
            PowerUp::FireFlower => "Oh Yeah! I got a fire!",
            PowerUp::StarInvincibility => "Oh Yeah! I become invincible!",
        }
    }
}

// ── Character presets ─────────────────────────────────────────────────────────

/// The selectable characters.  Only name, catchphrase and an optional
/// flavor line differ between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Mario,
    Luigi,
    Toad,
    Peach,
}

struct PresetRecord {
    name: &'static str,
    message: &'static str,
    flavor: Option<(&'static str, &'static str)>,
}

const MARIO: PresetRecord = PresetRecord {
    name: "Mario",
    message: "Let's-a go!",
    flavor: None,
};

const LUIGI: PresetRecord = PresetRecord {
    name: "Luigi",
    message: "I'm-a Luigi!",
    flavor: None,
};

const TOAD: PresetRecord = PresetRecord {
    name: "Toad",
    message: "Yay!",
    flavor: Some(("Reveal item", "I'm revealing a hidden item!")),
};

const PEACH: PresetRecord = PresetRecord {
    name: "Peach",
    message: "Please be careful!",
    flavor: Some(("Float", "I'm floating in the air!")),
};

impl Preset {
    /// Menu order: key 1 is `ALL[0]`, and so on.
    pub const ALL: [Preset; 4] = [Preset::Mario, Preset::Luigi, Preset::Toad, Preset::Peach];

    fn record(self) -> &'static PresetRecord {
        match self {
            Preset::Mario => &MARIO,
            Preset::Luigi => &LUIGI,
            Preset::Toad => &TOAD,
            Preset::Peach => &PEACH,
        }
    }

    /// Menu key (1-based).
    pub fn key(self) -> u8 {
        match self {
            Preset::Mario => 1,
            Preset::Luigi => 2,
            Preset::Toad => 3,
            Preset::Peach => 4,
        }
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    pub fn message(self) -> &'static str {
        self.record().message
    }

    /// Short label of the flavor action, if this character has one.
    pub fn flavor_label(self) -> Option<&'static str> {
        self.record().flavor.map(|(label, _)| label)
    }

    /// What the character says when performing its flavor action.
    pub fn flavor_line(self) -> Option<&'static str> {
        self.record().flavor.map(|(_, line)| line)
    }
}

impl TryFrom<u8> for Preset {
    type Error = InputError;

    fn try_from(key: u8) -> Result<Self, Self::Error> {
        Preset::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or(InputError::UnknownCharacter(key))
    }
}

impl FromStr for Preset {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s.trim().parse().map_err(|_| InputError::NotANumber)?;
        Preset::try_from(key)
    }
}

// ── Enemy contact ─────────────────────────────────────────────────────────────

/// What an enemy hit did to the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// SMALL: one life lost.
    LostLife,
    /// BIG: demoted to SMALL.
    Shrunk,
    /// FIRE: enemy defeated, demoted to SMALL, no life lost.
    DefeatedAndShrunk,
    /// INVINCIBLE: nothing happens.
    Shrugged,
}

impl HitOutcome {
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            HitOutcome::LostLife => &["Mama mia! I lost a life!"],
            HitOutcome::Shrunk => &["Ooops! I become small."],
            HitOutcome::DefeatedAndShrunk => {
                &["Oh yeah! I kill the enemy!", "Ooops! I become small."]
            }
            HitOutcome::Shrugged => &["Woohoo!"],
        }
    }
}

// ── Session status ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Lives ran out.
    GameOver,
    /// The player ended the session.
    Ended,
}

// ── Character state ───────────────────────────────────────────────────────────

/// A playable character.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterState {
    pub name: String,
    pub message: String,
    pub tier: Tier,
    /// Tier to restore when invincibility ends.  Only meaningful while
    /// `tier == Tier::Invincible`.
    pub prior_tier: Tier,
    /// Always below `COINS_PER_LIFE` after a coin is processed.
    pub coins: u32,
    pub lives: u32,
    pub invincibility_rounds_left: u32,
}
