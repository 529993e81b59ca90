/// Pure character-transition functions.
///
/// Every public function takes an immutable reference to the current
/// `CharacterState` (and, where needed, an RNG handle) and returns a brand-new
/// `CharacterState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    CharacterState, HitOutcome, PowerUp, Preset, Tier, COINS_PER_LIFE, INITIAL_LIVES,
    INVINCIBILITY_ROUNDS,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh SMALL character with no coins and the starting lives.
pub fn create(name: &str, message: &str) -> CharacterState {
    CharacterState {
        name: name.to_string(),
        message: message.to_string(),
        tier: Tier::Small,
        prior_tier: Tier::Small,
        coins: 0,
        lives: INITIAL_LIVES,
        invincibility_rounds_left: INVINCIBILITY_ROUNDS,
    }
}

pub fn create_preset(preset: Preset) -> CharacterState {
    create(preset.name(), preset.message())
}

// ── Counters ─────────────────────────────────────────────────────────────────

/// Every `COINS_PER_LIFE`th coin converts the purse into one life.
pub fn collect_coin(state: &CharacterState) -> CharacterState {
    let coins = state.coins + 1;
    if coins % COINS_PER_LIFE == 0 {
        CharacterState {
            coins: 0,
            lives: state.lives + 1,
            ..state.clone()
        }
    } else {
        CharacterState {
            coins,
            ..state.clone()
        }
    }
}

pub fn gain_life(state: &CharacterState) -> CharacterState {
    CharacterState {
        lives: state.lives + 1,
        ..state.clone()
    }
}

// ── Power-ups ────────────────────────────────────────────────────────────────

/// Draw one of the four power-ups with equal probability.
pub fn pick_power_up(rng: &mut impl Rng) -> PowerUp {
    PowerUp::ALL[rng.gen_range(0..PowerUp::ALL.len())]
}

/// Draw a random power-up and apply it.  The chosen variant is returned so
/// the caller can announce it.
pub fn collect_power_up(
    state: &CharacterState,
    rng: &mut impl Rng,
) -> (CharacterState, PowerUp) {
    let power_up = pick_power_up(rng);
    (apply_power_up(state, power_up), power_up)
}

pub fn apply_power_up(state: &CharacterState, power_up: PowerUp) -> CharacterState {
    match power_up {
        PowerUp::ExtraLife => gain_life(state),
        PowerUp::Grow if state.tier == Tier::Small => CharacterState {
            tier: Tier::Big,
            ..state.clone()
        },
        PowerUp::Grow => state.clone(),
        PowerUp::FireFlower if state.tier != Tier::Invincible => CharacterState {
            tier: Tier::Fire,
            ..state.clone()
        },
        PowerUp::FireFlower => state.clone(),
        // prior_tier is captured before the overwrite, so a Star collected
        // while already INVINCIBLE records INVINCIBLE as the tier to restore.
        PowerUp::StarInvincibility => CharacterState {
            prior_tier: state.tier,
            tier: Tier::Invincible,
            invincibility_rounds_left: INVINCIBILITY_ROUNDS,
            ..state.clone()
        },
    }
}

// ── Damage ───────────────────────────────────────────────────────────────────

/// Enemy contact.  Only a SMALL character loses a life.
pub fn hit_enemy(state: &CharacterState) -> (CharacterState, HitOutcome) {
    match state.tier {
        Tier::Small => (
            CharacterState {
                lives: state.lives.saturating_sub(1),
                ..state.clone()
            },
            HitOutcome::LostLife,
        ),
        Tier::Big => (
            CharacterState {
                tier: Tier::Small,
                ..state.clone()
            },
            HitOutcome::Shrunk,
        ),
        Tier::Fire => (
            CharacterState {
                tier: Tier::Small,
                ..state.clone()
            },
            HitOutcome::DefeatedAndShrunk,
        ),
        Tier::Invincible => (state.clone(), HitOutcome::Shrugged),
    }
}

// ── Per-round tick ───────────────────────────────────────────────────────────

/// Count down one round of invincibility.  Returns `true` in the second slot
/// on the round the Star wears off.  Does nothing unless INVINCIBLE.
pub fn tick_invincibility(state: &CharacterState) -> (CharacterState, bool) {
    if state.tier != Tier::Invincible {
        return (state.clone(), false);
    }

    let left = state.invincibility_rounds_left.saturating_sub(1);
    if left == 0 {
        (
            CharacterState {
                tier: state.prior_tier,
                invincibility_rounds_left: INVINCIBILITY_ROUNDS,
                ..state.clone()
            },
            true,
        )
    } else {
        (
            CharacterState {
                invincibility_rounds_left: left,
                ..state.clone()
            },
            false,
        )
    }
}
