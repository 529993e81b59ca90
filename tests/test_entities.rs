use power_up::entities::*;
use power_up::error::InputError;

#[test]
fn entity_copy_and_eq() {
    assert_eq!(Tier::Small, Tier::Small);
    assert_ne!(Tier::Big, Tier::Fire);
    assert_eq!(PowerUp::Grow, PowerUp::Grow);
    assert_ne!(PowerUp::Grow, PowerUp::FireFlower);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn tier_labels() {
    assert_eq!(Tier::Small.to_string(), "SMALL");
    assert_eq!(Tier::Big.to_string(), "BIG");
    assert_eq!(Tier::Fire.to_string(), "FIRE");
    assert_eq!(Tier::Invincible.to_string(), "INVINCIBLE");
}

#[test]
fn power_up_table_has_four_distinct_variants() {
    let all = PowerUp::ALL;
    assert_eq!(all.len(), 4);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn power_up_names_and_dialogue() {
    assert_eq!(PowerUp::ExtraLife.name(), "One-up Mushroom");
    assert_eq!(PowerUp::StarInvincibility.name(), "Star");
    assert_eq!(PowerUp::FireFlower.dialogue(), "Oh Yeah! I got a fire!");
}

// ── Presets ───────────────────────────────────────────────────────────────────

#[test]
fn preset_keys_follow_menu_order() {
    let keys: Vec<u8> = Preset::ALL.iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec![1, 2, 3, 4]);
    assert_eq!(Preset::try_from(1u8), Ok(Preset::Mario));
    assert_eq!(Preset::try_from(2u8), Ok(Preset::Luigi));
    assert_eq!(Preset::try_from(3u8), Ok(Preset::Toad));
    assert_eq!(Preset::try_from(4u8), Ok(Preset::Peach));
}

#[test]
fn preset_rejects_out_of_range_keys() {
    assert_eq!(Preset::try_from(0u8), Err(InputError::UnknownCharacter(0)));
    assert_eq!(Preset::try_from(5u8), Err(InputError::UnknownCharacter(5)));
}

#[test]
fn preset_parses_from_text() {
    assert_eq!(" 2 \n".parse::<Preset>(), Ok(Preset::Luigi));
    assert_eq!("toad".parse::<Preset>(), Err(InputError::NotANumber));
    assert_eq!("9".parse::<Preset>(), Err(InputError::UnknownCharacter(9)));
}

#[test]
fn preset_names_and_messages() {
    assert_eq!(Preset::Mario.name(), "Mario");
    assert_eq!(Preset::Mario.message(), "Let's-a go!");
    assert_eq!(Preset::Luigi.message(), "I'm-a Luigi!");
    assert_eq!(Preset::Toad.message(), "Yay!");
    assert_eq!(Preset::Peach.message(), "Please be careful!");
}

#[test]
fn only_toad_and_peach_have_flavor_actions() {
    assert!(Preset::Mario.flavor_line().is_none());
    assert!(Preset::Luigi.flavor_label().is_none());
    assert_eq!(Preset::Toad.flavor_line(), Some("I'm revealing a hidden item!"));
    assert_eq!(Preset::Peach.flavor_line(), Some("I'm floating in the air!"));
}

#[test]
fn hit_outcome_lines() {
    assert_eq!(HitOutcome::LostLife.lines(), &["Mama mia! I lost a life!"]);
    assert_eq!(HitOutcome::DefeatedAndShrunk.lines().len(), 2);
    assert_eq!(HitOutcome::Shrugged.lines(), &["Woohoo!"]);
}

#[test]
fn character_clone_is_independent() {
    let original = CharacterState {
        name: "Mario".to_string(),
        message: "Let's-a go!".to_string(),
        tier: Tier::Small,
        prior_tier: Tier::Small,
        coins: 0,
        lives: 3,
        invincibility_rounds_left: 4,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.tier = Tier::Fire;
    cloned.coins = 4;
    cloned.name.push('!');

    assert_eq!(original.tier, Tier::Small);
    assert_eq!(original.coins, 0);
    assert_eq!(original.name, "Mario");
}
