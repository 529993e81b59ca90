use clap::Parser;
use rand::Rng;

use power_up::config::Args;
use power_up::entities::Preset;

#[test]
fn defaults_to_menu_and_full_screen() {
    let args = Args::try_parse_from(["power_up"]).unwrap();
    assert_eq!(args.seed, None);
    assert_eq!(args.preset(), None);
    assert!(!args.plain);
    assert!(args.log_file.is_none());
}

#[test]
fn character_flag_selects_preset() {
    let args = Args::try_parse_from(["power_up", "--character", "4", "--plain"]).unwrap();
    assert_eq!(args.preset(), Some(Preset::Peach));
    assert!(args.plain);
}

#[test]
fn character_flag_is_range_checked() {
    assert!(Args::try_parse_from(["power_up", "-c", "0"]).is_err());
    assert!(Args::try_parse_from(["power_up", "-c", "5"]).is_err());
}

#[test]
fn seed_makes_rng_repeatable() {
    let args = Args::try_parse_from(["power_up", "--seed", "99"]).unwrap();
    let draw = |args: &Args| -> Vec<u32> {
        let mut rng = args.rng();
        (0..8).map(|_| rng.gen()).collect()
    };
    assert_eq!(draw(&args), draw(&args));
}
