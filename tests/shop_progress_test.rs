//! Integration test: spending coins in the menu and persisting the result.

use crossterm::event::KeyCode;
use flappy_skies::audio::SoundCue;
use flappy_skies::core::Difficulty;
use flappy_skies::menu::{MainMenu, MenuAction, MenuCommand, Panel};
use flappy_skies::progress::{CosmeticCategory, PrefsStore, ProgressState};
use flappy_skies::shop::PurchaseOutcome;
use flappy_skies::ui_effects::UiEffects;
use std::path::PathBuf;

fn setup(coins: u32) -> (MainMenu, ProgressState, UiEffects) {
    let mut progress = ProgressState::default();
    progress.coins = coins;
    (MainMenu::new(&progress), progress, UiEffects::new(80, 24))
}

fn reload(progress: &ProgressState) -> ProgressState {
    let mut store = PrefsStore::in_memory();
    progress.save(&mut store);
    ProgressState::load(&store)
}

#[test]
fn test_buy_bird_after_earning_enough() {
    let (mut menu, mut progress, mut fx) = setup(40);

    menu.run(MenuCommand::Main(1), &mut progress, &mut fx);
    menu.run(MenuCommand::OpenCosmeticShop(1), &mut progress, &mut fx);
    assert_eq!(menu.panel(), Panel::Cosmetics(CosmeticCategory::Bird));

    menu.run(MenuCommand::SelectItem(2), &mut progress, &mut fx);
    assert!(menu.is_buy_visible());
    assert_eq!(menu.buy_selected_item(&mut progress), PurchaseOutcome::InsufficientCoins);
    assert_eq!(menu.cues.last(), Some(SoundCue::Reject));
    assert_eq!(progress.coins, 40);

    progress.grant_coins(20);
    assert_eq!(menu.buy_selected_item(&mut progress), PurchaseOutcome::Bought(50));
    assert!(!menu.is_buy_visible());
    assert_eq!(progress.coins, 10);

    let loaded = reload(&progress);
    assert!(loaded.birds.is_bought(2));
    assert_eq!(loaded.birds.selected(), 2);
    assert_eq!(loaded.coins, 10);
}

#[test]
fn test_owned_item_switches_without_cost() {
    let (mut menu, mut progress, mut fx) = setup(100);
    menu.run(MenuCommand::OpenCosmeticShop(3), &mut progress, &mut fx);
    menu.run(MenuCommand::SelectItem(4), &mut progress, &mut fx);
    menu.run(MenuCommand::BuySelectedItem, &mut progress, &mut fx);
    assert_eq!(progress.obstacles.selected(), 4);
    assert_eq!(progress.coins, 50);

    menu.run(MenuCommand::SelectItem(0), &mut progress, &mut fx);
    assert_eq!(progress.obstacles.selected(), 0);
    menu.run(MenuCommand::SelectItem(4), &mut progress, &mut fx);
    assert_eq!(progress.obstacles.selected(), 4);
    assert_eq!(progress.coins, 50);
    assert!(!menu.is_buy_visible());
}

#[test]
fn test_skill_upgrades_stop_at_max_level() {
    let (mut menu, mut progress, mut fx) = setup(350);
    menu.run(MenuCommand::OpenSkillShop, &mut progress, &mut fx);

    for _ in 0..3 {
        assert!(menu.buy_skill(0, &mut progress).is_success());
    }
    assert_eq!(progress.skill1_level, 3);
    assert_eq!(progress.coins, 50);
    assert_eq!(menu.buy_skill(0, &mut progress), PurchaseOutcome::MaxLevel);
    assert!(!menu
        .buttons(&progress)
        .iter()
        .any(|b| b.command == MenuCommand::BuySkill(0)));

    assert_eq!(menu.buy_skill(1, &mut progress), PurchaseOutcome::InsufficientCoins);
    assert_eq!(reload(&progress).skill1_level, 3);
}

#[test]
fn test_options_persist() {
    let (mut menu, mut progress, mut fx) = setup(0);
    menu.run(MenuCommand::Main(2), &mut progress, &mut fx);
    menu.run(MenuCommand::Option(2), &mut progress, &mut fx);
    menu.run(MenuCommand::Option(3), &mut progress, &mut fx);
    menu.run(MenuCommand::Option(4), &mut progress, &mut fx);
    menu.run(MenuCommand::Option(6), &mut progress, &mut fx);
    assert!(menu.is_capturing_key());

    assert!(menu.capture_key(KeyCode::Esc, &mut progress));
    assert!(menu.is_capturing_key());
    assert!(menu.capture_key(KeyCode::Char('w'), &mut progress));
    assert!(!menu.is_capturing_key());
    assert_eq!(menu.flap_key_text(), "W");

    let loaded = reload(&progress);
    assert_eq!(loaded.options.difficulty, Difficulty::Hard);
    assert_eq!(loaded.options.volume, 0.0);
    assert!(!loaded.options.spawn_birds);
    assert!(loaded.options.flap_key.matches(KeyCode::Char('w')));
}

#[test]
fn test_play_and_quit_actions() {
    let (mut menu, mut progress, mut fx) = setup(0);
    assert_eq!(menu.run(MenuCommand::Main(0), &mut progress, &mut fx), MenuAction::Play);
    assert_eq!(menu.run(MenuCommand::Main(4), &mut progress, &mut fx), MenuAction::Quit);
}

#[test]
fn test_progress_file_roundtrip_and_wipe() {
    let dir: PathBuf = std::env::temp_dir().join(format!("flappy-skies-it-{}", std::process::id()));
    let path = dir.join("prefs.json");
    let _ = std::fs::remove_file(&path);

    let mut progress = ProgressState::default();
    progress.coins = 75;
    progress.total_deaths = 4;
    progress.backgrounds.mark_bought(3);
    progress.backgrounds.select(3);

    let mut store = PrefsStore::open(&path);
    progress.save(&mut store);
    store.save().unwrap();

    let mut reopened = PrefsStore::open(&path);
    assert_eq!(ProgressState::load(&reopened), progress);

    let wiped = ProgressState::wipe(&mut reopened);
    assert_eq!(wiped, ProgressState::default());

    let _ = std::fs::remove_dir_all(&dir);
}
