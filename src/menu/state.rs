//! Main menu navigation, the shop flow and options.

use super::buttons::{panel_buttons, MenuButton, MenuCommand};
use crate::audio::{CueQueue, SoundCue};
use crate::core::constants::MAX_SKILL_LEVEL;
use crate::core::{Difficulty, FpsCounter};
use crate::input::FlapKey;
use crate::progress::{CosmeticCategory, ProgressState, SkillTrack};
use crate::shop::{try_buy_cosmetic, try_buy_skill, PurchaseOutcome};
use crate::ui_effects::UiEffects;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Main,
    Shop,
    Cosmetics(CosmeticCategory),
    Skills,
    Options,
    About,
}

/// What the app should do after a menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    /// Save progress and load the game scene.
    Play,
    Quit,
}

/// How a catalog entry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColor {
    SelectedOwned,
    Owned,
    Locked,
}

pub fn skill_buy_visible(level: u8) -> bool {
    level < MAX_SKILL_LEVEL
}

pub struct MainMenu {
    panel: Panel,
    focus: usize,
    hovered: Option<usize>,
    /// Catalog entry under preview in the cosmetics panel.
    preview_index: usize,
    buy_visible: bool,
    capturing_key: bool,
    flap_key_text: String,
    pub fps: FpsCounter,
    pub cues: CueQueue,
}

impl MainMenu {
    pub fn new(progress: &ProgressState) -> Self {
        Self {
            panel: Panel::Main,
            focus: 0,
            hovered: None,
            preview_index: 0,
            buy_visible: false,
            capturing_key: false,
            flap_key_text: progress.options.flap_key.display_name(),
            fps: FpsCounter::new(),
            cues: CueQueue::new(),
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn preview_index(&self) -> usize {
        self.preview_index
    }

    pub fn is_buy_visible(&self) -> bool {
        self.buy_visible
    }

    pub fn is_capturing_key(&self) -> bool {
        self.capturing_key
    }

    pub fn flap_key_text(&self) -> &str {
        &self.flap_key_text
    }

    /// Sub-panels draw over a dimmed background.
    pub fn is_background_dimmed(&self) -> bool {
        self.panel != Panel::Main
    }

    pub fn buttons(&self, progress: &ProgressState) -> Vec<MenuButton> {
        panel_buttons(self.panel, progress, self.buy_visible, &self.flap_key_text)
    }

    /// Count one drawn frame of `dt` wall-clock seconds.
    pub fn record_frame(&mut self, dt: f64) {
        self.fps.tick(dt);
    }

    // Focus and hover

    pub fn move_focus(&mut self, delta: isize, progress: &ProgressState, fx: &mut UiEffects) {
        let count = self.buttons(progress).len();
        if count == 0 {
            return;
        }
        let next = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
        self.hover(Some(next), progress, fx);
        self.focus = next;
    }

    /// Move the pointer onto a button (or off all buttons) and run enter/exit effects.
    pub fn hover(&mut self, index: Option<usize>, progress: &ProgressState, fx: &mut UiEffects) {
        if self.hovered == index {
            return;
        }
        let buttons = self.buttons(progress);
        if let Some(old) = self.hovered.and_then(|i| buttons.get(i)) {
            old.interaction.on_pointer_exit(fx);
        }
        self.hovered = index.filter(|&i| i < buttons.len());
        if let Some(i) = self.hovered {
            buttons[i].interaction.on_pointer_enter(fx);
            self.focus = i;
        }
    }

    /// Activate the focused button.
    pub fn activate_focused(&mut self, progress: &mut ProgressState, fx: &mut UiEffects) -> MenuAction {
        let buttons = self.buttons(progress);
        match buttons.get(self.focus) {
            Some(button) => {
                button.interaction.on_pointer_click(fx);
                let command = button.command;
                self.run(command, progress, fx)
            }
            None => MenuAction::None,
        }
    }

    pub fn run(&mut self, command: MenuCommand, progress: &mut ProgressState, fx: &mut UiEffects) -> MenuAction {
        match command {
            MenuCommand::Main(index) => return self.menu_selection(index, progress, fx),
            MenuCommand::Option(index) => self.options_selection(index, progress),
            MenuCommand::OpenCosmeticShop(index) => self.open_cosmetic_shop(index, progress, fx),
            MenuCommand::OpenSkillShop => self.switch_panel(Panel::Skills, progress, fx),
            MenuCommand::SelectItem(index) => self.select_cosmetic_item(index, progress),
            MenuCommand::BuySelectedItem => {
                self.buy_selected_item(progress);
            }
            MenuCommand::BuySkill(index) => {
                self.buy_skill(index, progress);
            }
        }
        MenuAction::None
    }

    fn switch_panel(&mut self, panel: Panel, progress: &ProgressState, fx: &mut UiEffects) {
        if let Some(button) = self.hovered.and_then(|i| self.buttons(progress).into_iter().nth(i)) {
            button.interaction.on_disable(fx);
        }
        self.hovered = None;
        self.panel = panel;
        self.focus = 0;
    }

    // Main menu

    /// Main menu ordinal: Play=0, Shop=1, Options=2, About=3, Quit=4, Back=5.
    pub fn menu_selection(&mut self, index: usize, progress: &ProgressState, fx: &mut UiEffects) -> MenuAction {
        match index {
            0 => {
                self.switch_panel(Panel::Main, progress, fx);
                return MenuAction::Play;
            }
            1 => self.switch_panel(Panel::Shop, progress, fx),
            2 => self.switch_panel(Panel::Options, progress, fx),
            3 => self.switch_panel(Panel::About, progress, fx),
            4 => return MenuAction::Quit,
            5 => self.reset_main_menu(progress, fx),
            _ => log::warn!("Invalid main menu selection {}", index),
        }
        MenuAction::None
    }

    /// Back to the root panel. Cancels a pending key capture and restores the key text.
    pub fn reset_main_menu(&mut self, progress: &ProgressState, fx: &mut UiEffects) {
        self.switch_panel(Panel::Main, progress, fx);
        self.buy_visible = false;
        self.capturing_key = false;
        self.flap_key_text = progress.options.flap_key.display_name();
    }

    // Options

    /// Options ordinal: Easy=0, Medium=1, Hard=2, Sound=3, Birds=4, Fps=5, FlapKey=6.
    pub fn options_selection(&mut self, index: usize, progress: &mut ProgressState) {
        let options = &mut progress.options;
        match index {
            0..=2 => {
                if let Some(difficulty) = Difficulty::from_index(index as i64) {
                    options.difficulty = difficulty;
                }
            }
            3 => options.volume = if options.volume > 0.0 { 0.0 } else { 1.0 },
            4 => options.spawn_birds = !options.spawn_birds,
            5 => {
                options.show_fps = !options.show_fps;
                self.fps = FpsCounter::new();
            }
            6 => {
                self.capturing_key = true;
                self.flap_key_text = "...".to_string();
            }
            _ => log::warn!("Invalid options selection {}", index),
        }
    }

    /// Offer a key press to a pending capture. Returns true if the press was consumed.
    ///
    /// A denied key plays the reject cue and capture continues.
    pub fn capture_key(&mut self, code: KeyCode, progress: &mut ProgressState) -> bool {
        if !self.capturing_key {
            return false;
        }
        match FlapKey::from_key_code(code) {
            Ok(key) => {
                self.flap_key_text = key.display_name();
                log::info!("Flap key bound to {}", key.name());
                progress.options.flap_key = key;
                self.capturing_key = false;
                self.cues.push(SoundCue::KeySelect);
            }
            Err(rejection) => {
                log::debug!("Rejected flap key: {:?}", rejection);
                self.cues.push(SoundCue::Reject);
            }
        }
        true
    }

    // Shop

    /// Bird=1, Background=2, Obstacle=3. The preview starts on the current selection.
    pub fn open_cosmetic_shop(&mut self, index: usize, progress: &ProgressState, fx: &mut UiEffects) {
        let Some(category) = CosmeticCategory::from_shop_index(index) else {
            log::warn!("Invalid cosmetic shop index {}", index);
            return;
        };
        self.switch_panel(Panel::Cosmetics(category), progress, fx);
        self.buy_visible = false;
        self.preview_index = progress.cosmetics(category).selected();
    }

    pub fn open_skill_shop(&mut self, progress: &ProgressState, fx: &mut UiEffects) {
        self.switch_panel(Panel::Skills, progress, fx);
    }

    fn current_category(&self) -> Option<CosmeticCategory> {
        match self.panel {
            Panel::Cosmetics(category) => Some(category),
            _ => None,
        }
    }

    /// Preview an item. Owned items are selected at once; others reveal the buy button.
    pub fn select_cosmetic_item(&mut self, index: usize, progress: &mut ProgressState) {
        let Some(category) = self.current_category() else {
            return;
        };
        if index >= category.catalog_size() {
            log::warn!("Invalid {} index {}", category.name(), index);
            return;
        }
        self.preview_index = index;
        let slot = progress.cosmetics_mut(category);
        if slot.is_bought(index) {
            slot.select(index);
            self.buy_visible = false;
            self.cues.push(SoundCue::UiSelect);
        } else {
            self.buy_visible = true;
        }
    }

    pub fn buy_selected_item(&mut self, progress: &mut ProgressState) -> PurchaseOutcome {
        let Some(category) = self.current_category() else {
            return PurchaseOutcome::Invalid;
        };
        let outcome = try_buy_cosmetic(progress, category, self.preview_index, &mut self.cues);
        if outcome.is_success() {
            self.buy_visible = false;
            // The Buy button is gone; land on the item just bought.
            self.refocus(self.preview_index);
        }
        outcome
    }

    /// Skill index 0 or 1.
    pub fn buy_skill(&mut self, index: usize, progress: &mut ProgressState) -> PurchaseOutcome {
        let Some(track) = SkillTrack::from_index(index) else {
            log::warn!("Invalid skill index {}", index);
            return PurchaseOutcome::Invalid;
        };
        let before = self.buttons(progress).len();
        let outcome = try_buy_skill(progress, track, &mut self.cues);
        if self.buttons(progress).len() < before {
            self.refocus(0);
        }
        outcome
    }

    /// Point focus at `index` after the button list shrank under it.
    fn refocus(&mut self, index: usize) {
        self.focus = index;
        self.hovered = None;
    }

    pub fn item_color(&self, progress: &ProgressState, index: usize) -> ItemColor {
        let Some(category) = self.current_category() else {
            return ItemColor::Locked;
        };
        let slot = progress.cosmetics(category);
        if !slot.is_bought(index) {
            ItemColor::Locked
        } else if slot.selected() == index {
            ItemColor::SelectedOwned
        } else {
            ItemColor::Owned
        }
    }

    /// Debug helper: add 100 coins.
    #[cfg(debug_assertions)]
    pub fn grant_debug_coins(&mut self, progress: &mut ProgressState) {
        progress.grant_coins(100);
        log::info!("Added 100 coins! Total: {}", progress.coins);
    }
}
