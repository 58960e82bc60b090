//! Button lists for each menu panel.

use super::state::Panel;
use crate::progress::{CosmeticCategory, ProgressState, SkillTrack};
use crate::shop::skill_level_text;
use crate::ui_effects::ButtonInteraction;

/// What a button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Main menu ordinal: Play=0, Shop=1, Options=2, About=3, Quit=4, Back=5.
    Main(usize),
    /// Options ordinal: Easy=0, Medium=1, Hard=2, Sound=3, Birds=4, Fps=5, FlapKey=6.
    Option(usize),
    /// Bird=1, Background=2, Obstacle=3.
    OpenCosmeticShop(usize),
    OpenSkillShop,
    SelectItem(usize),
    BuySelectedItem,
    BuySkill(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub label: String,
    pub command: MenuCommand,
    pub interaction: ButtonInteraction,
}

impl MenuButton {
    fn new(label: impl Into<String>, command: MenuCommand) -> Self {
        Self {
            label: label.into(),
            command,
            interaction: ButtonInteraction::new(),
        }
    }

    fn tip(mut self, text: &str) -> Self {
        self.interaction = ButtonInteraction::with_tooltip(text);
        self
    }
}

fn check(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn back() -> MenuButton {
    MenuButton::new("Back", MenuCommand::Main(5))
}

/// Buttons shown on `panel`, in focus order.
pub fn panel_buttons(
    panel: Panel,
    progress: &ProgressState,
    buy_visible: bool,
    flap_key_text: &str,
) -> Vec<MenuButton> {
    match panel {
        Panel::Main => vec![
            MenuButton::new("Play", MenuCommand::Main(0)),
            MenuButton::new("Shop", MenuCommand::Main(1)).tip("Spend coins on looks and skills"),
            MenuButton::new("Options", MenuCommand::Main(2)),
            MenuButton::new("About", MenuCommand::Main(3)),
            MenuButton::new("Quit", MenuCommand::Main(4)),
        ],
        Panel::Shop => vec![
            MenuButton::new("Birds", MenuCommand::OpenCosmeticShop(1)),
            MenuButton::new("Backgrounds", MenuCommand::OpenCosmeticShop(2)),
            MenuButton::new("Obstacles", MenuCommand::OpenCosmeticShop(3)),
            MenuButton::new("Skills", MenuCommand::OpenSkillShop),
            back(),
        ],
        Panel::Cosmetics(category) => {
            let mut buttons: Vec<MenuButton> = (0..category.catalog_size())
                .map(|i| MenuButton::new(format!("{} {}", category.name(), i + 1), MenuCommand::SelectItem(i)))
                .collect();
            if buy_visible {
                buttons.push(
                    MenuButton::new(
                        format!("Buy ({} coins)", category.unlock_cost()),
                        MenuCommand::BuySelectedItem,
                    )
                    .tip("Unlocks and equips this style"),
                );
            }
            buttons.push(back());
            buttons
        }
        Panel::Skills => {
            let mut buttons = Vec::new();
            for (i, track) in SkillTrack::ALL.into_iter().enumerate() {
                let level = progress.skill_level(track);
                if super::state::skill_buy_visible(level) {
                    buttons.push(
                        MenuButton::new(
                            format!("Upgrade {} ({})", track.name(), skill_level_text(level)),
                            MenuCommand::BuySkill(i),
                        )
                        .tip(skill_tooltip(track)),
                    );
                }
            }
            buttons.push(back());
            buttons
        }
        Panel::Options => {
            let difficulty = progress.options.difficulty.index();
            let mut buttons: Vec<MenuButton> = ["Easy", "Medium", "Hard"]
                .into_iter()
                .enumerate()
                .map(|(i, name)| {
                    let marker = if i == difficulty { ">" } else { " " };
                    MenuButton::new(format!("{} {}", marker, name), MenuCommand::Option(i))
                })
                .collect();
            buttons.extend([
                MenuButton::new(
                    format!("{} Sound", check(progress.options.volume > 0.0)),
                    MenuCommand::Option(3),
                ),
                MenuButton::new(
                    format!("{} Birds", check(progress.options.spawn_birds)),
                    MenuCommand::Option(4),
                ),
                MenuButton::new(
                    format!("{} Show FPS", check(progress.options.show_fps)),
                    MenuCommand::Option(5),
                ),
                MenuButton::new(format!("Flap key: {}", flap_key_text), MenuCommand::Option(6))
                    .tip("Press a key to bind it"),
                back(),
            ]);
            buttons
        }
        Panel::About => vec![back()],
    }
}

fn skill_tooltip(track: SkillTrack) -> &'static str {
    match track {
        SkillTrack::CoinSpawn => "More coins appear each round",
        SkillTrack::Invulnerability => "Shield triggers more often",
    }
}

/// Category shown by a cosmetics panel, if any.
pub fn panel_category(panel: Panel) -> Option<CosmeticCategory> {
    match panel {
        Panel::Cosmetics(category) => Some(category),
        _ => None,
    }
}
