//! Main menu rendering: panels, shop previews, options and tooltip.

use super::game_common::{
    button_at, button_rects, create_game_layout, render_buttons, render_info_panel_frame,
    render_status_bar,
};
use super::palette;
use flappy_skies::core::constants::MAX_SKILL_LEVEL;
use flappy_skies::menu::{ItemColor, MainMenu, MenuCommand, Panel};
use flappy_skies::progress::{CosmeticCategory, ProgressState, SkillTrack};
use flappy_skies::shop::skill_level_text;
use flappy_skies::ui_effects::{CursorStyle, UiEffects};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TITLE_ART: [&str; 3] = [
    "╔═╗┬  ┌─┐┌─┐┌─┐┬ ┬  ╔═╗┬┌─┬┌─┐┌─┐",
    "╠╣ │  ├─┤├─┘├─┘└┬┘  ╚═╗├┴┐│├┤ └─┐",
    "╚  ┴─┘┴ ┴┴  ┴   ┴   ╚═╝┴ ┴┴└─┘└─┘",
];
const INFO_PANEL_WIDTH: u16 = 30;
const BUTTON_COLUMN_WIDTH: u16 = 28;

const ABOUT_TEXT: &str = "Flap through the gaps, grab coins and dodge the pipes. \
Coins buy new birds, skies and pipes in the shop, plus two skills: \
Lucky Coins makes coins appear more often and Guardian Wings grants two \
seconds of invulnerability on a shorter cooldown.";

fn title_for(panel: Panel) -> &'static str {
    match panel {
        Panel::Main => " Flappy Skies ",
        Panel::Shop => " Shop ",
        Panel::Cosmetics(CosmeticCategory::Bird) => " Shop: Birds ",
        Panel::Cosmetics(CosmeticCategory::Background) => " Shop: Backgrounds ",
        Panel::Cosmetics(CosmeticCategory::Obstacle) => " Shop: Obstacles ",
        Panel::Skills => " Shop: Skills ",
        Panel::Options => " Options ",
        Panel::About => " About ",
    }
}

/// Split the content area into the title block and the button column.
/// Pure geometry so that mouse hit-testing matches what is drawn.
fn split_content(content: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(content);
    let column_width = BUTTON_COLUMN_WIDTH.min(rows[1].width);
    let buttons = Rect::new(
        rows[1].x + (rows[1].width - column_width) / 2,
        rows[1].y,
        column_width,
        rows[1].height,
    );
    (rows[0], buttons)
}

/// Area the menu buttons occupy on a screen of the given size.
fn menu_buttons_area(area: Rect) -> Rect {
    // Mirrors create_game_layout: outer border, info panel, 2-line status bar.
    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    let h = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h[0]);
    split_content(v[0]).1
}

/// Index of the menu button under a terminal cell.
pub fn menu_button_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    button_at(&button_rects(menu_buttons_area(area), count), column, row)
}

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MainMenu, progress: &ProgressState, fx: &UiEffects) {
    let border = if menu.is_background_dimmed() {
        Color::DarkGray
    } else {
        Color::Yellow
    };
    let game = create_game_layout(frame, area, title_for(menu.panel()), border, INFO_PANEL_WIDTH);
    let (title, buttons) = split_content(game.content);

    render_title(frame, title, menu, progress);
    render_menu_buttons(frame, buttons, menu, progress, fx);
    render_menu_status(frame, game.status_bar, menu);
    render_menu_info(frame, game.info_panel, menu, progress);

    if fx.tooltip().visible {
        render_tooltip(frame, area, fx);
    }
}

fn render_title(frame: &mut Frame, area: Rect, menu: &MainMenu, progress: &ProgressState) {
    let art_color = if menu.is_background_dimmed() {
        Color::DarkGray
    } else {
        Color::LightCyan
    };
    let mut lines: Vec<Line> = TITLE_ART
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(art_color))))
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Coins: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", progress.coins),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   High Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}", progress.high_score), Style::default().fg(Color::White)),
    ]));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_menu_buttons(
    frame: &mut Frame,
    area: Rect,
    menu: &MainMenu,
    progress: &ProgressState,
    fx: &UiEffects,
) {
    let labels: Vec<(String, Color)> = menu
        .buttons(progress)
        .into_iter()
        .map(|button| {
            let color = match button.command {
                MenuCommand::SelectItem(item) => palette::item_color(menu.item_color(progress, item)),
                MenuCommand::BuySelectedItem => Color::LightGreen,
                MenuCommand::Main(4) => Color::LightRed,
                MenuCommand::Option(6) if menu.is_capturing_key() => Color::Yellow,
                _ => Color::White,
            };
            (button.label, color)
        })
        .collect();
    render_buttons(
        frame,
        area,
        &labels,
        menu.focus(),
        fx.cursor() == CursorStyle::Hand,
    );
}

fn render_menu_status(frame: &mut Frame, area: Rect, menu: &MainMenu) {
    if menu.is_capturing_key() {
        render_status_bar(
            frame,
            area,
            "Press the key to flap with",
            Color::Yellow,
            &[("[Esc]", "Not allowed"), ("[any]", "Bind")],
        );
        return;
    }
    let hint = if cfg!(debug_assertions) {
        "[F9] +100 coins"
    } else {
        ""
    };
    render_status_bar(
        frame,
        area,
        hint,
        Color::DarkGray,
        &[("[↑/↓]", "Navigate"), ("[Enter]", "Select"), ("[Ctrl+C]", "Quit")],
    );
}

fn render_menu_info(frame: &mut Frame, area: Rect, menu: &MainMenu, progress: &ProgressState) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    match menu.panel() {
        Panel::Cosmetics(category) => {
            lines.extend(preview_lines(category, menu, progress, inner.width));
        }
        Panel::Skills => {
            for track in SkillTrack::ALL {
                let level = progress.skill_level(track);
                lines.push(Line::from(Span::styled(
                    format!(" {}", track.name()),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
                let mut bar = String::from(" ");
                for step in 0..MAX_SKILL_LEVEL {
                    bar.push_str(if step < level { "■ " } else { "□ " });
                }
                lines.push(Line::from(vec![
                    Span::styled(bar, Style::default().fg(Color::Cyan)),
                    Span::styled(skill_level_text(level), dim),
                ]));
                lines.push(Line::from(""));
            }
        }
        Panel::About => {
            frame.render_widget(
                Paragraph::new(ABOUT_TEXT)
                    .style(Style::default().fg(Color::White))
                    .wrap(Wrap { trim: true }),
                inner,
            );
            return;
        }
        Panel::Options => {
            lines.push(Line::from(Span::styled(" Difficulty", dim)));
            lines.push(Line::from(format!(" {}", progress.options.difficulty.name())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" Flap key", dim)));
            lines.push(Line::from(format!(" {}", menu.flap_key_text())));
        }
        Panel::Main | Panel::Shop => {
            lines.push(Line::from(vec![
                Span::styled(" Deaths: ", dim),
                Span::raw(format!("{}", progress.total_deaths)),
            ]));
            for category in CosmeticCategory::ALL {
                let slot = progress.cosmetics(category);
                let owned = (0..slot.len()).filter(|&i| slot.is_bought(i)).count();
                lines.push(Line::from(vec![
                    Span::styled(format!(" {}: ", category.name()), dim),
                    Span::raw(format!("{}/{}", owned, slot.len())),
                ]));
            }
        }
    }

    if progress.options.show_fps {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {}", menu.fps.text()), dim)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Preview of the catalog entry under the cursor.
fn preview_lines(
    category: CosmeticCategory,
    menu: &MainMenu,
    progress: &ProgressState,
    width: u16,
) -> Vec<Line<'static>> {
    let index = menu.preview_index();
    let swatch_width = width.saturating_sub(2) as usize;
    let swatch = match category {
        CosmeticCategory::Bird => Line::from(Span::styled(
            "  ►◉",
            Style::default().fg(palette::bird_color(index)).add_modifier(Modifier::BOLD),
        )),
        CosmeticCategory::Background => Line::from(Span::styled(
            " ".repeat(swatch_width),
            Style::default().bg(palette::rgb(palette::background_tint(index))),
        )),
        CosmeticCategory::Obstacle => Line::from(Span::styled(
            format!(" {}", "█".repeat(3)),
            Style::default().fg(palette::obstacle_color(index)),
        )),
    };
    let status = match menu.item_color(progress, index) {
        ItemColor::SelectedOwned => Span::styled(" Equipped", Style::default().fg(Color::Yellow)),
        ItemColor::Owned => Span::styled(" Owned", Style::default().fg(Color::White)),
        ItemColor::Locked => Span::styled(
            format!(" Locked ({} coins)", category.unlock_cost()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    vec![
        Line::from(Span::styled(
            format!(" {} {}", category.name(), index + 1),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        swatch.clone(),
        swatch,
        Line::from(""),
        Line::from(status),
    ]
}

fn render_tooltip(frame: &mut Frame, area: Rect, fx: &UiEffects) {
    let tooltip = fx.tooltip();
    if tooltip.text.is_empty() {
        return;
    }
    let width = (tooltip.text.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    // Pivot picks which corner of the box sits on the anchor point.
    let (column, row) = tooltip.position;
    let x = column
        .saturating_sub((tooltip.pivot.0 * width as f32) as u16)
        .min(area.width.saturating_sub(width));
    let y = if tooltip.pivot.1 < 0.5 {
        row
    } else {
        row.saturating_sub(height.saturating_sub(1))
    }
    .min(area.height.saturating_sub(height));
    let rect = Rect::new(area.x + x, area.y + y, width, height);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(tooltip.text.as_str())
            .style(Style::default().fg(Color::Black).bg(Color::LightYellow))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow))),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_buttons_area_is_inside_screen() {
        let area = Rect::new(0, 0, 100, 30);
        let buttons = menu_buttons_area(area);
        assert!(buttons.x > 0 && buttons.y > 0);
        assert!(buttons.x + buttons.width <= area.width - INFO_PANEL_WIDTH);
        assert!(buttons.width <= BUTTON_COLUMN_WIDTH);
    }

    #[test]
    fn test_menu_button_hit_test() {
        let area = Rect::new(0, 0, 100, 30);
        let buttons = menu_buttons_area(area);
        assert_eq!(menu_button_at(area, 5, buttons.x + 1, buttons.y), Some(0));
        assert_eq!(menu_button_at(area, 5, buttons.x + 1, buttons.y + 4), Some(4));
        assert_eq!(menu_button_at(area, 5, buttons.x + 1, buttons.y + 5), None);
        assert_eq!(menu_button_at(area, 5, 0, 0), None);
    }

    #[test]
    fn test_titles_cover_panels() {
        assert_eq!(title_for(Panel::Main), " Flappy Skies ");
        assert_eq!(title_for(Panel::Cosmetics(CosmeticCategory::Obstacle)), " Shop: Obstacles ");
    }
}
