//! In-game rendering: play field, HUD and the post-death menu.

use super::game_common::{
    button_rects, centered_rect, create_game_layout, render_buttons, render_info_panel_frame,
    render_status_bar,
};
use super::palette;
use flappy_skies::core::constants::{OBSTACLE_HALF_WIDTH, WORLD_HALF_HEIGHT, WORLD_HALF_WIDTH};
use flappy_skies::entities::Movable;
use flappy_skies::game::GameSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const GAME_MENU_LABELS: [&str; 3] = ["Play", "Menu", "Quit"];
const INFO_PANEL_WIDTH: u16 = 24;

/// World x for the center of a play-field column.
fn column_to_world_x(area: Rect, column: u16) -> f64 {
    let t = (column as f64 + 0.5) / area.width.max(1) as f64;
    -WORLD_HALF_WIDTH + t * 2.0 * WORLD_HALF_WIDTH
}

/// World y for the center of a play-field row (+y is up).
fn row_to_world_y(area: Rect, row: u16) -> f64 {
    let t = (row as f64 + 0.5) / area.height.max(1) as f64;
    WORLD_HALF_HEIGHT - t * 2.0 * WORLD_HALF_HEIGHT
}

/// Cell (relative to `area`) that contains a world point, if it is on screen.
pub fn world_to_cell(area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let tx = (x + WORLD_HALF_WIDTH) / (2.0 * WORLD_HALF_WIDTH);
    let ty = (WORLD_HALF_HEIGHT - y) / (2.0 * WORLD_HALF_HEIGHT);
    if !(0.0..1.0).contains(&tx) || !(0.0..=1.0).contains(&ty) {
        return None;
    }
    let column = (tx * area.width as f64) as u16;
    let row = ((ty * area.height as f64) as u16).min(area.height - 1);
    Some((column, row))
}

/// Box and button rows of the post-death menu inside the whole screen.
pub fn death_menu_layout(area: Rect) -> (Rect, Rect) {
    let panel = centered_rect(area, 40, 11);
    let inner = Rect::new(
        panel.x + 1,
        panel.y + 1,
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    );
    let buttons = Rect::new(
        inner.x + inner.width.saturating_sub(10) / 2,
        inner.y + 5,
        10.min(inner.width),
        inner.height.saturating_sub(5),
    );
    (panel, buttons)
}

pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, menu_focus: usize) {
    let bird_color = palette::bird_color(session.progress().birds.selected());
    let layout = create_game_layout(frame, area, " Flappy Skies ", bird_color, INFO_PANEL_WIDTH);

    render_play_field(frame, layout.content, session);
    render_game_status(frame, layout.status_bar, session);
    render_game_info(frame, layout.info_panel, session);

    if session.is_menu_visible() {
        render_death_menu(frame, area, session, menu_focus);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let progress = session.progress();
    let sky = palette::rgb(
        palette::background_tint(progress.backgrounds.selected())
            .modulate(session.day_night.background_color()),
    );
    let pipe_color = palette::obstacle_color(progress.obstacles.selected());

    let mut cells: Vec<Vec<(&str, Color)>> =
        vec![vec![(" ", Color::Reset); area.width as usize]; area.height as usize];

    for (row, line) in cells.iter_mut().enumerate() {
        let y = row_to_world_y(area, row as u16);
        for (column, cell) in line.iter_mut().enumerate() {
            let x = column_to_world_x(area, column as u16);
            let blocked = session.obstacles.iter_active().any(|o| {
                let (gap_bottom, gap_top) = o.gap_bounds();
                (x - o.position().x).abs() <= OBSTACLE_HALF_WIDTH && (y > gap_top || y < gap_bottom)
            });
            if blocked {
                *cell = ("█", pipe_color);
            }
        }
    }

    let mut put = |x: f64, y: f64, glyph: &'static str, color: Color| {
        if let Some((column, row)) = world_to_cell(area, x, y) {
            cells[row as usize][column as usize] = (glyph, color);
        }
    };

    for coin in session.coins.iter_active() {
        let p = coin.position();
        put(p.x, p.y, "o", Color::LightYellow);
    }
    for bird in session.birds.iter_active() {
        let p = bird.position();
        let (glyph, color) = palette::ambient_bird(bird.variation, bird.facing_right());
        put(p.x, p.y, glyph, color);
    }

    let player = &session.player;
    let glyph = if !player.is_alive() {
        "x"
    } else if player.is_invulnerable() {
        "◉"
    } else if player.velocity.y > 0.5 {
        "▲"
    } else if player.velocity.y < -2.0 {
        "▼"
    } else {
        "►"
    };
    put(player.position.x, player.position.y, glyph, palette::bird_color(progress.birds.selected()));

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(glyph, fg)| Span::styled(glyph, Style::default().fg(fg).bg(sky)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    // Chat bubbles sit one row above their bird.
    for bird in session.birds.iter_active() {
        let Some(text) = bird.chat else { continue };
        let p = bird.position();
        if let Some((column, row)) = world_to_cell(area, p.x, p.y) {
            if row == 0 {
                continue;
            }
            let width = (text.chars().count() as u16).min(area.width.saturating_sub(column));
            if width == 0 {
                continue;
            }
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White)),
                Rect::new(area.x + column, area.y + row - 1, width, 1),
            );
        }
    }
}

fn render_game_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    let key = session.player.state.flap_key.display_name();
    let flap = format!("[{}/Click]", key);
    if !session.player.is_alive() {
        render_status_bar(
            frame,
            area,
            "You crashed!",
            Color::Red,
            &[("[↑/↓]", "Choose"), ("[Enter]", "Select")],
        );
    } else if session.player.is_invulnerable() {
        render_status_bar(frame, area, "Shield up!", Color::Cyan, &[(flap.as_str(), "Flap")]);
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score_text()),
            Color::Green,
            &[(flap.as_str(), "Flap"), ("[Ctrl+C]", "Quit")],
        );
    }
}

fn sun_or_moon(session: &GameSession) -> (&'static str, Color) {
    if session.day_night.is_daytime() {
        ("☀", Color::Yellow)
    } else {
        ("☾", Color::LightBlue)
    }
}

fn render_game_info(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let progress = session.progress();
    let label = |text: &str| Span::styled(format!(" {}", text), Style::default().fg(Color::DarkGray));
    let (icon, icon_color) = sun_or_moon(session);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", progress.options.difficulty.name()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Score: "),
            Span::styled(
                session.score_text(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Coins: "),
            Span::styled(format!("{}", progress.coins), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            label("Round: "),
            Span::styled(
                format!("+{}", session.coins_this_round),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(icon_color)),
            Span::styled(session.day_night.clock_text(), Style::default().fg(Color::White)),
            Span::styled(
                format!(" {:>3.0}°", session.day_night.icon_rotation()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    let shield = if session.player.is_invulnerable() {
        Span::styled("active", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(
            format!("{:.1}s", session.player.skill_remaining()),
            Style::default().fg(Color::White),
        )
    };
    lines.push(Line::from(vec![label("Shield: "), shield]));

    if session.is_new_high_score() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " NEW HIGH SCORE!",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )));
    }

    if progress.options.show_fps {
        lines.push(Line::from(""));
        lines.push(Line::from(label(&session.fps.text())));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_death_menu(frame: &mut Frame, area: Rect, session: &GameSession, focus: usize) {
    let (panel, buttons) = death_menu_layout(area);
    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Game Over ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let summary: Vec<Line> = session
        .death_summary()
        .unwrap_or_default()
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White))))
        .collect();
    frame.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        Rect { height: 4.min(inner.height), ..inner },
    );

    let labels: Vec<(String, Color)> = GAME_MENU_LABELS
        .iter()
        .map(|l| (l.to_string(), Color::White))
        .collect();
    render_buttons(frame, buttons, &labels, focus, false);
}

/// In-game menu button under a mouse cell.
pub fn death_menu_button_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let (_, buttons) = death_menu_layout(area);
    super::game_common::button_at(&button_rects(buttons, GAME_MENU_LABELS.len()), column, row)
}
