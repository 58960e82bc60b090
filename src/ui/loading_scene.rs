//! Loading screen shown between the menu and a round.

use super::game_common::{centered_rect, progress_bar};
use flappy_skies::scene::{SceneId, SceneLoader};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BAR_WIDTH: u16 = 30;

pub fn render_loading(frame: &mut Frame, area: Rect, loader: &SceneLoader) {
    frame.render_widget(Clear, area);
    let rect = centered_rect(area, BAR_WIDTH + 4, 5);
    let title = match loader.target() {
        SceneId::Game => " Taking off ",
        SceneId::Menu => " Landing ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(loader.text()),
        Line::from(""),
        progress_bar(inner.width.saturating_sub(2) as usize, loader.fill()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        inner,
    );
}
