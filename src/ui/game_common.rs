//! Shared layout pieces for the game, menu and loading screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field or menu body, inside the outer border.
    pub content: Rect,
    /// Two lines under the content.
    pub status_bar: Rect,
    /// Right-hand panel with its own border.
    pub info_panel: Rect,
}

/// Outer border with a content area, a 2-line status bar and a right info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status message on line 1, `[key] action` pairs on line 2.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Bordered " Info " panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A centered box of the given size, clamped to `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// One row per button, stacked from the top of `area`. Used for drawing and
/// for mouse hit-testing, so both agree on where buttons are.
pub fn button_rects(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| i as u16)
        .take_while(|&i| i < area.height)
        .map(|i| Rect::new(area.x, area.y + i, area.width, 1))
        .collect()
}

/// Index of the button under a terminal cell.
pub fn button_at(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|r| {
        row == r.y && column >= r.x && column < r.x + r.width
    })
}

/// Draw a vertical button list with the focused entry highlighted.
pub fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    labels: &[(String, Color)],
    focus: usize,
    hand_cursor: bool,
) {
    for (i, rect) in button_rects(area, labels.len()).into_iter().enumerate() {
        let (label, color) = &labels[i];
        let focused = i == focus;
        let marker = match (focused, hand_cursor) {
            (true, true) => "☛ ",
            (true, false) => "> ",
            _ => "  ",
        };
        let mut style = Style::default().fg(*color);
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(label.as_str(), style),
            ])),
            rect,
        );
    }
}

/// A horizontal fill bar: `█` for done, `░` for the rest.
pub fn progress_bar(width: usize, fill: f32) -> Line<'static> {
    let filled = ((fill.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_rects_clip_to_area() {
        let rects = button_rects(Rect::new(2, 3, 10, 2), 5);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1], Rect::new(2, 4, 10, 1));
    }

    #[test]
    fn test_button_at() {
        let rects = button_rects(Rect::new(2, 3, 10, 4), 3);
        assert_eq!(button_at(&rects, 5, 4), Some(1));
        assert_eq!(button_at(&rects, 1, 4), None);
        assert_eq!(button_at(&rects, 5, 9), None);
    }

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(Rect::new(0, 0, 80, 24), 20, 6);
        assert_eq!(r, Rect::new(30, 9, 20, 6));
        let clamped = centered_rect(Rect::new(0, 0, 10, 4), 20, 6);
        assert_eq!(clamped, Rect::new(0, 0, 10, 4));
    }
}
