//! Screen chrome around the play field: framed layout, status lines, sidebar, overlay.

use flappy::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 22;
const STATUS_HEIGHT: u16 = 2;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// One key hint in the status line.
#[derive(Debug, Clone, Copy)]
pub struct Control {
    pub key: &'static str,
    pub action: &'static str,
}

pub const CONTROLS: [Control; 4] = [
    Control { key: "[Space/Up/Click]", action: "Flap" },
    Control { key: "[R]", action: "Restart" },
    Control { key: "[M]", action: "Mute" },
    Control { key: "[Esc/Q]", action: "Quit" },
];

/// Areas produced by `scene_layout`.
pub struct SceneLayout {
    /// Play field, sized to the world's aspect ratio
    pub field: Rect,
    pub status: Rect,
    pub sidebar: Rect,
}

/// Draw the outer frame and split it into field, status and sidebar.
///
/// ```text
/// ┌─ Title ──────────────────┬─ Stats ────────┐
/// │      [field]             │                │
/// │                          │                │
/// │ [status, 2 lines]        │                │
/// └──────────────────────────┴────────────────┘
/// ```
pub fn scene_layout(frame: &mut Frame, area: Rect, title: &str, accent: Color) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SIDEBAR_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(STATUS_HEIGHT)])
        .split(columns[0]);

    SceneLayout {
        field: fit_field(rows[0]),
        status: rows[1],
        sidebar: columns[1],
    }
}

/// Largest rect inside `available` with the world's proportions, centered.
pub fn fit_field(available: Rect) -> Rect {
    if available.width == 0 || available.height == 0 {
        return available;
    }
    let ratio = SCREEN_WIDTH / SCREEN_HEIGHT * CELL_ASPECT;

    let mut width = available.width;
    let mut height = (width as f64 / ratio).round() as u16;
    if height > available.height {
        height = available.height;
        width = ((height as f64 * ratio).round() as u16).min(available.width);
    }
    let (width, height) = (width.max(1), height.max(1));

    Rect {
        x: available.x + (available.width - width) / 2,
        y: available.y + (available.height - height) / 2,
        width,
        height,
    }
}

/// Status message on the first line, key hints on the second.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    controls: &[Control],
) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || controls.is_empty() {
        return;
    }
    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, control) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(control.key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", control.action),
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

/// Boxed two-line message centered over the field.
pub fn render_overlay(frame: &mut Frame, field: Rect, color: Color, title: &str, message: &str) {
    let width = (message.chars().count().max(title.chars().count()) as u16 + 4).min(field.width);
    let height = 4u16.min(field.height);
    let overlay = Rect {
        x: field.x + (field.width - width) / 2,
        y: field.y + (field.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Bordered sidebar box. Returns the area inside the border.
pub fn sidebar_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
