//! UI rendering for the Flappy Bird play field.

use crate::ui::game_common::{
    render_overlay, render_status, scene_layout, sidebar_frame, CONTROLS,
};
use flappy::constants::*;
use flappy::engine::{Aabb, AssetCatalog, Sprite};
use flappy::game::{RoundController, RoundState};
use flappy::Session;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FALLBACK_PIPE: Sprite = Sprite {
    glyph: '█',
    color: Color::Green,
};
const FALLBACK_BIRD: Sprite = Sprite {
    glyph: '►',
    color: Color::Yellow,
};

/// Load the sprites and sounds the scene uses.
pub fn preload(catalog: &mut AssetCatalog) {
    catalog.load_image(BIRD_ASSET, FALLBACK_BIRD);
    catalog.load_image(PIPE_ASSET, FALLBACK_PIPE);
    catalog.load_audio(JUMP_SOUND, flappy::engine::Sound { bells: 1 });
}

/// Render the whole game screen.
pub fn render_flappy<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<R>,
    catalog: &AssetCatalog,
) {
    let layout = scene_layout(frame, area, " Flappy Bird ", Color::Cyan);
    let round = session.round();

    render_play_area(frame, layout.field, round, catalog);
    render_status_line(frame, layout.status, round);
    render_stats(frame, layout.sidebar, session);

    if round.state == RoundState::Ended {
        render_overlay(
            frame,
            layout.field,
            Color::Red,
            "CRASH!",
            &format!("Score {} - press R to restart", round.score),
        );
    }
}

/// Map a logical-pixel position to a cell inside a `width` x `height` grid.
fn to_cell(x: f64, y: f64, width: usize, height: usize) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
        return None;
    }
    let col = (x / SCREEN_WIDTH * width as f64) as usize;
    let row = (y / SCREEN_HEIGHT * height as f64) as usize;
    Some((col.min(width - 1), row.min(height - 1)))
}

/// Cells covered by a box, clipped to the grid.
fn cell_span(bounds: &Aabb, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
    let left = bounds.x.max(0.0);
    let top = bounds.y.max(0.0);
    let right = bounds.right().min(SCREEN_WIDTH) - 0.001;
    let bottom = bounds.bottom().min(SCREEN_HEIGHT) - 0.001;
    if right <= left || bottom <= top {
        return None;
    }
    let (c0, r0) = to_cell(left, top, width, height)?;
    let (c1, r1) = to_cell(right, bottom, width, height)?;
    Some((c0, r0, c1, r1))
}

/// Bird glyph for the current rotation: nose up, level, or diving.
fn bird_glyph(angle: f64) -> char {
    if angle < -5.0 {
        '▲'
    } else if angle > 10.0 {
        '▼'
    } else {
        '►'
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, round: &RoundController, catalog: &AssetCatalog) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let mut grid = vec![vec![(' ', Color::Reset); width]; height];

    let pipe = catalog.image(PIPE_ASSET).copied().unwrap_or(FALLBACK_PIPE);
    for segment in round.spawner.segments() {
        if let Some((c0, r0, c1, r1)) = cell_span(&segment.bounds(), width, height) {
            for row in &mut grid[r0..=r1] {
                for cell in &mut row[c0..=c1] {
                    *cell = (pipe.glyph, pipe.color);
                }
            }
        }
    }

    let bird = catalog.image(BIRD_ASSET).copied().unwrap_or(FALLBACK_BIRD);
    let hitbox = round.bird.bounds();
    let center_x = hitbox.x + hitbox.width / 2.0;
    let center_y = hitbox.y + hitbox.height / 2.0;
    if let Some((col, row)) = to_cell(center_x, center_y, width, height) {
        let color = if round.bird.alive { bird.color } else { Color::Red };
        grid[row][col] = (bird_glyph(round.bird.angle), color);
    }

    let mut lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(glyph, color)| Span::styled(glyph.to_string(), Style::default().fg(color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    // Score label drawn over the field
    if let Some((col, row)) = to_cell(SCORE_LABEL_X, SCORE_LABEL_Y, width, height) {
        let mut spans = lines[row].spans.clone();
        for (i, ch) in round.score_label.chars().enumerate() {
            if let Some(span) = spans.get_mut(col + i) {
                *span = Span::styled(
                    ch.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
        lines[row] = Line::from(spans);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, round: &RoundController) {
    let (message, color) = match round.state {
        RoundState::Running => (format!("Score: {}", round.score), Color::Green),
        RoundState::Ended => (
            String::from("Crashed! Wait for the fall or press R"),
            Color::Red,
        ),
    };
    render_status(frame, area, &message, color, &CONTROLS);
}

fn render_stats<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let inner = sidebar_frame(frame, area, " Stats ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let round = session.round();
    let row = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Score", round.score.to_string(), Color::White),
        row("Best", session.best_score().to_string(), Color::Yellow),
        row("Rounds", session.rounds_played().to_string(), Color::Cyan),
        Line::from(""),
        row("On hit", session.policy().name().to_string(), Color::Magenta),
        row("Pipes", round.spawner.columns().len().to_string(), Color::Green),
        row(
            "Bell",
            String::from(if session.is_muted() { "off" } else { "on" }),
            Color::Gray,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
