//! Reaction Timer UI: a large panel that turns green on the stimulus.

use super::game_common::{
    centered_rect, create_game_layout, render_buttons, render_info_panel_frame,
    render_status_bar, stat_line,
};
use crate::games::{ReactionGame, ReactionInput, ReactionOutcome, ReactionStatus};
use crate::input::HitRegions;
use crate::playground::PlaygroundInput;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn panel_colors(game: &ReactionGame) -> (Color, Color) {
    match (game.status, game.outcome) {
        (ReactionStatus::Waiting, _) => (Color::White, Color::Red),
        (ReactionStatus::Go, _) => (Color::Black, Color::Green),
        (ReactionStatus::Result, Some(ReactionOutcome::FalseStart)) => {
            (Color::LightRed, Color::Reset)
        }
        (ReactionStatus::Result, _) => (Color::LightCyan, Color::Reset),
        (ReactionStatus::Idle, _) => (Color::Gray, Color::Reset),
    }
}

pub fn render_reaction_scene(
    frame: &mut Frame,
    area: Rect,
    game: &ReactionGame,
    regions: &mut HitRegions,
) {
    let layout = create_game_layout(frame, area, " Reaction Timer ", Color::LightYellow, 8, 20);

    let (fg, bg) = panel_colors(game);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fg))
        .style(Style::default().bg(bg));
    let inner = block.inner(layout.content);
    frame.render_widget(block, layout.content);
    regions.reaction_panel = Some(layout.content);

    let label = Paragraph::new(Line::from(Span::styled(
        game.phase_label(),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, centered_rect(inner, inner.width, 1));

    let (status, color) = match game.status {
        ReactionStatus::Idle => ("Press Enter to start", Color::Gray),
        ReactionStatus::Waiting => ("Don't click yet...", Color::Red),
        ReactionStatus::Go => ("Now!", Color::Green),
        ReactionStatus::Result => ("Press Enter to try again", Color::LightYellow),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        color,
        &[("[Enter]", "Start"), ("[Space/Click]", "React"), ("[R]", "Reset")],
    );

    render_info_panel(frame, layout.info_panel, game, regions);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ReactionGame, regions: &mut HitRegions) {
    let inner = render_info_panel_frame(frame, area);

    let last = match game.outcome {
        Some(ReactionOutcome::Time(ms)) => format!("{} ms", ms),
        Some(ReactionOutcome::FalseStart) => "false start".to_string(),
        None => "-".to_string(),
    };
    let lines = vec![stat_line("Last", last, Color::White)];
    let line_count = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height > line_count + 1 {
        let button_row = Rect {
            y: inner.y + line_count + 1,
            height: 1,
            ..inner
        };
        render_buttons(
            frame,
            button_row,
            &[("Start", PlaygroundInput::Reaction(ReactionInput::Start))],
            regions,
        );
    }
    if inner.height > line_count + 2 {
        let button_row = Rect {
            y: inner.y + line_count + 2,
            height: 1,
            ..inner
        };
        render_buttons(
            frame,
            button_row,
            &[("Reset", PlaygroundInput::Reaction(ReactionInput::Reset))],
            regions,
        );
    }
}
