//! Memory Match UI: a 4-column grid of cards.

use super::game_common::{
    create_game_layout, render_buttons, render_game_over_banner, render_info_panel_frame,
    render_status_bar, stat_line, GameResultType,
};
use crate::constants::MEMORY_COLUMNS;
use crate::games::{CardFace, MemoryGame, MemoryInput};
use crate::input::HitRegions;
use crate::playground::PlaygroundInput;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 8;
const CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;

pub fn render_memory_scene(
    frame: &mut Frame,
    area: Rect,
    game: &MemoryGame,
    regions: &mut HitRegions,
) {
    let layout = create_game_layout(frame, area, " Memory Match ", Color::LightMagenta, 12, 20);

    render_cards(frame, layout.content, game, regions);
    if game.complete {
        render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Win,
            "CLEARED",
            &format!("All pairs found in {} moves", game.moves),
            "[R] Shuffle again",
        );
    }

    let status = if game.complete {
        "Well played!"
    } else if game.is_reverting() {
        "No match"
    } else {
        "Find the pairs"
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        Color::LightMagenta,
        &[("[Arrows]", "Move"), ("[Enter]", "Flip"), ("[R]", "Restart")],
    );

    render_info_panel(frame, layout.info_panel, game, regions);
}

/// Screen rectangle of card `index` in a grid anchored at `origin`.
fn card_rect(origin: Rect, index: usize) -> Rect {
    let col = (index % MEMORY_COLUMNS) as u16;
    let row = (index / MEMORY_COLUMNS) as u16;
    Rect::new(
        origin.x + col * (CARD_WIDTH + CARD_GAP),
        origin.y + row * CARD_HEIGHT,
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

fn render_cards(frame: &mut Frame, area: Rect, game: &MemoryGame, regions: &mut HitRegions) {
    let cols = MEMORY_COLUMNS as u16;
    let grid_w = cols * CARD_WIDTH + (cols - 1) * CARD_GAP;
    let grid_h = game.rows() as u16 * CARD_HEIGHT;
    if area.width < grid_w || area.height < grid_h {
        return;
    }
    let origin = Rect::new(
        area.x + (area.width - grid_w) / 2,
        area.y + (area.height - grid_h) / 2,
        grid_w,
        grid_h,
    );

    regions.memory_cards.clear();
    for index in 0..game.cards.len() {
        let rect = card_rect(origin, index);
        let (label, color) = match game.face(index) {
            CardFace::Hidden => ("?", Color::DarkGray),
            CardFace::Revealed(symbol) => (symbol, Color::Yellow),
            CardFace::Matched(symbol) => (symbol, Color::Green),
        };
        let mut border = Style::default().fg(color);
        if index == game.cursor {
            border = border.fg(Color::White).add_modifier(Modifier::BOLD);
        }
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let card = Paragraph::new(Line::from(label))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(card, rect);
        regions.memory_cards.push(rect);
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &MemoryGame, regions: &mut HitRegions) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        stat_line("Moves", game.moves.to_string(), Color::White),
        stat_line(
            "Pairs",
            format!("{}/{}", game.matched_pairs(), game.total_pairs()),
            Color::Green,
        ),
    ];
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
            &[("Restart", PlaygroundInput::Memory(MemoryInput::Reset))],
            regions,
        );
    }
}
