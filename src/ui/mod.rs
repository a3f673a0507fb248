//! Terminal rendering for the playground.
//!
//! Scenes only read game state. Each draw also records where clickable
//! things ended up so mouse input can be mapped back to game inputs.

pub mod aim_scene;
pub mod game_common;
pub mod memory_scene;
pub mod quiz_scene;
pub mod reaction_scene;
pub mod snake_scene;

use crate::input::HitRegions;
use crate::playground::{GameTab, Playground};
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole playground and return the frame's hit regions.
pub fn draw_playground<R: Rng>(frame: &mut Frame, playground: &Playground<R>) -> HitRegions {
    let size = frame.size();
    let mut regions = HitRegions::default();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Active game
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_tab_bar(frame, v_chunks[0], playground.active(), &mut regions);

    let area = v_chunks[1];
    match playground.active() {
        GameTab::Snake => {
            snake_scene::render_snake_scene(frame, area, playground.snake(), &mut regions)
        }
        GameTab::Aim => aim_scene::render_aim_scene(frame, area, playground.aim(), &mut regions),
        GameTab::Memory => {
            memory_scene::render_memory_scene(frame, area, playground.memory(), &mut regions)
        }
        GameTab::Quiz => quiz_scene::render_quiz_scene(frame, area, playground.quiz(), &mut regions),
        GameTab::Reaction => {
            reaction_scene::render_reaction_scene(frame, area, playground.reaction(), &mut regions)
        }
    }

    draw_footer(frame, v_chunks[2]);
    regions
}

/// Tab labels with their widths, laid out left to right from `x`.
fn tab_rects(area: Rect) -> Vec<(GameTab, Rect)> {
    let mut x = area.x;
    let right = area.x + area.width;
    let mut rects = Vec::with_capacity(GameTab::ALL.len());
    for tab in GameTab::ALL {
        let width = tab_title(tab).chars().count() as u16;
        if x + width > right {
            break;
        }
        rects.push((tab, Rect::new(x, area.y, width, 1)));
        x += width + 1;
    }
    rects
}

fn tab_title(tab: GameTab) -> String {
    format!(" F{} {} ", tab.index() + 1, tab.label())
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, active: GameTab, regions: &mut HitRegions) {
    for (tab, rect) in tab_rects(area) {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(tab_title(tab), style))),
            rect,
        );
        regions.tabs.push((tab, rect));
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::White);
    let action = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(" [Tab/Shift-Tab]", key),
        Span::styled(" Switch game  ", action),
        Span::styled("[F1-F5]", key),
        Span::styled(" Jump  ", action),
        Span::styled("[Esc/Q]", key),
        Span::styled(" Quit", action),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_rects_do_not_overlap() {
        let rects = tab_rects(Rect::new(0, 0, 200, 1));
        assert_eq!(rects.len(), 5);
        for pair in rects.windows(2) {
            let (a, b) = (pair[0].1, pair[1].1);
            assert!(a.x + a.width < b.x);
        }
        assert_eq!(rects[0].0, GameTab::Snake);
        assert_eq!(rects[4].0, GameTab::Reaction);
    }

    #[test]
    fn test_tab_rects_clip_to_width() {
        let rects = tab_rects(Rect::new(0, 0, 20, 1));
        assert_eq!(rects.len(), 1);
    }
}
