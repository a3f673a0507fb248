//! Aim Trainer UI: a bordered field with a target marker to click.

use super::game_common::{
    create_game_layout, render_buttons, render_info_panel_frame, render_status_bar, stat_line,
};
use crate::games::{AimGame, AimInput, TargetPosition};
use crate::input::HitRegions;
use crate::playground::PlaygroundInput;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TARGET_MARKER: &str = "(◎)";

pub fn render_aim_scene(frame: &mut Frame, area: Rect, game: &AimGame, regions: &mut HitRegions) {
    let layout = create_game_layout(frame, area, " Aim Trainer ", Color::LightRed, 10, 24);

    let border_color = if game.running {
        Color::LightRed
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let field = block.inner(layout.content);
    frame.render_widget(block, layout.content);
    regions.aim_panel = Some(field);

    if game.running {
        regions.aim_target = render_target(frame, field, game);
    } else if field.height > 0 {
        let prompt = Paragraph::new(Line::from(Span::styled(
            "Paused - press Space to start",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(
            prompt,
            Rect {
                y: field.y + field.height / 2,
                height: 1,
                ..field
            },
        );
    }

    let (status, color) = if game.running {
        ("Click the target!", Color::LightRed)
    } else {
        ("Paused", Color::DarkGray)
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        color,
        &[("[Click]", "Shoot"), ("[Space]", game.toggle_label()), ("[R]", "Reset")],
    );

    render_info_panel(frame, layout.info_panel, game, regions);
}

/// Screen cells covered by the marker for `target` inside `field`.
fn target_rect(field: Rect, target: TargetPosition) -> Option<Rect> {
    let width = TARGET_MARKER.chars().count() as u16;
    if field.width < width || field.height < 1 {
        return None;
    }
    let row = (target.top / 100.0 * field.height as f64) as u16;
    let col = (target.left / 100.0 * field.width as f64) as u16;
    let x = (field.x + col)
        .saturating_sub(width / 2)
        .clamp(field.x, field.x + field.width - width);
    let y = (field.y + row).min(field.y + field.height - 1);
    Some(Rect::new(x, y, width, 1))
}

/// Draw the marker centred on the target's percentage position and return
/// the cells it covers.
fn render_target(frame: &mut Frame, field: Rect, game: &AimGame) -> Option<Rect> {
    let rect = target_rect(field, game.target)?;
    let marker = Paragraph::new(Line::from(Span::styled(
        TARGET_MARKER,
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(marker, rect);
    Some(rect)
}

fn accuracy(game: &AimGame) -> String {
    let total = game.hits + game.misses;
    if total == 0 {
        "-".to_string()
    } else {
        format!("{}%", game.hits * 100 / total)
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &AimGame, regions: &mut HitRegions) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        stat_line("Hits", game.hits.to_string(), Color::Green),
        stat_line("Misses", game.misses.to_string(), Color::Red),
        stat_line("Accuracy", accuracy(game), Color::White),
        Line::from(""),
        Line::from(Span::styled(
            "Hits forgive a miss.",
            Style::default().fg(Color::DarkGray),
        )),
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
            &[
                (
                    game.toggle_label(),
                    PlaygroundInput::Aim(AimInput::ToggleRunning),
                ),
                ("Reset", PlaygroundInput::Aim(AimInput::Reset)),
            ],
            regions,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let mut game = AimGame::new();
        assert_eq!(accuracy(&game), "-");
        game.hits = 3;
        game.misses = 1;
        assert_eq!(accuracy(&game), "75%");
    }

    #[test]
    fn test_every_marker_cell_hits_on_a_narrow_field() {
        use crate::input::{map_mouse, Command};
        use crate::playground::GameTab;
        use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

        let field = Rect::new(0, 0, 12, 6);
        let target = TargetPosition { top: 50.0, left: 80.0 };
        let rect = target_rect(field, target).unwrap();
        assert_eq!(rect, Rect::new(8, 3, 3, 1));

        let regions = HitRegions {
            aim_panel: Some(field),
            aim_target: Some(rect),
            ..Default::default()
        };
        for column in rect.x..rect.x + rect.width {
            let click = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row: rect.y,
                modifiers: KeyModifiers::NONE,
            };
            assert_eq!(
                map_mouse(click, GameTab::Aim, &regions),
                Some(Command::Game(PlaygroundInput::Aim(AimInput::ClickTarget)))
            );
        }
    }

    #[test]
    fn test_marker_stays_inside_field() {
        let field = Rect::new(4, 2, 10, 5);
        for target in [
            TargetPosition { top: 0.0, left: 0.0 },
            TargetPosition { top: 99.9, left: 99.9 },
        ] {
            let rect = target_rect(field, target).unwrap();
            assert!(rect.x >= field.x && rect.x + rect.width <= field.x + field.width);
            assert!(rect.y >= field.y && rect.y < field.y + field.height);
        }
        assert_eq!(target_rect(Rect::new(0, 0, 2, 5), TargetPosition::centered()), None);
    }
}
