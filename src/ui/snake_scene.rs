//! Snake game UI rendering.
//!
//! Uses half-block pixel rendering. Each game cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors. Each cell is 2
//! terminal columns wide so the 12x12 board reads as a square.

use super::game_common::{
    create_game_layout, render_buttons, render_game_over_banner, render_info_panel_frame,
    render_status_bar, stat_line, GameResultType,
};
use crate::games::{SnakeGame, SnakeInput, SnakeStatus};
use crate::input::HitRegions;
use crate::playground::PlaygroundInput;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

const CELL_COLUMNS: usize = 2;

// ── Snake gradient colors ────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

pub fn render_snake_scene(
    frame: &mut Frame,
    area: Rect,
    game: &SnakeGame,
    regions: &mut HitRegions,
) {
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 10, 20);

    render_play_field(frame, layout.content, game);
    if game.status == SnakeStatus::Over {
        render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Loss,
            "GAME OVER",
            &format!("Score {}", game.score),
            "[Enter] Play again",
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, regions);
}

fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn border_line(left: char, right: char, inner_w: usize) -> Line<'static> {
    let mut s = String::with_capacity(inner_w + 2);
    s.push(left);
    s.extend(std::iter::repeat(BORDER_H).take(inner_w));
    s.push(right);
    Line::from(Span::styled(s, Style::default().fg(BORDER_COLOR)))
}

/// Render the board using half-block pixels, with the score in the top border.
fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let size = game.grid_size.max(0) as usize;
    let content_rows = size.div_ceil(2);
    let inner_w = size * CELL_COLUMNS;
    let render_w = (inner_w + 2) as u16;
    if area.height < content_rows as u16 + 2 || area.width < render_w {
        return;
    }

    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; size]; size];
    if let Some(food) = game.food {
        let (fx, fy) = (food.x as usize, food.y as usize);
        if fx < size && fy < size {
            pixels[fy][fx] = Some(FOOD_COLOR);
        }
    }
    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        let (sx, sy) = (seg.x as usize, seg.y as usize);
        if sx < size && sy < size {
            pixels[sy][sx] = Some(if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            });
        }
    }

    let x_off = area.x + (area.width - render_w) / 2;
    let y_off = area.y;

    // Top border with score
    {
        let label = "Score: ";
        let score_val = game.score.to_string();
        let score_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_len);
        let border = Style::default().fg(BORDER_COLOR);

        let spans = vec![
            Span::styled(BORDER_TL.to_string(), border),
            Span::styled(
                std::iter::repeat(BORDER_H).take(pad_before).collect::<String>(),
                border,
            ),
            Span::styled(label, border),
            Span::styled(score_val, Style::default().fg(Color::White)),
            Span::styled(
                std::iter::repeat(BORDER_H).take(pad_after).collect::<String>(),
                border,
            ),
            Span::styled(BORDER_TR.to_string(), border),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    let empty_row: Vec<Option<Color>> = vec![None; size];
    for term_row in 0..content_rows {
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        )];

        // Batch consecutive cells with the same colors into one span.
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);
            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            for _ in 0..CELL_COLUMNS {
                cur_text.push(HALF_TOP);
            }
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        let row_y = y_off + 1 + term_row as u16;
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    let bot_y = y_off + 1 + content_rows as u16;
    frame.render_widget(
        Paragraph::new(border_line(BORDER_BL, BORDER_BR, inner_w)),
        Rect::new(x_off, bot_y, render_w, 1),
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    match game.status {
        SnakeStatus::Idle => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[WASD/Arrows]", "Start"), ("[Enter]", "Play")],
        ),
        SnakeStatus::Running => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[WASD/Arrows]", "Move"), ("[Enter]", "Restart")],
        ),
        SnakeStatus::Over => render_status_bar(
            frame,
            area,
            "Crashed",
            Color::Red,
            &[("[Enter]", "Play")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SnakeGame, regions: &mut HitRegions) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        stat_line("Score", game.score.to_string(), Color::White),
        stat_line("Speed", format!("{}ms", game.tick_period_ms()), Color::White),
        stat_line(
            "Grid",
            format!("{}x{}", game.grid_size, game.grid_size),
            Color::White,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(body_color(0, 2)),
            ),
            Span::styled("Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(FOOD_COLOR)),
            Span::styled("Food", Style::default().fg(Color::DarkGray)),
        ]),
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
            &[(
                game.action_label(),
                PlaygroundInput::Snake(SnakeInput::Start),
            )],
            regions,
        );
    }
}
