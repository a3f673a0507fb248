//! Profile Quiz UI: the prompt, numbered options and transient feedback.

use super::game_common::{
    create_game_layout, render_buttons, render_info_panel_frame, render_status_bar, stat_line,
};
use crate::games::{QuizFeedback, QuizGame, QuizInput};
use crate::input::HitRegions;
use crate::playground::PlaygroundInput;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_quiz_scene(frame: &mut Frame, area: Rect, game: &QuizGame, regions: &mut HitRegions) {
    let layout = create_game_layout(frame, area, " Profile Quiz ", Color::LightBlue, 10, 20);
    let content = layout.content;

    let prompt = Paragraph::new(Line::from(Span::styled(
        game.prompt(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    let prompt_height = 2.min(content.height);
    frame.render_widget(
        prompt,
        Rect {
            height: prompt_height,
            ..content
        },
    );

    regions.quiz_options.clear();
    let first_option_y = content.y + prompt_height + 1;
    for (i, option) in game.options().iter().enumerate() {
        let y = first_option_y + i as u16;
        if y >= content.y + content.height {
            break;
        }
        let selected = i == game.cursor;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let rect = Rect {
            y,
            height: 1,
            ..content
        };
        let line = Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(option.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        regions.quiz_options.push(rect);
    }

    let feedback_y = first_option_y + game.options().len() as u16 + 1;
    if let Some(feedback) = game.feedback {
        if feedback_y < content.y + content.height {
            frame.render_widget(
                Paragraph::new(feedback_line(feedback)),
                Rect {
                    y: feedback_y,
                    height: 1,
                    ..content
                },
            );
        }
    }

    render_status_bar(
        frame,
        layout.status_bar,
        "Pick an answer",
        Color::LightBlue,
        &[("[1-4]", "Answer"), ("[Up/Down+Enter]", "Select"), ("[R]", "Restart")],
    );

    render_info_panel(frame, layout.info_panel, game, regions);
}

fn feedback_line(feedback: QuizFeedback) -> Line<'static> {
    let color = if feedback.is_positive() {
        Color::Green
    } else {
        Color::Red
    };
    Line::from(Span::styled(
        feedback.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &QuizGame, regions: &mut HitRegions) {
    let inner = render_info_panel_frame(frame, area);

    let question = if game.total() == 0 {
        "-".to_string()
    } else {
        format!("{}/{}", game.index + 1, game.total())
    };
    let lines = vec![
        stat_line("Question", question, Color::White),
        stat_line(
            "Score",
            format!("{}/{}", game.score, game.total()),
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
            &[("Restart", PlaygroundInput::Quiz(QuizInput::Reset))],
            regions,
        );
    }
}
