//! Terminal input mapping.
//!
//! Turns crossterm key and mouse events into playground commands. Key
//! handling is a priority chain: global keys first, then the active game's
//! bindings. Mouse clicks are resolved against the hit regions recorded by the
//! last draw.

use crate::games::{AimInput, MemoryInput, QuizInput, ReactionInput, SnakeInput};
use crate::playground::{GameTab, PlaygroundInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    NextTab,
    PrevTab,
    SelectTab(GameTab),
    Game(PlaygroundInput),
}

/// Clickable screen areas from the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub tabs: Vec<(GameTab, Rect)>,
    /// Buttons drawn by the active scene.
    pub buttons: Vec<(Rect, PlaygroundInput)>,
    pub aim_panel: Option<Rect>,
    /// Cells covered by the drawn target marker, while the trainer runs.
    pub aim_target: Option<Rect>,
    /// Card rectangles, indexed like the deck.
    pub memory_cards: Vec<Rect>,
    /// Option rectangles for the current question.
    pub quiz_options: Vec<Rect>,
    pub reaction_panel: Option<Rect>,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Map a key press to a command. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent, active: GameTab) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let global = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Tab => Some(Command::NextTab),
        KeyCode::BackTab => Some(Command::PrevTab),
        KeyCode::F(n) => (n as usize)
            .checked_sub(1)
            .and_then(GameTab::from_index)
            .map(Command::SelectTab),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    let input = match active {
        GameTab::Snake => snake_key(key.code).map(PlaygroundInput::Snake),
        GameTab::Aim => aim_key(key.code).map(PlaygroundInput::Aim),
        GameTab::Memory => memory_key(key.code).map(PlaygroundInput::Memory),
        GameTab::Quiz => quiz_key(key.code).map(PlaygroundInput::Quiz),
        GameTab::Reaction => reaction_key(key.code).map(PlaygroundInput::Reaction),
    };
    input.map(Command::Game)
}

fn snake_key(code: KeyCode) -> Option<SnakeInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(SnakeInput::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(SnakeInput::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(SnakeInput::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(SnakeInput::Right),
        KeyCode::Enter => Some(SnakeInput::Start),
        _ => None,
    }
}

fn aim_key(code: KeyCode) -> Option<AimInput> {
    match code {
        KeyCode::Char(' ') => Some(AimInput::ToggleRunning),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AimInput::Reset),
        _ => None,
    }
}

fn memory_key(code: KeyCode) -> Option<MemoryInput> {
    match code {
        KeyCode::Up => Some(MemoryInput::Up),
        KeyCode::Down => Some(MemoryInput::Down),
        KeyCode::Left => Some(MemoryInput::Left),
        KeyCode::Right => Some(MemoryInput::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MemoryInput::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MemoryInput::Reset),
        _ => None,
    }
}

fn quiz_key(code: KeyCode) -> Option<QuizInput> {
    match code {
        KeyCode::Char(c @ '1'..='4') => Some(QuizInput::Answer(c as usize - '1' as usize)),
        KeyCode::Up => Some(QuizInput::Up),
        KeyCode::Down => Some(QuizInput::Down),
        KeyCode::Enter => Some(QuizInput::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(QuizInput::Reset),
        _ => None,
    }
}

fn reaction_key(code: KeyCode) -> Option<ReactionInput> {
    match code {
        KeyCode::Enter => Some(ReactionInput::Start),
        KeyCode::Char(' ') => Some(ReactionInput::Respond),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ReactionInput::Reset),
        _ => None,
    }
}

/// Map a left-button press to a command using the last frame's hit regions.
pub fn map_mouse(mouse: MouseEvent, active: GameTab, regions: &HitRegions) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (col, row) = (mouse.column, mouse.row);

    if let Some((tab, _)) = regions.tabs.iter().find(|(_, r)| contains(*r, col, row)) {
        return Some(Command::SelectTab(*tab));
    }
    if let Some((_, input)) = regions.buttons.iter().find(|(r, _)| contains(*r, col, row)) {
        return Some(Command::Game(*input));
    }

    let input = match active {
        GameTab::Snake => None,
        GameTab::Aim => {
            if regions.aim_target.is_some_and(|r| contains(r, col, row)) {
                Some(PlaygroundInput::Aim(AimInput::ClickTarget))
            } else {
                regions
                    .aim_panel
                    .filter(|panel| contains(*panel, col, row))
                    .map(|panel| {
                        let (top, left) = panel_percent(panel, col, row);
                        PlaygroundInput::Aim(AimInput::ClickAt { top, left })
                    })
            }
        }
        GameTab::Memory => regions
            .memory_cards
            .iter()
            .position(|r| contains(*r, col, row))
            .map(|i| PlaygroundInput::Memory(MemoryInput::Flip(i))),
        GameTab::Quiz => regions
            .quiz_options
            .iter()
            .position(|r| contains(*r, col, row))
            .map(|i| PlaygroundInput::Quiz(QuizInput::Answer(i))),
        GameTab::Reaction => regions
            .reaction_panel
            .filter(|panel| contains(*panel, col, row))
            .map(|_| PlaygroundInput::Reaction(ReactionInput::Respond)),
    };
    input.map(Command::Game)
}

/// Position of a terminal cell's centre within `panel`, in percent (top, left).
pub fn panel_percent(panel: Rect, column: u16, row: u16) -> (f64, f64) {
    let height = panel.height.max(1) as f64;
    let width = panel.width.max(1) as f64;
    let top = (row.saturating_sub(panel.y) as f64 + 0.5) * 100.0 / height;
    let left = (column.saturating_sub(panel.x) as f64 + 0.5) * 100.0 / width;
    (top, left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_global_keys() {
        for tab in GameTab::ALL {
            assert_eq!(map_key(press(KeyCode::Esc), tab), Some(Command::Quit));
            assert_eq!(map_key(press(KeyCode::Char('q')), tab), Some(Command::Quit));
            assert_eq!(map_key(press(KeyCode::Tab), tab), Some(Command::NextTab));
            assert_eq!(map_key(press(KeyCode::BackTab), tab), Some(Command::PrevTab));
        }
        assert_eq!(
            map_key(press(KeyCode::F(4)), GameTab::Snake),
            Some(Command::SelectTab(GameTab::Quiz))
        );
        assert_eq!(map_key(press(KeyCode::F(6)), GameTab::Snake), None);
        assert_eq!(map_key(press(KeyCode::F(0)), GameTab::Snake), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, GameTab::Snake), None);
    }

    #[test]
    fn test_snake_keys_case_insensitive() {
        let up = Some(Command::Game(PlaygroundInput::Snake(SnakeInput::Up)));
        assert_eq!(map_key(press(KeyCode::Char('w')), GameTab::Snake), up);
        assert_eq!(map_key(press(KeyCode::Char('W')), GameTab::Snake), up);
        assert_eq!(map_key(press(KeyCode::Up), GameTab::Snake), up);
        assert_eq!(
            map_key(press(KeyCode::Char('A')), GameTab::Snake),
            Some(Command::Game(PlaygroundInput::Snake(SnakeInput::Left)))
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), GameTab::Snake),
            Some(Command::Game(PlaygroundInput::Snake(SnakeInput::Start)))
        );
    }

    #[test]
    fn test_bindings_follow_active_tab() {
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), GameTab::Aim),
            Some(Command::Game(PlaygroundInput::Aim(AimInput::ToggleRunning)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), GameTab::Reaction),
            Some(Command::Game(PlaygroundInput::Reaction(ReactionInput::Respond)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), GameTab::Memory),
            Some(Command::Game(PlaygroundInput::Memory(MemoryInput::Select)))
        );
        assert_eq!(map_key(press(KeyCode::Char(' ')), GameTab::Snake), None);
    }

    #[test]
    fn test_quiz_number_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char('1')), GameTab::Quiz),
            Some(Command::Game(PlaygroundInput::Quiz(QuizInput::Answer(0))))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('4')), GameTab::Quiz),
            Some(Command::Game(PlaygroundInput::Quiz(QuizInput::Answer(3))))
        );
        assert_eq!(map_key(press(KeyCode::Char('5')), GameTab::Quiz), None);
    }

    #[test]
    fn test_click_on_tab() {
        let regions = HitRegions {
            tabs: vec![
                (GameTab::Snake, Rect::new(0, 0, 8, 1)),
                (GameTab::Aim, Rect::new(8, 0, 14, 1)),
            ],
            ..Default::default()
        };
        assert_eq!(
            map_mouse(click(10, 0), GameTab::Snake, &regions),
            Some(Command::SelectTab(GameTab::Aim))
        );
        assert_eq!(map_mouse(click(30, 0), GameTab::Snake, &regions), None);
    }

    #[test]
    fn test_click_in_aim_panel_reports_percent() {
        let regions = HitRegions {
            aim_panel: Some(Rect::new(10, 5, 50, 20)),
            ..Default::default()
        };
        let cmd = map_mouse(click(10, 5), GameTab::Aim, &regions);
        assert_eq!(
            cmd,
            Some(Command::Game(PlaygroundInput::Aim(AimInput::ClickAt {
                top: 2.5,
                left: 1.0,
            })))
        );
        assert_eq!(map_mouse(click(9, 5), GameTab::Aim, &regions), None);
    }

    #[test]
    fn test_click_on_drawn_marker_is_a_target_hit() {
        let regions = HitRegions {
            aim_panel: Some(Rect::new(10, 5, 20, 10)),
            aim_target: Some(Rect::new(17, 9, 3, 1)),
            ..Default::default()
        };
        for col in 17..20 {
            assert_eq!(
                map_mouse(click(col, 9), GameTab::Aim, &regions),
                Some(Command::Game(PlaygroundInput::Aim(AimInput::ClickTarget)))
            );
        }
        assert!(matches!(
            map_mouse(click(25, 12), GameTab::Aim, &regions),
            Some(Command::Game(PlaygroundInput::Aim(AimInput::ClickAt { .. })))
        ));
    }

    #[test]
    fn test_click_memory_card_and_quiz_option() {
        let regions = HitRegions {
            memory_cards: vec![Rect::new(0, 2, 6, 3), Rect::new(6, 2, 6, 3)],
            quiz_options: vec![Rect::new(0, 4, 20, 1), Rect::new(0, 5, 20, 1)],
            ..Default::default()
        };
        assert_eq!(
            map_mouse(click(7, 3), GameTab::Memory, &regions),
            Some(Command::Game(PlaygroundInput::Memory(MemoryInput::Flip(1))))
        );
        assert_eq!(
            map_mouse(click(3, 5), GameTab::Quiz, &regions),
            Some(Command::Game(PlaygroundInput::Quiz(QuizInput::Answer(1))))
        );
    }

    #[test]
    fn test_click_button() {
        let reset = PlaygroundInput::Aim(AimInput::Reset);
        let regions = HitRegions {
            buttons: vec![(Rect::new(2, 20, 9, 1), reset)],
            ..Default::default()
        };
        assert_eq!(
            map_mouse(click(5, 20), GameTab::Aim, &regions),
            Some(Command::Game(reset))
        );
    }

    #[test]
    fn test_non_left_press_ignored() {
        let regions = HitRegions {
            reaction_panel: Some(Rect::new(0, 0, 40, 10)),
            ..Default::default()
        };
        let mut event = click(1, 1);
        event.kind = MouseEventKind::Moved;
        assert_eq!(map_mouse(event, GameTab::Reaction, &regions), None);
        assert_eq!(
            map_mouse(click(1, 1), GameTab::Reaction, &regions),
            Some(Command::Game(PlaygroundInput::Reaction(ReactionInput::Respond)))
        );
    }
}
