//! Playground controller: owns every game, tracks the active tab and routes
//! ticks and input to it.

use crate::content::Content;
use crate::input::Command;
use crate::games::{
    aim, memory, quiz, reaction, snake, AimGame, AimInput, Lifecycle, MemoryGame, MemoryInput,
    QuizGame, QuizInput, ReactionGame, ReactionInput, SnakeGame, SnakeInput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameTab {
    Snake,
    Aim,
    Memory,
    Quiz,
    Reaction,
}

impl GameTab {
    /// Tab order as shown in the selector.
    pub const ALL: [GameTab; 5] = [
        GameTab::Snake,
        GameTab::Aim,
        GameTab::Memory,
        GameTab::Quiz,
        GameTab::Reaction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Aim => "Aim Trainer",
            Self::Memory => "Memory Match",
            Self::Quiz => "Profile Quiz",
            Self::Reaction => "Reaction Timer",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Snake => 0,
            Self::Aim => 1,
            Self::Memory => 2,
            Self::Quiz => 3,
            Self::Reaction => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a CLI tab name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "snake" => Some(Self::Snake),
            "aim" | "aim-trainer" => Some(Self::Aim),
            "memory" | "memory-match" => Some(Self::Memory),
            "quiz" | "profile-quiz" => Some(Self::Quiz),
            "reaction" | "reaction-timer" => Some(Self::Reaction),
            _ => None,
        }
    }
}

/// Input addressed to one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaygroundInput {
    Snake(SnakeInput),
    Aim(AimInput),
    Memory(MemoryInput),
    Quiz(QuizInput),
    Reaction(ReactionInput),
}

impl PlaygroundInput {
    /// The tab whose game this input belongs to.
    pub fn tab(&self) -> GameTab {
        match self {
            Self::Snake(_) => GameTab::Snake,
            Self::Aim(_) => GameTab::Aim,
            Self::Memory(_) => GameTab::Memory,
            Self::Quiz(_) => GameTab::Quiz,
            Self::Reaction(_) => GameTab::Reaction,
        }
    }
}

pub struct Playground<R: Rng = StdRng> {
    active: GameTab,
    snake: SnakeGame,
    aim: AimGame,
    memory: MemoryGame,
    quiz: QuizGame,
    reaction: ReactionGame,
    rng: R,
    torn_down: bool,
}

impl Playground<StdRng> {
    /// Build every game from `content`, seeding the RNG when `seed` is given.
    pub fn new(content: Content, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(content, rng)
    }
}

impl<R: Rng> Playground<R> {
    pub fn with_rng(content: Content, mut rng: R) -> Self {
        let memory = MemoryGame::new(content.memory_symbols, &mut rng);
        Self {
            active: GameTab::Snake,
            snake: SnakeGame::new(),
            aim: AimGame::new(),
            memory,
            quiz: QuizGame::new(content.quiz),
            reaction: ReactionGame::new(),
            rng,
            torn_down: false,
        }
    }

    pub fn active(&self) -> GameTab {
        self.active
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Switch tabs. The game losing focus is suspended and the one gaining
    /// focus is resumed. Selecting the active tab does nothing.
    pub fn select(&mut self, tab: GameTab) {
        if self.torn_down || tab == self.active {
            return;
        }
        self.lifecycle_mut(self.active).suspend();
        self.lifecycle_mut(tab).resume();
        log::info!("tab: {} -> {}", self.active.label(), tab.label());
        self.active = tab;
    }

    pub fn next_tab(&mut self) {
        self.select(self.active.next());
    }

    pub fn prev_tab(&mut self) {
        self.select(self.active.prev());
    }

    /// Deliver input to its game. Input for an inactive tab is dropped.
    pub fn handle_input(&mut self, input: PlaygroundInput) -> bool {
        if self.torn_down || input.tab() != self.active {
            return false;
        }
        match input {
            PlaygroundInput::Snake(i) => snake::process_input(&mut self.snake, i, &mut self.rng),
            PlaygroundInput::Aim(i) => aim::process_input(&mut self.aim, i, &mut self.rng),
            PlaygroundInput::Memory(i) => {
                memory::process_input(&mut self.memory, i, &mut self.rng)
            }
            PlaygroundInput::Quiz(i) => quiz::process_input(&mut self.quiz, i),
            PlaygroundInput::Reaction(i) => {
                reaction::process_input(&mut self.reaction, i, &mut self.rng)
            }
        }
        true
    }

    /// Advance the active game by `dt_ms`. Returns true if its state changed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        if self.torn_down || dt_ms == 0 {
            return false;
        }
        match self.active {
            GameTab::Snake => snake::tick_snake(&mut self.snake, dt_ms, &mut self.rng),
            GameTab::Aim => aim::tick_aim(&mut self.aim, dt_ms, &mut self.rng),
            GameTab::Memory => memory::tick_memory(&mut self.memory, dt_ms),
            GameTab::Quiz => quiz::tick_quiz(&mut self.quiz, dt_ms),
            GameTab::Reaction => reaction::tick_reaction(&mut self.reaction, dt_ms),
        }
    }

    /// One frame of the event loop: account for the `dt_ms` that passed while
    /// waiting for input, then apply `command`. The clock moves first so a
    /// response is timed against the moment it arrived. Returns false on quit.
    pub fn step(&mut self, dt_ms: u64, command: Option<Command>) -> bool {
        self.tick(dt_ms);
        match command {
            Some(Command::Quit) => return false,
            Some(Command::NextTab) => self.next_tab(),
            Some(Command::PrevTab) => self.prev_tab(),
            Some(Command::SelectTab(tab)) => self.select(tab),
            Some(Command::Game(input)) => {
                self.handle_input(input);
            }
            None => {}
        }
        true
    }

    /// Suspend every game. Afterwards ticks and input are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for tab in GameTab::ALL {
            self.lifecycle_mut(tab).suspend();
        }
        self.torn_down = true;
        log::info!("playground torn down");
    }

    pub fn snake(&self) -> &SnakeGame {
        &self.snake
    }

    pub fn aim(&self) -> &AimGame {
        &self.aim
    }

    pub fn memory(&self) -> &MemoryGame {
        &self.memory
    }

    pub fn quiz(&self) -> &QuizGame {
        &self.quiz
    }

    pub fn reaction(&self) -> &ReactionGame {
        &self.reaction
    }

    fn lifecycle_mut(&mut self, tab: GameTab) -> &mut dyn Lifecycle {
        match tab {
            GameTab::Snake => &mut self.snake,
            GameTab::Aim => &mut self.aim,
            GameTab::Memory => &mut self.memory,
            GameTab::Quiz => &mut self.quiz,
            GameTab::Reaction => &mut self.reaction,
        }
    }
}
