use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use playground::build_info;
use playground::config::{self, CliCommand, Config, USAGE};
use playground::constants::REALTIME_FRAME_MS;
use playground::content::load_content;
use playground::games::MillisClock;
use playground::input::{map_key, map_mouse, HitRegions};
use playground::playground::Playground;
use playground::ui::draw_playground;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_string());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'playground --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging();
    log::info!("{}", build_info::version_string());

    let content = load_content();
    let mut playground = Playground::new(content, config.seed);
    playground.select(config.start_tab);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut playground, &config);
    playground.teardown();

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("playground exited with error: {}", e);
    }
    result
}

/// Send log output to ~/.playground/playground.log; the terminal belongs to the UI.
fn init_logging() {
    let file = match config::log_path().and_then(File::create) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            return;
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    playground: &mut Playground,
    config: &Config,
) -> io::Result<()> {
    log::debug!("starting on {:?} (seed {:?})", config.start_tab, config.seed);

    let mut regions = HitRegions::default();
    let mut clock = MillisClock::new();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            regions = draw_playground(frame, playground);
        })?;

        let command = if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            match event::read()? {
                Event::Key(key) => map_key(key, playground.active()),
                Event::Mouse(mouse) => map_mouse(mouse, playground.active(), &regions),
                _ => None,
            }
        } else {
            None
        };

        let now = Instant::now();
        let dt_ms = clock.take(now.duration_since(last_frame));
        last_frame = now;
        if !playground.step(dt_ms, command) {
            return Ok(());
        }
    }
}
