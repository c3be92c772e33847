use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gridsnake::build_info;
use gridsnake::config::{self, CliAction, GameConfig, USAGE};
use gridsnake::constants::INPUT_POLL_MS;
use gridsnake::high_scores::{InMemoryStore, JsonFileStore, ScoreStore};
use gridsnake::input::map_key;
use gridsnake::logging;
use gridsnake::session::{Command, SessionController};
use gridsnake::ui::TerminalRenderer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Controller =
    SessionController<TerminalRenderer<CrosstermBackend<Stdout>>, Box<dyn ScoreStore>>;

fn main() -> io::Result<()> {
    let config = match config::from_env() {
        Ok(CliAction::Play(config)) => config,
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("gridsnake: {}", e);
            eprintln!("Run 'gridsnake --help' for usage.");
            std::process::exit(1);
        }
    };

    // Logging is best effort; the game runs without it
    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("gridsnake: logging disabled: {}", e);
    }
    tracing::info!(
        data_dir = %config.data_dir.display(),
        persist = config.persist,
        "starting {}",
        build_info::version_line()
    );

    let store = open_store(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut controller = SessionController::new(TerminalRenderer::new(terminal), store);

    let result = run(&mut controller, &config);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    controller
        .renderer_mut()
        .terminal_mut()
        .backend_mut()
        .execute(LeaveAlternateScreen)?;
    controller.renderer_mut().terminal_mut().show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting on error: {}", e);
    }
    result
}

fn open_store(config: &GameConfig) -> Box<dyn ScoreStore> {
    if config.persist {
        Box::new(JsonFileStore::in_dir(&config.data_dir))
    } else {
        Box::new(InMemoryStore::new())
    }
}

fn run(controller: &mut Controller, config: &GameConfig) -> io::Result<()> {
    controller.renderer_mut().terminal_mut().clear()?;
    match config.start_difficulty {
        Some(difficulty) => controller.start(difficulty)?,
        None => controller.render()?,
    }

    let idle_poll = Duration::from_millis(INPUT_POLL_MS);
    loop {
        let timeout = controller
            .time_until_next_tick(Instant::now())
            .map_or(idle_poll, |remaining| remaining.min(idle_poll));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = map_key(key, controller.state()) {
                        if command == Command::Quit {
                            tracing::info!("quit requested");
                            return Ok(());
                        }
                        controller.handle(command)?;
                    }
                }
                Event::Resize(_, _) => controller.render()?,
                _ => {}
            }
        }

        controller.on_timer(Instant::now())?;
    }
}
