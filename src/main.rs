mod ui;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_skies::audio::{SoundCue, TerminalAudio};
use flappy_skies::build_info;
use flappy_skies::core::constants::{
    INPUT_POLL_MS, MAX_FRAME_CATCHUP_MS, PHYSICS_DT, PHYSICS_TICK_MS,
};
use flappy_skies::game::{GameMenuAction, GameSession};
use flappy_skies::input::{is_flap_click, is_press};
use flappy_skies::menu::{MainMenu, MenuAction, Panel};
use flappy_skies::progress::{PrefsStore, ProgressState};
use flappy_skies::scene::{LoadPoll, SceneId, SceneLoader};
use flappy_skies::ui_effects::UiEffects;
use flappy_skies::utils::{init_logging, log_path, prefs_path};
use rand::rngs::ThreadRng;
use ratatui::layout::Rect;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use ui::game_scene::{death_menu_button_at, render_game, GAME_MENU_LABELS};
use ui::loading_scene::render_loading;
use ui::menu_scene::{menu_button_at, render_menu};

/// Which scene is active. Progress has exactly one owner: the menu or the
/// loader while outside a round, the session during one.
enum Screen {
    Menu {
        menu: MainMenu,
        progress: ProgressState,
    },
    Loading {
        loader: SceneLoader,
        progress: ProgressState,
    },
    Game {
        session: Box<GameSession>,
        focus: usize,
    },
}

impl Screen {
    fn menu(progress: ProgressState) -> Self {
        Screen::Menu {
            menu: MainMenu::new(&progress),
            progress,
        }
    }

    fn loading(target: SceneId, progress: ProgressState) -> Self {
        Screen::Loading {
            loader: SceneLoader::new(target),
            progress,
        }
    }

    fn progress(&self) -> &ProgressState {
        match self {
            Screen::Menu { progress, .. } | Screen::Loading { progress, .. } => progress,
            Screen::Game { session, .. } => session.progress(),
        }
    }

    fn into_progress(self) -> ProgressState {
        match self {
            Screen::Menu { progress, .. } | Screen::Loading { progress, .. } => progress,
            Screen::Game { session, .. } => session.into_progress(),
        }
    }

    /// Feed the wall-clock time since the previous draw to the visible FPS readout.
    fn record_frame(&mut self, dt: f64) {
        match self {
            Screen::Menu { menu, .. } => menu.record_frame(dt),
            Screen::Game { session, .. } => session.record_frame(dt),
            Screen::Loading { .. } => {}
        }
    }
}

struct App {
    store: PrefsStore,
    fx: UiEffects,
    audio: TerminalAudio<Stdout>,
    rng: ThreadRng,
    flap_pending: bool,
    quit: bool,
}

impl App {
    fn save(&mut self, progress: &ProgressState) {
        progress.save(&mut self.store);
        if let Err(e) = self.store.save() {
            log::error!("Failed to save progress: {}", e);
        }
    }

    /// Final save on exit, reached whether or not the loop ended cleanly.
    fn shutdown(&mut self, screen: Screen) {
        let progress = screen.into_progress();
        self.save(&progress);
        log::info!("Exiting with {} coins, high score {}", progress.coins, progress.high_score);
    }

    fn handle_event(&mut self, screen: Screen, event: Event, area: Rect) -> Screen {
        if let Event::Key(key) = &event {
            if is_press(key)
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.quit = true;
                return screen;
            }
        }
        if let Event::Resize(width, height) = event {
            self.fx.set_screen_size(width, height);
            return screen;
        }

        match screen {
            Screen::Menu { mut menu, mut progress } => {
                match event {
                    Event::Key(key) if is_press(&key) => {
                        if key.code == KeyCode::Enter && !menu.is_capturing_key() {
                            return self.menu_activate(menu, progress);
                        }
                        self.menu_key(&mut menu, &mut progress, key);
                    }
                    Event::Mouse(mouse) => {
                        if self.menu_mouse(&mut menu, &progress, mouse, area) {
                            return self.menu_activate(menu, progress);
                        }
                    }
                    _ => {}
                }
                Screen::Menu { menu, progress }
            }
            loading @ Screen::Loading { .. } => loading,
            Screen::Game { session, mut focus } => {
                match event {
                    Event::Key(key) if is_press(&key) => {
                        if session.is_menu_visible() {
                            match key.code {
                                KeyCode::Up => {
                                    focus = (focus + GAME_MENU_LABELS.len() - 1) % GAME_MENU_LABELS.len()
                                }
                                KeyCode::Down => focus = (focus + 1) % GAME_MENU_LABELS.len(),
                                KeyCode::Enter => return self.game_menu(session, focus),
                                _ => {}
                            }
                        } else if session.progress().options.flap_key.matches(key.code) {
                            self.flap_pending = true;
                        }
                    }
                    Event::Mouse(mouse) if session.is_menu_visible() => {
                        if let Some(index) = death_menu_button_at(area, mouse.column, mouse.row) {
                            focus = index;
                            if is_flap_click(&mouse) {
                                return self.game_menu(session, focus);
                            }
                        }
                    }
                    Event::Mouse(mouse) if is_flap_click(&mouse) => self.flap_pending = true,
                    _ => {}
                }
                Screen::Game { session, focus }
            }
        }
    }

    fn menu_key(&mut self, menu: &mut MainMenu, progress: &mut ProgressState, key: KeyEvent) {
        if menu.is_capturing_key() {
            if menu.capture_key(key.code, progress) && !menu.is_capturing_key() {
                self.save(progress);
            }
            return;
        }
        match key.code {
            KeyCode::Up => menu.move_focus(-1, progress, &mut self.fx),
            KeyCode::Down | KeyCode::Tab => menu.move_focus(1, progress, &mut self.fx),
            KeyCode::Esc if menu.panel() != Panel::Main => {
                menu.menu_selection(5, progress, &mut self.fx);
            }
            #[cfg(debug_assertions)]
            KeyCode::F(9) => {
                menu.grant_debug_coins(progress);
                self.save(progress);
            }
            _ => {}
        }
    }

    /// Returns true when a button was clicked.
    fn menu_mouse(
        &mut self,
        menu: &mut MainMenu,
        progress: &ProgressState,
        mouse: MouseEvent,
        area: Rect,
    ) -> bool {
        if menu.is_capturing_key() {
            return false;
        }
        self.fx.set_pointer(mouse.column, mouse.row);
        let count = menu.buttons(progress).len();
        let hovered = menu_button_at(area, count, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                menu.hover(hovered, progress, &mut self.fx);
                false
            }
            _ if is_flap_click(&mouse) => {
                menu.hover(hovered, progress, &mut self.fx);
                hovered.is_some()
            }
            _ => false,
        }
    }

    fn menu_activate(&mut self, mut menu: MainMenu, mut progress: ProgressState) -> Screen {
        let action = menu.activate_focused(&mut progress, &mut self.fx);
        self.save(&progress);
        match action {
            MenuAction::Play => {
                log::info!("Starting round");
                Screen::loading(SceneId::Game, progress)
            }
            MenuAction::Quit => {
                self.quit = true;
                Screen::Menu { menu, progress }
            }
            MenuAction::None => Screen::Menu { menu, progress },
        }
    }

    fn game_menu(&mut self, mut session: Box<GameSession>, focus: usize) -> Screen {
        match session.menu_selection(focus) {
            GameMenuAction::LoadMainMenu => {
                let volume = session.progress().options.volume;
                self.play(session.cues.drain(), volume);
                let progress = session.into_progress();
                self.save(&progress);
                Screen::loading(SceneId::Menu, progress)
            }
            GameMenuAction::Quit => {
                self.quit = true;
                Screen::Game { session, focus }
            }
            GameMenuAction::Respawned | GameMenuAction::Ignored => Screen::Game { session, focus: 0 },
        }
    }

    /// Advance the active scene by one fixed step.
    fn step(&mut self, screen: Screen) -> Screen {
        match screen {
            menu @ Screen::Menu { .. } => menu,
            Screen::Loading { mut loader, progress } => match loader.poll(PHYSICS_DT) {
                LoadPoll::Ready => match loader.target() {
                    SceneId::Game => Screen::Game {
                        session: Box::new(GameSession::new(progress)),
                        focus: 0,
                    },
                    SceneId::Menu => Screen::menu(progress),
                },
                LoadPoll::Loading(_) | LoadPoll::Holding => Screen::Loading { loader, progress },
            },
            Screen::Game { mut session, focus } => {
                let flap = std::mem::take(&mut self.flap_pending);
                session.tick(PHYSICS_DT, flap, &mut self.rng);
                if session.take_save_request() {
                    self.save(session.progress());
                }
                Screen::Game { session, focus }
            }
        }
    }

    fn play(&mut self, cues: Vec<SoundCue>, volume: f32) {
        if cues.is_empty() {
            return;
        }
        self.audio.set_volume(volume);
        if let Err(e) = self.audio.play(&cues) {
            log::warn!("Audio output failed: {}", e);
        }
    }

    fn play_cues(&mut self, screen: &mut Screen) {
        let volume = screen.progress().options.volume;
        let mut cues = self.fx.cues.drain();
        match screen {
            Screen::Menu { menu, .. } => cues.extend(menu.cues.drain()),
            Screen::Game { session, .. } => cues.extend(session.cues.drain()),
            Screen::Loading { .. } => {}
        }
        self.play(cues, volume);
    }
}

fn draw(frame: &mut Frame, screen: &Screen, fx: &UiEffects) {
    let area = frame.size();
    match screen {
        Screen::Menu { menu, progress } => render_menu(frame, area, menu, progress, fx),
        Screen::Loading { loader, .. } => render_loading(frame, area, loader),
        Screen::Game { session, focus } => render_game(frame, area, session, *focus),
    }
}

fn next_terminal_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Draw, read input and step the active scene until quit. The screen is
/// handed back next to the loop result so its progress can still be saved.
fn run<B, E>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut screen: Screen,
    mut next_event: E,
) -> (Screen, io::Result<()>)
where
    B: Backend,
    E: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let tick = Duration::from_millis(PHYSICS_TICK_MS);
    let max_catchup = Duration::from_millis(MAX_FRAME_CATCHUP_MS);
    let mut accumulator = Duration::ZERO;
    let mut last_frame = Instant::now();
    let mut last_draw = Instant::now();

    let result = 'frame: loop {
        if let Err(e) = terminal.draw(|frame| draw(frame, &screen, &app.fx)) {
            break Err(e);
        }
        let drawn = Instant::now();
        screen.record_frame((drawn - last_draw).as_secs_f64());
        last_draw = drawn;
        let area = match terminal.size() {
            Ok(area) => area,
            Err(e) => break Err(e),
        };

        let mut timeout = Duration::from_millis(INPUT_POLL_MS);
        while !app.quit {
            match next_event(timeout) {
                Ok(Some(event)) => screen = app.handle_event(screen, event, area),
                Ok(None) => break,
                Err(e) => break 'frame Err(e),
            }
            timeout = Duration::ZERO;
        }
        if app.quit {
            break Ok(());
        }

        let now = Instant::now();
        accumulator += (now - last_frame).min(max_catchup);
        last_frame = now;
        while accumulator >= tick {
            accumulator -= tick;
            screen = app.step(screen);
        }

        app.play_cues(&mut screen);
    };
    (screen, result)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut reset_progress = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy Skies - Terminal Arcade Flyer\n");
                println!("Usage: flappy-skies [command]\n");
                println!("Commands:");
                println!("  --reset-progress  Delete all saved coins, unlocks and options");
                println!("  --version         Show version information");
                println!("  --help            Show this help message");
                std::process::exit(0);
            }
            "--reset-progress" => reset_progress = true,
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'flappy-skies --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let log_file = log_path()?;
    if let Err(e) = init_logging(&log_file) {
        eprintln!("Logging disabled: {}", e);
    }
    log::info!("{} starting", build_info::version_line());

    let mut store = PrefsStore::open(prefs_path()?);
    if reset_progress {
        ProgressState::wipe(&mut store);
        store.save()?;
        println!("Progress reset.");
        std::process::exit(0);
    }
    let progress = ProgressState::load(&store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    let mut app = App {
        store,
        fx: UiEffects::new(size.width, size.height),
        audio: TerminalAudio::new(io::stdout(), progress.options.volume),
        rng: rand::thread_rng(),
        flap_pending: false,
        quit: false,
    };
    let (screen, result) = run(
        &mut terminal,
        &mut app,
        Screen::menu(progress),
        next_terminal_event,
    );
    app.shutdown(screen);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result
}
