//! TUI Renderer for the interactive viewer
//!
//! Receives `TuiScreenViewModel` updates via channel and renders them with
//! Ratatui. The renderer owns UI state only (search input, scroll offset);
//! every change to the catalog view goes back to the handler as a
//! `RendererSignal`.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::{
    FilterBarView, HeaderView, ProductTableView, StatusBarView,
};

const PAGE: usize = 10;

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    /// Update screen with new ViewModel
    Update(Box<TuiScreenViewModel>),
}

/// Requests sent from renderer to handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererSignal {
    Query(String),
    NextCategory,
    PreviousCategory,
    Refresh,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
}

pub struct TuiRenderer {
    current_screen: Option<TuiScreenViewModel>,
    signal_tx: Sender<RendererSignal>,
    mode: InputMode,
    search_input: String,
    scroll: usize,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(signal_tx: Sender<RendererSignal>) -> Self {
        Self {
            current_screen: None,
            signal_tx,
            mode: InputMode::Normal,
            search_input: String::new(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Main event loop; restores the terminal on every exit path.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            while let Ok(tui_event) = rx.try_recv() {
                match tui_event {
                    TuiEvent::Update(screen) => self.apply_screen(*screen),
                }
            }

            if self.should_quit {
                let _ = self.signal_tx.send(RendererSignal::Quit);
                break;
            }
        }

        Ok(())
    }

    fn apply_screen(&mut self, screen: TuiScreenViewModel) {
        // A finished load may have reset the query or refused edits sent
        // before the loading screen arrived
        let load_finished = screen.filter_bar.editable && !self.editable();
        if self.mode == InputMode::Normal || load_finished {
            self.search_input = screen.filter_bar.query.clone();
        }
        self.current_screen = Some(screen);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn editable(&self) -> bool {
        self.current_screen
            .as_ref()
            .is_some_and(|s| s.filter_bar.editable)
    }

    fn max_scroll(&self) -> usize {
        self.current_screen
            .as_ref()
            .map(|s| s.table.body.rows().len().saturating_sub(1))
            .unwrap_or(0)
    }

    fn send(&self, signal: RendererSignal) {
        // Handler gone means we are shutting down anyway
        let _ = self.signal_tx.send(signal);
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = InputMode::Normal;
            }
            // The controller ignores edits while loading
            KeyCode::Backspace | KeyCode::Char(_) if !self.editable() => {}
            KeyCode::Backspace => {
                self.search_input.pop();
                self.scroll = 0;
                self.send(RendererSignal::Query(self.search_input.clone()));
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.scroll = 0;
                self.send(RendererSignal::Query(self.search_input.clone()));
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => {
                self.mode = InputMode::Search;
            }
            KeyCode::Tab => {
                self.scroll = 0;
                self.send(RendererSignal::NextCategory);
            }
            KeyCode::BackTab => {
                self.scroll = 0;
                self.send(RendererSignal::PreviousCategory);
            }
            KeyCode::Char('r') => {
                self.send(RendererSignal::Refresh);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                self.scroll = (self.scroll + PAGE).min(self.max_scroll());
            }
            KeyCode::Home => {
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn render(&self, f: &mut Frame) {
        let size = f.area();

        let Some(screen) = &self.current_screen else {
            use ratatui::widgets::{Block, Borders, Paragraph};

            let loading = Paragraph::new("Loading catalog...")
                .block(Block::default().title("catview").borders(Borders::ALL));
            f.render_widget(loading, size);
            return;
        };

        // [Header | Filter bar | Table | Status bar]
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(size);

        f.render_widget(HeaderView::new(&screen.header), chunks[0]);

        let filter_bar = FilterBarView::new(&screen.filter_bar);
        let filter_bar = match self.mode {
            InputMode::Search => filter_bar.editing(&self.search_input),
            InputMode::Normal => filter_bar,
        };
        f.render_widget(filter_bar, chunks[1]);

        f.render_widget(
            ProductTableView::new(&screen.table).offset(self.scroll),
            chunks[2],
        );

        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[3]);
    }
}
