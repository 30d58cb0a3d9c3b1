//! Application struct and event loop.
//!
//! Owns the terminal, state, API client, and channels. The loop is
//! single-threaded: spawned request tasks only talk back through mpsc
//! channels drained here, so all state mutation happens in one place.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::api::{AnalysisEvent, ApiClient, StartupEvent};
use crate::config::Config;
use crate::constants::*;
use crate::input::InputMode;
use crate::present;
use crate::ui::{self, AppState, View};
use crate::utils;

/// Main application struct.
///
/// Owns all runtime resources: state, API client, channels.
pub struct App {
    state: AppState,
    api: Arc<ApiClient>,

    // Channels
    startup_tx: mpsc::UnboundedSender<StartupEvent>,
    startup_rx: mpsc::UnboundedReceiver<StartupEvent>,
    analysis_tx: mpsc::UnboundedSender<AnalysisEvent>,
    analysis_rx: mpsc::UnboundedReceiver<AnalysisEvent>,
}

impl App {
    /// Create a new App: resolve the theme, build the HTTP client, and
    /// wire the channels. No network traffic happens here.
    pub fn new(config: &Config) -> Result<Self> {
        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_default();

        let api = Arc::new(ApiClient::new(
            &config.api_base_url,
            config.request_timeout_secs,
        )?);

        let state = AppState::new(theme, config.deep_scan);

        let (startup_tx, startup_rx) = mpsc::unbounded_channel::<StartupEvent>();
        let (analysis_tx, analysis_rx) = mpsc::unbounded_channel::<AnalysisEvent>();

        Ok(Self {
            state,
            api,
            startup_tx,
            startup_rx,
            analysis_tx,
            analysis_rx,
        })
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.dispatch_startup_fetches();

        // Main loop
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            self.drain_startup_events();
            self.drain_analysis_events();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            self.state.on_tick();
        }

        // Cleanup
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Startup fetches ──────────────────────────────────────────

    /// Fire the two independent mount-time fetches. They may resolve in
    /// either order or fail independently; neither blocks the input form.
    fn dispatch_startup_fetches(&self) {
        let api = self.api.clone();
        let tx = self.startup_tx.clone();
        tokio::spawn(async move {
            let status = api.fetch_status_or_default().await;
            let _ = tx.send(StartupEvent::Status(status));
        });

        let api = self.api.clone();
        let tx = self.startup_tx.clone();
        tokio::spawn(async move {
            let metrics = api.fetch_metrics().await.ok();
            let _ = tx.send(StartupEvent::Metrics(metrics));
        });
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_startup_events(&mut self) {
        while let Ok(event) = self.startup_rx.try_recv() {
            match event {
                StartupEvent::Status(status) => self.state.apply_status(status),
                StartupEvent::Metrics(metrics) => self.state.apply_metrics(metrics),
            }
        }
    }

    fn drain_analysis_events(&mut self) {
        while let Ok(event) = self.analysis_rx.try_recv() {
            match event {
                AnalysisEvent::Completed { seq, result } => {
                    self.state.commit_result(seq, *result);
                }
                AnalysisEvent::Failed { seq, message } => {
                    self.state.fail_analysis(seq, message);
                }
            }
        }
    }

    // ── Input handling ───────────────────────────────────────────

    /// Handle a key event. Returns true when the user wants to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.state.view {
            View::Input => self.handle_input_key(key),
            View::Results => self.handle_results_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.state.input.toggle_mode(),
            KeyCode::F(5) => self.submit(),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input.deep_scan = !self.state.input.deep_scan;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // The web UI's Clear button: wipe the buffer and any result.
                self.state.input.clear_active();
                self.state.reset();
            }
            KeyCode::Enter => match self.state.input.mode {
                InputMode::Text => self.state.input.insert_char('\n'),
                InputMode::File => self.submit(),
            },
            KeyCode::Backspace => self.state.input.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input.insert_char(c);
            }
            _ => {}
        }
        false
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => self.state.reset(),
            KeyCode::Char('q') => return true,
            KeyCode::Char('y') => self.copy_result(),
            KeyCode::Up => self.state.scroll_results_up(1),
            KeyCode::Down => self.state.scroll_results_down(1),
            KeyCode::PageUp => self.state.scroll_results_up(10),
            KeyCode::PageDown => self.state.scroll_results_down(10),
            _ => {}
        }
        false
    }

    // ── Analysis dispatch ────────────────────────────────────────

    /// Validate the active input and dispatch exactly one request.
    /// Validation failures never touch the network; a request already in
    /// flight makes this a no-op.
    fn submit(&mut self) {
        if self.state.loading {
            return;
        }
        match self.state.input.mode {
            InputMode::Text => self.submit_text(),
            InputMode::File => self.submit_file(),
        }
    }

    fn submit_text(&mut self) {
        if let Err(message) = self.state.input.validate_text() {
            self.state.input.validation_error = Some(message.to_string());
            return;
        }
        let Some(seq) = self.state.begin_analysis() else {
            return;
        };

        let text = self.state.input.text.trim().to_string();
        let deep_scan = self.state.input.deep_scan;
        let api = self.api.clone();
        let tx = self.analysis_tx.clone();
        tokio::spawn(async move {
            let event = match api.predict_text(&text, deep_scan).await {
                Ok(result) => AnalysisEvent::Completed {
                    seq,
                    result: Box::new(result),
                },
                Err(e) => AnalysisEvent::Failed {
                    seq,
                    message: e.user_message(),
                },
            };
            let _ = tx.send(event);
        });
    }

    fn submit_file(&mut self) {
        if let Err(message) = self.state.input.validate_file() {
            self.state.input.validation_error = Some(message.to_string());
            return;
        }

        let path = self.state.input.file_path.trim().to_string();
        let (file_name, bytes) = match read_upload(&path) {
            Ok(pair) => pair,
            Err(message) => {
                self.state.input.validation_error = Some(message);
                return;
            }
        };

        let Some(seq) = self.state.begin_analysis() else {
            return;
        };

        let api = self.api.clone();
        let tx = self.analysis_tx.clone();
        tokio::spawn(async move {
            let event = match api.predict_file(file_name, bytes).await {
                Ok(result) => AnalysisEvent::Completed {
                    seq,
                    result: Box::new(result),
                },
                Err(e) => AnalysisEvent::Failed {
                    seq,
                    message: e.user_message(),
                },
            };
            let _ = tx.send(event);
        });
    }

    /// Copy a short plain-text summary to the clipboard. Failure is
    /// silent: OSC 52 support is the terminal's business.
    fn copy_result(&mut self) {
        if let Some(ref result) = self.state.current_result {
            utils::copy_to_clipboard(&present::copy_summary(result));
            self.state.set_status_message("Summary copied to clipboard");
        }
    }
}

/// Read a file for upload, enforcing the advertised size limit before
/// the bytes ever leave the machine.
fn read_upload(path: &str) -> Result<(String, Vec<u8>), String> {
    let metadata =
        std::fs::metadata(path).map_err(|e| format!("Could not open {}: {}", path, e))?;
    if metadata.len() > MAX_FILE_BYTES {
        return Err(MSG_FILE_TOO_LARGE.to_string());
    }
    let bytes = std::fs::read(path).map_err(|e| format!("Could not read {}: {}", path, e))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.txt")
        .to_string();
    Ok((file_name, bytes))
}
