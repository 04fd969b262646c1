//! Application state and main event loop.

use crate::config::ProjectConfig;
use crate::domain::{CommandRun, ComponentName, PackageCommand, Project};
use crate::error::{AppError, Result};
use crate::services::{CommandHandle, CommandRunner, ScaffoldService};
use crate::ui::input::{Action, InputHandler, InputMode};
use crate::ui::widgets::help::HelpViewState;
use crate::ui::widgets::output_panel::OutputBuffer;
use crate::ui::widgets::text_input::{TextInputAction, TextInputState};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Application view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Main action menu
    #[default]
    Menu,
    /// Creating a new component
    NewComponent,
    /// Package manager command output
    CommandOutput,
    /// Help view showing keybindings
    Help,
}

/// Entries in the main action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    InstallDependencies,
    NewComponent,
    DevServer,
    EnsureLayout,
    Quit,
}

impl MenuItem {
    /// All menu entries in display order
    pub const ALL: [MenuItem; 5] = [
        MenuItem::InstallDependencies,
        MenuItem::NewComponent,
        MenuItem::DevServer,
        MenuItem::EnsureLayout,
        MenuItem::Quit,
    ];

    /// Get the display label for this entry
    pub fn label(&self) -> &'static str {
        match self {
            Self::InstallDependencies => "Install dependencies",
            Self::NewComponent => "Create new component",
            Self::DevServer => "Start dev server",
            Self::EnsureLayout => "Ensure project layout",
            Self::Quit => "Quit",
        }
    }

    /// Get the keyboard shortcut hint
    pub fn shortcut_hint(&self) -> &'static str {
        match self {
            Self::InstallDependencies => "i",
            Self::NewComponent => "n",
            Self::DevServer => "d",
            Self::EnsureLayout => "s",
            Self::Quit => "q",
        }
    }

    /// Short description shown next to the label
    pub fn description(&self) -> &'static str {
        match self {
            Self::InstallDependencies => "npm install",
            Self::NewComponent => "component, barrel and CSS module files",
            Self::DevServer => "npm run dev",
            Self::EnsureLayout => "src/components, src/lib, src/hooks",
            Self::Quit => "exit scaffold-tui",
        }
    }
}

/// Main application state
pub struct App {
    /// Project context
    pub project: Project,
    /// Currently running or last finished command
    pub active_run: Option<CommandRun>,

    // UI State
    /// Current view
    pub view: AppView,
    /// Selected menu index
    pub selected_menu_index: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Error message to display
    pub error_message: Option<String>,
    /// Transient status message (non-blocking)
    pub status_message: Option<String>,
    /// Project carries no package.json marker (soft-fallback root)
    pub manifest_missing: bool,
    /// Output buffer for command output
    pub output_buffer: OutputBuffer,

    // New component dialog state
    /// Text input state for the component name
    pub new_component_input: TextInputState,
    /// Error message for component creation
    pub new_component_error: Option<String>,

    // Help view state
    /// State for help view (scroll position)
    pub help_view_state: HelpViewState,

    // Services
    scaffold_service: ScaffoldService,
    command_runner: CommandRunner,

    // Input handler
    input_handler: InputHandler,

    // Command execution state
    /// Handle for the command running on its worker thread
    command_handle: Option<CommandHandle>,
}

impl App {
    /// Create a new application instance
    pub fn new(project_root: PathBuf, config: ProjectConfig) -> Result<Self> {
        let project = Project::new(project_root, config);

        let scaffold_service = ScaffoldService::new(
            project.root_path.clone(),
            project.config.scaffold.clone(),
        );
        let command_runner = CommandRunner::new(project.config.package_manager.program.clone());
        let input_handler = InputHandler::new(project.config.ui.vim_navigation);

        Ok(Self {
            project,
            active_run: None,
            view: AppView::Menu,
            selected_menu_index: 0,
            input_mode: InputMode::Normal,
            error_message: None,
            status_message: None,
            manifest_missing: false,
            output_buffer: OutputBuffer::new(),
            new_component_input: TextInputState::new(),
            new_component_error: None,
            help_view_state: HelpViewState::new(),
            scaffold_service,
            command_runner,
            input_handler,
            command_handle: None,
        })
    }

    /// Initialize the application (inspect the project root)
    pub fn init(&mut self) {
        self.manifest_missing = !self.project.has_manifest();
        if self.manifest_missing {
            tracing::warn!(
                "No {} found at {}; some operations may not work",
                crate::domain::PROJECT_MANIFEST,
                self.project.root_path.display()
            );
        }
    }

    /// Get the currently selected menu entry
    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected_menu_index.min(MenuItem::ALL.len() - 1)]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_menu_index > 0 {
            self.selected_menu_index -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_menu_index < MenuItem::ALL.len() - 1 {
            self.selected_menu_index += 1;
        }
    }

    /// Check if a command is currently running
    pub fn is_command_running(&self) -> bool {
        self.command_handle.is_some()
    }

    /// Start a package manager command on its worker thread
    pub fn run_package_command(
        &mut self,
        command: PackageCommand,
    ) -> std::result::Result<(), String> {
        if self.is_command_running() {
            return Err("A command is already running".to_string());
        }

        let mut run = CommandRun::new(command);
        run.start();

        let handle = self
            .command_runner
            .spawn(&self.project.root_path, command);

        self.active_run = Some(run);
        self.command_handle = Some(handle);
        self.output_buffer.start();
        self.view = AppView::CommandOutput;

        Ok(())
    }

    /// Poll for a finished command result (call this in the event loop)
    pub fn poll_command_result(&mut self) {
        if let Some(handle) = self.command_handle.as_mut() {
            if let Some(result) = handle.try_finish() {
                if let Some(run) = self.active_run.as_mut() {
                    run.complete(result.success);
                }
                self.output_buffer.set_result(&result);
                self.command_handle = None;
            }
        }
    }

    /// Ensure the expected project layout exists and report what was created
    pub fn ensure_layout(&mut self) {
        match self.scaffold_service.ensure_layout() {
            Ok(created) if created.is_empty() => {
                self.status_message = Some("Project layout already in place".to_string());
            }
            Ok(created) => {
                let names: Vec<String> =
                    created.iter().map(|p| p.display().to_string()).collect();
                self.status_message = Some(format!("Created directories: {}", names.join(", ")));
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to ensure layout: {}", e));
            }
        }
    }

    /// Open the new component dialog
    pub fn open_new_component_dialog(&mut self) {
        self.new_component_input = TextInputState::new();
        self.new_component_error = None;
        self.input_mode = InputMode::Insert;
        self.view = AppView::NewComponent;
    }

    /// Cancel component creation
    pub fn cancel_new_component(&mut self) {
        self.new_component_input.clear();
        self.new_component_error = None;
        self.input_mode = InputMode::Normal;
        self.view = AppView::Menu;
    }

    /// Scaffold the component named in the dialog
    pub fn create_new_component(&mut self) -> std::result::Result<(), String> {
        let name = match ComponentName::new(self.new_component_input.value()) {
            Ok(name) => name,
            Err(e) => {
                let msg = e.to_string();
                self.new_component_error = Some(msg.clone());
                return Err(msg);
            }
        };

        match self.scaffold_service.create_component(&name) {
            Ok(relative) => {
                self.status_message =
                    Some(format!("Created component {} in {}", name, relative.display()));

                // Close the dialog
                self.new_component_input.clear();
                self.new_component_error = None;
                self.input_mode = InputMode::Normal;
                self.view = AppView::Menu;
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to create component: {}", e);
                self.new_component_error = Some(msg.clone());
                Err(msg)
            }
        }
    }

    /// Open the help view
    pub fn open_help(&mut self) {
        self.help_view_state = HelpViewState::new();
        self.view = AppView::Help;
    }

    /// Close the help view
    pub fn close_help(&mut self) {
        self.view = AppView::Menu;
    }

    /// Activate the selected menu entry, returns true if should quit
    fn activate_selected(&mut self) -> bool {
        match self.selected_menu_item() {
            MenuItem::InstallDependencies => {
                if let Err(e) = self.run_package_command(PackageCommand::Install) {
                    self.error_message = Some(e);
                }
                false
            }
            MenuItem::NewComponent => {
                self.open_new_component_dialog();
                false
            }
            MenuItem::DevServer => {
                if let Err(e) = self.run_package_command(PackageCommand::Dev) {
                    self.error_message = Some(e);
                }
                false
            }
            MenuItem::EnsureLayout => {
                self.ensure_layout();
                false
            }
            MenuItem::Quit => true,
        }
    }

    /// Handle keyboard input and return true if should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear transient messages on any key press
        self.error_message = None;
        self.status_message = None;

        // Handle view-specific keys first
        match self.view {
            AppView::Menu => {}
            AppView::NewComponent => {
                return self.handle_new_component_key(key);
            }
            AppView::CommandOutput => {
                return self.handle_command_output_key(key);
            }
            AppView::Help => {
                return self.handle_help_key(key);
            }
        }

        // Process action from input handler
        if let Some(action) = self.input_handler.handle_key(key, self.input_mode) {
            match action {
                Action::MoveUp => self.select_previous(),
                Action::MoveDown => self.select_next(),
                Action::Home => self.selected_menu_index = 0,
                Action::End => self.selected_menu_index = MenuItem::ALL.len() - 1,
                Action::Select => return self.activate_selected(),
                Action::Back | Action::Quit => return true,
                Action::InstallDependencies => {
                    if let Err(e) = self.run_package_command(PackageCommand::Install) {
                        self.error_message = Some(e);
                    }
                }
                Action::NewComponent => {
                    self.open_new_component_dialog();
                }
                Action::StartDevServer => {
                    if let Err(e) = self.run_package_command(PackageCommand::Dev) {
                        self.error_message = Some(e);
                    }
                }
                Action::EnsureLayout => {
                    self.ensure_layout();
                }
                Action::Help => {
                    self.open_help();
                }
                _ => {}
            }
        }

        false
    }

    /// Handle keys in the new component dialog
    fn handle_new_component_key(&mut self, key: KeyEvent) -> bool {
        match self.new_component_input.handle_key(key) {
            TextInputAction::Submit => {
                // Error, if any, is stored in new_component_error
                let _ = self.create_new_component();
            }
            TextInputAction::Cancel => {
                self.cancel_new_component();
            }
            TextInputAction::Changed | TextInputAction::None => {
                // Clear error on any change
                if matches!(
                    key.code,
                    KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
                ) {
                    self.new_component_error = None;
                }
            }
        }
        false
    }

    /// Handle keys in the command output view
    fn handle_command_output_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                // Only allow leaving once the command has terminated
                if !self.is_command_running() {
                    self.view = AppView::Menu;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.output_buffer.scroll_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.output_buffer.scroll_down(1, 20); // Assume 20 visible lines
            }
            KeyCode::PageUp => {
                self.output_buffer.scroll_up(10);
            }
            KeyCode::PageDown => {
                self.output_buffer.scroll_down(10, 20);
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.output_buffer.scroll_to_bottom();
            }
            _ => {}
        }
        false
    }

    /// Handle keys in help view
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.help_view_state.scroll_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.help_view_state.scroll_down(1);
            }
            KeyCode::PageUp | KeyCode::Char('b') => {
                self.help_view_state.page_up();
            }
            KeyCode::PageDown | KeyCode::Char('f') => {
                self.help_view_state.page_down();
            }
            _ => {}
        }
        false
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.project.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        // Initial project inspection
        self.init();

        loop {
            // Pick up a finished command result if one arrived
            self.poll_command_result();

            // Draw UI
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            // Use a shorter timeout while a command is running for responsiveness
            let timeout = if self.is_command_running() {
                Duration::from_millis(50)
            } else {
                tick_rate.saturating_sub(last_tick.elapsed())
            };

            // Wait for event with timeout
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(_width, _height) => {
                        // The next draw picks up the new dimensions from frame.area()
                        tracing::debug!("Terminal resized to {}x{}", _width, _height);
                    }
                    Event::FocusGained | Event::FocusLost => {
                        // Ignore focus events
                    }
                    Event::Mouse(_) | Event::Paste(_) => {
                        // Ignore mouse and paste events for now
                    }
                }
            }

            // Tick
            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
