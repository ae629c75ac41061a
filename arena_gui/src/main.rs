//! # Arena GUI Application
//!
//! Split-screen problem workspace built with Iced: the sanitized problem
//! statement on the left, a code editor on the right, and a draggable
//! divider between them.
//!
//! All workspace state lives in [`arena_core::Workspace`]. This crate only
//! translates Iced events into workspace events and renders snapshots.
//!
//! ## Settings
//!
//! Set `ARENA_SETTINGS` to a TOML settings file to override the language
//! registry, default theme, editor flags or initial split. Pass a problem
//! JSON path as the first argument to open it at startup.

mod links;
mod subscription;
mod ui;

use std::path::PathBuf;

use iced::widget::{column, container, markdown, row, text_editor};
use iced::{Element, Length, Size, Subscription, Task, Theme};

use arena_core::editor::{EditorTheme, LanguageOption};
use arena_core::split_pane::PointerEvent;
use arena_core::{Problem, Tab, UserAction, Workspace, WorkspaceEvent, WorkspaceSettings};

/// Environment variable naming the settings file
const SETTINGS_ENV: &str = "ARENA_SETTINGS";

/// Initial window size; the width doubles as the container width until the
/// window reports its real size
const INITIAL_WIDTH: f32 = 1280.0;
const INITIAL_HEIGHT: f32 = 800.0;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Arena");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: Size::new(INITIAL_WIDTH, INITIAL_HEIGHT),
            min_size: Some(Size::new(720.0, 480.0)),
            ..Default::default()
        })
        .run()
}

/// Messages produced by widgets and subscriptions
#[derive(Debug, Clone)]
pub enum Message {
    // Divider drag
    DividerPressed,
    PointerMoved(f32),
    PointerReleased,
    PointerLeft,
    DragCancelled,
    WindowResized(f32),

    // Description panel
    TabSelected(Tab),
    LinkClicked(String),

    // Editor panel
    LanguageSelected(LanguageOption),
    ThemeSelected(EditorTheme),
    CodeEdited(text_editor::Action),
    Submit,
    Run,

    // Problem files
    OpenProblem,
    ProblemPicked(Option<PathBuf>),
}

/// Application state
pub struct App {
    pub workspace: Workspace,
    /// Parsed from the sanitized statement whenever the problem changes
    pub statement_items: Vec<markdown::Item>,
    pub code: text_editor::Content,
    /// Width of the outer container, in logical pixels
    pub window_width: f32,
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (settings, settings_status) = load_settings();
        let (problem, problem_status) = load_initial_problem();

        let workspace = Workspace::new(&settings, problem);
        let statement_items = markdown::parse(workspace.statement().as_str()).collect();
        let code = text_editor::Content::with_text(workspace.starter_code());

        let status = problem_status
            .or(settings_status)
            .unwrap_or_else(|| "Ready".to_string());

        let app = App {
            workspace,
            statement_items,
            code,
            window_width: INITIAL_WIDTH,
            status,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Arena - {}", self.workspace.problem().title)
    }

    fn theme(&self) -> Theme {
        if self.workspace.editor_config().theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ===== Divider drag =====
            Message::DividerPressed => {
                self.pointer(PointerEvent::Down);
            }
            Message::PointerMoved(x) => {
                self.pointer(PointerEvent::Move {
                    x: f64::from(x),
                    container_width: f64::from(self.window_width),
                });
            }
            Message::PointerReleased => {
                self.pointer(PointerEvent::Up);
            }
            Message::PointerLeft => {
                self.pointer(PointerEvent::Leave);
            }
            Message::DragCancelled => {
                self.pointer(PointerEvent::Cancel);
            }
            Message::WindowResized(width) => {
                self.window_width = width;
            }

            // ===== Description panel =====
            Message::TabSelected(tab) => {
                self.workspace.dispatch(WorkspaceEvent::SelectTab(tab));
            }
            Message::LinkClicked(url) => {
                if let Err(e) = links::open_url(&url) {
                    self.status = e;
                }
            }

            // ===== Editor panel =====
            Message::LanguageSelected(option) => {
                let untouched = self.code.text().trim_end() == self.workspace.starter_code().trim_end();
                self.workspace.dispatch(WorkspaceEvent::SelectLanguage(option.value));
                if untouched {
                    self.code = text_editor::Content::with_text(self.workspace.starter_code());
                }
            }
            Message::ThemeSelected(theme) => {
                self.workspace
                    .dispatch(WorkspaceEvent::SelectTheme(theme.id().to_string()));
            }
            Message::CodeEdited(action) => {
                self.code.perform(action);
            }
            Message::Submit => {
                self.forward(WorkspaceEvent::Submit);
            }
            Message::Run => {
                self.forward(WorkspaceEvent::Run);
            }

            // ===== Problem files =====
            Message::OpenProblem => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Open Problem")
                            .add_filter("Problem", &[arena_core::problem::PROBLEM_EXTENSION])
                            .pick_file()
                            .await
                            .map(|f| f.path().to_path_buf())
                    },
                    Message::ProblemPicked,
                );
            }
            Message::ProblemPicked(Some(path)) => match arena_core::load_problem(&path) {
                Ok(problem) => self.load_problem(problem, &path),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to open problem");
                    self.status = e.to_string();
                }
            },
            Message::ProblemPicked(None) => {}
        }
        Task::none()
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.workspace.dispatch(WorkspaceEvent::Pointer(event));
    }

    /// Dispatch a submit/run trigger and report it; the request itself
    /// belongs to a backend this application does not talk to.
    fn forward(&mut self, event: WorkspaceEvent) {
        match self.workspace.dispatch(event) {
            Some(UserAction::Submit) => {
                self.status = format!(
                    "Submitted {} lines of {}",
                    self.code.line_count(),
                    self.workspace.editor_config().language
                );
            }
            Some(UserAction::Run) => {
                self.status = format!("Run requested ({})", self.workspace.editor_config().language);
            }
            None => {}
        }
    }

    fn load_problem(&mut self, problem: Problem, path: &std::path::Path) {
        self.workspace.dispatch(WorkspaceEvent::LoadProblem(problem));
        self.statement_items = markdown::parse(self.workspace.statement().as_str()).collect();
        self.code = text_editor::Content::with_text(self.workspace.starter_code());
        self.status = format!("Opened {}", path.display());
    }

    fn view(&self) -> Element<'_, Message> {
        let view = self.workspace.snapshot();

        let panels = row![
            ui::description_panel::view_description_panel(self, view.widths.left_percent),
            ui::shared::divider::view_divider(view.dragging),
            ui::editor_panel::view_editor_panel(self, &view),
        ]
        .height(Length::Fill);

        let content = column![
            panels,
            ui::status_bar::view_status_bar(
                &self.workspace.problem().title,
                &self.status,
                view.widths.left_percent,
            ),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(4)
            .into()
    }
}

/// Settings from `ARENA_SETTINGS`, falling back to defaults on error
fn load_settings() -> (WorkspaceSettings, Option<String>) {
    let path = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
    match WorkspaceSettings::load_or_default(path.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            (WorkspaceSettings::default(), Some(format!("Settings ignored: {}", e)))
        }
    }
}

/// Problem from the first CLI argument, or the bundled sample
fn load_initial_problem() -> (Problem, Option<String>) {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return (Problem::sample(), None);
    };
    match arena_core::load_problem(&path) {
        Ok(problem) => (problem, Some(format!("Opened {}", path.display()))),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to sample problem");
            (Problem::sample(), Some(e.to_string()))
        }
    }
}
