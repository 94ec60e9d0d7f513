//! # People Picker
//!
//! Hosts the debounced people search in a full-screen app: type to narrow the
//! list, arrows and Enter or a mouse click to pick, Esc to leave the field.
//!
//! Run with: `cargo run --example people_picker -- --delay-ms 300`
//!
//! Pass `--people file.json` to search your own list (an array of
//! `{ "name": ..., "slug": ... }` objects) and `--log-file picker.log` to see
//! what the widget is doing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use roster::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use roster::ratatui::layout::{Constraint, Layout, Rect};
use roster::ratatui::style::{Color, Modifier, Style};
use roster::ratatui::text::{Line, Span};
use roster::ratatui::widgets::{Block, Paragraph};
use roster::ratatui::Frame;
use roster::widgets::autocomplete::{self, Autocomplete};
use roster::widgets::Person;
use roster::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};

const BUILTIN_PEOPLE: &str = include_str!("people.json");

#[derive(Debug, Parser)]
#[command(about = "Search a list of people as you type")]
struct Args {
    /// JSON file holding an array of { "name", "slug" } objects.
    #[arg(long)]
    people: Option<PathBuf>,

    /// Quiet period before the query is applied, in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Append tracing output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{origin} is not a list of people: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

fn load_people(path: Option<&Path>) -> Result<Vec<Person>, LoadError> {
    let Some(path) = path else {
        return parse_people(BUILTIN_PEOPLE, "built-in list");
    };
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_people(&text, &path.display().to_string())
}

fn parse_people(text: &str, origin: &str) -> Result<Vec<Person>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

struct Flags {
    people: Vec<Person>,
    delay: Duration,
    size: (u16, u16),
}

struct PeoplePicker {
    search: Autocomplete,
    chosen: Option<Person>,
    size: (u16, u16),
}

#[derive(Debug)]
enum Msg {
    Search(autocomplete::Message),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
}

struct Areas {
    title: Rect,
    frame: Rect,
    search: Rect,
    status: Rect,
    help: Rect,
}

impl PeoplePicker {
    fn areas(&self, area: Rect) -> Areas {
        let [title, frame, status, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Areas {
            title,
            frame,
            search: Block::bordered().inner(frame),
            status,
            help,
        }
    }

    fn screen(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    fn forward(&mut self, msg: autocomplete::Message) -> Command<Msg> {
        self.search.update(msg).map(Msg::Search)
    }
}

impl Model for PeoplePicker {
    type Message = Msg;
    type Flags = Flags;

    fn init(flags: Flags) -> (Self, Command<Msg>) {
        let picker = PeoplePicker {
            search: Autocomplete::new(flags.people).with_delay(flags.delay),
            chosen: None,
            size: flags.size,
        };
        (picker, Command::message(Msg::Search(autocomplete::Message::Focus)))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Search(autocomplete::Message::Selected(person)) => {
                match person {
                    Some(ref p) => tracing::info!(name = %p.name, slug = %p.slug, "picked"),
                    None => tracing::debug!("selection cleared"),
                }
                self.chosen = person;
                Command::none()
            }
            Msg::Search(m) => self.forward(m),
            Msg::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Command::none();
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Command::quit();
                }
                if self.search.focused() {
                    return self.forward(autocomplete::Message::KeyPress(key));
                }
                match key.code {
                    KeyCode::Tab | KeyCode::Char('/') => self.forward(autocomplete::Message::Focus),
                    KeyCode::Char('q') | KeyCode::Esc => Command::quit(),
                    _ => Command::none(),
                }
            }
            Msg::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return Command::none();
                }
                let area = self.areas(self.screen()).search;
                match self.search.click(area, mouse.column, mouse.row) {
                    Some(m) => self.forward(m),
                    None => Command::none(),
                }
            }
            Msg::Paste(text) => self.forward(autocomplete::Message::Paste(text)),
            Msg::Resize(width, height) => {
                self.size = (width, height);
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let areas = self.areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "People Picker",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))),
            areas.title,
        );

        let border = if self.search.focused() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        frame.render_widget(
            Block::bordered()
                .title(" Search ")
                .border_style(Style::default().fg(border)),
            areas.frame,
        );
        self.search.view(frame, areas.search);

        let status = match self.chosen {
            Some(ref person) => Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(person.name.clone(), Style::default().fg(Color::Green)),
                Span::styled(format!(" ({})", person.slug), Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(status), areas.status);

        let help = if self.search.focused() {
            "type to search  ↑/↓ move  enter pick  esc leave"
        } else {
            "tab or / search  q quit"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
            areas.help,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            TerminalEvent::Resize(w, h) => Some(Msg::Resize(w, h)),
            _ => None,
        })];
        subs.extend(
            self.search
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Search)),
        );
        subs
    }
}

#[roster::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let people = load_people(args.people.as_deref())?;
    let size = roster::crossterm::terminal::size().unwrap_or((80, 24));

    let flags = Flags {
        people,
        delay: Duration::from_millis(args.delay_ms),
        size,
    };
    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("People Picker".into()),
        log_file: args.log_file,
        ..ProgramOptions::default()
    };

    let app = roster::run_with::<PeoplePicker>(flags, options).await?;
    if let Some(person) = app.chosen {
        println!("{} ({})", person.name, person.slug);
    }
    Ok(())
}
