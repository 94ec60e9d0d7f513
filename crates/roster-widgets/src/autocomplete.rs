//! People search: a text input whose suggestions follow a debounced query.
//!
//! Keystrokes edit the raw query at once.  The query used for filtering (the
//! *applied* query) only catches up after the input has been quiet for the
//! configured delay, 300 ms by default.  The dropdown lists every person whose
//! name contains the applied query, ignoring case; when nothing matches, a
//! notice takes its place.
//!
//! Outward events come back as [`Message::Selected`] from
//! [`update`](Component::update):
//!
//! - `Selected(None)` when the input gains focus or editing resumes after a
//!   pick, so the parent drops its previous choice;
//! - `Selected(Some(person))` when a suggestion is picked.  The input is
//!   cleared and the dropdown closes.
//!
//! The parent must include [`Component::subscriptions`] in its own, mapped
//! into its message type: that is where the debounce timer lives.
//!
//! # Example
//!
//! ```ignore
//! use roster_widgets::autocomplete::{self, Autocomplete};
//!
//! let picker = Autocomplete::new(people)
//!     .with_delay(Duration::from_millis(150))
//!     .with_max_visible(6);
//!
//! // in the parent's update:
//! match msg {
//!     Msg::Picker(autocomplete::Message::Selected(person)) => self.chosen = person,
//!     Msg::Picker(m) => return self.picker.update(m).map(Msg::Picker),
//! }
//! ```

use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use roster_core::command::Command;
use roster_core::component::Component;
use roster_core::debounce::{DebounceTick, Debouncer, DEFAULT_DELAY};
use roster_core::subscription::Subscription;

use crate::filter::matching_indices;
use crate::hooks::{Hook, Region};
use crate::person::Person;
use crate::selection::SelectionState;
use crate::text::truncate;
use crate::text_edit::TextEditState;

/// Messages for the autocomplete component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press while the input has focus.
    KeyPress(KeyEvent),
    /// Bracketed paste content.
    Paste(String),
    /// The input gained focus.
    Focus,
    /// The input lost focus (Esc, or a click outside the widget).
    Blur,
    /// Pick the suggestion at this position of the filtered view.
    Pick(usize),
    /// The debounce timer elapsed.
    QueryApplied(DebounceTick),
    /// Outward: the current selection changed.
    Selected(Option<Person>),
}

/// Whether the suggestion dropdown is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Style configuration for the autocomplete.
#[derive(Debug, Clone)]
pub struct AutocompleteStyle {
    /// Style for the typed query.
    pub input: Style,
    /// Style for the placeholder shown while the input is empty.
    pub placeholder: Style,
    /// Style for the character under the cursor.
    pub cursor: Style,
    /// Style for a suggestion row.
    pub item: Style,
    /// Style for the highlighted suggestion row.
    pub highlighted_item: Style,
    /// Style for the no-match notice.
    pub notice: Style,
}

impl Default for AutocompleteStyle {
    fn default() -> Self {
        Self {
            input: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            item: Style::default().fg(Color::Blue),
            highlighted_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Red),
        }
    }
}

/// Computed placement of every part, shared by `view`, `regions` and `click`.
struct Placement {
    input: Rect,
    text: Rect,
    list: Option<Rect>,
    items: Vec<(usize, Rect)>,
    notice: Option<Rect>,
}

/// Debounced people-search input with a suggestion dropdown.
pub struct Autocomplete {
    people: Arc<[Person]>,
    editor: TextEditState,
    applied: String,
    debounce: Debouncer<String>,
    filtered: Vec<usize>,
    selection: SelectionState,
    state: DropdownState,
    focused: bool,
    max_visible: usize,
    /// Suggestion rows the most recent layout had room for.
    drawn_rows: Cell<usize>,
    placeholder: String,
    notice: String,
    style: AutocompleteStyle,
    block: Option<Block<'static>>,
}

impl Autocomplete {
    /// Create an autocomplete over `people` with the default 300 ms delay.
    pub fn new(people: impl Into<Arc<[Person]>>) -> Self {
        let people = people.into();
        let filtered = matching_indices(&people, "");
        let max_visible = 8;
        Self {
            selection: SelectionState::new(filtered.len(), max_visible),
            people,
            editor: TextEditState::new(),
            applied: String::new(),
            debounce: Debouncer::new(DEFAULT_DELAY),
            filtered,
            state: DropdownState::Closed,
            focused: false,
            max_visible,
            drawn_rows: Cell::new(0),
            placeholder: "Enter a part of the name".to_string(),
            notice: "No matching suggestions".to_string(),
            style: AutocompleteStyle::default(),
            block: None,
        }
    }

    /// Set the debounce delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.set_delay(delay);
        self
    }

    /// Set the maximum number of visible suggestion rows.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.selection.set_visible(self.max_visible);
        self
    }

    /// Text shown while the input is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Text shown when no name matches.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: AutocompleteStyle) -> Self {
        self.style = style;
        self
    }

    /// Draw the input inside `block` (adds a border row above and below).
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the debounce controller with one bound to `delay`.
    ///
    /// A timer already running under the old delay is dropped, never
    /// carried over.  If the raw query is ahead of the applied one, it is
    /// rescheduled under the new delay so the two still converge.
    pub fn set_delay(&mut self, delay: Duration) {
        self.debounce = Debouncer::new(delay);
        let raw = self.editor.value();
        if raw != self.applied {
            self.debounce.push(raw);
        }
    }

    /// Replace the candidate list and re-derive the suggestions.
    pub fn set_people(&mut self, people: impl Into<Arc<[Person]>>) {
        self.people = people.into();
        self.refilter();
    }

    /// The raw query, exactly as typed.
    pub fn query(&self) -> String {
        self.editor.value()
    }

    /// The query the suggestions are currently filtered by.
    pub fn applied_query(&self) -> &str {
        &self.applied
    }

    /// The current debounce delay.
    pub fn delay(&self) -> Duration {
        self.debounce.delay()
    }

    /// The debounce controller, for inspecting the pending publication.
    pub fn debouncer(&self) -> &Debouncer<String> {
        &self.debounce
    }

    /// The full candidate list.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The people matching the applied query, in list order.
    pub fn suggestions(&self) -> Vec<&Person> {
        self.filtered.iter().map(|&i| &self.people[i]).collect()
    }

    /// The suggestion Enter would pick.
    pub fn highlighted(&self) -> Option<&Person> {
        self.filtered
            .get(self.selection.cursor())
            .map(|&i| &self.people[i])
    }

    /// Whether the dropdown is open or closed.
    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// Shorthand for `state() == DropdownState::Open`.
    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// Whether the suggestion list is drawn.
    pub fn shows_suggestions(&self) -> bool {
        self.is_open() && !self.filtered.is_empty()
    }

    /// Whether the no-match notice is drawn.
    pub fn shows_notice(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Where each visible hook is drawn when the widget renders into `area`.
    pub fn regions(&self, area: Rect) -> Vec<Region> {
        let placement = self.place(area);
        let mut regions = vec![Region::new(Hook::SearchInput, placement.input)];
        if let Some(list) = placement.list {
            regions.push(Region::new(Hook::SuggestionsList, list));
            regions.extend(
                placement
                    .items
                    .iter()
                    .map(|&(index, rect)| Region::item(index, rect)),
            );
        }
        if let Some(notice) = placement.notice {
            regions.push(Region::new(Hook::NoSuggestionsMessage, notice));
        }
        regions
    }

    /// Translate a mouse click at (`column`, `row`) into a message, given the
    /// area the widget was rendered into.
    ///
    /// A click on a suggestion picks it, a click on the input focuses it, a
    /// click anywhere else blurs a focused widget.
    pub fn click(&self, area: Rect, column: u16, row: u16) -> Option<Message> {
        let hit = self
            .regions(area)
            .into_iter()
            .filter(|region| region.contains(column, row))
            .find(|region| region.hook != Hook::SuggestionsList);
        match hit {
            Some(Region {
                hook: Hook::SuggestionItem,
                index: Some(index),
                ..
            }) => Some(Message::Pick(index)),
            Some(Region {
                hook: Hook::SearchInput,
                ..
            }) if !self.focused => Some(Message::Focus),
            Some(_) => None,
            None if self.focused => Some(Message::Blur),
            None => None,
        }
    }

    fn open(&mut self) -> Command<Message> {
        self.focused = true;
        self.state = DropdownState::Open;
        tracing::debug!(query = %self.editor.value(), "autocomplete opened");
        Command::message(Message::Selected(None))
    }

    fn blur(&mut self) {
        self.focused = false;
        self.state = DropdownState::Closed;
    }

    fn pick(&mut self, position: usize) -> Command<Message> {
        let Some(person) = self.filtered.get(position).map(|&i| self.people[i].clone()) else {
            return Command::none();
        };
        tracing::debug!(slug = %person.slug, "person selected");

        self.editor.clear();
        self.debounce.cancel();
        self.applied.clear();
        self.refilter();
        self.state = DropdownState::Closed;
        Command::message(Message::Selected(Some(person)))
    }

    /// Schedule the raw query for publication.  Editing a closed dropdown
    /// reopens it, which also clears the outward selection.
    fn query_edited(&mut self) -> Command<Message> {
        self.debounce.push(self.editor.value());
        if self.is_open() {
            Command::none()
        } else {
            self.open()
        }
    }

    /// Scroll against the rows last drawn, not just `max_visible`.
    fn fit_selection(&mut self) {
        let rows = match self.drawn_rows.get() {
            0 => self.max_visible,
            n => n.min(self.max_visible),
        };
        self.selection.set_visible(rows);
    }

    fn refilter(&mut self) {
        self.filtered = matching_indices(&self.people, &self.applied);
        self.selection.reset(self.filtered.len());
        tracing::trace!(
            query = %self.applied,
            matches = self.filtered.len(),
            "suggestions refreshed"
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.blur();
                Command::none()
            }
            (KeyCode::Down, _) if self.shows_suggestions() => {
                self.fit_selection();
                self.selection.move_down();
                Command::none()
            }
            (KeyCode::Up, _) if self.shows_suggestions() => {
                self.fit_selection();
                self.selection.move_up();
                Command::none()
            }
            (KeyCode::Enter, _) if self.shows_suggestions() => self.pick(self.selection.cursor()),
            (KeyCode::Backspace, _) => {
                if self.editor.delete_back() {
                    self.query_edited()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Delete, _) => {
                if self.editor.delete_forward() {
                    self.query_edited()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Left, _) => {
                self.editor.move_left();
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.editor.move_right();
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.editor.move_home();
                Command::none()
            }
            (KeyCode::End, _) => {
                self.editor.move_end();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.editor.insert_char(c);
                self.query_edited()
            }
            _ => Command::none(),
        }
    }

    fn place(&self, area: Rect) -> Placement {
        let input_height = if self.block.is_some() { 3 } else { 1 };
        let input = Rect {
            height: area.height.min(input_height),
            ..area
        };
        let text = match self.block {
            Some(ref block) => block.inner(input),
            None => input,
        };
        let below = Rect {
            y: input.bottom(),
            height: area.height - input.height,
            ..area
        };

        let mut placement = Placement {
            input,
            text,
            list: None,
            items: Vec::new(),
            notice: None,
        };
        if below.height == 0 {
            return placement;
        }

        if self.filtered.is_empty() {
            placement.notice = Some(Rect { height: 1, ..below });
        } else if self.is_open() {
            // A short area draws fewer than `max_visible` rows; keep the
            // highlight inside the ones drawn.
            let capacity = self.max_visible.min(below.height as usize);
            self.drawn_rows.set(capacity);
            let len = self.filtered.len();
            let rows = len.min(capacity);
            let cursor = self.selection.cursor();
            let mut offset = self.selection.offset().min(len - rows);
            if cursor < offset {
                offset = cursor;
            } else if cursor >= offset + rows {
                offset = cursor + 1 - rows;
            }
            let list = Rect {
                height: rows as u16,
                ..below
            };
            placement.items = (0..rows)
                .map(|i| {
                    let row = Rect {
                        y: list.y + i as u16,
                        height: 1,
                        ..list
                    };
                    (offset + i, row)
                })
                .collect();
            placement.list = Some(list);
        }
        placement
    }

    fn input_line(&self) -> Line<'static> {
        let chars = self.editor.chars();
        let mut spans = Vec::new();

        if chars.is_empty() {
            if self.focused {
                spans.push(Span::styled(" ", self.style.cursor));
            }
            spans.push(Span::styled(self.placeholder.clone(), self.style.placeholder));
            return Line::from(spans);
        }

        if !self.focused {
            spans.push(Span::styled(self.editor.value(), self.style.input));
            return Line::from(spans);
        }

        let cursor = self.editor.cursor();
        let before: String = chars[..cursor].iter().collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, self.style.input));
        }
        match chars.get(cursor) {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), self.style.cursor));
                let after: String = chars[cursor + 1..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, self.style.input));
                }
            }
            None => spans.push(Span::styled(" ", self.style.cursor)),
        }
        Line::from(spans)
    }
}

impl Component for Autocomplete {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Focus => self.open(),
            Message::Blur => {
                self.blur();
                Command::none()
            }
            Message::KeyPress(key) if self.focused => self.handle_key(key),
            Message::Paste(text) if self.focused => {
                if self.editor.insert_str(&text) > 0 {
                    self.query_edited()
                } else {
                    Command::none()
                }
            }
            Message::Pick(position) => self.pick(position),
            Message::QueryApplied(tick) => {
                if let Some(query) = self.debounce.settle(tick) {
                    self.applied = query;
                    self.refilter();
                }
                Command::none()
            }
            Message::KeyPress(_) | Message::Paste(_) | Message::Selected(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let placement = self.place(area);

        if let Some(ref block) = self.block {
            frame.render_widget(block.clone(), placement.input);
        }
        frame.render_widget(Paragraph::new(self.input_line()), placement.text);

        if let Some(list) = placement.list {
            frame.render_widget(Clear, list);
            let highlighted = self.selection.cursor();
            for &(index, row) in &placement.items {
                let is_highlighted = index == highlighted;
                let (prefix, style) = if is_highlighted {
                    ("▸ ", self.style.highlighted_item)
                } else {
                    ("  ", self.style.item)
                };
                let name = &self.people[self.filtered[index]].name;
                let name = truncate(name, row.width.saturating_sub(2) as usize, "…");
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(format!("{prefix}{name}"), style))),
                    row,
                );
            }
        }

        if let Some(notice) = placement.notice {
            frame.render_widget(
                Paragraph::new(Span::styled(self.notice.clone(), self.style.notice)),
                notice,
            );
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        self.debounce
            .subscription(Message::QueryApplied)
            .into_iter()
            .collect()
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use roster_core::testing::buffer_to_string;
    use roster_core::Model;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn people() -> Vec<Person> {
        vec![Person::new("Alice", "a"), Person::new("Bob", "b")]
    }

    fn focused(people: Vec<Person>) -> Autocomplete {
        let mut ac = Autocomplete::new(people);
        ac.update(Message::Focus);
        ac
    }

    fn type_str(ac: &mut Autocomplete, s: &str) {
        for c in s.chars() {
            ac.update(Message::KeyPress(key(KeyCode::Char(c))));
        }
    }

    /// Deliver the tick the pending timer would fire with.
    fn elapse(ac: &mut Autocomplete) {
        let tick = ac.debouncer().pending_tick().expect("a timer is pending");
        ac.update(Message::QueryApplied(tick));
    }

    fn render(ac: &Autocomplete, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ac.view(frame, area);
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn hooks(ac: &Autocomplete, area: Rect) -> Vec<Hook> {
        ac.regions(area).into_iter().map(|r| r.hook).collect()
    }

    #[test]
    fn focus_opens_and_clears_selection() {
        let mut ac = Autocomplete::new(people());
        assert_eq!(ac.state(), DropdownState::Closed);

        let cmd = ac.update(Message::Focus);
        assert!(ac.is_open());
        assert!(ac.focused());
        assert!(matches!(cmd.into_message(), Some(Message::Selected(None))));
    }

    #[test]
    fn typing_echoes_immediately_but_filters_later() {
        let mut ac = focused(people());
        type_str(&mut ac, "al");

        assert_eq!(ac.query(), "al");
        assert_eq!(ac.applied_query(), "");
        assert_eq!(ac.suggestions().len(), 2);
        assert_eq!(ac.subscriptions().len(), 1);
    }

    #[test]
    fn applied_query_filters_to_alice() {
        let mut ac = focused(people());
        type_str(&mut ac, "al");
        elapse(&mut ac);

        assert_eq!(ac.applied_query(), "al");
        assert_eq!(ac.suggestions(), vec![&people()[0]]);
        assert!(!ac.shows_notice());
        assert!(ac.subscriptions().is_empty());

        let screen = render(&ac, 30, 5);
        assert!(screen.contains("Alice"));
        assert!(!screen.contains("Bob"));
        assert!(!screen.contains("No matching suggestions"));
    }

    #[test]
    fn no_match_shows_notice_instead_of_list() {
        let mut ac = focused(people());
        type_str(&mut ac, "zzz");
        elapse(&mut ac);

        assert!(ac.suggestions().is_empty());
        assert!(ac.shows_notice());
        assert!(!ac.shows_suggestions());

        let area = Rect::new(0, 0, 30, 5);
        let found = hooks(&ac, area);
        assert!(found.contains(&Hook::NoSuggestionsMessage));
        assert!(!found.contains(&Hook::SuggestionsList));
        assert!(render(&ac, 30, 5).contains("No matching suggestions"));
    }

    #[test]
    fn only_last_keystroke_is_applied() {
        let mut ac = focused(people());
        type_str(&mut ac, "a");
        let stale = ac.debouncer().pending_tick().unwrap();
        type_str(&mut ac, "l");

        // The superseded timer's tick may already be queued; it must not apply.
        ac.update(Message::QueryApplied(stale));
        assert_eq!(ac.applied_query(), "");

        elapse(&mut ac);
        assert_eq!(ac.applied_query(), "al");
    }

    #[test]
    fn picking_reports_person_clears_and_closes() {
        let mut ac = focused(people());
        type_str(&mut ac, "b");
        elapse(&mut ac);

        let cmd = ac.update(Message::Pick(0));
        match cmd.into_message() {
            Some(Message::Selected(Some(person))) => assert_eq!(person, Person::new("Bob", "b")),
            other => panic!("expected Selected(Some(Bob)), got {other:?}"),
        }
        assert_eq!(ac.query(), "");
        assert_eq!(ac.applied_query(), "");
        assert_eq!(ac.state(), DropdownState::Closed);
        assert!(ac.subscriptions().is_empty());
        assert_eq!(ac.suggestions().len(), 2);
    }

    #[test]
    fn pick_out_of_range_is_ignored() {
        let mut ac = focused(people());
        assert!(ac.update(Message::Pick(9)).is_none());
        assert!(ac.is_open());
    }

    #[test]
    fn pick_cancels_pending_timer() {
        let mut ac = focused(people());
        type_str(&mut ac, "a");
        elapse(&mut ac);
        type_str(&mut ac, "l");
        let tick = ac.debouncer().pending_tick().unwrap();

        ac.update(Message::Pick(0));
        ac.update(Message::QueryApplied(tick));
        assert_eq!(ac.applied_query(), "");
    }

    #[test]
    fn arrows_and_enter_pick_highlighted() {
        let mut ac = focused(people());
        assert_eq!(ac.highlighted(), Some(&people()[0]));

        ac.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(ac.highlighted(), Some(&people()[1]));
        ac.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(ac.highlighted(), Some(&people()[0]));
        ac.update(Message::KeyPress(key(KeyCode::Up)));

        let cmd = ac.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::Selected(Some(ref p))) if p.slug == "b"
        ));
    }

    #[test]
    fn esc_blurs_and_keeps_query() {
        let mut ac = focused(people());
        type_str(&mut ac, "bo");
        let cmd = ac.update(Message::KeyPress(key(KeyCode::Esc)));
        assert!(cmd.is_none());
        assert!(!ac.is_open());
        assert!(!ac.focused());
        assert_eq!(ac.query(), "bo");
    }

    #[test]
    fn keys_ignored_without_focus() {
        let mut ac = Autocomplete::new(people());
        type_str(&mut ac, "al");
        assert_eq!(ac.query(), "");
        assert!(ac.update(Message::Paste("al".into())).is_none());
        assert!(ac.subscriptions().is_empty());
    }

    #[test]
    fn editing_after_pick_reopens_and_clears_selection() {
        let mut ac = focused(people());
        ac.update(Message::Pick(1));
        assert!(!ac.is_open());

        let cmd = ac.update(Message::KeyPress(key(KeyCode::Char('a'))));
        assert!(ac.is_open());
        assert!(matches!(cmd.into_message(), Some(Message::Selected(None))));
    }

    #[test]
    fn paste_schedules_query() {
        let mut ac = focused(people());
        ac.update(Message::Paste("BO\n".into()));
        assert_eq!(ac.query(), "BO");
        elapse(&mut ac);
        assert_eq!(ac.suggestions(), vec![&people()[1]]);
    }

    #[test]
    fn backspace_reschedules() {
        let mut ac = focused(people());
        type_str(&mut ac, "bx");
        elapse(&mut ac);
        assert!(ac.suggestions().is_empty());

        ac.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(ac.query(), "b");
        elapse(&mut ac);
        assert_eq!(ac.suggestions(), vec![&people()[1]]);
    }

    #[test]
    fn set_delay_drops_in_flight_timer() {
        let mut ac = focused(people()).with_delay(Duration::from_millis(300));
        type_str(&mut ac, "al");
        let old_tick = ac.debouncer().pending_tick().unwrap();

        ac.set_delay(Duration::from_millis(50));
        assert_eq!(ac.delay(), Duration::from_millis(50));
        ac.update(Message::QueryApplied(old_tick));
        assert_eq!(ac.applied_query(), "");

        // Still converges, under the new delay.
        elapse(&mut ac);
        assert_eq!(ac.applied_query(), "al");
    }

    #[test]
    fn set_delay_when_settled_schedules_nothing() {
        let mut ac = focused(people());
        ac.set_delay(Duration::from_millis(10));
        assert!(!ac.debouncer().is_pending());
    }

    #[test]
    fn set_people_refilters_with_applied_query() {
        let mut ac = focused(people());
        type_str(&mut ac, "an");
        elapse(&mut ac);
        assert!(ac.suggestions().is_empty());

        ac.set_people(vec![Person::new("Anna", "anna"), Person::new("Joan", "joan")]);
        assert_eq!(ac.suggestions().len(), 2);
    }

    #[test]
    fn regions_follow_open_list() {
        let mut ac = Autocomplete::new(people()).with_max_visible(1);
        let area = Rect::new(0, 0, 20, 6);
        assert_eq!(hooks(&ac, area), vec![Hook::SearchInput]);

        ac.update(Message::Focus);
        let regions = ac.regions(area);
        assert_eq!(regions[0].area, Rect::new(0, 0, 20, 1));
        assert_eq!(regions[1].hook, Hook::SuggestionsList);
        assert_eq!(regions[1].area, Rect::new(0, 1, 20, 1));
        assert_eq!(regions[2], Region::item(0, Rect::new(0, 1, 20, 1)));
        assert_eq!(regions.len(), 3);

        ac.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(ac.regions(area)[2].index, Some(1));
    }

    fn drawn_indices(ac: &Autocomplete, area: Rect) -> Vec<usize> {
        ac.regions(area).into_iter().filter_map(|r| r.index).collect()
    }

    #[test]
    fn highlight_stays_drawn_in_short_area() {
        let crowd: Vec<Person> = (0..10)
            .map(|i| Person::new(format!("Person{i}"), format!("p{i}")))
            .collect();
        let mut ac = focused(crowd);
        // One input row leaves room for three of the eight suggestion rows.
        let area = Rect::new(0, 0, 20, 4);
        assert_eq!(drawn_indices(&ac, area), vec![0, 1, 2]);

        for _ in 0..5 {
            ac.update(Message::KeyPress(key(KeyCode::Down)));
        }
        assert_eq!(ac.highlighted().map(|p| p.slug.as_str()), Some("p5"));
        assert_eq!(drawn_indices(&ac, area), vec![3, 4, 5]);

        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        terminal
            .draw(|frame| ac.view(frame, area))
            .unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).contains("▸ Person5"));

        ac.update(Message::KeyPress(key(KeyCode::Up)));
        assert_eq!(drawn_indices(&ac, area), vec![3, 4, 5]);

        // Wrapping to the end scrolls to the last rows.
        for _ in 0..5 {
            ac.update(Message::KeyPress(key(KeyCode::Up)));
        }
        assert_eq!(ac.highlighted().map(|p| p.slug.as_str()), Some("p9"));
        assert_eq!(drawn_indices(&ac, area), vec![7, 8, 9]);

        let cmd = ac.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::Selected(Some(ref p))) if p.slug == "p9"
        ));
    }

    #[test]
    fn block_pushes_list_below_border() {
        let ac = focused(people()).with_block(Block::bordered());
        let regions = ac.regions(Rect::new(0, 0, 20, 6));
        assert_eq!(regions[0].area.height, 3);
        assert_eq!(regions[1].area.y, 3);
    }

    #[test]
    fn clicks_map_to_messages() {
        let mut ac = Autocomplete::new(people());
        let area = Rect::new(0, 0, 20, 6);
        assert!(matches!(ac.click(area, 3, 0), Some(Message::Focus)));
        assert!(ac.click(area, 3, 5).is_none());

        ac.update(Message::Focus);
        assert!(matches!(ac.click(area, 3, 2), Some(Message::Pick(1))));
        assert!(matches!(ac.click(area, 3, 5), Some(Message::Blur)));
        assert!(ac.click(area, 3, 0).is_none());
    }

    #[test]
    fn placeholder_and_truncation() {
        let long = Person::new("Maximiliaan Frederik van Oranje", "max");
        let mut ac = Autocomplete::new(vec![long]);
        assert!(render(&ac, 30, 3).contains("Enter a part of the name"));

        ac.update(Message::Focus);
        let screen = render(&ac, 12, 3);
        assert!(screen.contains("▸ Maximilia…"));
    }

    #[test]
    fn zero_area_does_not_panic() {
        let ac = focused(people());
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        terminal
            .draw(|frame| ac.view(frame, Rect::new(0, 0, 0, 0)))
            .unwrap();
        assert_eq!(ac.regions(Rect::new(0, 0, 10, 1)).len(), 1);
    }

    // -- hosted in a parent model ------------------------------------------

    struct Picker {
        search: Autocomplete,
        chosen: Option<Person>,
        reports: usize,
    }

    enum PickerMsg {
        Search(Message),
    }

    impl Model for Picker {
        type Message = PickerMsg;
        type Flags = Vec<Person>;

        fn init(people: Vec<Person>) -> (Self, Command<PickerMsg>) {
            let picker = Picker {
                search: Autocomplete::new(people),
                chosen: None,
                reports: 0,
            };
            (picker, Command::none())
        }

        fn update(&mut self, msg: PickerMsg) -> Command<PickerMsg> {
            match msg {
                PickerMsg::Search(Message::Selected(person)) => {
                    self.chosen = person;
                    self.reports += 1;
                    Command::none()
                }
                PickerMsg::Search(m) => self.search.update(m).map(PickerMsg::Search),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let area = frame.area();
            self.search.view(frame, area);
        }

        fn subscriptions(&self) -> Vec<Subscription<PickerMsg>> {
            self.search
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(PickerMsg::Search))
                .collect()
        }
    }

    #[test]
    fn parent_sees_selection_round_trip() {
        use roster_core::testing::TestProgram;

        let mut prog = TestProgram::<Picker>::new(people());
        prog.model_mut().chosen = Some(Person::new("Alice", "a"));

        prog.send(PickerMsg::Search(Message::Focus));
        prog.drain_messages();
        assert_eq!(prog.model().chosen, None);
        assert_eq!(prog.model().reports, 1);

        for c in "bo".chars() {
            prog.send(PickerMsg::Search(Message::KeyPress(key(KeyCode::Char(c)))));
        }
        assert_eq!(prog.subscription_ids().len(), 1);

        let tick = prog.model().search.debouncer().pending_tick().unwrap();
        prog.send(PickerMsg::Search(Message::QueryApplied(tick)));
        assert!(prog.subscription_ids().is_empty());
        assert!(prog.render_string(20, 4).contains("▸ Bob"));

        prog.send(PickerMsg::Search(Message::KeyPress(key(KeyCode::Enter))));
        prog.drain_messages();
        assert_eq!(prog.model().chosen, Some(Person::new("Bob", "b")));
        assert_eq!(prog.model().reports, 2);
        assert!(!prog.render_string(20, 4).contains("Bob"));
    }
}
