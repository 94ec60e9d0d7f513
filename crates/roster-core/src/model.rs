use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. External events (keys, mouse, timer firings) arrive as messages through
///    [`Subscription`]s.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`].
/// 5. [`subscriptions`](Model::subscriptions) is re-read and diffed against
///    the running set.
///
/// # Example
///
/// ```rust,ignore
/// use roster_core::{Command, Model};
/// use roster_widgets::autocomplete::{self, Autocomplete};
///
/// struct App { picker: Autocomplete, chosen: Option<Person> }
///
/// enum Msg { Picker(autocomplete::Message) }
///
/// impl Model for App {
///     type Message = Msg;
///     type Flags = Vec<Person>;
///
///     fn init(people: Vec<Person>) -> (Self, Command<Msg>) {
///         (App { picker: Autocomplete::new(people), chosen: None }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Picker(autocomplete::Message::Selected(person)) => {
///                 self.chosen = person;
///                 Command::none()
///             }
///             Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.picker.view(frame, frame.area());
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders and reconciles
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state.  Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions.  Called after every update.
    ///
    /// The runtime diffs the returned list against the previously active set
    /// by [`SubscriptionId`](crate::SubscriptionId): new ones are started and
    /// removed ones are aborted.  Returning a different id for the same kind
    /// of timer is how a model cancels and restarts it.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
