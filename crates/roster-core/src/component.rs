use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model), except that
/// [`view`](Component::view) receives the area to draw into, so a parent can
/// place several components in one layout.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message,
/// lift commands with [`Command::map`] and subscriptions with
/// [`Subscription::map`]:
///
/// ```rust,ignore
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Picker(m) => self.picker.update(m).map(AppMsg::Picker),
///     }
/// }
///
/// fn subscriptions(&self) -> Vec<Subscription<AppMsg>> {
///     self.picker
///         .subscriptions()
///         .into_iter()
///         .map(|sub| sub.map(AppMsg::Picker))
///         .collect()
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    ///
    /// Messages a component sends *outward* (events the parent should see)
    /// come back as [`Command::message`]; the parent intercepts them before
    /// forwarding the rest.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these into its own
    /// [`Model::subscriptions`](crate::Model::subscriptions).  A component
    /// that is dropped stops being declared, which is what tears down its
    /// timers.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    fn focused(&self) -> bool {
        false
    }
}
