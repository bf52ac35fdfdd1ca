use crate::builder::container_builder::ContainerBuilder;
use crate::element::element_model::{Button, Element, Orientation, Screen, Text};

/// Mutable accumulator for a screen under construction.
///
/// Only ever handed out as `&mut` inside a [`define_screen`] configure
/// closure; it cannot be constructed or retained anywhere else. Finalizing
/// consumes the builder, so no code path can touch builder state once the
/// screen exists.
pub struct ScreenBuilder {
    id: String,
    title: Option<String>,
    children: Vec<Element>,
}

impl ScreenBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            children: Vec::new(),
        }
    }

    /// Set the screen title. Calling it again replaces the previous value.
    pub fn set_title(&mut self, value: &str) {
        self.title = Some(value.to_string());
    }

    /// Append a text leaf.
    pub fn add_text(&mut self, id: &str, content: &str) {
        self.children
            .push(Element::Text(Text::new(id.to_string(), content.to_string())));
    }

    /// Append a button leaf.
    pub fn add_button(&mut self, id: &str, text: &str, on_click_action_id: &str) {
        self.children.push(Element::Button(Button::new(
            id.to_string(),
            text.to_string(),
            on_click_action_id.to_string(),
        )));
    }

    /// Append a nested container.
    ///
    /// Runs `configure` against a fresh container scope, then appends the
    /// finalized container here. The nested scope completes before this
    /// call returns.
    pub fn add_container(
        &mut self,
        id: &str,
        orientation: Orientation,
        configure: impl FnOnce(&mut ContainerBuilder),
    ) {
        let mut builder = ContainerBuilder::new(id, orientation);
        configure(&mut builder);
        self.children.push(Element::Container(builder.finalize()));
    }

    /// Move the accumulated state into an immutable screen.
    pub(crate) fn finalize(self) -> Screen {
        Screen::new(self.id, self.title, self.children)
    }
}

/// Build a screen through a scoped configure closure.
///
/// The sole public entry to the construction mechanism. The closure receives
/// exclusive access to the screen scope; children end up in the finalized
/// tree in the order the `add_*` calls ran.
///
/// ```
/// use screen_layout::builder::screen_builder::define_screen;
/// use screen_layout::element::element_model::Orientation;
///
/// let screen = define_screen("settings", |screen| {
///     screen.set_title("Settings");
///     screen.add_container("general", Orientation::Vertical, |general| {
///         general.add_text("langLabel", "Language: English");
///         general.add_button("resetButton", "Reset", "handleReset");
///     });
/// });
///
/// assert_eq!(screen.title(), Some("Settings"));
/// assert_eq!(screen.children().len(), 1);
/// ```
///
/// The builder reference cannot escape the closure:
///
/// ```compile_fail
/// use screen_layout::builder::screen_builder::{define_screen, ScreenBuilder};
///
/// let mut escaped: Option<&mut ScreenBuilder> = None;
/// define_screen("main", |screen| {
///     escaped = Some(screen);
/// });
/// escaped.unwrap().add_text("late", "mutation after finalize");
/// ```
pub fn define_screen(id: &str, configure: impl FnOnce(&mut ScreenBuilder)) -> Screen {
    let mut builder = ScreenBuilder::new(id);
    configure(&mut builder);
    builder.finalize()
}
