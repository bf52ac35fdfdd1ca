use crate::element::element_model::{Button, Container, Element, Orientation, Text};

/// Mutable accumulator for a container under construction.
///
/// Created only by a parent scope's `add_container` call, which fixes the
/// id and orientation up front. Unlike the screen scope there is no title
/// setter; titles exist at the top level only.
pub struct ContainerBuilder {
    id: String,
    orientation: Orientation,
    children: Vec<Element>,
}

impl ContainerBuilder {
    pub(crate) fn new(id: &str, orientation: Orientation) -> Self {
        Self {
            id: id.to_string(),
            orientation,
            children: Vec::new(),
        }
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

    /// Append a nested container. Nesting recurses on the plain call stack;
    /// the nested scope finalizes before this call returns.
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

    /// Move the accumulated state into an immutable container.
    pub(crate) fn finalize(self) -> Container {
        Container::new(self.id, self.orientation, self.children)
    }
}
