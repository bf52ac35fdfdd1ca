use crate::element::element_model::{Element, Screen};

// ============================================================================
// Console renderer — indented tree output
// ============================================================================

/// Format a finalized screen for terminal output.
///
/// Produces output like:
/// ```text
/// Title: User Profile
///   - Container: userInfo (VERTICAL)
///     - Text: nameLabel - Name: John Doe
///   - Container: actions (HORIZONTAL)
///     - Button: saveButton - Save (Action: handleSaveProfile)
/// ```
///
/// The title line is omitted when the screen has no title. Children are
/// walked depth-first, two spaces of indent per level.
pub fn format_screen(screen: &Screen) -> String {
    let mut out = String::new();

    if let Some(title) = screen.title() {
        out.push_str(&format!("Title: {}\n", title));
    }

    for child in screen.children() {
        format_element(&mut out, child, 1);
    }

    out
}

fn format_element(out: &mut String, element: &Element, level: usize) {
    let indent = "  ".repeat(level);

    match element {
        Element::Container(container) => {
            out.push_str(&format!(
                "{}- Container: {} ({})\n",
                indent,
                container.id(),
                container.orientation()
            ));
            for child in container.children() {
                format_element(out, child, level + 1);
            }
        }
        Element::Text(text) => {
            out.push_str(&format!("{}- Text: {} - {}\n", indent, text.id(), text.text()));
        }
        Element::Button(button) => {
            out.push_str(&format!(
                "{}- Button: {} - {} (Action: {})\n",
                indent,
                button.id(),
                button.text(),
                button.on_click_action_id()
            ));
        }
    }
}
