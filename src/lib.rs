use crate::builder::screen_builder::define_screen;
use crate::element::element_model::{Orientation, Screen};

pub mod builder;
pub mod cli;
pub mod element;
pub mod render;
pub mod snapshot;
pub mod validate;

/// Build the bundled demo: a small profile screen exercising every node
/// kind, nested containers included. Used by the `demo` subcommand and as a
/// known-shape fixture in tests.
pub fn demo_screen() -> Screen {
    define_screen("mainScreen", |screen| {
        screen.set_title("User Profile");

        screen.add_container("userInfo", Orientation::Vertical, |info| {
            info.add_text("nameLabel", "Name: John Doe");
            info.add_text("emailLabel", "Email: john.doe@example.com");

            info.add_container("address", Orientation::Horizontal, |address| {
                address.add_text("addressLabel", "City: Metropolis");
            });
        });

        screen.add_container("actions", Orientation::Horizontal, |actions| {
            actions.add_button("saveButton", "Save", "handleSaveProfile");
            actions.add_button("cancelButton", "Cancel", "handleCancel");
        });
    })
}
