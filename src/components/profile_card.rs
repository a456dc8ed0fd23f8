use dioxus::prelude::*;
use crate::components::styles;
use crate::stores::profile_store::User;

/// Profile summary with an edit action
///
/// Renders the user's name, email and bio. The component holds no state;
/// clicking "Edit Profile" calls `on_edit` and leaves everything else to the parent.
#[component]
pub fn ProfileCard(user: User, on_edit: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: styles::CARD,

            // Header
            div {
                class: styles::HEADER,
                h2 {
                    class: styles::NAME,
                    "{user.name}"
                }
                button {
                    class: styles::EDIT_BUTTON,
                    onclick: move |_| on_edit.call(()),
                    "Edit Profile"
                }
            }

            // Details
            div {
                class: styles::DETAILS,
                div {
                    class: styles::FIELD,
                    label { class: styles::LABEL, "Email:" }
                    p { class: styles::VALUE, "{user.email}" }
                }
                div {
                    class: styles::FIELD,
                    label { class: styles::LABEL, "Bio:" }
                    p { class: styles::VALUE, "{user.bio}" }
                }
            }
        }
    }
}
