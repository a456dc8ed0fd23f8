use dioxus::prelude::*;

/// Profile record shown by the profile card
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl User {
    /// Built-in demo record
    pub fn sample() -> Self {
        Self {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            bio: "Engineer".to_string(),
        }
    }
}

/// The user currently shown by the app
pub static CURRENT_USER: GlobalSignal<User> = Signal::global(User::sample);

/// Handle an edit request coming from the profile card
pub fn request_edit() {
    log::info!("Edit profile requested for {}", CURRENT_USER.read().name);
}
