use std::sync::Arc;

use dioxus::prelude::*;

mod auth;
mod routes;

use auth::{use_auth, AuthState};
use platform::Directory;
use routes::Route;

/// Shared profile state accessible across all routes.
/// Backed by `Memo`s that read directly from `AuthState`, so it is always
/// in sync with the current identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub email: Memo<String>,
    pub avatar_url: Memo<Option<String>>,
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The directory is fixed for the session lifetime; every consumer gets
    // the same read-only handle. The session defaults to the demo student.
    let directory = use_hook(|| Arc::new(Directory::seed()));
    use_context_provider(|| directory.clone());
    use_context_provider(|| AuthState::new(directory));

    let auth = use_auth();

    // Derive profile state from auth; updates when the identity changes.
    let display_name = use_memo(move || {
        auth.current_user()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    });
    let email = use_memo(move || {
        auth.current_user()
            .map(|u| u.email.clone())
            .unwrap_or_else(|| "guest@skillora.com".to_string())
    });
    let avatar_url = use_memo(move || {
        auth.current_user()
            .map(|u| u.avatar.clone())
            .filter(|url| !url.is_empty())
    });

    use_context_provider(|| ProfileState {
        display_name,
        email,
        avatar_url,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
