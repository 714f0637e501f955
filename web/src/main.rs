use dioxus::prelude::*;

use ui::NotesApp;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        NotesApp {}
    }
}
