use dioxus::prelude::*;
use hadith_core::SearchMode;

/// Query input with the Search / Ask mode toggle.
///
/// Emits `(query, mode)` on Enter or on the submit button; a blank query
/// emits nothing. The text is kept after submission.
#[component]
pub fn SearchBox(on_search: EventHandler<(String, SearchMode)>, searching: bool) -> Element {
    let mut query = use_signal(String::new);
    let mut mode = use_signal(SearchMode::default);

    let submit = move || {
        let text = query.read().clone();
        if !text.trim().is_empty() {
            on_search.call((text, mode()));
        }
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            submit();
        }
    };

    let current = mode();

    rsx! {
        section { class: "hs-search-card",
            div { class: "hs-mode-toggle", role: "tablist",
                for option in [SearchMode::Search, SearchMode::Question] {
                    button {
                        key: "{option.label()}",
                        class: mode_button_class(option == current),
                        role: "tab",
                        "aria-selected": "{option == current}",
                        onclick: move |_| mode.set(option),
                        "{option.label()}"
                    }
                }
            }
            div { class: "hs-search-input-row",
                input {
                    class: "hs-search-input",
                    r#type: "text",
                    placeholder: current.placeholder(),
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeypress: handle_keypress,
                }
                button {
                    class: "hs-btn hs-btn--primary",
                    disabled: searching,
                    onclick: move |_| submit(),
                    if searching {
                        "Searching…"
                    } else {
                        "{current.label()}"
                    }
                }
            }
            p { class: "hs-search-hint", "{current.hint()}" }
        }
    }
}

fn mode_button_class(active: bool) -> &'static str {
    if active {
        "hs-mode-btn hs-mode-btn--active"
    } else {
        "hs-mode-btn"
    }
}
