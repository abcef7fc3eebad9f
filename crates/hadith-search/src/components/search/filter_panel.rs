use dioxus::prelude::*;
use hadith_core::config::{LIMIT_OPTIONS, SOURCE_OPTIONS};
use hadith_core::SearchFilters;

/// Source and result-limit selectors for keyword search.
#[component]
pub fn FilterPanel(
    filters: SearchFilters,
    on_filter_change: EventHandler<SearchFilters>,
    on_clear: EventHandler<()>,
) -> Element {
    let selected_source = filters.source.clone().unwrap_or_default();
    let selected_limit = filters.limit;
    let for_source = filters.clone();
    let for_limit = filters;

    rsx! {
        section { class: "hs-filter-panel",
            h3 { class: "hs-filter-title", "Filters" }

            label { class: "hs-filter-field",
                span { class: "hs-filter-label", "Source" }
                select {
                    class: "hs-select",
                    value: "{selected_source}",
                    onchange: move |evt: FormEvent| {
                        on_filter_change.call(for_source.with_source_value(&evt.value()));
                    },
                    option { value: "", selected: selected_source.is_empty(), "All Sources" }
                    for source in SOURCE_OPTIONS.iter().copied() {
                        option {
                            key: "{source}",
                            value: source,
                            selected: selected_source == source,
                            "{source}"
                        }
                    }
                }
            }

            label { class: "hs-filter-field",
                span { class: "hs-filter-label", "Results" }
                select {
                    class: "hs-select",
                    value: "{selected_limit}",
                    onchange: move |evt: FormEvent| {
                        on_filter_change.call(for_limit.with_limit_value(&evt.value()));
                    },
                    for (limit, label) in LIMIT_OPTIONS.iter().copied() {
                        option {
                            key: "{limit}",
                            value: "{limit}",
                            selected: selected_limit == limit,
                            "{label}"
                        }
                    }
                }
            }

            button {
                class: "hs-btn hs-btn--ghost hs-filter-clear",
                onclick: move |_| on_clear.call(()),
                "Clear All Filters"
            }
        }
    }
}
