use dioxus::prelude::*;
use store::SortOption;

/// Search box and sort menu above the apartment list.
#[component]
pub fn QueryBar(
    term: String,
    sort: SortOption,
    on_term: EventHandler<String>,
    on_sort: EventHandler<SortOption>,
) -> Element {
    let selected = sort.to_string();

    rsx! {
        div {
            class: "query-bar",
            input {
                r#type: "text",
                placeholder: "Search apartments...",
                value: "{term}",
                oninput: move |evt: FormEvent| on_term.call(evt.value()),
            }
            select {
                value: "{selected}",
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<SortOption>() {
                        Ok(opt) => on_sort.call(opt),
                        Err(e) => tracing::warn!("{}", e),
                    }
                },
                {SortOption::ALL.iter().map(|opt| {
                    let value = opt.to_string();
                    let label = opt.label();
                    let is_selected = *opt == sort;
                    rsx! {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: is_selected,
                            "{label}"
                        }
                    }
                })}
            }
        }
    }
}
