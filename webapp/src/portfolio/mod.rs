use dioxus::prelude::*;

use site::{
    config::stagger_delay,
    portfolio::{CATEGORIES, PortfolioFilter},
};

pub mod card;
use card::ProjectCard;

mod detail;
pub use detail::ProjectDetail;

#[derive(Clone, PartialEq, Props)]
struct FilterBarProps {
    filter_signal: Signal<PortfolioFilter>,
}

#[component]
fn FilterBar(props: FilterBarProps) -> Element {
    let mut filter_signal = props.filter_signal;
    let filter = filter_signal();

    rsx! {
        div { class: "filter-buttons",
            for category in CATEGORIES {
                button {
                    key: "{category}",
                    class: if filter.is_selected(category) { "filter-button active" } else { "filter-button" },
                    onclick: move |_| filter_signal.with_mut(|f| f.set_filter(category)),
                    "{category}"
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
// the filter is local to the page, so leaving the listing and coming back
// resets it to "all"
#[component]
pub fn Portfolio() -> Element {
    let filter_signal = use_signal(PortfolioFilter::new);
    let visible = filter_signal.read().visible_projects();
    let active = filter_signal.read().active().to_owned();

    rsx! {
        section { class: "portfolio-section",
            div { class: "container",
                div { class: "page-header",
                    h1 { class: "reveal", "Portfolio" }
                    p { class: "reveal", style: "animation-delay: 0.1s;",
                        "Selected works and creative projects"
                    }
                }

                FilterBar { filter_signal }

                if visible.is_empty() {
                    div { class: "empty-state", "No projects in this category yet." }
                } else {
                    div { class: "project-grid",
                        for (index , project) in visible.iter().enumerate() {
                            ProjectCard {
                                key: "{active}-{project.id}",
                                project_id: project.id,
                                delay: stagger_delay(index),
                            }
                        }
                    }
                }
            }
        }
    }
}
