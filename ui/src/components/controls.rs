use dioxus::prelude::*;

use api::catalog::{self, IndicatorGroup};
use api::dataset::Selection;

/// Sidebar with the three selection widgets: X-axis indicator (single choice),
/// Y-axis indicators (multi choice), and the country filter. Widget labels come
/// from the catalog; the values written into the selection are raw keys.
#[component]
pub fn ControlPanel(mut selection: Signal<Selection>, countries: Vec<String>) -> Element {
    let current = selection();

    rsx! {
        aside { class: "controls",
            h2 { class: "controls__title", "Analysis settings" }

            label { class: "controls__label", r#for: "x-axis", "X-axis indicator" }
            select {
                id: "x-axis",
                class: "controls__select",
                onchange: move |evt| selection.with_mut(|s| s.x_axis = evt.value()),
                for group in IndicatorGroup::ALL {
                    optgroup { label: group.label(),
                        for indicator in catalog::INDICATORS.iter().filter(|i| i.group == group) {
                            option {
                                value: indicator.key,
                                selected: current.x_axis == indicator.key,
                                "{indicator.label}"
                            }
                        }
                    }
                }
            }

            fieldset { class: "controls__group",
                legend { class: "controls__label", "Y-axis indicators (multi-select)" }
                for group in IndicatorGroup::ALL {
                    span { class: "controls__group-name", {group.label()} }
                    for indicator in catalog::INDICATORS.iter().filter(|i| i.group == group) {
                        {y_axis_checkbox(selection, indicator.key, indicator.label, &current)}
                    }
                }
            }

            h3 { class: "controls__title", "Data filter" }
            fieldset { class: "controls__group",
                legend { class: "controls__label", "Countries/regions" }
                if countries.is_empty() {
                    p { class: "controls__placeholder", "Country list loads with the dataset." }
                }
                for country in countries.iter() {
                    {country_checkbox(selection, country.clone(), &current)}
                }
            }
        }
    }
}

fn y_axis_checkbox(
    mut selection: Signal<Selection>,
    key: &'static str,
    label: &'static str,
    current: &Selection,
) -> Element {
    let checked = current.y_axes.iter().any(|selected| selected == key);
    rsx! {
        label { class: "controls__option",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| selection.with_mut(|s| s.toggle_y(key)),
            }
            span { "{label}" }
        }
    }
}

fn country_checkbox(
    mut selection: Signal<Selection>,
    country: String,
    current: &Selection,
) -> Element {
    let checked = current.countries.iter().any(|selected| selected == &country);
    let display = country.clone();
    rsx! {
        label { class: "controls__option",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| selection.with_mut(|s| s.toggle_country(&country)),
            }
            span { "{display}" }
        }
    }
}
