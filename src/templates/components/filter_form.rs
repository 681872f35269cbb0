use crate::domain::filter::{FilterBounds, FilterState, RangeFilter};
use maud::{html, Markup};

pub fn filter_form(bounds: &FilterBounds, state: &FilterState) -> Markup {
    html! {
        form method="get" action="/" class="filters" {
            input type="hidden" name="applied" value="1";

            (range_field("price", "Price Range", bounds.price, state.price))
            (range_field("bedrooms", "Number of Bedrooms", bounds.bedrooms, state.bedrooms))
            (range_field("bathrooms", "Number of Bathrooms", bounds.bathrooms, state.bathrooms))
            (range_field("sqft", "Square Feet", bounds.sqft, state.sqft))

            fieldset class="filter cities" {
                legend { "Select Cities" }
                @for city in &bounds.cities {
                    label class="checkbox" {
                        input
                            type="checkbox"
                            name="city"
                            value=(city)
                            checked[state.cities.contains(city)];
                        " " (city)
                    }
                }
            }

            div class="filter-actions" {
                button type="submit" class="primary" { "Apply filters" }
                a href="/" { "Reset" }
            }
        }
    }
}

fn range_field(name: &str, label: &str, bounds: RangeFilter, current: RangeFilter) -> Markup {
    html! {
        fieldset class="filter range" {
            legend { (label) }
            input
                type="number"
                name=(format!("{name}_min"))
                aria-label=(format!("{label} minimum"))
                min=(bounds.min)
                max=(bounds.max)
                value=(current.min);
            span { " – " }
            input
                type="number"
                name=(format!("{name}_max"))
                aria-label=(format!("{label} maximum"))
                min=(bounds.min)
                max=(bounds.max)
                value=(current.max);
        }
    }
}
