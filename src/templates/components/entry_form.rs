use maud::{html, Markup};

/// Sidebar form appending one row to the coordinates file.
/// Source and Target suggest the known stages but accept new ones.
/// They start on the first two stages so an untouched form isn't a self-loop.
pub fn entry_form(stages: &[String]) -> Markup {
    let default_target = stages.get(1).or(stages.first());

    html! {
        h2 { "Add New Entry" }
        form method="post" action="/entries" class="entry-form" {
            datalist id="stages" {
                @for stage in stages {
                    option value=(stage) {}
                }
            }

            label for="source" { "Source" }
            input type="text" id="source" name="source" list="stages" required
                value=[stages.first()];

            label for="target" { "Target" }
            input type="text" id="target" name="target" list="stages" required
                value=[default_target];

            (number_field("value", "Value", "1", Some("1"), None, "1"))

            label for="address" { "Address" }
            input type="text" id="address" name="address" required;

            (number_field("price", "Price", "0", Some("0"), None, "1"))
            (number_field("num_bedrooms", "Number of Bedrooms", "0", Some("0"), None, "1"))
            (number_field("num_bathrooms", "Number of Bathrooms", "0", Some("0"), None, "0.5"))
            (number_field("sqft", "Square Feet", "0", Some("0"), None, "1"))

            label for="city" { "City" }
            input type="text" id="city" name="city";

            label for="state" { "State" }
            input type="text" id="state" name="state";

            (number_field("latitude", "Latitude", "0", Some("-90"), Some("90"), "any"))
            (number_field("longitude", "Longitude", "0", Some("-180"), Some("180"), "any"))

            button type="submit" class="primary" { "Add Entry" }
        }
    }
}

fn number_field(
    name: &str,
    label: &str,
    value: &str,
    min: Option<&str>,
    max: Option<&str>,
    step: &str,
) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="number" id=(name) name=(name) value=(value) min=[min] max=[max] step=(step) required;
    }
}
