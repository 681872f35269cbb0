use crate::charts::histogram::{self, Bin, DEFAULT_BINS};
use crate::charts::palette::{INDIGO, LAVENDER, THISTLE, VIOLET};
use crate::domain::apartment::ApartmentRecord;
use maud::{html, Markup};

pub struct HistogramPanel {
    pub title: &'static str,
    pub color: &'static str,
    pub bins: Vec<Bin>,
}

impl HistogramPanel {
    fn new(
        title: &'static str,
        color: &'static str,
        records: &[ApartmentRecord],
        field: fn(&ApartmentRecord) -> Option<f64>,
    ) -> Self {
        let values: Vec<f64> = records.iter().filter_map(field).collect();
        Self {
            title,
            color,
            bins: histogram::bin_values(&values, DEFAULT_BINS),
        }
    }
}

/// Price, Bedrooms, Bathrooms and Square Feet, over every record.
pub fn histogram_panels(records: &[ApartmentRecord]) -> Vec<HistogramPanel> {
    vec![
        HistogramPanel::new("Price", VIOLET, records, |r| r.price),
        HistogramPanel::new("Bedrooms", INDIGO, records, |r| r.bedrooms),
        HistogramPanel::new("Bathrooms", LAVENDER, records, |r| r.bathrooms),
        HistogramPanel::new("Square Feet", THISTLE, records, |r| r.sqft),
    ]
}

pub fn histogram_row(panels: &[HistogramPanel]) -> Markup {
    html! {
        div class="grid four" {
            @for panel in panels {
                section class="card histogram-card" {
                    h3 { (panel.title) }
                    (histogram::render(&panel.bins, panel.color, 240.0, 160.0))
                }
            }
        }
    }
}
