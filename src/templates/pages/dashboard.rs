use crate::charts::Sankey;
use crate::config::MapConfig;
use crate::domain::apartment::ApartmentRecord;
use crate::domain::filter::{FilterBounds, FilterState};
use crate::templates::components::apartment_table::apartment_table;
use crate::templates::components::entry_form::entry_form;
use crate::templates::components::filter_form::filter_form;
use crate::templates::components::histograms::{histogram_panels, histogram_row, HistogramPanel};
use crate::templates::components::map::apartment_map;
use crate::templates::components::{card, flash};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub sankey: Sankey,
    pub histograms: Vec<HistogramPanel>,
    pub bounds: FilterBounds,
    pub filters: FilterState,
    pub filtered: Vec<ApartmentRecord>,
    pub map: MapConfig,
    pub total_records: usize,
    /// Set after a successful add-entry redirect.
    pub added: bool,
}

impl DashboardVm {
    pub fn new(
        records: &[ApartmentRecord],
        bounds: FilterBounds,
        filters: FilterState,
        map: MapConfig,
        added: bool,
    ) -> Self {
        Self {
            sankey: Sankey::from_records(records),
            histograms: histogram_panels(records),
            filtered: filters.apply(records),
            bounds,
            filters,
            map,
            total_records: records.len(),
            added,
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let sidebar = html! {
        @if vm.added {
            (flash("New entry added!"))
        }
        (entry_form(&vm.sankey.nodes))
    };

    desktop_layout(
        "Apartment Shopping Process Dashboard",
        Some(sidebar),
        html! {
            main class="container" {
                h1 { "Apartment Shopping Process Dashboard" }

                section class="card wide" id="sankey" {
                    h3 { "Apartment Shopping Process" }
                    (vm.sankey.render(1200.0, 520.0))
                }

                h1 { "Additional Data Analysis" }
                (histogram_row(&vm.histograms))

                h1 { "Filter Apartments" }
                (filter_form(&vm.bounds, &vm.filters))

                (card("Filtered Apartments", html! {
                    p class="muted" {
                        (vm.filtered.len()) " unique apartments from " (vm.total_records) " rows. "
                        a href=(format!("/export.xlsx?{}", vm.filters.to_query())) { "Download as Excel" }
                    }
                    (apartment_table(&vm.filtered))
                }))

                (card("Map of Filtered Apartments", apartment_map(&vm.filtered, &vm.map)))
            }
        },
    )
}
