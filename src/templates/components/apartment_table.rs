use crate::domain::apartment::{columns, format_optional, ApartmentRecord};
use maud::{html, Markup};

const TABLE_COLUMNS: [&str; 9] = [
    columns::ADDRESS,
    columns::PRICE,
    columns::BEDROOMS,
    columns::BATHROOMS,
    columns::SQFT,
    columns::CITY,
    columns::STATE,
    columns::LATITUDE,
    columns::LONGITUDE,
];

/// Filtered apartments without the Sankey columns.
pub fn apartment_table(records: &[ApartmentRecord]) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table class="apartments" {
                thead {
                    tr {
                        th {}
                        @for col in TABLE_COLUMNS {
                            th { (col) }
                        }
                    }
                }
                tbody {
                    @for (i, r) in records.iter().enumerate() {
                        tr {
                            td class="index" { (i) }
                            td { (r.address) }
                            td class="num" { (format_optional(r.price)) }
                            td class="num" { (format_optional(r.bedrooms)) }
                            td class="num" { (format_optional(r.bathrooms)) }
                            td class="num" { (format_optional(r.sqft)) }
                            td { (r.city) }
                            td { (r.state) }
                            td class="num" { (format_optional(r.latitude)) }
                            td class="num" { (format_optional(r.longitude)) }
                        }
                    }
                    @if records.is_empty() {
                        tr {
                            td colspan=(TABLE_COLUMNS.len() + 1) class="empty" {
                                "No apartments match the current filters."
                            }
                        }
                    }
                }
            }
        }
    }
}
