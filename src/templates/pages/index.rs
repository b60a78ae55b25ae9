// templates/pages/index.rs

use crate::domain::property::format_currency;
use crate::domain::{PropertyRecord, PropertyTypeFilter};
use crate::market::MarketInsights;
use crate::templates::{
    components::{card, trend_badge},
    desktop_layout,
};
use maud::{html, Markup};

pub struct IndexVm {
    pub suburb: String,
    pub filter: PropertyTypeFilter,
    pub listings: Option<Vec<PropertyRecord>>,
    pub insights: Option<MarketInsights>,
    pub error: Option<String>,
}

pub fn index_page(vm: &IndexVm) -> Markup {
    desktop_layout(
        &format!("Properties in {}", vm.suburb),
        html! {
            main class="container" {
                h1 { "Properties in " (vm.suburb) }

                (search_form(&vm.suburb, vm.filter))

                @if let Some(error) = &vm.error {
                    div class="card error" {
                        h2 { "Something went wrong" }
                        p { "We couldn't load data for this suburb. Please try again." }
                        p class="muted" { (error) }
                    }
                }

                @if vm.error.is_none() {
                    (insights_section(vm.insights.as_ref()))
                }

                @if let Some(listings) = &vm.listings {
                    (listings_section(listings))
                }
            }
        },
    )
}

fn search_form(suburb: &str, filter: PropertyTypeFilter) -> Markup {
    html! {
        form class="search card" method="post" action="/" {
            label for="suburb" { "Suburb" }
            input type="text" id="suburb" name="suburb" value=(suburb) placeholder="e.g. Belmont North";

            label for="property_type" { "Type" }
            select id="property_type" name="property_type" {
                @for opt in PropertyTypeFilter::VALID_OPTIONS {
                    option value=(opt) selected[filter.as_str() == opt] { (title_case(opt)) }
                }
            }

            button type="submit" { "Search" }
        }
    }
}

fn insights_section(insights: Option<&MarketInsights>) -> Markup {
    html! {
        section {
            h2 { "Market insights" }
            @match insights {
                Some(m) => div class="stats" {
                    (card("Vacancy rate", html! {
                        p class="stat-value" { (format!("{:.1}%", m.vacancy.rate)) }
                        p {
                            (trend_badge(m.vacancy.trend_text))
                            " " span class="muted" { (format!("({:+.2} pts)", m.vacancy.trend)) }
                        }
                    }))
                    (card("Median price", html! {
                        p class="stat-value" { (format_currency(m.price.value.round() as i64)) }
                        p {
                            (trend_badge(m.price.trend_text))
                            " " span class="muted" { (format!("({:+.1}%)", m.price.trend)) }
                        }
                    }))
                },
                None => p class="muted" { "Market insights are unavailable right now." },
            }
        }
    }
}

fn listings_section(listings: &[PropertyRecord]) -> Markup {
    html! {
        section {
            h2 { "Listings" }
            p class="muted" { "Found " strong { (listings.len()) } " properties." }

            @if listings.is_empty() {
                p { "No properties match this filter." }
            } @else {
                div class="listings" {
                    @for record in listings {
                        (card(&record.address, html! {
                            p class="stat-value" { (record.price) }
                            p {
                                (title_case(record.property_type.as_str())) " · "
                                (record.bedrooms) " bed · "
                                (record.bathrooms) " bath · "
                                (record.parking) " car"
                            }
                            p class="muted" { (record.description) }
                        }))
                    }
                }
            }
        }
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
