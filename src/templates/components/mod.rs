use crate::market::TrendDirection;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn trend_badge(direction: TrendDirection) -> Markup {
    let class = match direction {
        TrendDirection::Increasing => "trend-up",
        TrendDirection::Decreasing => "trend-down",
        TrendDirection::Stable => "trend-flat",
    };

    html! {
        span class=(class) { (direction.text()) }
    }
}
