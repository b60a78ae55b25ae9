// src/tests/router_tests/index_tests.rs

use crate::domain::{MockListings, PropertyTypeFilter};
use crate::errors::ServerError;
use crate::market::Metric;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, BrokenListings, DownMarket, StaticMarket};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn healthy_app() -> App<MockListings, StaticMarket> {
    App::new(
        "Belmont North",
        MockListings,
        StaticMarket::new(&[0.05, 0.06], &[800_000.0, 760_000.0]),
    )
}

#[test]
fn default_search_renders_listings_and_insights() {
    let app = healthy_app();

    let mut resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));

    let body = body_string(&mut resp);
    assert!(body.contains("Properties in Belmont North"));
    for i in 1..=5 {
        assert!(body.contains(&format!("{i} Smith Street, Belmont North")));
    }
    assert!(body.contains("$550,000"));
    assert!(body.contains("$750,000"));

    assert!(body.contains("6.0%"));
    assert!(body.contains("Increasing from last month"));
    assert!(body.contains("$760,000"));
    assert!(body.contains("Decreasing from last month"));
}

#[test]
fn query_string_selects_suburb_and_type() {
    let app = healthy_app();

    let mut resp = handle(get("/?suburb=Merewether&property_type=house"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("2 Smith Street, Merewether"));
    assert!(body.contains("4 Smith Street, Merewether"));
    assert!(!body.contains("1 Smith Street, Merewether"));
    assert!(!body.contains("3 Smith Street, Merewether"));

    let calls = app.market.calls.borrow();
    assert_eq!(
        *calls,
        vec![
            ("Merewether".to_string(), Metric::Vacancy, PropertyTypeFilter::House),
            ("Merewether".to_string(), Metric::Price, PropertyTypeFilter::House),
        ]
    );
}

#[test]
fn posted_form_wins_over_query() {
    let app = healthy_app();

    let req = post_form("/?suburb=Adamstown", "suburb=New+Lambton&property_type=unit");
    let mut resp = handle(req, &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("1 Smith Street, New Lambton"));
    assert!(!body.contains("Adamstown"));
    assert!(!body.contains("2 Smith Street, New Lambton"));
}

#[test]
fn invalid_type_is_normalised_to_all() {
    let app = healthy_app();

    let mut resp = handle(get("/?property_type=mansion"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("5 Smith Street, Belmont North"));
    assert!(body.contains(r#"<option value="all" selected>"#));
}

#[test]
fn failed_insights_still_show_listings() {
    let app = App::new("Belmont North", MockListings, DownMarket);

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("1 Smith Street, Belmont North"));
    assert!(body.contains("Market insights are unavailable right now."));
    assert!(!body.contains("Something went wrong"));
}

#[test]
fn failed_listings_show_a_single_error() {
    let app = App::new(
        "Belmont North",
        BrokenListings,
        StaticMarket::new(&[0.05], &[700_000.0]),
    );

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Something went wrong"));
    assert!(body.contains("listing database offline"));
    assert!(!body.contains("Smith Street"));
    assert!(!body.contains("Vacancy rate"));
    assert!(app.market.calls.borrow().is_empty());
}

#[test]
fn unknown_route_is_not_found() {
    let app = healthy_app();

    let result = handle(get("/admin"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));

    let result = handle(
        Request::builder()
            .method(Method::DELETE)
            .uri("/")
            .body(Body::empty())
            .unwrap(),
        &app,
    );
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn not_found_renders_an_error_page() {
    let mut resp = crate::responses::html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    let body = body_string(&mut resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Back to search"));
}
