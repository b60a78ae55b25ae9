// src/tests/utils.rs

use crate::domain::{ListingSource, ListingsError, PropertyRecord, PropertyTypeFilter};
use crate::market::{InsightsError, MarketSource, Metric, SeriesPoint};
use astra::Response;
use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

pub fn points(values: &[f64]) -> Vec<SeriesPoint> {
    values.iter().map(|&value| SeriesPoint { value }).collect()
}

/// Reads a response body into a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Market source that serves fixed series and records every call.
pub struct StaticMarket {
    pub vacancy: Vec<f64>,
    pub price: Vec<f64>,
    pub calls: RefCell<Vec<(String, Metric, PropertyTypeFilter)>>,
}

impl StaticMarket {
    pub fn new(vacancy: &[f64], price: &[f64]) -> Self {
        Self {
            vacancy: vacancy.to_vec(),
            price: price.to_vec(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MarketSource for StaticMarket {
    fn fetch_series(
        &self,
        suburb: &str,
        metric: Metric,
        filter: PropertyTypeFilter,
    ) -> Result<Vec<SeriesPoint>, InsightsError> {
        self.calls
            .borrow_mut()
            .push((suburb.to_string(), metric, filter));
        Ok(match metric {
            Metric::Vacancy => points(&self.vacancy),
            Metric::Price => points(&self.price),
        })
    }
}

/// Market source whose every request fails at the transport level.
pub struct DownMarket;

impl MarketSource for DownMarket {
    fn fetch_series(
        &self,
        _suburb: &str,
        _metric: Metric,
        _filter: PropertyTypeFilter,
    ) -> Result<Vec<SeriesPoint>, InsightsError> {
        Err(InsightsError::Network("connection refused".into()))
    }
}

pub struct BrokenListings;

impl ListingSource for BrokenListings {
    fn fetch_properties(
        &self,
        _suburb: &str,
        _filter: PropertyTypeFilter,
    ) -> Result<Vec<PropertyRecord>, ListingsError> {
        Err(ListingsError::Unavailable("listing database offline".into()))
    }
}

/// A one-shot HTTP listener on an ephemeral port. Replies to each incoming
/// connection with the next canned `(status, body)` and keeps the raw request head.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn spawn(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/market", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };

                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                seen.lock()
                    .unwrap()
                    .push(String::from_utf8_lossy(&head).into_owned());

                let reason = if status == 200 { "OK" } else { "Error" };
                let reply = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            url,
            requests,
            handle: Some(handle),
        }
    }

    /// Request heads received so far, lowercased for easy header matching.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.to_lowercase())
            .collect()
    }

    pub fn join(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests()
    }
}
