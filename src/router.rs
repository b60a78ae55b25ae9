use crate::domain::{ListingSource, PropertyTypeFilter};
use crate::errors::ServerError;
use crate::market::{fetch_market_insights, MarketSource};
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::templates::pages::{index_page, IndexVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{error, info, warn};

/// Everything a request handler needs: where listings come from, where market
/// data comes from, and which suburb to show when none is given.
pub struct App<L, M> {
    pub default_suburb: String,
    pub listings: L,
    pub market: M,
}

impl<L: ListingSource, M: MarketSource> App<L, M> {
    pub fn new(default_suburb: impl Into<String>, listings: L, market: M) -> Self {
        Self {
            default_suburb: default_suburb.into(),
            listings,
            market,
        }
    }
}

pub fn handle<L, M>(req: Request, app: &App<L, M>) -> ResultResp
where
    L: ListingSource,
    M: MarketSource,
{
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("POST", "/") => index(req, app),
        _ => {
            info!(%method, %path, "no route");
            Err(ServerError::NotFound)
        }
    }
}

/// The resolved inputs of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub suburb: String,
    pub filter: PropertyTypeFilter,
}

impl SearchParams {
    /// Form fields win over the query string. An empty value counts as missing;
    /// a suburb that is blank after trimming becomes the default.
    pub fn resolve(
        form: &HashMap<String, String>,
        query: &HashMap<String, String>,
        default_suburb: &str,
    ) -> Self {
        let pick = |key: &str| {
            form.get(key)
                .filter(|v| !v.is_empty())
                .or_else(|| query.get(key).filter(|v| !v.is_empty()))
                .map(String::as_str)
        };

        let suburb = match pick("suburb").map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default_suburb.to_string(),
        };
        let filter = PropertyTypeFilter::parse_lenient(pick("property_type"));

        Self { suburb, filter }
    }
}

fn index<L, M>(mut req: Request, app: &App<L, M>) -> ResultResp
where
    L: ListingSource,
    M: MarketSource,
{
    let query = parse_query(&req);
    let form = if req.method().as_str() == "POST" {
        parse_form(&mut req)?
    } else {
        HashMap::new()
    };

    let SearchParams { suburb, filter } = SearchParams::resolve(&form, &query, &app.default_suburb);
    info!(%suburb, property_type = %filter, "search");

    let vm = match app.listings.fetch_properties(&suburb, filter) {
        Ok(listings) => {
            let insights = match fetch_market_insights(&app.market, &suburb, filter) {
                Ok(insights) => Some(insights),
                Err(e) => {
                    warn!(%suburb, error = %e, "market insights unavailable");
                    None
                }
            };

            IndexVm {
                suburb,
                filter,
                listings: Some(listings),
                insights,
                error: None,
            }
        }
        Err(e) => {
            error!(%suburb, error = %e, "listing fetch failed");
            IndexVm {
                suburb,
                filter,
                listings: None,
                insights: None,
                error: Some(e.to_string()),
            }
        }
    };

    html_response(index_page(&vm))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| decode_pairs(q.as_bytes()))
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(decode_pairs(&body))
}

// First occurrence of a key wins.
fn decode_pairs(raw: &[u8]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (k, v) in url::form_urlencoded::parse(raw) {
        map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
    }
    map
}
