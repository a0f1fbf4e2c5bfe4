// src/routes/listings.rs
use crate::domain::{apply_filter, ListingQuery, Property};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, see_other, ResultResp};
use crate::router::{current_session, current_user, query_pairs, query_param};
use crate::state::AppState;
use crate::templates::components::NavTab;
use crate::templates::pages::{listings_page, ListingsVm};
use astra::Request;
use serde::Serialize;
use tracing::debug;

fn parse_query(pairs: &[(String, String)]) -> Result<ListingQuery, ServerError> {
    Ok(ListingQuery::from_pairs(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )?)
}

pub fn listings(req: &Request, state: &AppState) -> ResultResp {
    let Some((user, flash)) = current_session(req, state)? else {
        return see_other("/login");
    };

    let pairs = query_pairs(req);
    let query = parse_query(&pairs)?;
    let results = apply_filter(state.catalog.all(), &query.filters, &query.search);
    debug!(
        search = %query.search,
        active_filters = query.filters.active_count(),
        results = results.len(),
        "listings filtered"
    );

    let vm = ListingsVm {
        user: &user,
        query: &query,
        results,
        tab: NavTab::from_param(query_param(&pairs, "tab")),
        flash,
    };
    html_response(listings_page(&vm))
}

#[derive(Debug, Serialize)]
struct ListingsPayload<'a> {
    count: usize,
    active_filters: usize,
    properties: Vec<&'a Property>,
}

/// Same filter as the listings page, as JSON.
pub fn api_properties(req: &Request, state: &AppState) -> ResultResp {
    if current_user(req, state)?.is_none() {
        return Err(ServerError::Unauthorized("sign in required".into()));
    }

    let query = parse_query(&query_pairs(req))?;
    let properties = apply_filter(state.catalog.all(), &query.filters, &query.search);

    json_response(&ListingsPayload {
        count: properties.len(),
        active_filters: query.filters.active_count(),
        properties,
    })
}
