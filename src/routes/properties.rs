// src/routes/properties.rs
use crate::domain::contact::{call_uri, enquiry_message, whatsapp_uri, ContactOrigin};
use crate::domain::{ListingQuery, Property};
use crate::errors::ServerError;
use crate::responses::{found, html_response, see_other, ResultResp};
use crate::router::{current_session, current_user, query_pairs, query_param};
use crate::state::AppState;
use crate::templates::pages::{property_detail_page, PropertyDetailVm};
use astra::Request;
use tracing::info;

fn find<'a>(state: &'a AppState, id: &str) -> Result<&'a Property, ServerError> {
    state.catalog.find(id).ok_or(ServerError::NotFound)
}

pub fn detail(req: &Request, state: &AppState, id: &str) -> ResultResp {
    let Some((_, flash)) = current_session(req, state)? else {
        return see_other("/login");
    };
    let property = find(state, id)?;

    let pairs = query_pairs(req);
    let back = ListingQuery::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    html_response(property_detail_page(&PropertyDetailVm {
        property,
        back: &back,
        flash,
    }))
}

pub fn call(req: &Request, state: &AppState, id: &str) -> ResultResp {
    if current_user(req, state)?.is_none() {
        return see_other("/login");
    }
    let property = find(state, id)?;

    info!(property_id = %property.id, "call dispatched");
    found(&call_uri(&property.landlord_phone))
}

pub fn whatsapp(req: &Request, state: &AppState, id: &str) -> ResultResp {
    if current_user(req, state)?.is_none() {
        return see_other("/login");
    }
    let property = find(state, id)?;

    let origin = match query_param(&query_pairs(req), "from") {
        Some("listing") => ContactOrigin::Listing,
        _ => ContactOrigin::Detail,
    };
    let message = enquiry_message(property, origin);
    let uri = whatsapp_uri(&property.landlord_phone, &message)
        .map_err(|e| ServerError::InternalError(format!("build whatsapp link: {e}")))?;

    info!(property_id = %property.id, ?origin, "whatsapp dispatched");
    found(uri.as_str())
}
