use crate::domain::ListingQuery;
use maud::{html, Markup};

/// Bottom navigation tabs. Only the highlight changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTab {
    Help,
    #[default]
    Listings,
    Settings,
}

impl NavTab {
    const ALL: [NavTab; 3] = [NavTab::Help, NavTab::Listings, NavTab::Settings];

    pub fn param(&self) -> &'static str {
        match self {
            NavTab::Help => "help",
            NavTab::Listings => "listings",
            NavTab::Settings => "settings",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NavTab::Help => "Help Center",
            NavTab::Listings => "Listings",
            NavTab::Settings => "Settings",
        }
    }

    /// Unknown values fall back to the listings tab.
    pub fn from_param(value: Option<&str>) -> Self {
        NavTab::ALL
            .into_iter()
            .find(|t| Some(t.param()) == value)
            .unwrap_or_default()
    }
}

/// Switching tabs keeps the current search and filters.
pub fn tab_href(query: &ListingQuery, tab: NavTab) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        format!("/listings?tab={}", tab.param())
    } else {
        format!("/listings?{qs}&tab={}", tab.param())
    }
}

pub fn bottom_nav(query: &ListingQuery, active: NavTab) -> Markup {
    html! {
        nav class="bottom-nav" {
            @for tab in NavTab::ALL {
                a.active[tab == active] href=(tab_href(query, tab)) { (tab.label()) }
            }
        }
    }
}
