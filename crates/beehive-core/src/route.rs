//! Site route table.
//!
//! The router in `app` mirrors these paths; the shell navigation, document
//! titles and the server sitemap are all derived from here.

use std::{fmt, str::FromStr};

use crate::error::{CoreError, Result};

/// One of the eight client-side routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Facilities,
    Destinations,
    Activities,
    Gallery,
    Tariff,
    Booking,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Facilities,
        Route::Destinations,
        Route::Activities,
        Route::Gallery,
        Route::Tariff,
        Route::Booking,
        Route::Contact,
    ];

    /// Routes linked from the header bar.
    pub const HEADER: [Route; 6] = [
        Route::Home,
        Route::Facilities,
        Route::Destinations,
        Route::Activities,
        Route::Gallery,
        Route::Tariff,
    ];

    /// Absolute path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Facilities => "/facilities",
            Route::Destinations => "/destinations",
            Route::Activities => "/activities",
            Route::Gallery => "/gallery",
            Route::Tariff => "/tariff",
            Route::Booking => "/booking",
            Route::Contact => "/contact",
        }
    }

    /// Path segment as the router declares it (empty for home).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Label used in navigation links.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Facilities => "Stay",
            Route::Destinations => "Wander",
            Route::Activities => "Life",
            Route::Gallery => "Gallery",
            Route::Tariff => "Pricing",
            Route::Booking => "Booking",
            Route::Contact => "Contact",
        }
    }

    /// Document title for the route.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "BeeHive Resort Wayanad",
            Route::Facilities => "Stay | BeeHive Resort Wayanad",
            Route::Destinations => "Wander | BeeHive Resort Wayanad",
            Route::Activities => "Life at Hive | BeeHive Resort Wayanad",
            Route::Gallery => "Gallery | BeeHive Resort Wayanad",
            Route::Tariff => "Pricing | BeeHive Resort Wayanad",
            Route::Booking => "Reservation | BeeHive Resort Wayanad",
            Route::Contact => "Contact | BeeHive Resort Wayanad",
        }
    }

    /// Resolve a location path to a route.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Whether `current_path` points at this route.
    pub fn is_active(self, current_path: &str) -> bool {
        Route::from_path(current_path) == Some(self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_path(s).ok_or_else(|| CoreError::unknown_route(s))
    }
}
