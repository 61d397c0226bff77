// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application routes and the navigation port views use to move between them.

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

use crate::models::User;
use crate::services::session::SessionState;

/// Named application paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Browse,
    AddItem,
    Dashboard,
    Profile,
    Admin,
    Item(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Browse => "/browse".to_string(),
            Route::AddItem => "/add-item".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Item(id) => format!("/item/{id}"),
        }
    }

    /// Parse a path back into a route.
    pub fn parse(path: &str) -> Option<Self> {
        let route = match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/browse" => Route::Browse,
            "/add-item" => Route::AddItem,
            "/dashboard" => Route::Dashboard,
            "/profile" => Route::Profile,
            "/admin" => Route::Admin,
            _ => {
                let id = path.strip_prefix("/item/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::Item(id.to_string())
            }
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Routing capability handed to views.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
    fn current_path(&self) -> String;

    fn is_active(&self, route: &Route) -> bool {
        self.current_path() == route.path()
    }
}

/// Navigator that records history in memory.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: Mutex::new(vec![start]),
        }
    }

    /// Every route visited, starting route first.
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn current(&self) -> Route {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
            .unwrap_or(Route::Home)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = %route, "Navigating");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(route);
    }

    fn current_path(&self) -> String {
        self.current().path()
    }
}

// ─── Navigation Bar ──────────────────────────────────────────

/// A link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

/// What the navigation bar shows for the current session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavBar {
    pub links: Vec<NavLink>,
    /// Unread badge; `None` when there is nothing unread or no user
    pub unread: Option<usize>,
    /// Point balance shown next to the user menu
    pub points: Option<u32>,
}

fn link(label: &'static str, route: Route, nav: &dyn Navigator) -> NavLink {
    NavLink {
        label,
        active: nav.is_active(&route),
        path: route.path(),
    }
}

/// Build the navigation bar from session state.
pub fn nav_bar(state: &SessionState, nav: &dyn Navigator) -> NavBar {
    let mut links = vec![link("Browse Items", Route::Browse, nav)];

    match &state.current_user {
        Some(User { points, .. }) => {
            links.push(link("List Item", Route::AddItem, nav));
            links.push(link("Dashboard", Route::Dashboard, nav));
            let unread = state.unread_count();
            NavBar {
                links,
                unread: (unread > 0).then_some(unread),
                points: Some(*points),
            }
        }
        None => {
            links.push(link("Login", Route::Login, nav));
            links.push(link("Start Swapping", Route::Signup, nav));
            NavBar {
                links,
                unread: None,
                points: None,
            }
        }
    }
}

/// Log out and return to the home page.
pub fn logout(session: &crate::services::SessionStore, nav: &dyn Navigator) {
    session.logout();
    nav.navigate(Route::Home);
}
