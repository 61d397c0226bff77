// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session and view logic.

pub mod admin;
pub mod badges;
pub mod browse;
pub mod clock;
pub mod context;
pub mod dashboard;
pub mod item_detail;
pub mod listing;
pub mod login;
pub mod session;
pub mod token;
pub mod try_on;

pub use admin::AdminPanel;
pub use browse::{BrowseView, ItemFilter};
pub use clock::{Clock, ManualClock, SystemClock};
pub use context::{current_session, with_session};
pub use item_detail::{ItemDetailView, RedeemOutcome};
pub use listing::ListingService;
pub use login::{LoginForm, LoginOutcome};
pub use session::{SessionState, SessionStore};
