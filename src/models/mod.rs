// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod badge;
pub mod impact;
pub mod item;
pub mod notification;
pub mod user;

pub use badge::{Badge, BadgeDefinition, CATALOG};
pub use impact::SustainabilityImpact;
pub use item::{Item, ItemStatus, NewItem, Uploader};
pub use notification::{Notification, NotificationKind};
pub use user::{User, UserRecord, UserUpdate};
