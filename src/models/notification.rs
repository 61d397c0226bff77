// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Inbox notifications for the current session.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SwapRequest,
    SwapAccepted,
    SwapRejected,
    ItemApproved,
    ItemRejected,
}

/// A single inbox entry. Only the `read` flag ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    /// Creation time (RFC 3339)
    pub created_at: String,
}

impl Notification {
    /// Copy of this notification with the read flag set.
    pub fn as_read(&self) -> Self {
        Self {
            read: true,
            ..self.clone()
        }
    }
}

/// Count of notifications not yet read.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_uses_snake_case_wire_names() {
        let json = serde_json::to_value(Notification {
            id: "1".to_string(),
            message: "hi".to_string(),
            kind: NotificationKind::SwapRequest,
            read: false,
            created_at: "2024-01-19T15:30:00Z".to_string(),
        })
        .unwrap();

        assert_eq!(json["type"], "swap_request");
        assert_eq!(json["createdAt"], "2024-01-19T15:30:00Z");
    }
}
