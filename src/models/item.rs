// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Clothing listings and the validated add-item submission.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Categories offered by the add-item form.
pub const LISTING_CATEGORIES: &[&str] = &[
    "Tops",
    "Bottoms",
    "Dresses",
    "Outerwear",
    "Accessories",
    "Shoes",
];
/// Types offered by the add-item form.
pub const LISTING_TYPES: &[&str] = &["Casual", "Formal", "Sports", "Party", "Work", "Vintage"];
/// Sizes offered by the add-item form.
pub const LISTING_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL", "One Size"];
/// Conditions offered by the add-item form.
pub const LISTING_CONDITIONS: &[&str] = &["Like New", "Excellent", "Good", "Fair"];

/// Maximum images per listing.
pub const MAX_IMAGES: usize = 5;

/// Listing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Submitted, awaiting admin approval
    Pending,
    Available,
    Swapped,
    Redeemed,
}

/// Public profile of whoever listed an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Uploader {
    /// Owning user id, when the uploader is a known account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub join_date: String,
    pub rating: f32,
}

/// A clothing listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub size: String,
    pub condition: String,
    pub tags: Vec<String>,
    /// Pre-existing image URLs
    pub images: Vec<String>,
    pub uploader: Uploader,
    pub status: ItemStatus,
    pub liked_by: Vec<String>,
    pub created_at: String,
}

impl Item {
    /// Whether `user_id` listed this item.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.uploader.id.as_deref() == Some(user_id)
    }
}

/// Add-item form contents, validated before submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[validate(
        custom(function = "required", message = "Title is required"),
        length(min = 3, message = "Title must be at least 3 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = "required", message = "Description is required"),
        length(min = 10, message = "Description must be at least 10 characters")
    )]
    pub description: String,
    #[validate(custom(function = "listing_category", message = "Category is required"))]
    pub category: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "listing_type", message = "Type is required"))]
    pub item_type: String,
    #[validate(custom(function = "listing_size", message = "Size is required"))]
    pub size: String,
    #[validate(custom(function = "listing_condition", message = "Condition is required"))]
    pub condition: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(
        min = 1,
        max = 5,
        message = "Between 1 and 5 images are required"
    ))]
    pub images: Vec<String>,
}

impl NewItem {
    /// Tags trimmed, lowercased and de-duplicated, blanks dropped.
    pub fn normalized_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn one_of(value: &str, options: &[&str]) -> Result<(), ValidationError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("one_of"))
    }
}

fn listing_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, LISTING_CATEGORIES)
}

fn listing_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, LISTING_TYPES)
}

fn listing_size(value: &str) -> Result<(), ValidationError> {
    one_of(value, LISTING_SIZES)
}

fn listing_condition(value: &str) -> Result<(), ValidationError> {
    one_of(value, LISTING_CONDITIONS)
}
