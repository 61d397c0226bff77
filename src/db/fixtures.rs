//! Seed data for the mock backend and the demo views.

use crate::models::badge::{self, Badge, CATALOG};
use crate::models::{
    Item, ItemStatus, Notification, NotificationKind, SustainabilityImpact, Uploader, User,
    UserRecord,
};
use crate::services::admin::{
    AccountStatus, ListingRecord, ListingStatus, ManagedUser, OrderStatus, SwapOrder,
};
use crate::services::dashboard::{ActiveSwap, CompletedSwap, SwapDirection, UserListing};

/// Credentialed demo accounts.
pub fn user_records() -> Vec<UserRecord> {
    let admin_badges = badge::reconcile(&[
        Badge::earned(&CATALOG[0], "2024-01-10"),
        Badge::earned(&CATALOG[2], "2024-01-15"),
    ]);

    vec![
        UserRecord::new(
            User {
                id: "1".to_string(),
                email: "admin@rewear.com".to_string(),
                username: "Admin".to_string(),
                points: 1000,
                join_date: "2024-01-01".to_string(),
                is_admin: true,
                badges: admin_badges,
                sustainability_impact: SustainabilityImpact {
                    total_swaps: 8,
                    co2_saved: 21.6,
                    water_saved: 21_600.0,
                    textile_waste_prevented: 4.8,
                },
            },
            "SecurePass123!",
        ),
        UserRecord::new(
            User {
                id: "2".to_string(),
                email: "user@example.com".to_string(),
                username: "EcoFashionista".to_string(),
                points: 150,
                join_date: "2024-01-15".to_string(),
                is_admin: false,
                badges: badge::catalog_badges(),
                sustainability_impact: SustainabilityImpact {
                    total_swaps: 2,
                    co2_saved: 5.4,
                    water_saved: 5_400.0,
                    textile_waste_prevented: 1.2,
                },
            },
            "password123",
        ),
    ]
}

/// Inbox every session starts with; both entries unread.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            message: "Your item \"Vintage Denim Jacket\" has been approved!".to_string(),
            kind: NotificationKind::ItemApproved,
            read: false,
            created_at: "2024-01-20T10:00:00Z".to_string(),
        },
        Notification {
            id: "2".to_string(),
            message: "You have a new swap request for your \"Summer Dress\"".to_string(),
            kind: NotificationKind::SwapRequest,
            read: false,
            created_at: "2024-01-19T15:30:00Z".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    item_type: &str,
    size: &str,
    condition: &str,
    tags: &[&str],
    image: &str,
    uploader: (&str, &str, f32),
    liked_by: &[&str],
    created_at: &str,
) -> Item {
    let (username, join_date, rating) = uploader;
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        item_type: item_type.to_string(),
        size: size.to_string(),
        condition: condition.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        images: vec![image.to_string()],
        uploader: Uploader {
            id: None,
            username: username.to_string(),
            join_date: join_date.to_string(),
            rating,
        },
        status: ItemStatus::Available,
        liked_by: liked_by.iter().map(|u| u.to_string()).collect(),
        created_at: created_at.to_string(),
    }
}

/// Listings shown on the browse page.
pub fn items() -> Vec<Item> {
    let mut jacket = item(
        "1",
        "Vintage Denim Jacket",
        "Classic blue denim jacket in excellent condition. Perfect for any casual outfit.",
        "Outerwear",
        "Casual",
        "M",
        "Excellent",
        &["vintage", "denim", "casual"],
        "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400",
        ("EcoFashionista", "2024-01-15", 4.8),
        &["user1", "user2"],
        "2024-01-20",
    );
    jacket.uploader.id = Some("2".to_string());
    jacket.images.extend([
        "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=800".to_string(),
        "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800".to_string(),
    ]);

    vec![
        jacket,
        item(
            "2",
            "Summer Floral Dress",
            "Beautiful floral midi dress, perfect for summer occasions. Lightweight and comfortable.",
            "Dresses",
            "Casual",
            "S",
            "Like New",
            &["floral", "summer", "midi"],
            "https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?w=400",
            ("GreenGal", "2024-01-10", 4.9),
            &["user3"],
            "2024-01-19",
        ),
        item(
            "3",
            "Cozy Knit Sweater",
            "Warm and comfortable knit sweater in neutral beige. Perfect for autumn weather.",
            "Tops",
            "Casual",
            "L",
            "Good",
            &["knit", "warm", "neutral"],
            "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400",
            ("SustainableStyle", "2024-01-05", 4.7),
            &[],
            "2024-01-18",
        ),
        item(
            "4",
            "Designer Handbag",
            "Luxury leather handbag in pristine condition. Authentic designer piece.",
            "Accessories",
            "Formal",
            "One Size",
            "Excellent",
            &["designer", "leather", "luxury"],
            "https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=400",
            ("LuxuryLover", "2024-01-12", 4.6),
            &["user1", "user4", "user5"],
            "2024-01-17",
        ),
        item(
            "5",
            "Professional Blazer",
            "Sharp black blazer perfect for business meetings and professional events.",
            "Outerwear",
            "Formal",
            "M",
            "Like New",
            &["professional", "formal", "business"],
            "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400",
            ("BusinessChic", "2024-01-08", 4.8),
            &["user2"],
            "2024-01-16",
        ),
        item(
            "6",
            "Bohemian Maxi Skirt",
            "Flowing maxi skirt with beautiful bohemian patterns. Perfect for festivals.",
            "Bottoms",
            "Casual",
            "M",
            "Good",
            &["bohemian", "maxi", "patterns"],
            "https://images.unsplash.com/photo-1583496661160-fb5886a13d56?w=400",
            ("BohoVibes", "2024-01-03", 4.5),
            &["user3", "user6"],
            "2024-01-15",
        ),
    ]
}

// ─── Dashboard ───────────────────────────────────────────────

pub fn user_listings() -> Vec<UserListing> {
    vec![
        UserListing {
            id: "1".to_string(),
            title: "Vintage Denim Jacket".to_string(),
            status: ItemStatus::Available,
            views: 24,
            likes: 5,
            created_at: "2024-01-20".to_string(),
        },
        UserListing {
            id: "2".to_string(),
            title: "Summer Dress".to_string(),
            status: ItemStatus::Pending,
            views: 0,
            likes: 0,
            created_at: "2024-01-22".to_string(),
        },
    ]
}

pub fn active_swaps() -> Vec<ActiveSwap> {
    vec![
        ActiveSwap {
            id: "1".to_string(),
            direction: SwapDirection::Outgoing,
            item_title: "Designer Handbag".to_string(),
            other_user: "EcoFashionista".to_string(),
            created_at: "2024-01-21".to_string(),
        },
        ActiveSwap {
            id: "2".to_string(),
            direction: SwapDirection::Incoming,
            item_title: "Vintage Denim Jacket".to_string(),
            other_user: "GreenGal".to_string(),
            created_at: "2024-01-20".to_string(),
        },
    ]
}

pub fn completed_swaps() -> Vec<CompletedSwap> {
    vec![
        CompletedSwap {
            id: "1".to_string(),
            item_given: "Knit Sweater".to_string(),
            item_received: "Floral Blouse".to_string(),
            other_user: "SustainableStyle".to_string(),
            completed_at: "2024-01-15".to_string(),
            rating: 5,
        },
        CompletedSwap {
            id: "2".to_string(),
            item_given: "Professional Blazer".to_string(),
            item_received: "Casual Pants".to_string(),
            other_user: "BusinessChic".to_string(),
            completed_at: "2024-01-10".to_string(),
            rating: 4,
        },
    ]
}

// ─── Admin Panel ─────────────────────────────────────────────

pub fn managed_users() -> Vec<ManagedUser> {
    let user = |id: &str, username: &str, email: &str, status, joined: &str, items, swaps| {
        ManagedUser {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            status,
            join_date: joined.to_string(),
            total_items: items,
            total_swaps: swaps,
        }
    };
    vec![
        user("1", "EcoFashionista", "eco@example.com", AccountStatus::Active, "2024-01-15", 12, 8),
        user("2", "GreenGal", "green@example.com", AccountStatus::Active, "2024-01-10", 8, 5),
        user("3", "VintageCollector", "vintage@example.com", AccountStatus::Suspended, "2024-01-08", 25, 15),
        user("4", "NewUser123", "newuser@example.com", AccountStatus::Active, "2024-01-22", 3, 1),
    ]
}

pub fn swap_orders() -> Vec<SwapOrder> {
    let order = |id: &str, from: &str, to: &str, item: &str, status, date: &str| SwapOrder {
        id: id.to_string(),
        user_from: from.to_string(),
        user_to: to.to_string(),
        item: item.to_string(),
        status,
        date: date.to_string(),
    };
    vec![
        order("1", "EcoFashionista", "GreenGal", "Vintage Denim Jacket", OrderStatus::Pending, "2024-01-22"),
        order("2", "VintageCollector", "NewUser123", "Band T-Shirt", OrderStatus::Completed, "2024-01-21"),
        order("3", "GreenGal", "EcoFashionista", "Summer Dress", OrderStatus::Shipping, "2024-01-20"),
        order("4", "NewUser123", "VintageCollector", "Designer Sneakers", OrderStatus::Cancelled, "2024-01-19"),
    ]
}

pub fn listing_records() -> Vec<ListingRecord> {
    let listing = |id: &str, title: &str, user: &str, category: &str, status, date: &str| {
        ListingRecord {
            id: id.to_string(),
            title: title.to_string(),
            user: user.to_string(),
            category: category.to_string(),
            status,
            date: date.to_string(),
        }
    };
    vec![
        listing("1", "Vintage Denim Jacket", "EcoFashionista", "Outerwear", ListingStatus::Active, "2024-01-20"),
        listing("2", "Summer Floral Dress", "GreenGal", "Dresses", ListingStatus::Pending, "2024-01-19"),
        listing("3", "Designer Sneakers", "NewUser123", "Shoes", ListingStatus::Active, "2024-01-22"),
        listing("4", "Vintage Band T-Shirt", "VintageCollector", "Tops", ListingStatus::Suspended, "2024-01-18"),
    ]
}
