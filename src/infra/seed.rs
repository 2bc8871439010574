//! Sample catalog seeding.
//!
//! Idempotent: products whose name is already present are skipped, so the
//! seed command can run on every deploy.

use rust_decimal::Decimal;
use std::collections::HashSet;

use super::repositories::{NewProduct, ProductRepository};
use crate::errors::AppResult;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    image_url: &'static str,
    category: &'static str,
}

const SAMPLE_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Premium Wireless Headphones",
        description: "Noise-canceling over-ear headphones with wireless connectivity and a 30-hour battery, built for long listening sessions.",
        price_cents: 29999,
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Smart Fitness Watch",
        description: "Fitness tracking with heart-rate monitoring, GPS, a waterproof design, and a battery that lasts a full week.",
        price_cents: 19999,
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Professional Laptop",
        description: "Work machine with an i7 processor, 16GB of RAM, a 512GB SSD, and a 15.6-inch display for coding and multimedia.",
        price_cents: 129999,
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Latest Smartphone",
        description: "5G smartphone with an advanced camera system, 128GB of storage, and all-day battery life.",
        price_cents: 89999,
        image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Ergonomic Gaming Chair",
        description: "Gaming chair with adjustable lumbar support, leather upholstery, and full swivel for long sessions.",
        price_cents: 34999,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800&h=600",
        category: "Furniture",
    },
    SeedProduct {
        name: "Wireless Bluetooth Speaker",
        description: "Portable waterproof speaker with 360-degree sound, deep bass, and a 12-hour battery.",
        price_cents: 12999,
        image_url: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Professional Tablet",
        description: "12.9-inch tablet with stylus support and an all-day battery, aimed at creative work.",
        price_cents: 64999,
        image_url: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "Premium Coffee Maker",
        description: "Automatic espresso machine with a built-in grinder, milk frother, and stainless steel body.",
        price_cents: 59999,
        image_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800&h=600",
        category: "Kitchen",
    },
    SeedProduct {
        name: "Advanced Fitness Tracker",
        description: "Lightweight tracker covering sleep, heart-rate zones, stress, and 50+ workout modes.",
        price_cents: 14999,
        image_url: "https://images.unsplash.com/photo-1575311373937-040b8e1fd5b6?w=800&h=600",
        category: "Electronics",
    },
    SeedProduct {
        name: "LED Desk Lamp",
        description: "Adjustable LED lamp with a wireless charging base, touch controls, and tunable color temperature.",
        price_cents: 8999,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600",
        category: "Home & Office",
    },
];

/// Insert sample products that are not already present.
///
/// Returns the number of products inserted.
pub async fn seed_products(products: &dyn ProductRepository) -> AppResult<usize> {
    let existing: HashSet<String> = products
        .list()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    let mut inserted = 0;
    for sample in SAMPLE_PRODUCTS {
        if existing.contains(sample.name) {
            continue;
        }

        products
            .create(NewProduct {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                price: Decimal::new(sample.price_cents, 2),
                image_url: sample.image_url.to_string(),
                category: sample.category.to_string(),
            })
            .await?;
        inserted += 1;
    }

    Ok(inserted)
}
