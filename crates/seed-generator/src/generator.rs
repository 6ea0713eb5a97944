//! Main data generator for producing food-delivery records.

use crate::catalog::MenuCatalog;
use crate::generators::numeric::{generate_amount, generate_location, round2};
use crate::generators::sample::{generate_categories, sample_distinct};
use crate::generators::text;
use crate::generators::timestamp::{
    generate_date_within_years, generate_timestamp_between, months_before,
};
use crate::records::{
    MenuItem, Order, OrderLine, OrderStatus, OrderSummary, Restaurant, Review, User,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Maximum number of distinct menu items on one order.
pub const MAX_LINE_ITEMS: usize = 5;

/// Maximum quantity of a single order line.
pub const MAX_QUANTITY: i32 = 5;

const REGISTRATION_WINDOW_YEARS: u32 = 2;
const ORDER_WINDOW_MONTHS: u32 = 6;
const MENU_ITEM_AVAILABILITY: f64 = 0.9;
const MENU_DESCRIPTION_WORDS: usize = 6;
const REVIEW_COMMENT_WORDS: usize = 8;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A random pick was requested from an empty set of identifiers
    #[error("Cannot pick a {0}: no {0} identifiers available")]
    EmptyPool(&'static str),

    /// The chosen restaurant's menu cannot satisfy the sample size
    #[error(
        "Restaurant {restaurant_id} has {available} menu items but the order requested {requested}"
    )]
    InsufficientMenuItems {
        restaurant_id: ObjectId,
        requested: usize,
        available: usize,
    },
}

/// Data generator that produces food-delivery records.
///
/// The generator owns a seeded random number generator, so the same seed and the
/// same inputs produce the same records. It also remembers every email address it
/// has issued so that user emails stay unique for its lifetime.
pub struct DataGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Emails handed out so far
    emails: HashSet<String>,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            emails: HashSet::new(),
        }
    }

    /// Generate a user registered at midnight on some day of the last two years.
    pub fn user(&mut self, now: DateTime<Utc>) -> User {
        User {
            first_name: text::first_name(&mut self.rng),
            last_name: text::last_name(&mut self.rng),
            email: self.unique_email(),
            address: text::address(&mut self.rng),
            location: generate_location(&mut self.rng),
            registered_at: generate_date_within_years(
                &mut self.rng,
                now,
                REGISTRATION_WINDOW_YEARS,
            ),
        }
    }

    /// Generate a restaurant with a rating in [2, 5] and one to three categories.
    pub fn restaurant(&mut self) -> Restaurant {
        Restaurant {
            name: text::company_name(&mut self.rng),
            address: text::address(&mut self.rng),
            location: generate_location(&mut self.rng),
            average_rating: generate_amount(&mut self.rng, 2.0, 5.0),
            categories: generate_categories(&mut self.rng),
        }
    }

    /// Generate a menu item owned by the given restaurant.
    pub fn menu_item(&mut self, restaurant_id: ObjectId) -> MenuItem {
        MenuItem {
            name: text::dish_name(&mut self.rng),
            description: text::sentence(&mut self.rng, MENU_DESCRIPTION_WORDS),
            price: generate_amount(&mut self.rng, 2.0, 30.0),
            restaurant_id,
            available: self.rng.random_bool(MENU_ITEM_AVAILABILITY),
        }
    }

    /// Generate an order for a random user at a random restaurant.
    ///
    /// Between one and [`MAX_LINE_ITEMS`] distinct items are drawn from the
    /// restaurant's menu. When the menu holds fewer items than the drawn sample size
    /// the order fails with [`GeneratorError::InsufficientMenuItems`] instead of
    /// shrinking the sample.
    pub fn order(
        &mut self,
        user_ids: &[ObjectId],
        restaurant_ids: &[ObjectId],
        catalog: &MenuCatalog,
        now: DateTime<Utc>,
    ) -> Result<Order, GeneratorError> {
        let user_id = *user_ids
            .choose(&mut self.rng)
            .ok_or(GeneratorError::EmptyPool("user"))?;
        let restaurant_id = *restaurant_ids
            .choose(&mut self.rng)
            .ok_or(GeneratorError::EmptyPool("restaurant"))?;

        let menu = catalog.items_for(&restaurant_id);
        let requested = self.rng.random_range(1..=MAX_LINE_ITEMS);
        let picked = sample_distinct(&mut self.rng, menu, requested).ok_or(
            GeneratorError::InsufficientMenuItems {
                restaurant_id,
                requested,
                available: menu.len(),
            },
        )?;

        let lines: Vec<OrderLine> = picked
            .into_iter()
            .map(|item| OrderLine {
                menu_item_id: item.menu_item_id,
                quantity: self.rng.random_range(1..=MAX_QUANTITY),
                unit_price: item.price,
            })
            .collect();
        let total = round2(lines.iter().map(OrderLine::extension).sum());

        let status = OrderStatus::ALL[self.rng.random_range(0..OrderStatus::ALL.len())];
        let ordered_at = generate_timestamp_between(
            &mut self.rng,
            months_before(now, ORDER_WINDOW_MONTHS),
            now,
        );

        Ok(Order {
            user_id,
            restaurant_id,
            lines,
            status,
            total,
            ordered_at,
        })
    }

    /// Generate a review of a persisted order, written between the order and `now`.
    pub fn review(&mut self, order: &OrderSummary, now: DateTime<Utc>) -> Review {
        Review {
            user_id: order.user_id,
            restaurant_id: order.restaurant_id,
            order_id: order.order_id,
            rating: self.rng.random_range(0..=5),
            comment: text::sentence(&mut self.rng, REVIEW_COMMENT_WORDS),
            reviewed_at: generate_timestamp_between(&mut self.rng, order.ordered_at, now),
        }
    }

    /// Number of distinct emails issued so far.
    pub fn issued_emails(&self) -> usize {
        self.emails.len()
    }

    fn unique_email(&mut self) -> String {
        let candidate = text::email(&mut self.rng);
        let mut email = candidate.clone();
        let mut suffix = 1;
        while self.emails.contains(&email) {
            email = text::email_with_suffix(&candidate, suffix);
            suffix += 1;
        }
        self.emails.insert(email.clone());
        email
    }
}
