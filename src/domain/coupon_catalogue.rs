use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::Coupon;

/// The full set of coupons the service offers, fixed for the process lifetime.
///
/// Constructed once at startup and injected into the route handlers through
/// the application state; handlers never reach for a module-level global.
/// Cloning is cheap, the coupons live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CouponCatalogue(Arc<Vec<Coupon>>);

impl CouponCatalogue {
    /// Builds a catalogue, preserving the given order.
    ///
    /// Rejects duplicate coupon ids since callers rely on ids as stable
    /// identifiers.
    pub fn new(coupons: Vec<Coupon>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for coupon in &coupons {
            if !seen.insert(coupon.id) {
                return Err(format!("{} is a duplicated coupon id", coupon.id));
            }
        }

        Ok(Self(Arc::new(coupons)))
    }

    /// The dummy coupon set required by the assessment, ids 1 through 5.
    pub fn seeded() -> Self {
        let coupons = vec![
            Coupon::new(
                1,
                "Flat 25% OFF on Pizza",
                "Valid on orders above ₹600. T&C apply.",
                "Food",
                "25%",
                "Pizza Hut",
            ),
            Coupon::new(
                2,
                "Buy One Get One Free",
                "On all movie tickets this weekend.",
                "Entertainment",
                "BOGO",
                "CinemaMax",
            ),
            Coupon::new(
                3,
                "₹150 Cashback on Recharge",
                "Minimum recharge of ₹299.",
                "Recharge",
                "₹150",
                "PayNow",
            ),
            Coupon::new(
                4,
                "Save up to 60% on Flights",
                "On international and domestic flights.",
                "Travel",
                "60%",
                "FlyHigh",
            ),
            Coupon::new(
                5,
                "Extra 35% OFF on Apparel",
                "On all fashion and lifestyle products.",
                "Fashion",
                "35%",
                "StyleUp",
            ),
        ];

        Self::new(coupons).expect("Seeded coupon ids are unique")
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
