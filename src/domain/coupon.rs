use serde::Serialize;

/// A promotional offer as served to clients.
///
/// `discount` stays a string on purpose: its format varies by promotion kind
/// (a percentage, a fixed currency amount, or a code such as "BOGO").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coupon {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount: String,
    pub brand: String,
}

impl Coupon {
    pub fn new(
        id: u32,
        title: &str,
        description: &str,
        category: &str,
        discount: &str,
        brand: &str,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            discount: discount.into(),
            brand: brand.into(),
        }
    }
}
