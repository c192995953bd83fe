mod coupon;
mod coupon_catalogue;

pub use coupon::Coupon;
pub use coupon_catalogue::CouponCatalogue;
