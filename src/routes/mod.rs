mod coupons;
mod health_check;

pub use coupons::list_coupons;
pub use health_check::check_health;
