use axum::extract::State;
use axum::Json;

use crate::domain::{Coupon, CouponCatalogue};

#[tracing::instrument(name = "Listing all coupons", skip(catalogue))]
pub async fn list_coupons(State(catalogue): State<CouponCatalogue>) -> Json<Vec<Coupon>> {
    tracing::info!("Returning {} coupons from the catalogue", catalogue.len());

    Json(catalogue.coupons().to_vec())
}
