use reqwest::StatusCode;

use crate::helpers::App;

#[tokio::test]
async fn list_coupons_returns_200_with_five_coupons() {
    let app = App::new().await;

    let response = app.get_coupons().await;

    assert_eq!(response.status(), StatusCode::OK);

    let coupons: serde_json::Value = response.json().await.unwrap();

    assert_eq!(coupons.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn list_coupons_returns_coupons_in_definition_order() {
    let app = App::new().await;

    let coupons: serde_json::Value = app.get_coupons().await.json().await.unwrap();
    let ids: Vec<u64> = coupons
        .as_array()
        .unwrap()
        .iter()
        .map(|coupon| coupon["id"].as_u64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn every_coupon_has_all_attributes_populated() {
    let app = App::new().await;

    let coupons: serde_json::Value = app.get_coupons().await.json().await.unwrap();

    for coupon in coupons.as_array().unwrap() {
        assert!(coupon["id"].as_u64().unwrap() > 0);

        for attribute in ["title", "description", "category", "discount", "brand"] {
            assert!(!coupon[attribute].as_str().unwrap().is_empty());
        }
    }
}

#[tokio::test]
async fn first_coupon_is_the_pizza_offer() {
    let app = App::new().await;

    let coupons: serde_json::Value = app.get_coupons().await.json().await.unwrap();
    let first = &coupons.as_array().unwrap()[0];

    assert_eq!(first["id"], 1);
    assert_eq!(first["title"], "Flat 25% OFF on Pizza");
    assert_eq!(first["category"], "Food");
    assert_eq!(first["discount"], "25%");
    assert_eq!(first["brand"], "Pizza Hut");
}

#[tokio::test]
async fn list_coupons_permits_cross_origin_callers() {
    let app = App::new().await;

    let response = app
        .client
        .get(format!("http://{}/api/coupons", app.address))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn consecutive_calls_return_identical_bodies() {
    let app = App::new().await;

    let first = app.get_coupons().await.bytes().await.unwrap();
    let second = app.get_coupons().await.bytes().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = App::new().await;

    let response = app.get("/api/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
