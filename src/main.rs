use tokio::net::TcpListener;

use coupon_service::{configuration, startup, telemetry};

#[tokio::main]
async fn main() {
    let subscriber =
        telemetry::get_subscriber("coupon-service".into(), "info".into(), std::io::stdout);
    telemetry::initialize_subscriber(subscriber);

    let configuration = configuration::get_configuration().expect("Failed to read configuration");

    let listener = TcpListener::bind(configuration.application.address())
        .await
        .expect("Failed to bind a port for application");
    tracing::info!(
        "Coupon API server listening at http://{}",
        listener
            .local_addr()
            .expect("Failed to read the bound address")
    );

    let app_state = startup::get_app_state();

    startup::run(listener, app_state).await
}
