//! Spawns an in-process Orii-O1 API for the smoke suite to target.

#![allow(dead_code)]

use orii_service::config::OriiConfig;
use orii_service::startup::Application;
use service_core::config::Config;
use std::time::Duration;

pub async fn spawn_service() -> String {
    smoke_tests::init_tracing();

    let config = OriiConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        },
        ..OriiConfig::default()
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{}", port)
}

/// A loopback port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
