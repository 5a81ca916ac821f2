use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use pixelwar_canvas::clients::CanvasClient;
use pixelwar_canvas::config::Config;
use pixelwar_canvas::models::PaintRequest;
use pixelwar_canvas::routes::create_api_routes;
use pixelwar_canvas::state::AppState;
use pixelwar_canvas::sync::SyncReconciler;

async fn spawn_server(config: Config) -> (String, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    let app = Router::new().nest("/api", create_api_routes(state.clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), state)
}

#[tokio::test]
async fn paint_and_poll_over_http() {
    let config = Config {
        grid_width: 4,
        grid_height: 1,
        ..Config::default()
    };
    let (base_url, _state) = spawn_server(config).await;
    let client = CanvasClient::new(base_url);

    let canvas = client.fetch_canvas().await.unwrap();
    assert_eq!(canvas.width, 4);
    assert_eq!(canvas.cells.len(), 4);

    let cell = client
        .paint(
            1,
            &PaintRequest {
                client_id: "client-a".to_string(),
                color: "#ff0000".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(cell.color, "#FF0000");
    assert_eq!(cell.last_writer_id.as_deref(), Some("client-a"));

    // reconcile across the real network boundary
    let reconciler = SyncReconciler::new(client, Duration::from_millis(10));
    let view = reconciler.view();
    reconciler.tick().await.unwrap();
    assert_eq!(view.lock().cell(1).unwrap().color, "#FF0000");
    assert_eq!(view.lock().len(), 4);
}

#[tokio::test]
async fn cooldown_rejection_surfaces_as_an_http_error() {
    let config = Config {
        grid_width: 2,
        grid_height: 1,
        cooldown_duration_seconds: 5,
        ..Config::default()
    };
    let (base_url, _state) = spawn_server(config).await;
    let client = CanvasClient::new(base_url);

    let request = PaintRequest {
        client_id: "client-a".to_string(),
        color: "#00FF00".to_string(),
    };
    client.paint(0, &request).await.unwrap();
    // the second attempt lands well inside the 5s window
    assert!(client.paint(1, &request).await.is_err());
}

#[tokio::test]
async fn snapshots_over_http() {
    let config = Config {
        grid_width: 2,
        grid_height: 1,
        ..Config::default()
    };
    let (base_url, state) = spawn_server(config).await;

    state.canvas.paint("client-a", 0, "#112233").unwrap();
    state.canvas.capture_snapshot();

    let client = CanvasClient::new(base_url);
    let summaries = client.list_snapshots().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].index, 0);

    let snapshot = client.get_snapshot(0).await.unwrap();
    assert_eq!(snapshot.cells.len(), 2);
    assert_eq!(snapshot.cells[0].color, "#112233");

    // out-of-range index surfaces as an HTTP error, with no side effects
    assert!(client.get_snapshot(9).await.is_err());
}
