use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("mock_endpoint=debug")
        .init();

    let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    mock_endpoint::run(addr).await;
}
