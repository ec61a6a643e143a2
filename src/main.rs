// region:    --- Imports
use crate::auction::model::AuctionPolicy;
use crate::database::DatabaseManager;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Modules
mod auction;
mod auth;
mod bidding;
mod database;
mod error;
mod handlers;
mod query;
mod scheduler;
mod store;

// endregion: --- Modules

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new().await);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 경매 만료 정책 로드
    let policy = AuctionPolicy::from_env();
    info!(
        "{:<12} --> 경매 만료 정책: 등록 후 {}시간",
        "Main",
        policy.lifetime.num_hours()
    );

    // 만료 경매 상태 스위퍼 시작
    let scheduler = scheduler::AuctionScheduler::new(db_manager.get_pool(), policy);
    scheduler.start().await;

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = Router::new()
        .route("/auctions/active", get(handlers::handle_list_active))
        .route(
            "/auctions",
            get(handlers::handle_list_auctions).post(handlers::handle_create_listing),
        )
        .route("/auctions/:id", get(handlers::handle_get_auction))
        .route("/auctions/:id/bid", post(handlers::handle_place_bid))
        .route("/my/auctions", get(handlers::handle_my_auctions))
        .route("/my/bids", get(handlers::handle_my_bids))
        .layer(cors)
        .with_state((db_manager, policy));

    // 리스너 생성(로컬 호스트의 3000번 포트를 사용)
    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
