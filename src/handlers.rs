// region:    --- Imports
use crate::auction::commands::{handle_create_listing as command_create_listing, CreateListingCommand};
use crate::auction::model::AuctionPolicy;
use crate::auth::AuthUser;
use crate::bidding::commands::{handle_place_bid as command_place_bid, PlaceBidCommand};
use crate::database::DatabaseManager;
use crate::error::DomainError;
use crate::query;
use crate::store::PostgresListingStore;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Command Handlers

/// 입찰 요청 처리
/// 성공 시 입찰자의 입찰 목록으로 리다이렉트
pub async fn handle_place_bid(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
    AuthUser { user_id }: AuthUser,
    Path(auction_id): Path<i64>,
    Json(cmd): Json<PlaceBidCommand>,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 입찰 요청 처리 시작: auction={} bidder={}",
        "Command", auction_id, user_id
    );

    let store = PostgresListingStore::new(db_manager.get_pool());

    match command_place_bid(auction_id, user_id, cmd, &store, &db_manager, policy).await {
        Ok(_) => Redirect::to("/my/bids").into_response(),
        Err(e) => e.into_response(),
    }
}

/// 경매 등록 요청 처리
/// 성공 시 등록자의 경매 목록으로 리다이렉트
pub async fn handle_create_listing(
    State((db_manager, _policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
    AuthUser { user_id }: AuthUser,
    Json(cmd): Json<CreateListingCommand>,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 경매 등록 요청 처리 시작: author={}",
        "Command", user_id
    );

    let store = PostgresListingStore::new(db_manager.get_pool());

    match command_create_listing(user_id, cmd, &store).await {
        Ok(_) => Redirect::to("/my/auctions").into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 활성 경매 목록 조회 (등록 오래된 순)
pub async fn handle_list_active(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
) -> impl IntoResponse {
    info!("{:<12} --> 활성 경매 목록 조회", "HandlerQuery");

    let cutoff = Utc::now() - policy.lifetime;
    match query::handlers::list_active(&db_manager, cutoff).await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => DomainError::Database(e).into_response(),
    }
}

/// 전체 경매 목록 조회 (등록 최신 순)
/// 활성 여부는 조회 시점에 계산만 하고 저장 상태는 건드리지 않는다
pub async fn handle_list_auctions(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
) -> impl IntoResponse {
    info!("{:<12} --> 전체 경매 목록 조회", "HandlerQuery");

    match query::handlers::list_all(&db_manager).await {
        Ok(mut auctions) => {
            let now = Utc::now();
            for auction in &mut auctions {
                auction.resolve(now, policy);
            }
            Json(auctions).into_response()
        }
        Err(e) => DomainError::Database(e).into_response(),
    }
}

/// 경매 상세 조회
/// 로그인 사용자에게는 본인 경매 여부 또는 기존 입찰 정보를 함께 반환
pub async fn handle_get_auction(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
    Path(auction_id): Path<i64>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 상세 조회 id: {}", "HandlerQuery", auction_id);

    let mut auction = match query::handlers::get_auction(&db_manager, auction_id).await {
        Ok(auction) => auction,
        Err(sqlx::Error::RowNotFound) => return DomainError::AuctionNotFound.into_response(),
        Err(e) => return DomainError::Database(e).into_response(),
    };
    auction.resolve(Utc::now(), policy);

    let user_id = match user {
        Some(AuthUser { user_id }) => user_id,
        None => {
            return Json(serde_json::json!({
                "auction": auction,
                "already_bid": false
            }))
            .into_response()
        }
    };

    // 본인이 등록한 경매
    if user_id == auction.author_id {
        return Json(serde_json::json!({
            "auction": auction,
            "own_auction": true
        }))
        .into_response();
    }

    // 기존 입찰 여부 확인
    match query::handlers::find_bid(&db_manager, auction_id, user_id).await {
        Ok(Some(bid)) => Json(serde_json::json!({
            "auction": auction,
            "already_bid": true,
            "bid_amount": bid.amount
        }))
        .into_response(),
        Ok(None) => Json(serde_json::json!({
            "auction": auction,
            "already_bid": false
        }))
        .into_response(),
        Err(e) => DomainError::Database(e).into_response(),
    }
}

/// 내 경매 목록 조회 (등록 최신 순)
pub async fn handle_my_auctions(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
    AuthUser { user_id }: AuthUser,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 내 경매 목록 조회 author: {}",
        "HandlerQuery", user_id
    );

    match query::handlers::list_by_author(&db_manager, user_id).await {
        Ok(mut auctions) => {
            let now = Utc::now();
            for auction in &mut auctions {
                auction.resolve(now, policy);
            }
            Json(auctions).into_response()
        }
        Err(e) => DomainError::Database(e).into_response(),
    }
}

/// 내 입찰 목록 조회 (입찰 최신 순, 대상 경매 포함)
pub async fn handle_my_bids(
    State((db_manager, policy)): State<(Arc<DatabaseManager>, AuctionPolicy)>,
    AuthUser { user_id }: AuthUser,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 내 입찰 목록 조회 bidder: {}",
        "HandlerQuery", user_id
    );

    match query::handlers::list_bids_by_bidder(&db_manager, user_id).await {
        Ok(mut bids) => {
            let now = Utc::now();
            for bid in &mut bids {
                bid.resolve_auction(now, policy);
            }
            Json(bids).into_response()
        }
        Err(e) => DomainError::Database(e).into_response(),
    }
}

// endregion: --- Query Handlers
