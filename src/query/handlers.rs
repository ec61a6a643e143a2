// region:    --- Imports
use super::queries;
use crate::auction::model::Auction;
use crate::bidding::model::{Bid, BidWithAuction};
use crate::database::DatabaseManager;
use chrono::{DateTime, Utc};
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 활성 경매 목록 조회
/// 읽기 경로는 저장 상태를 변경하지 않는다 (순수 프로젝션)
pub async fn list_active(
    db_manager: &DatabaseManager,
    cutoff: DateTime<Utc>,
) -> Result<Vec<Auction>, SqlxError> {
    info!("{:<12} --> 활성 경매 목록 조회", "Query");
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::LIST_ACTIVE_AUCTIONS)
                    .bind(cutoff)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 전체 경매 목록 조회
pub async fn list_all(db_manager: &DatabaseManager) -> Result<Vec<Auction>, SqlxError> {
    info!("{:<12} --> 전체 경매 목록 조회", "Query");
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::LIST_ALL_AUCTIONS)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 경매 단건 조회
pub async fn get_auction(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Auction, SqlxError> {
    info!("{:<12} --> 경매 조회 id: {}", "Query", auction_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_AUCTION)
                    .bind(auction_id)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
}

/// 등록자별 경매 목록 조회
pub async fn list_by_author(
    db_manager: &DatabaseManager,
    author_id: i64,
) -> Result<Vec<Auction>, SqlxError> {
    info!(
        "{:<12} --> 등록자별 경매 목록 조회 author: {}",
        "Query", author_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::LIST_AUCTIONS_BY_AUTHOR)
                    .bind(author_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 입찰자별 입찰 목록 조회 (대상 경매 포함)
pub async fn list_bids_by_bidder(
    db_manager: &DatabaseManager,
    bidder_id: i64,
) -> Result<Vec<BidWithAuction>, SqlxError> {
    info!(
        "{:<12} --> 입찰자별 입찰 목록 조회 bidder: {}",
        "Query", bidder_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, BidWithAuction>(queries::LIST_BIDS_BY_BIDDER)
                    .bind(bidder_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// (경매, 입찰자) 쌍의 기존 입찰 조회
pub async fn find_bid(
    db_manager: &DatabaseManager,
    auction_id: i64,
    bidder_id: i64,
) -> Result<Option<Bid>, SqlxError> {
    info!(
        "{:<12} --> 기존 입찰 조회 auction: {} bidder: {}",
        "Query", auction_id, bidder_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Bid>(queries::FIND_BID)
                    .bind(auction_id)
                    .bind(bidder_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

// endregion: --- Query Handlers
