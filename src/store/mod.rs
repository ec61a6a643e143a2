// region:    --- Imports
use crate::auction::model::{Auction, NewAuction};
use crate::bidding::model::Bid;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Listing Store Trait

/// 경매/입찰 쓰기 저장소 트레이트
#[async_trait]
pub trait ListingStore {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, sqlx::Error>;
    async fn upsert_bid(
        &self,
        auction_id: i64,
        bidder_id: i64,
        amount: i64,
        bid_time: DateTime<Utc>,
    ) -> Result<Bid, sqlx::Error>;
}

/// 쓰기 저장소 구현체
pub struct PostgresListingStore {
    pool: Arc<PgPool>,
}

/// 쓰기 저장소 생성
impl PostgresListingStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// 쓰기 저장소 구현체 메서드 구현
#[async_trait]
impl ListingStore for PostgresListingStore {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, sqlx::Error> {
        info!(
            "{:<12} --> 경매 등록: author={} title={:?}",
            "Store", auction.author_id, auction.title
        );
        sqlx::query_as::<_, Auction>(
            "INSERT INTO auctions (author_id, title, description, min_value, image_url, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6)
             RETURNING id, author_id, title, description, min_value, image_url, is_active, created_at",
        )
        .bind(auction.author_id)
        .bind(&auction.title)
        .bind(&auction.description)
        .bind(auction.min_value)
        .bind(&auction.image_url)
        .bind(auction.created_at)
        .fetch_one(&*self.pool)
        .await
    }

    /// 같은 (경매, 입찰자) 쌍의 재입찰은 기존 행의 금액과 시각을 덮어쓴다
    async fn upsert_bid(
        &self,
        auction_id: i64,
        bidder_id: i64,
        amount: i64,
        bid_time: DateTime<Utc>,
    ) -> Result<Bid, sqlx::Error> {
        info!(
            "{:<12} --> 입찰 저장: auction={} bidder={} amount={}",
            "Store", auction_id, bidder_id, amount
        );
        sqlx::query_as::<_, Bid>(
            "INSERT INTO bids (auction_id, bidder_id, amount, bid_time)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (auction_id, bidder_id)
             DO UPDATE SET amount = EXCLUDED.amount, bid_time = EXCLUDED.bid_time
             RETURNING id, auction_id, bidder_id, amount, bid_time",
        )
        .bind(auction_id)
        .bind(bidder_id)
        .bind(amount)
        .bind(bid_time)
        .fetch_one(&*self.pool)
        .await
    }
}

// endregion: --- Listing Store Trait
