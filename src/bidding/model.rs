use crate::auction::model::AuctionPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 모델
// (auction_id, bidder_id) 쌍당 한 행만 존재한다
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Bid {
    pub id: i64,
    pub auction_id: i64,
    pub bidder_id: i64,
    pub amount: i64,
    pub bid_time: DateTime<Utc>,
}

// "내 입찰" 조회용 읽기 모델 (입찰 + 대상 경매 요약)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct BidWithAuction {
    pub id: i64,
    pub auction_id: i64,
    pub bidder_id: i64,
    pub amount: i64,
    pub bid_time: DateTime<Utc>,
    pub auction_title: String,
    pub auction_min_value: i64,
    pub auction_is_active: bool,
    pub auction_created_at: DateTime<Utc>,
}

impl BidWithAuction {
    /// 대상 경매의 활성 여부를 조회 시점 기준으로 재계산
    pub fn resolve_auction(&mut self, now: DateTime<Utc>, policy: AuctionPolicy) {
        self.auction_is_active =
            policy.is_open(self.auction_is_active, self.auction_created_at, now);
    }
}
