// region:    --- Imports
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Auction Model

/// 경매 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Auction {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub description: String,
    pub min_value: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 신규 경매 등록 데이터 (검증 완료 상태)
#[derive(Debug, Clone)]
pub struct NewAuction {
    pub author_id: i64,
    pub title: String,
    pub description: String,
    pub min_value: i64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// 현재 시각 기준으로 활성 여부를 재계산
    /// 저장된 플래그가 이미 false면 다시 활성화되지 않는다
    pub fn resolve(&mut self, now: DateTime<Utc>, policy: AuctionPolicy) {
        self.is_active = policy.is_open(self.is_active, self.created_at, now);
    }
}

// endregion: --- Auction Model

// region:    --- Auction Policy

/// 경매 만료 정책
/// 등록 시각부터 고정 기간 동안 활성 상태 유지
/// 기간은 AUCTION_LIFETIME_HOURS 환경 변수로 설정 (기본값 168시간 = 7일)
#[derive(Debug, Clone, Copy)]
pub struct AuctionPolicy {
    pub lifetime: Duration,
}

impl AuctionPolicy {
    pub fn new(lifetime: Duration) -> Self {
        Self { lifetime }
    }

    /// 환경 변수에서 정책 로드
    pub fn from_env() -> Self {
        let hours = std::env::var("AUCTION_LIFETIME_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(168);
        Self::new(Duration::hours(hours))
    }

    /// 만료 시각 계산
    pub fn expires_at(&self, created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + self.lifetime
    }

    /// 경매 활성 여부 판정
    pub fn is_open(&self, is_active: bool, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        is_active && now < self.expires_at(created_at)
    }
}

// endregion: --- Auction Policy

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_auction(created_at: DateTime<Utc>) -> Auction {
        Auction {
            id: 1,
            author_id: 1,
            title: "테스트 경매".to_string(),
            description: String::new(),
            min_value: 10,
            image_url: None,
            is_active: true,
            created_at,
        }
    }

    #[test]
    fn resolve_keeps_auction_active_before_expiry() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let policy = AuctionPolicy::new(Duration::hours(168));
        let mut auction = test_auction(created_at);

        auction.resolve(created_at + Duration::hours(167), policy);
        assert!(auction.is_active);
    }

    #[test]
    fn resolve_deactivates_auction_at_expiry_threshold() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let policy = AuctionPolicy::new(Duration::hours(168));
        let mut auction = test_auction(created_at);

        // 만료 시각 정각부터 비활성
        auction.resolve(created_at + Duration::hours(168), policy);
        assert!(!auction.is_active);
    }

    #[test]
    fn resolve_never_reactivates_expired_auction() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let policy = AuctionPolicy::new(Duration::hours(168));
        let mut auction = test_auction(created_at);

        auction.resolve(created_at + Duration::hours(169), policy);
        assert!(!auction.is_active);

        // now가 증가해도 결과는 그대로
        for extra in [170, 200, 10_000] {
            auction.resolve(created_at + Duration::hours(extra), policy);
            assert!(!auction.is_active);
        }
    }

    #[test]
    fn resolve_respects_stored_inactive_flag() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let policy = AuctionPolicy::new(Duration::hours(168));
        let mut auction = test_auction(created_at);
        auction.is_active = false;

        // 기간 내라도 저장된 플래그가 꺼져 있으면 비활성 유지
        auction.resolve(created_at + Duration::hours(1), policy);
        assert!(!auction.is_active);
    }
}

// endregion: --- Tests
