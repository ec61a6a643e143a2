/// 입찰 커맨드 처리
/// 같은 입찰자의 재입찰은 새 행을 만들지 않고 기존 입찰을 덮어쓴다
// region:    --- Imports
use crate::auction::model::AuctionPolicy;
use crate::bidding::model::Bid;
use crate::database::DatabaseManager;
use crate::error::DomainError;
use crate::query::handlers;
use crate::store::ListingStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
// endregion: --- Imports

// region:    --- Commands

/// 입찰 명령
/// 금액은 폼 입력과의 호환을 위해 숫자/숫자 문자열 모두 허용
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    #[serde(default)]
    pub amount: Option<Value>,
}

/// 입찰 처리
pub async fn handle_place_bid(
    auction_id: i64,
    bidder_id: i64,
    cmd: PlaceBidCommand,
    store: &impl ListingStore,
    db_manager: &DatabaseManager,
    policy: AuctionPolicy,
) -> Result<Bid, DomainError> {
    info!(
        "{:<12} --> 입찰 처리 시작: auction={} bidder={}",
        "Command", auction_id, bidder_id
    );

    // 대상 경매 조회
    let auction = handlers::get_auction(db_manager, auction_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::AuctionNotFound,
            e => DomainError::Database(e),
        })?;

    // 경매 활성 검증 (만료된 경매에는 입찰 불가)
    let now = Utc::now();
    if !policy.is_open(auction.is_active, auction.created_at, now) {
        return Err(DomainError::ExpiredAuction);
    }

    // 입찰 금액 검증 (누락/비숫자/최소 금액 미만 거부)
    let amount = parse_amount(cmd.amount.as_ref(), auction.min_value)?;

    // (경매, 입찰자) 쌍 기준 입찰 생성 또는 갱신
    let bid = store.upsert_bid(auction_id, bidder_id, amount, now).await?;

    info!(
        "{:<12} --> 입찰 처리 완료: auction={} bidder={} amount={}",
        "Command", auction_id, bidder_id, amount
    );
    Ok(bid)
}

/// 입찰 금액 파싱 및 검증
fn parse_amount(raw: Option<&Value>, min_value: i64) -> Result<i64, DomainError> {
    let amount = match raw {
        Some(Value::Number(n)) => n.as_i64().ok_or(DomainError::InvalidBidAmount)?,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(DomainError::InvalidBidAmount);
            }
            s.parse::<i64>().map_err(|_| DomainError::InvalidBidAmount)?
        }
        _ => return Err(DomainError::InvalidBidAmount),
    };

    if amount < min_value {
        return Err(DomainError::InvalidBidAmount);
    }
    Ok(amount)
}

// endregion: --- Commands

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_amount_accepts_number_and_numeric_string() {
        assert_eq!(parse_amount(Some(&json!(15)), 10).unwrap(), 15);
        assert_eq!(parse_amount(Some(&json!("15")), 10).unwrap(), 15);
        assert_eq!(parse_amount(Some(&json!(" 15 ")), 10).unwrap(), 15);
        // 최소 금액과 같은 입찰은 허용
        assert_eq!(parse_amount(Some(&json!(10)), 10).unwrap(), 10);
    }

    #[test]
    fn parse_amount_rejects_missing_amount() {
        assert!(matches!(
            parse_amount(None, 10),
            Err(DomainError::InvalidBidAmount)
        ));
        assert!(matches!(
            parse_amount(Some(&Value::Null), 10),
            Err(DomainError::InvalidBidAmount)
        ));
        assert!(matches!(
            parse_amount(Some(&json!("")), 10),
            Err(DomainError::InvalidBidAmount)
        ));
    }

    #[test]
    fn parse_amount_rejects_non_numeric_amount() {
        assert!(matches!(
            parse_amount(Some(&json!("abc")), 10),
            Err(DomainError::InvalidBidAmount)
        ));
        assert!(matches!(
            parse_amount(Some(&json!(3.5)), 10),
            Err(DomainError::InvalidBidAmount)
        ));
        assert!(matches!(
            parse_amount(Some(&json!(["15"])), 10),
            Err(DomainError::InvalidBidAmount)
        ));
    }

    #[test]
    fn parse_amount_rejects_amount_below_minimum() {
        assert!(matches!(
            parse_amount(Some(&json!(5)), 10),
            Err(DomainError::InvalidBidAmount)
        ));
        assert!(matches!(
            parse_amount(Some(&json!("9")), 10),
            Err(DomainError::InvalidBidAmount)
        ));
    }
}

// endregion: --- Tests
