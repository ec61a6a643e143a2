/// 활성 경매 목록 조회 (등록 오래된 순)
/// cutoff = now - lifetime, 만료 기한이 지난 행은 읽기 시점에 걸러낸다
pub const LIST_ACTIVE_AUCTIONS: &str = r#"
    SELECT id, author_id, title, description, min_value, image_url, is_active, created_at
    FROM auctions
    WHERE is_active = TRUE AND created_at > $1
    ORDER BY created_at ASC
"#;

/// 전체 경매 목록 조회 (등록 최신 순)
pub const LIST_ALL_AUCTIONS: &str = r#"
    SELECT id, author_id, title, description, min_value, image_url, is_active, created_at
    FROM auctions
    ORDER BY created_at DESC
"#;

/// 경매 단건 조회
pub const GET_AUCTION: &str =
    "SELECT id, author_id, title, description, min_value, image_url, is_active, created_at FROM auctions WHERE id = $1";

/// 등록자별 경매 목록 조회 (등록 최신 순)
pub const LIST_AUCTIONS_BY_AUTHOR: &str = r#"
    SELECT id, author_id, title, description, min_value, image_url, is_active, created_at
    FROM auctions
    WHERE author_id = $1
    ORDER BY created_at DESC
"#;

/// 입찰자별 입찰 목록 조회 (입찰 최신 순, 대상 경매 포함)
pub const LIST_BIDS_BY_BIDDER: &str = r#"
    SELECT b.id, b.auction_id, b.bidder_id, b.amount, b.bid_time,
           a.title AS auction_title, a.min_value AS auction_min_value,
           a.is_active AS auction_is_active, a.created_at AS auction_created_at
    FROM bids b
    JOIN auctions a ON a.id = b.auction_id
    WHERE b.bidder_id = $1
    ORDER BY b.bid_time DESC
"#;

/// (경매, 입찰자) 쌍의 기존 입찰 조회
pub const FIND_BID: &str = r#"
    SELECT id, auction_id, bidder_id, amount, bid_time
    FROM bids
    WHERE auction_id = $1 AND bidder_id = $2
"#;
