/// 경매 상태 스위퍼
/// 만료 판정은 읽기 경로의 순수 프로젝션으로도 수행되므로,
/// 저장된 플래그 갱신은 이 태스크의 멱등 UPDATE 한 곳에만 둔다.
// region:    --- Imports
use crate::auction::model::AuctionPolicy;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, error};

// endregion: --- Imports

// region:    --- Auction Scheduler

/// 경매 상태 업데이트 스케줄러
pub struct AuctionScheduler {
    pool: Arc<PgPool>,
    policy: AuctionPolicy,
}

impl AuctionScheduler {
    pub fn new(pool: Arc<PgPool>, policy: AuctionPolicy) -> Self {
        Self { pool, policy }
    }

    /// 스케줄러 시작
    pub async fn start(&self) {
        let pool = Arc::clone(&self.pool);
        let policy = self.policy;
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(60)); // 1분마다 실행
            loop {
                interval.tick().await;
                if let Err(e) = Self::close_expired_auctions(&pool, policy).await {
                    error!(
                        "{:<12} --> 경매 상태 업데이트 중 오류 발생: {:?}",
                        "Scheduler", e
                    );
                }
            }
        });
    }

    /// 만료된 경매 비활성 처리
    /// ACTIVE -> 비활성 한 방향으로만 바뀌므로 반복 실행해도 결과가 같다
    async fn close_expired_auctions(pool: &PgPool, policy: AuctionPolicy) -> Result<(), sqlx::Error> {
        let cutoff = Utc::now() - policy.lifetime;

        let result = sqlx::query(
            "UPDATE auctions SET is_active = FALSE
             WHERE is_active = TRUE AND created_at <= $1",
        )
        .bind(cutoff)
        .execute(pool)
        .await?;

        debug!(
            "{:<12} --> 만료 경매 비활성 처리 완료: {}건",
            "Scheduler",
            result.rows_affected()
        );

        Ok(())
    }
}

// endregion: --- Auction Scheduler
