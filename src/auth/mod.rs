// region:    --- Imports
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use tracing::warn;

// endregion: --- Imports

// region:    --- Auth Extractor

/// 헤더 이름 (인증 게이트웨이가 검증 후 주입)
const USER_ID_HEADER: &str = "x-user-id";

/// 요청 사용자
/// 인증/세션 관리는 상위 게이트웨이 소관이며, 본 서비스는 주입된 식별자만 신뢰한다
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok());

        match user_id {
            Some(user_id) => Ok(AuthUser { user_id }),
            None => {
                warn!("{:<12} --> 사용자 식별자 없는 요청 거부", "Auth");
                Err((
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "error": "로그인이 필요합니다.",
                        "code": "UNAUTHORIZED"
                    })),
                ))
            }
        }
    }
}

// endregion: --- Auth Extractor
