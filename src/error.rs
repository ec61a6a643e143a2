// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Domain Error

/// 도메인 오류
/// 사용자 입력 오류는 모두 복구 가능하며, 폼 재표시를 위해 400으로 응답한다
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("경매가 이미 종료되었습니다.")]
    ExpiredAuction,

    #[error("유효하지 않은 입찰 금액입니다.")]
    InvalidBidAmount,

    #[error("필수 항목을 입력해 주세요.")]
    MissingRequiredField,

    #[error("경매를 찾을 수 없습니다.")]
    AuctionNotFound,

    /// 저장소 오류는 재시도 없이 요청 계층으로 전파
    #[error("저장소 오류: {0}")]
    Database(#[from] sqlx::Error),
}

impl DomainError {
    /// 클라이언트 식별용 오류 코드
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::ExpiredAuction => "EXPIRED_AUCTION",
            DomainError::InvalidBidAmount => "INVALID_BID_AMOUNT",
            DomainError::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            DomainError::AuctionNotFound => "NOT_FOUND",
            DomainError::Database(_) => "STORAGE_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            DomainError::AuctionNotFound => StatusCode::NOT_FOUND,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "code": self.code(),
        }));
        (self.status(), body).into_response()
    }
}

// endregion: --- Domain Error

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_errors_map_to_bad_request() {
        assert_eq!(DomainError::ExpiredAuction.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            DomainError::InvalidBidAmount.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DomainError::MissingRequiredField.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(DomainError::AuctionNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(DomainError::ExpiredAuction.code(), "EXPIRED_AUCTION");
        assert_eq!(DomainError::InvalidBidAmount.code(), "INVALID_BID_AMOUNT");
        assert_eq!(
            DomainError::MissingRequiredField.code(),
            "MISSING_REQUIRED_FIELD"
        );
    }
}

// endregion: --- Tests
