/// 경매 등록 커맨드 처리
// region:    --- Imports
use crate::auction::model::{Auction, NewAuction};
use crate::error::DomainError;
use crate::store::ListingStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
// endregion: --- Imports

// region:    --- Commands

/// 경매 등록 명령
/// 제목과 최소 입찰 금액은 필수, 설명과 이미지는 선택
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateListingCommand {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_value: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// 검증 완료된 등록 입력
#[derive(Debug, Clone)]
struct ValidatedListing {
    title: String,
    description: String,
    min_value: i64,
    image_url: Option<String>,
}

/// 경매 등록 처리
pub async fn handle_create_listing(
    author_id: i64,
    cmd: CreateListingCommand,
    store: &impl ListingStore,
) -> Result<Auction, DomainError> {
    info!(
        "{:<12} --> 경매 등록 처리 시작: author={}",
        "Command", author_id
    );

    let validated = validate(cmd)?;

    // 등록 시각은 서버에서 한 번만 기록하며 이후 변경되지 않는다
    let auction = store
        .insert_auction(NewAuction {
            author_id,
            title: validated.title,
            description: validated.description,
            min_value: validated.min_value,
            image_url: validated.image_url,
            created_at: Utc::now(),
        })
        .await?;

    info!(
        "{:<12} --> 경매 등록 완료: id={} author={}",
        "Command", auction.id, author_id
    );
    Ok(auction)
}

/// 등록 입력 검증
/// 이미지 형식/크기 정책은 업로드 계층 소관이므로 참조 값만 받는다
fn validate(cmd: CreateListingCommand) -> Result<ValidatedListing, DomainError> {
    let title = cmd
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(DomainError::MissingRequiredField)?
        .to_string();

    let min_value = parse_min_value(cmd.min_value.as_ref())?;

    let description = cmd.description.unwrap_or_default();

    let image_url = cmd
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    Ok(ValidatedListing {
        title,
        description,
        min_value,
        image_url,
    })
}

/// 최소 입찰 금액 파싱
/// 음수 또는 숫자가 아닌 값은 유효한 입력으로 보지 않는다
fn parse_min_value(raw: Option<&Value>) -> Result<i64, DomainError> {
    let min_value = match raw {
        Some(Value::Number(n)) => n.as_i64().ok_or(DomainError::MissingRequiredField)?,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(DomainError::MissingRequiredField);
            }
            s.parse::<i64>()
                .map_err(|_| DomainError::MissingRequiredField)?
        }
        _ => return Err(DomainError::MissingRequiredField),
    };

    if min_value < 0 {
        return Err(DomainError::MissingRequiredField);
    }
    Ok(min_value)
}

// endregion: --- Commands

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(title: Option<&str>, min_value: Option<Value>) -> CreateListingCommand {
        CreateListingCommand {
            title: title.map(str::to_string),
            min_value,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn validate_accepts_complete_command() {
        let validated = validate(CreateListingCommand {
            title: Some("빈티지 카메라".to_string()),
            min_value: Some(json!("10000")),
            description: Some("필름 카메라입니다.".to_string()),
            image_url: Some("https://images.example/camera.jpg".to_string()),
        })
        .unwrap();

        assert_eq!(validated.title, "빈티지 카메라");
        assert_eq!(validated.min_value, 10000);
        assert_eq!(validated.description, "필름 카메라입니다.");
        assert_eq!(
            validated.image_url.as_deref(),
            Some("https://images.example/camera.jpg")
        );
    }

    #[test]
    fn validate_rejects_missing_title() {
        assert!(matches!(
            validate(command(None, Some(json!(100)))),
            Err(DomainError::MissingRequiredField)
        ));
        assert!(matches!(
            validate(command(Some("   "), Some(json!(100)))),
            Err(DomainError::MissingRequiredField)
        ));
    }

    #[test]
    fn validate_rejects_missing_or_invalid_min_value() {
        assert!(matches!(
            validate(command(Some("제목"), None)),
            Err(DomainError::MissingRequiredField)
        ));
        assert!(matches!(
            validate(command(Some("제목"), Some(json!("abc")))),
            Err(DomainError::MissingRequiredField)
        ));
        assert!(matches!(
            validate(command(Some("제목"), Some(json!(-1)))),
            Err(DomainError::MissingRequiredField)
        ));
    }

    #[test]
    fn validate_allows_empty_description_and_missing_image() {
        let validated = validate(command(Some("제목"), Some(json!(0)))).unwrap();
        assert_eq!(validated.description, "");
        assert!(validated.image_url.is_none());
    }

    #[test]
    fn validate_treats_blank_image_as_absent() {
        let validated = validate(CreateListingCommand {
            title: Some("제목".to_string()),
            min_value: Some(json!(10)),
            description: None,
            image_url: Some("  ".to_string()),
        })
        .unwrap();
        assert!(validated.image_url.is_none());
    }
}

// endregion: --- Tests
