use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Why a menu submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionKind {
    ImageOnlyUnsupported,
    NoFoodTokenRecognized,
    NoInputProvided,
}

impl RejectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            RejectionKind::ImageOnlyUnsupported => "이미지만으로는 추천할 수 없어요",
            RejectionKind::NoFoodTokenRecognized => "메뉴를 인식하지 못했어요",
            RejectionKind::NoInputProvided => "메뉴를 입력해 주세요",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            RejectionKind::ImageOnlyUnsupported => {
                "식단표 이미지의 글자 인식은 지원하지 않아요. 오늘의 메뉴를 텍스트로 함께 입력해 주세요."
            }
            RejectionKind::NoFoodTokenRecognized => {
                "입력하신 내용이 음식 이름으로 인식되지 않았어요. 예: 김치찌개, 된장찌개, 불고기 덮밥"
            }
            RejectionKind::NoInputProvided => {
                "식단표 이미지를 올리거나 금일 메뉴를 텍스트로 입력해 주세요."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub title: String,
    pub detail: String,
}

impl From<RejectionKind> for Rejection {
    fn from(kind: RejectionKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            detail: kind.detail().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted { tokens: Vec<String> },
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn rejected(kind: RejectionKind) -> Self {
        ValidationResult::Rejected(Rejection::from(kind))
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted { .. })
    }

    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            ValidationResult::Accepted { .. } => None,
            ValidationResult::Rejected(rejection) => Some(rejection.kind),
        }
    }
}
