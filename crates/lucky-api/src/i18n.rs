//! Display text for the widget in Vietnamese and English.
//!
//! The draw context only reports error kinds; this module turns them, and
//! every other piece of UI copy, into text for the requested language.

use std::fmt;
use std::str::FromStr;

use lucky_core::error::ErrorKind;
use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// Deserializes through `FromStr`, so `?lang=EN` and `?lang=en` agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    /// Vietnamese.
    #[default]
    Vi,
    /// English.
    En,
}

impl Language {
    /// Language tag as used in query strings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Self::Vi),
            "en" => Ok(Self::En),
            _ => Err(UnsupportedLanguage(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = UnsupportedLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keys for every piece of UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    /// Page title.
    Title,
    /// Banner above the form.
    Header,
    /// Label for the lower bound input.
    MinLabel,
    /// Label for the upper bound input.
    MaxLabel,
    /// Draw button.
    GenerateButton,
    /// Shown in the result area before the first draw.
    ResultPlaceholder,
    /// Copy-to-clipboard button.
    CopyButton,
    /// Copy button after a successful copy.
    CopiedButton,
    /// Reset button.
    ResetButton,
    /// Heading of the history list.
    HistoryTitle,
    /// Shown when the history is empty.
    HistoryPlaceholder,
    /// Invalid bounds.
    ErrorRange,
    /// No value other than the previous one exists.
    ErrorUnique,
    /// Footer line.
    Footer,
}

impl MessageKey {
    /// All keys, in display order.
    pub const ALL: [Self; 14] = [
        Self::Title,
        Self::Header,
        Self::MinLabel,
        Self::MaxLabel,
        Self::GenerateButton,
        Self::ResultPlaceholder,
        Self::CopyButton,
        Self::CopiedButton,
        Self::ResetButton,
        Self::HistoryTitle,
        Self::HistoryPlaceholder,
        Self::ErrorRange,
        Self::ErrorUnique,
        Self::Footer,
    ];
}

/// Looks up the text for `key` in `language`.
#[must_use]
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::Vi => vietnamese(key),
        Language::En => english(key),
    }
}

/// Maps a core error kind to its message, if the widget has one for it.
#[must_use]
pub fn message_for(kind: ErrorKind) -> Option<MessageKey> {
    match kind {
        ErrorKind::Range => Some(MessageKey::ErrorRange),
        ErrorKind::Uniqueness => Some(MessageKey::ErrorUnique),
        ErrorKind::SessionNotFound
        | ErrorKind::ConcurrencyConflict
        | ErrorKind::Infrastructure => None,
    }
}

fn vietnamese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Tạo Số May Mắn",
        MessageKey::Header => "TẠO SỐ MAY MẮN",
        MessageKey::MinLabel => "Từ số (Min)",
        MessageKey::MaxLabel => "Đến số (Max)",
        MessageKey::GenerateButton => "Bấm để nhận số",
        MessageKey::ResultPlaceholder => "Chúc bạn may mắn!",
        MessageKey::CopyButton => "Sao chép",
        MessageKey::CopiedButton => "Đã chép!",
        MessageKey::ResetButton => "Làm mới",
        MessageKey::HistoryTitle => "Lịch sử",
        MessageKey::HistoryPlaceholder => "Chưa có số nào được tạo.",
        MessageKey::ErrorRange => "Số \"Max\" phải lớn hơn số \"Min\".",
        MessageKey::ErrorUnique => {
            "Không thể tạo số mới khác số cũ. Vui lòng mở rộng khoảng cách."
        }
        MessageKey::Footer => "App dùng một lần – tạo niềm vui nho nhỏ ❤️",
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Lucky Number Generator",
        MessageKey::Header => "LUCKY NUMBER",
        MessageKey::MinLabel => "From (Min)",
        MessageKey::MaxLabel => "To (Max)",
        MessageKey::GenerateButton => "Get my number",
        MessageKey::ResultPlaceholder => "Good luck!",
        MessageKey::CopyButton => "Copy",
        MessageKey::CopiedButton => "Copied!",
        MessageKey::ResetButton => "Reset",
        MessageKey::HistoryTitle => "History",
        MessageKey::HistoryPlaceholder => "No numbers generated yet.",
        MessageKey::ErrorRange => "Max number must be greater than Min.",
        MessageKey::ErrorUnique => {
            "Cannot generate a new unique number. Please expand the range."
        }
        MessageKey::Footer => "One-time fun mini app ❤️",
    }
}
