// Processor health models

use serde::Deserialize as _;

/// Body of a processor's `/health` answer. Only `code` matters, and it may be absent.
#[derive(Debug, serde::Deserialize)]
pub struct ProcessorHealthResponse {
    #[serde(default, deserialize_with = "deserialize_code")]
    code: Option<i64>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawCode {
    Integer(i64),
    Text(String),
}

// Numeric strings such as "0" are accepted as codes
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<RawCode>::deserialize(deserializer)?;

    Ok(raw.and_then(|raw| match raw {
        RawCode::Integer(code) => Some(code),
        RawCode::Text(text) => text.trim().parse().ok(),
    }))
}

impl ProcessorHealthResponse {
    const SUCCESS_CODE: i64 = 0;

    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(Self::SUCCESS_CODE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Success,
    Fail,
}
