use utoipa::ToSchema;

pub mod models;

#[derive(serde::Serialize, serde::Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PublicErrorType {
    InternalServerError,

    NotFound,

    InvalidBody,
}

impl Into<&'static str> for &PublicErrorType {
    fn into(self) -> &'static str {
        match self {
            PublicErrorType::InternalServerError => "internal-server-error",
            PublicErrorType::NotFound => "not-found",
            PublicErrorType::InvalidBody => "invalid-body",
        }
    }
}

impl std::fmt::Debug for PublicErrorType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for PublicErrorType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

/// Body of every non-2xx response.
#[derive(serde::Serialize, serde::Deserialize, ToSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error: PublicErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: PublicErrorType::InternalServerError,
            error_description: None,
        }
    }

    pub fn from_public_error(
        error: PublicErrorType,
        desc: Option<String>,
    ) -> Self {
        Self {
            error,
            error_description: desc,
        }
    }
}
