//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Response types default every optional field so an older or newer backend
//! that omits a key still deserializes; request types serialize exactly the
//! fields the backend reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use timerange::StatsQuery;

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name shown in the toolbar: display name when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Raw body of `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub ok: bool,
    pub mfa_required: bool,
    pub mfa_token: Option<String>,
}

/// What the login page should do after submitting credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session cookie is set; go to the dashboard.
    SignedIn,
    /// A second factor is required; continue with the TOTP step.
    MfaRequired { mfa_token: String },
}

impl LoginResponse {
    /// Interpret the response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend asks for MFA without a token, or
    /// reports neither success nor MFA.
    pub fn outcome(self) -> Result<LoginOutcome, String> {
        if self.mfa_required {
            return match self.mfa_token {
                Some(mfa_token) if !mfa_token.is_empty() => Ok(LoginOutcome::MfaRequired { mfa_token }),
                _ => Err("mfa required but no token was issued".to_owned()),
            };
        }
        if self.ok { Ok(LoginOutcome::SignedIn) } else { Err("invalid email or password".to_owned()) }
    }
}

/// Dataset list entry from `GET /api/datasets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub column_count: u32,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Per-column summary inside [`DatasetStats`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    #[serde(default)]
    pub dtype: String,
    #[serde(default)]
    pub null_count: u64,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ColumnStats {
    /// Numeric columns carry at least one of mean/min/max.
    pub fn is_numeric(&self) -> bool {
        self.mean.is_some() || self.min.is_some() || self.max.is_some()
    }
}

/// One bar in the overview series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Analytics overview for one dataset, optionally restricted to a window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub dataset_id: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub column_count: u32,
    #[serde(default)]
    pub columns: Vec<ColumnStats>,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
}

impl DatasetStats {
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnStats> {
        self.columns.iter().filter(|c| c.is_numeric())
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub dataset_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<StatsQuery>,
}

/// Body returned by `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
