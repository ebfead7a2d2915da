//! Body of `GET /health`.

use serde::Serialize;

/// Overall liveness report: `healthy` when the link store answers,
/// `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.database.is_ok() { "healthy" } else { "degraded" };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.database.is_ok()
    }
}

/// Per-dependency results. Only the link store is checked.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of one dependency check, `ok` or `error` plus a detail line.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_database_check_degrades_report() {
        let report = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::error("Database error: pool timed out"),
        });

        assert!(!report.is_healthy());
        assert_eq!(
            serde_json::to_value(&report).unwrap()["checks"],
            json!({ "database": { "status": "error", "message": "Database error: pool timed out" } })
        );
        assert_eq!(report.status, "degraded");
    }
}
