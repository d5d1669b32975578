//! Discord API error codes relevant to answering interactions.

use serde::{Deserialize, Serialize};

/// High-level category of a Discord API error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Rate limit hit: must wait before retrying.
    RateLimit,
    /// Target resource (interaction, message, channel …) not found.
    NotFound,
    /// Insufficient bot permissions for the requested action.
    PermissionDenied,
    /// Malformed or semantically invalid payload.
    InvalidInput,
    /// Network or I/O error (transient).
    Network,
    /// Unknown or uncategorised error.
    Unknown,
}

/// Discord-specific error code (subset relevant to interaction replies).
///
/// Maps the actionable Discord JSON error codes
/// (<https://discord.com/developers/docs/topics/opcodes-and-status-codes#json>)
/// to named variants; everything else falls through to [`DiscordErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscordErrorCode {
    // ── Not found ─────────────────────────────────────────────────────────────
    /// 10003: Unknown channel.
    UnknownChannel,
    /// 10008: Unknown message (likely deleted).
    UnknownMessage,
    /// 10015: Unknown webhook (interaction token expired).
    UnknownWebhook,
    /// 10062: Unknown interaction (token expired or already acknowledged).
    UnknownInteraction,

    // ── Interaction state ─────────────────────────────────────────────────────
    /// 40060: Interaction has already been acknowledged.
    AlreadyAcknowledged,

    // ── Permission errors ──────────────────────────────────────────────────────
    /// 50001: Missing access.
    MissingAccess,
    /// 50013: Missing permissions.
    MissingPermissions,

    // ── Rate limiting ──────────────────────────────────────────────────────────
    /// HTTP 429: Global or per-route rate limit.
    RateLimited,

    // ── Payload errors ─────────────────────────────────────────────────────────
    /// 50006: Cannot send an empty message.
    CannotSendEmptyMessage,
    /// 50035: Invalid form body (embed or component validation failed).
    InvalidFormBody,

    // ── Auth ───────────────────────────────────────────────────────────────────
    /// 50014 / 40001: Invalid or expired token.
    InvalidToken,

    // ── Server errors ──────────────────────────────────────────────────────────
    /// 130000: API resource overloaded.
    ApiOverloaded,

    // ── Client errors ─────────────────────────────────────────────────────────
    /// Network or I/O error on the client side.
    NetworkError,

    // ── Catch-all ─────────────────────────────────────────────────────────────
    /// Any Discord JSON error code not listed above.
    Unknown,
}

impl DiscordErrorCode {
    /// Derive the code from a raw Discord JSON error code integer.
    pub fn from_raw(code: u32) -> Self {
        match code {
            10003 => Self::UnknownChannel,
            10008 => Self::UnknownMessage,
            10015 => Self::UnknownWebhook,
            10062 => Self::UnknownInteraction,
            40001 | 50014 => Self::InvalidToken,
            40060 => Self::AlreadyAcknowledged,
            50001 => Self::MissingAccess,
            50006 => Self::CannotSendEmptyMessage,
            50013 => Self::MissingPermissions,
            50035 => Self::InvalidFormBody,
            130000 => Self::ApiOverloaded,
            _ => Self::Unknown,
        }
    }

    /// The high-level category for this code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownChannel
            | Self::UnknownMessage
            | Self::UnknownWebhook
            | Self::UnknownInteraction => ErrorCategory::NotFound,

            Self::MissingAccess | Self::MissingPermissions => ErrorCategory::PermissionDenied,

            Self::RateLimited => ErrorCategory::RateLimit,

            Self::AlreadyAcknowledged | Self::CannotSendEmptyMessage | Self::InvalidFormBody => {
                ErrorCategory::InvalidInput
            }

            Self::NetworkError => ErrorCategory::Network,

            Self::InvalidToken | Self::ApiOverloaded | Self::Unknown => ErrorCategory::Unknown,
        }
    }

    /// True if the operation should **not** be retried (the error is permanent).
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::UnknownChannel
                | Self::UnknownMessage
                | Self::UnknownWebhook
                | Self::UnknownInteraction
                | Self::AlreadyAcknowledged
                | Self::MissingAccess
                | Self::MissingPermissions
                | Self::InvalidFormBody
                | Self::InvalidToken
        )
    }

    /// True if retrying the operation after a delay is worthwhile.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::NetworkError | Self::ApiOverloaded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_interaction_codes() {
        assert_eq!(
            DiscordErrorCode::from_raw(10062),
            DiscordErrorCode::UnknownInteraction
        );
        assert_eq!(
            DiscordErrorCode::from_raw(40060),
            DiscordErrorCode::AlreadyAcknowledged
        );
        assert_eq!(
            DiscordErrorCode::from_raw(50035),
            DiscordErrorCode::InvalidFormBody
        );
    }

    #[test]
    fn test_from_raw_unknown() {
        assert_eq!(DiscordErrorCode::from_raw(99999), DiscordErrorCode::Unknown);
        assert_eq!(DiscordErrorCode::from_raw(0), DiscordErrorCode::Unknown);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            DiscordErrorCode::UnknownInteraction.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DiscordErrorCode::MissingPermissions.category(),
            ErrorCategory::PermissionDenied
        );
        assert_eq!(
            DiscordErrorCode::RateLimited.category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            DiscordErrorCode::NetworkError.category(),
            ErrorCategory::Network
        );
    }

    #[test]
    fn test_permanent_and_retryable_are_disjoint() {
        let all = [
            DiscordErrorCode::UnknownChannel,
            DiscordErrorCode::UnknownMessage,
            DiscordErrorCode::UnknownWebhook,
            DiscordErrorCode::UnknownInteraction,
            DiscordErrorCode::AlreadyAcknowledged,
            DiscordErrorCode::MissingAccess,
            DiscordErrorCode::MissingPermissions,
            DiscordErrorCode::RateLimited,
            DiscordErrorCode::CannotSendEmptyMessage,
            DiscordErrorCode::InvalidFormBody,
            DiscordErrorCode::InvalidToken,
            DiscordErrorCode::ApiOverloaded,
            DiscordErrorCode::NetworkError,
            DiscordErrorCode::Unknown,
        ];
        for code in all {
            assert!(
                !(code.is_permanent() && code.is_retryable()),
                "{code:?} cannot be both permanent and retryable"
            );
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DiscordErrorCode::UnknownInteraction).unwrap();
        assert_eq!(json, "\"unknown_interaction\"");
    }
}
