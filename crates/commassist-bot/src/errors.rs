//! Discord-specific error handling for the bot.
//!
//! Converts serenity errors into structured `ErrorOutcome`s and provides a
//! `log_error` helper that logs at the correct level based on whether the
//! error is permanent, transient, or a rate-limit.

use std::time::Duration;

use commassist_types::{DiscordErrorCode, ErrorCategory};
use serenity::http::HttpError;
use tracing::{debug, error, warn};

/// A classified failure while talking to Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordFailure {
    pub code: DiscordErrorCode,
    pub category: ErrorCategory,
    pub message: String,
    pub raw_discord_code: u32,
    pub http_status: u16,
}

/// Result of handling a Discord API error.
#[derive(Debug)]
pub enum ErrorOutcome {
    /// Rate limited or overloaded; the reply can be retried after this duration.
    Retry(Duration),
    /// Permanent failure (expired interaction, missing permission …).
    Permanent(DiscordFailure),
    /// Non-permanent failure; log and continue.
    Transient(DiscordFailure),
}

/// Classify a serenity `Error` and return the appropriate `ErrorOutcome`.
pub fn classify(err: &serenity::Error) -> ErrorOutcome {
    match err {
        serenity::Error::Http(http_err) => classify_http(http_err),
        _ => {
            debug!("Non-HTTP serenity error: {}", err);
            ErrorOutcome::Transient(make_failure(
                DiscordErrorCode::NetworkError,
                &err.to_string(),
                0,
                0,
            ))
        }
    }
}

/// Log a serenity error at the appropriate level.
///
/// - Permanent errors → `error!`
/// - Rate-limited → `warn!`
/// - Transient errors → `warn!`
pub fn log_error(context: &str, err: &serenity::Error) {
    log_outcome(context, classify(err));
}

/// Log a pre-classified `ErrorOutcome` at the appropriate level.
pub fn log_outcome(context: &str, outcome: ErrorOutcome) {
    match outcome {
        ErrorOutcome::Permanent(f) => {
            error!(
                category = ?f.category,
                discord_code = f.raw_discord_code,
                http_status = f.http_status,
                "{} [{:?}]: {}",
                context,
                f.code,
                f.message
            );
        }
        ErrorOutcome::Transient(f) => {
            warn!(
                category = ?f.category,
                discord_code = f.raw_discord_code,
                http_status = f.http_status,
                "{} [{:?}]: {}",
                context,
                f.code,
                f.message
            );
        }
        ErrorOutcome::Retry(dur) => {
            warn!("{}: rate limited, retry after {:?}", context, dur);
        }
    }
}

fn classify_http(http_err: &HttpError) -> ErrorOutcome {
    match http_err {
        HttpError::UnsuccessfulRequest(resp) => {
            let status = resp.status_code.as_u16();

            if status == 429 {
                return ErrorOutcome::Retry(Duration::from_secs(1));
            }

            let raw_code = resp.error.code as u32;
            let code = DiscordErrorCode::from_raw(raw_code);
            let failure = make_failure(code, &resp.error.message, raw_code, status);

            if code.is_permanent() {
                ErrorOutcome::Permanent(failure)
            } else if code.is_retryable() {
                ErrorOutcome::Retry(Duration::from_secs(5))
            } else {
                ErrorOutcome::Transient(failure)
            }
        }

        // Network / request-level failures (not Discord API errors)
        _ => ErrorOutcome::Transient(make_failure(
            DiscordErrorCode::NetworkError,
            &http_err.to_string(),
            0,
            0,
        )),
    }
}

fn make_failure(
    code: DiscordErrorCode,
    message: &str,
    raw_discord_code: u32,
    http_status: u16,
) -> DiscordFailure {
    DiscordFailure {
        code,
        category: code.category(),
        message: message.to_string(),
        raw_discord_code,
        http_status,
    }
}
