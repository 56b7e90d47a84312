//! Payout calculation business logic.
//!
//! This module holds the pure calculator that turns a list of completed
//! sessions plus a platform-fee and tax percentage into a
//! [`PayoutBreakdown`], together with the currency formatting used on
//! receipts. Nothing here touches the database: the functions are
//! referentially transparent so the same inputs always produce the same
//! breakdown to floating-point precision.

use crate::{
    entities::session,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};

/// The computed financial decomposition for a set of sessions.
///
/// Derived once from a session list and two percentages; never updated in
/// place. The invariant `final_amount = base_amount - platform_fee -
/// tax_amount` always holds, with tax computed on the post-fee amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    /// Sum of per-session amounts before any deduction
    pub base_amount: f64,
    /// Platform fee percentage applied (0-100)
    pub platform_fee_percentage: f64,
    /// `base_amount * platform_fee_percentage / 100`
    pub platform_fee: f64,
    /// Tax percentage applied (0-100)
    pub tax_percentage: f64,
    /// `(base_amount - platform_fee) * tax_percentage / 100`
    pub tax_amount: f64,
    /// Final payout to the mentor
    pub final_amount: f64,
}

/// Computes the amount owed for a single session.
///
/// The hourly rate is pro-rated linearly by minutes: `hourly_rate / 60 *
/// duration`. No rounding happens here; only the display layer rounds for
/// currency presentation.
#[must_use]
pub fn session_amount(session: &session::Model) -> f64 {
    session.hourly_rate / 60.0 * f64::from(session.duration_minutes)
}

/// Computes a [`PayoutBreakdown`] from a session list and two percentages.
///
/// Tax is applied to the post-platform-fee amount, not the base amount:
/// a 10% fee and 18% tax on a base of 4000 yields a fee of 400, tax of
/// 648 (18% of 3600), and a final payout of 2952.
///
/// # Arguments
/// * `sessions` - Sessions to pay out, normally the completed sessions for
///   one mentor in a date range
/// * `platform_fee_percentage` - Fee percentage in `[0, 100]`
/// * `tax_percentage` - Tax percentage in `[0, 100]`
///
/// # Errors
/// Returns [`Error::InvalidPercentage`] when either percentage is non-finite
/// or outside `[0, 100]`, and [`Error::EmptySessionList`] when `sessions` is
/// empty (no payout is computable, matching the receipt workflow which
/// refuses to preview or generate on an empty result). A session with a
/// non-positive duration or rate is a data invariant violation and fails
/// with [`Error::InvalidSession`].
pub fn compute_breakdown(
    sessions: &[session::Model],
    platform_fee_percentage: f64,
    tax_percentage: f64,
) -> Result<PayoutBreakdown> {
    validate_percentage("platform fee percentage", platform_fee_percentage)?;
    validate_percentage("tax percentage", tax_percentage)?;

    if sessions.is_empty() {
        return Err(Error::EmptySessionList);
    }

    for session in sessions {
        if session.duration_minutes <= 0 {
            tracing::error!(
                session_id = session.id,
                duration = session.duration_minutes,
                "session has non-positive duration"
            );
            return Err(Error::InvalidSession {
                message: format!(
                    "session {} has non-positive duration {}",
                    session.id, session.duration_minutes
                ),
            });
        }
        if !session.hourly_rate.is_finite() || session.hourly_rate <= 0.0 {
            tracing::error!(
                session_id = session.id,
                rate = session.hourly_rate,
                "session has invalid hourly rate"
            );
            return Err(Error::InvalidSession {
                message: format!(
                    "session {} has invalid hourly rate {}",
                    session.id, session.hourly_rate
                ),
            });
        }
    }

    let base_amount: f64 = sessions.iter().map(session_amount).sum();

    let platform_fee = base_amount * platform_fee_percentage / 100.0;
    let taxable_amount = base_amount - platform_fee;
    let tax_amount = taxable_amount * tax_percentage / 100.0;
    let final_amount = taxable_amount - tax_amount;

    Ok(PayoutBreakdown {
        base_amount,
        platform_fee_percentage,
        platform_fee,
        tax_percentage,
        tax_amount,
        final_amount,
    })
}

fn validate_percentage(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(Error::InvalidPercentage { field, value });
    }
    Ok(())
}

/// Formats an amount as INR for receipt display.
///
/// Rounds to whole rupees and applies Indian digit grouping (last three
/// digits, then groups of two): `2952 -> "₹2,952"`, `100000 -> "₹1,00,000"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    // Cast safety: receipts deal in amounts far below i64 range.
    #[allow(clippy::cast_possible_truncation)]
    let rupees = amount.round() as i64;
    let digits = rupees.abs().to_string();

    let mut grouped = String::new();
    if digits.len() > 3 {
        // Everything before the last three digits groups in twos
        let head = &digits[..digits.len() - 3];
        let first = head.len() % 2;
        if first > 0 {
            grouped.push_str(&head[..first]);
            grouped.push(',');
        }
        for chunk in head[first..].as_bytes().chunks(2) {
            grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
            grouped.push(',');
        }
        grouped.push_str(&digits[digits.len() - 3..]);
    } else {
        grouped.push_str(&digits);
    }

    if rupees < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_session(id: i64, duration_minutes: i32, hourly_rate: f64) -> session::Model {
        session::Model {
            id,
            mentor_id: 1,
            mentor_name: "Priya Sharma".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            duration_minutes,
            session_type: "live".to_string(),
            hourly_rate,
            status: "completed".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_session_amount_full_hour() {
        let session = make_session(1, 60, 4000.0);
        assert_eq!(session_amount(&session), 4000.0);
    }

    #[test]
    fn test_session_amount_prorated() {
        // 30 minutes at 3000/hour = 1500
        let session = make_session(1, 30, 3000.0);
        assert_eq!(session_amount(&session), 1500.0);
    }

    #[test]
    fn test_breakdown_single_session_with_fee_and_tax() {
        // One hour at 4000 with 10% fee and 18% tax:
        // fee = 400, tax = 18% of 3600 = 648, final = 2952
        let sessions = vec![make_session(1, 60, 4000.0)];
        let breakdown = compute_breakdown(&sessions, 10.0, 18.0).unwrap();

        assert_eq!(breakdown.base_amount, 4000.0);
        assert_eq!(breakdown.platform_fee, 400.0);
        assert_eq!(breakdown.tax_amount, 648.0);
        assert_eq!(breakdown.final_amount, 2952.0);
    }

    #[test]
    fn test_breakdown_multiple_sessions_no_deductions() {
        // Two half-hour sessions at 3000/hour, no fee or tax
        let sessions = vec![make_session(1, 30, 3000.0), make_session(2, 30, 3000.0)];
        let breakdown = compute_breakdown(&sessions, 0.0, 0.0).unwrap();

        assert_eq!(breakdown.base_amount, 3000.0);
        assert_eq!(breakdown.platform_fee, 0.0);
        assert_eq!(breakdown.tax_amount, 0.0);
        assert_eq!(breakdown.final_amount, 3000.0);
    }

    #[test]
    fn test_breakdown_full_platform_fee() {
        // A 100% platform fee leaves nothing to tax or pay out
        let sessions = vec![make_session(1, 60, 4000.0)];
        let breakdown = compute_breakdown(&sessions, 100.0, 18.0).unwrap();

        assert_eq!(breakdown.platform_fee, 4000.0);
        assert_eq!(breakdown.tax_amount, 0.0);
        assert_eq!(breakdown.final_amount, 0.0);
    }

    #[test]
    fn test_breakdown_invariant_holds() {
        let sessions = vec![
            make_session(1, 45, 4000.0),
            make_session(2, 90, 3500.0),
            make_session(3, 30, 4200.0),
        ];
        let breakdown = compute_breakdown(&sessions, 12.5, 18.0).unwrap();

        assert_eq!(
            breakdown.final_amount,
            breakdown.base_amount - breakdown.platform_fee - breakdown.tax_amount
        );
        assert!(
            breakdown.platform_fee + breakdown.tax_amount + breakdown.final_amount
                <= breakdown.base_amount + 1e-9
        );
    }

    #[test]
    fn test_breakdown_is_deterministic() {
        let sessions = vec![make_session(1, 45, 3800.0), make_session(2, 60, 3800.0)];
        let first = compute_breakdown(&sessions, 10.0, 18.0).unwrap();
        let second = compute_breakdown(&sessions, 10.0, 18.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_fee_increase_decreases_final() {
        let sessions = vec![make_session(1, 60, 4000.0)];
        let low_fee = compute_breakdown(&sessions, 5.0, 18.0).unwrap();
        let high_fee = compute_breakdown(&sessions, 15.0, 18.0).unwrap();
        assert!(high_fee.final_amount < low_fee.final_amount);
    }

    #[test]
    fn test_breakdown_rejects_empty_sessions() {
        let result = compute_breakdown(&[], 10.0, 18.0);
        assert!(matches!(result.unwrap_err(), Error::EmptySessionList));
    }

    #[test]
    fn test_breakdown_rejects_out_of_range_percentages() {
        let sessions = vec![make_session(1, 60, 4000.0)];

        let result = compute_breakdown(&sessions, -1.0, 18.0);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPercentage {
                field: "platform fee percentage",
                ..
            }
        ));

        let result = compute_breakdown(&sessions, 10.0, 100.5);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPercentage {
                field: "tax percentage",
                ..
            }
        ));

        let result = compute_breakdown(&sessions, f64::NAN, 18.0);
        assert!(matches!(result.unwrap_err(), Error::InvalidPercentage { .. }));
    }

    #[test]
    fn test_breakdown_rejects_corrupt_session() {
        let zero_duration = vec![make_session(1, 0, 4000.0)];
        let result = compute_breakdown(&zero_duration, 10.0, 18.0);
        assert!(matches!(result.unwrap_err(), Error::InvalidSession { .. }));

        let bad_rate = vec![make_session(1, 60, -100.0)];
        let result = compute_breakdown(&bad_rate, 10.0, 18.0);
        assert!(matches!(result.unwrap_err(), Error::InvalidSession { .. }));
    }

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(952.0), "₹952");
        assert_eq!(format_currency(2952.0), "₹2,952");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(100_000.0), "₹1,00,000");
        assert_eq!(format_currency(1_234_567.0), "₹12,34,567");
        assert_eq!(format_currency(10_000_000.0), "₹1,00,00,000");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_rupees() {
        assert_eq!(format_currency(2951.5), "₹2,952");
        assert_eq!(format_currency(2951.4), "₹2,951");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-2952.0), "-₹2,952");
    }
}
