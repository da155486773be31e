//! Credit calculation for a single message

use super::{Message, Report};

/// Credits charged per 100 tokens when no report prices the message
pub const BASE_MODEL_RATE: f64 = 40.0;

/// Characters per token used by the text-based estimate
pub const CHARS_PER_TOKEN: f64 = 4.0;

/// Lowest amount of credits any message is charged
pub const MIN_CREDITS: f64 = 1.0;

/// Estimate the number of tokens in a text.
///
/// Tokens are discrete, so partial tokens round up. Length is counted in
/// characters, not bytes.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() as f64 / CHARS_PER_TOKEN).ceil() as u64
}

/// Credits used by a message.
///
/// A resolved report always wins. Otherwise the cost is estimated from the
/// text length, rounded up to two decimals and floored at [`MIN_CREDITS`].
pub fn credits_used(report: Option<&Report>, message: &Message) -> f64 {
    if let Some(report) = report {
        return report.credit_cost;
    }

    let tokens = estimate_tokens(&message.text) as f64;
    let cost = tokens / 100.0 * BASE_MODEL_RATE;
    let rounded = (cost * 100.0).ceil() / 100.0;

    rounded.max(MIN_CREDITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> Message {
        Message::new(1, "2024-04-29T02:08:29.375Z", text)
    }

    #[test]
    fn test_takes_credit_from_report_when_present() {
        let report = Report::new(42, "Test report name", 100.0);
        assert_eq!(credits_used(Some(&report), &message("t")), 100.0);
    }

    #[test]
    fn test_report_cost_ignores_text() {
        let report = Report::new(7, "Short", 0.25);
        let long_text = "x".repeat(10_000);

        assert_eq!(credits_used(Some(&report), &message(&long_text)), 0.25);
    }

    #[test]
    fn test_calculates_credit_from_text_when_report_absent() {
        assert_eq!(credits_used(None, &message("0123456789ABCDEF")), 1.6);
    }

    #[test]
    fn test_min_cost_is_one() {
        assert_eq!(credits_used(None, &message("t")), 1.0);
        assert_eq!(credits_used(None, &message("")), 1.0);
    }

    #[test]
    fn test_partial_tokens_round_up() {
        // 17 chars -> 5 tokens -> 2.0
        assert_eq!(credits_used(None, &message("0123456789ABCDEFG")), 2.0);
        // 101 chars -> 26 tokens -> 10.4
        assert_eq!(credits_used(None, &message(&"a".repeat(101))), 10.4);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let text = "é".repeat(16);
        assert_eq!(text.len(), 32);
        assert_eq!(estimate_tokens(&text), 4);
        assert_eq!(credits_used(None, &message(&text)), 1.6);
    }

    #[test]
    fn test_estimate_never_below_floor() {
        for len in 0..64 {
            let cost = credits_used(None, &message(&"a".repeat(len)));
            assert!(cost >= MIN_CREDITS, "len {} produced {}", len, cost);
        }
    }
}
