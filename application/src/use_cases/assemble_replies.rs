//! Reply assembly stage
//!
//! The one place where a failed description is degraded to the fallback
//! sentence. Every degradation is logged.

use crate::use_cases::describe_spots::DescriptionOutcome;
use concierge_domain::{ReplyAssembler, ReplyItem, SpotResult, texts};
use tracing::warn;

/// Pair each spot with its description outcome and format it.
///
/// `descriptions` must line up with `spots`; output order follows `spots`.
pub fn assemble_replies(
    spots: &[SpotResult],
    descriptions: Vec<DescriptionOutcome>,
) -> Vec<ReplyItem> {
    debug_assert_eq!(spots.len(), descriptions.len());

    spots
        .iter()
        .zip(descriptions)
        .enumerate()
        .map(|(position, (spot, outcome))| {
            let description = match outcome {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        spot = %spot.name,
                        position,
                        error = %e,
                        "Description unavailable, using fallback"
                    );
                    texts::DESCRIPTION_FALLBACK.to_string()
                }
            };
            ReplyAssembler::assemble(spot, &description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::description_generator::DescriptionError;
    use crate::use_cases::test_support::spots;

    #[test]
    fn test_failed_description_gets_fallback_only_there() {
        let spots = spots(3);
        let outcomes = vec![
            Ok("first".to_string()),
            Err(DescriptionError::EmptyOutput),
            Ok("third".to_string()),
        ];

        let items = assemble_replies(&spots, outcomes);

        assert_eq!(items.len(), 3);
        assert!(items[0].text().starts_with("🏞️ spot-1"));
        assert!(items[0].text().contains("\n\nfirst\n\n"));
        assert!(items[1].text().starts_with("🏞️ spot-2"));
        assert!(items[1].text().contains(texts::DESCRIPTION_FALLBACK));
        assert!(items[2].text().contains("\n\nthird\n\n"));
        assert!(!items[2].text().contains(texts::DESCRIPTION_FALLBACK));
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble_replies(&[], vec![]).is_empty());
    }
}
