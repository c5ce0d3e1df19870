//! Price gate: pure evaluation of a proposal's price condition

use multisig_types::proposal::PriceCondition;
use multisig_types::quote::PriceQuote;

use crate::errors::PriceGateError;

/// Evaluate `condition` against `quote`.
///
/// - no condition passes without consulting the quote
/// - a missing quote or a quote from another feed is `ConditionNotMet`
/// - a quote older than `max_age_seconds` is `Stale`, even if in range
/// - bounds are inclusive
pub fn evaluate(
    condition: Option<&PriceCondition>,
    quote: Option<&PriceQuote>,
) -> Result<(), PriceGateError> {
    let Some(condition) = condition else {
        return Ok(());
    };
    let quote = quote.ok_or(PriceGateError::ConditionNotMet)?;

    if quote.feed_id != condition.feed_id {
        return Err(PriceGateError::ConditionNotMet);
    }

    if quote.age_seconds > condition.max_age_seconds {
        return Err(PriceGateError::Stale);
    }

    if let Some(min_price) = condition.min_price {
        if quote.price < min_price {
            return Err(PriceGateError::ConditionNotMet);
        }
    }

    if let Some(max_price) = condition.max_price {
        if quote.price > max_price {
            return Err(PriceGateError::ConditionNotMet);
        }
    }

    Ok(())
}
