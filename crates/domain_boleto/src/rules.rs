//! Ordered layout rules
//!
//! Bank layouts branch on a handful of inputs (agreement length, wallet,
//! variation). Each branch is a [`LayoutRule`]: a predicate paired with the
//! layout it selects. Rules are evaluated top to bottom and the first match
//! wins, so a table reads exactly like the bank's manual.

use tracing::trace;

use crate::error::BoletoError;
use crate::params::BoletoParams;

/// A guarded layout: when `applies` holds, `layout` builds the field
#[derive(Clone, Copy)]
pub struct LayoutRule {
    /// Name reported in traces
    pub name: &'static str,
    /// Guard evaluated against the params
    pub applies: fn(&BoletoParams) -> bool,
    /// Field builder for matching params
    pub layout: fn(&BoletoParams) -> Result<String, BoletoError>,
}

impl std::fmt::Debug for LayoutRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutRule").field("name", &self.name).finish()
    }
}

/// Returns the first rule whose guard matches
pub fn select<'a>(rules: &'a [LayoutRule], params: &BoletoParams) -> Option<&'a LayoutRule> {
    rules.iter().find(|rule| (rule.applies)(params))
}

/// Builds the field with the first matching rule
///
/// Returns `None` when no rule matches; the caller decides which error that is.
pub fn evaluate(
    field: &'static str,
    rules: &[LayoutRule],
    params: &BoletoParams,
) -> Option<Result<String, BoletoError>> {
    let rule = select(rules, params)?;
    trace!(field, rule = rule.name, "layout rule matched");
    Some((rule.layout)(params))
}
