//! Directive discovery
//!
//! Extracts the ordered directives attached to a suite. The group form wins
//! over the single form; a suite with neither yields nothing.

use super::suite::TestSuite;
use super::value_objects::ModulesDirective;

/// Returns the directives of `suite` in declaration order.
///
/// Pure and deterministic: the same suite always yields the same sequence.
pub fn discover(suite: &TestSuite) -> Vec<ModulesDirective> {
    if let Some(group) = &suite.directive_group {
        return group.directives.clone();
    }

    suite.directive.iter().cloned().collect()
}
