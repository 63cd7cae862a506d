use super::CalcMethod;
use crate::domain::IdentifierCounts;

/// Intermediate aggregates feeding the threshold judgment and explanations.
pub(crate) struct CombinationSignals {
    pub network_any: u64,
    pub other_any: u64,
    pub cpi_trigger: bool,
    pub estimated_persons: u64,
    pub calc_method: CalcMethod,
}

/// Apply the combination rule: a covered combination requires at least one
/// identifier present in each category, and its reach is bounded by the
/// smaller category's maximum coverage.
pub(crate) fn combine(counts: &IdentifierCounts) -> CombinationSignals {
    let network_any = counts.network_any();
    let other_any = counts.other_any();
    let cpi_trigger = network_any > 0 && other_any > 0;

    let (estimated_persons, calc_method) = if cpi_trigger {
        (network_any.min(other_any), CalcMethod::Intersection)
    } else {
        (0, CalcMethod::NoCombination)
    };

    CombinationSignals {
        network_any,
        other_any,
        cpi_trigger,
        estimated_persons,
        calc_method,
    }
}
