use crate::models::domain::Fact;

/// Returned by [`locate_fake`] when no fact in the batch is false.
pub const NO_FAKE_INDEX: i64 = -1;

/// Index of the first false fact, or [`NO_FAKE_INDEX`] if every fact is true.
///
/// Later false facts are ignored.
pub fn locate_fake(facts: &[Fact]) -> i64 {
    facts
        .iter()
        .position(Fact::is_fake)
        .map_or(NO_FAKE_INDEX, |index| index as i64)
}
