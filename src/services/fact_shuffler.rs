use rand::{seq::SliceRandom, Rng};

use crate::models::domain::Fact;

/// Returns a uniformly shuffled copy of `facts`. The input is left untouched.
pub fn shuffle_facts(facts: &[Fact]) -> Vec<Fact> {
    shuffle_facts_with(facts, &mut rand::rng())
}

pub fn shuffle_facts_with<R: Rng + ?Sized>(facts: &[Fact], rng: &mut R) -> Vec<Fact> {
    let mut shuffled = facts.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
