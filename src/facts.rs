//! "Did you know?" astronomy facts shown above the gallery.

use rand::seq::SliceRandom;

pub const FACTS: &[&str] = &[
    "A day on Venus is longer than its year.",
    "Neutron stars can spin 600 times per second.",
    "Olympus Mons on Mars is ~3× Everest.",
    "Jupiter’s Great Red Spot is at least 350 years old.",
    "There are more trees on Earth than stars in the Milky Way.",
    "On Mercury, some sunsets make the Sun appear to reverse.",
    "Saturn would float in a bathtub big enough to hold it.",
    "Europa may hide an ocean larger than Earth’s.",
    "The Sun is 99.86% of the solar system’s mass.",
    "Spacesuits are basically tiny spacecraft.",
];

pub fn random_fact() -> &'static str {
    FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FACTS[0])
}

pub fn fact_line() -> String {
    format!("Did you know? {}", random_fact())
}
