//! Random trial generation with a controlled share of exact n-back repeats.

use rand::Rng;

use super::stimulus::{GridPos, Stimulus, GRID_SIZE, LETTERS};

/// Redraws allowed before a colliding non-match is nudged off its reference.
pub const MAX_RESAMPLES: usize = 8;

/// Builds the stimulus for `trial_index` given everything shown so far.
///
/// Trials before the first possible reference are always non-matches. A
/// non-match never reproduces both the letter and the cell of its n-back
/// reference, so a match label is never ambiguous.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    trial_index: usize,
    history: &[Stimulus],
    n_back: usize,
    match_probability: f64,
) -> Stimulus {
    let reference = trial_index
        .checked_sub(n_back)
        .filter(|_| n_back > 0)
        .and_then(|index| history.get(index));

    let Some(reference) = reference else {
        let (letter, position) = draw(rng);
        return Stimulus::new(letter, position, false, trial_index);
    };

    if rng.gen_bool(match_probability.clamp(0.0, 1.0)) {
        return Stimulus::new(reference.letter, reference.position, true, trial_index);
    }

    let (mut letter, mut position) = draw(rng);
    let mut resamples = 0;
    while letter == reference.letter && position == reference.position {
        if resamples == MAX_RESAMPLES {
            letter = next_letter(letter);
            break;
        }
        (letter, position) = draw(rng);
        resamples += 1;
    }

    Stimulus::new(letter, position, false, trial_index)
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> (char, GridPos) {
    let letter = LETTERS[rng.gen_range(0..LETTERS.len())];
    let position = GridPos::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
    (letter, position)
}

fn next_letter(letter: char) -> char {
    let index = LETTERS.iter().position(|&c| c == letter).unwrap_or(0);
    LETTERS[(index + 1) % LETTERS.len()]
}
