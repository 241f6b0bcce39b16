use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Numeric;

/// A minimum or maximum value together with a position where it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

impl Extremum {
    pub fn as_tuple(&self) -> (f64, usize) {
        (self.value, self.index)
    }
}

/// Smallest value in `values`.
///
/// When the minimum appears more than once the index of its second
/// occurrence is reported, not the first. An empty input yields `None`.
pub fn find_min<T: Numeric>(values: &[T]) -> Result<Option<Extremum>> {
    find_extremum(values, |candidate, best| candidate < best)
}

/// Largest value in `values`, with the same second-occurrence index rule
/// as [`find_min`].
pub fn find_max<T: Numeric>(values: &[T]) -> Result<Option<Extremum>> {
    find_extremum(values, |candidate, best| candidate > best)
}

fn find_extremum<T, F>(values: &[T], beats: F) -> Result<Option<Extremum>>
where
    T: Numeric,
    F: Fn(f64, f64) -> bool,
{
    if values.is_empty() {
        return Ok(None);
    }

    let data = values
        .iter()
        .map(|value| value.to_f64())
        .collect::<Result<Vec<f64>>>()?;

    let mut first_index = 0;
    for (index, &value) in data.iter().enumerate().skip(1) {
        if beats(value, data[first_index]) {
            first_index = index;
        }
    }

    let value = data[first_index];
    let index = data
        .iter()
        .enumerate()
        .skip(first_index + 1)
        .find(|&(_, &other)| other == value)
        .map_or(first_index, |(second_index, _)| second_index);

    Ok(Some(Extremum { value, index }))
}
