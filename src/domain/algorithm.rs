//! Strategy for recomputing the full board each generation.
//!
//! Both strategies read only the current generation and write only the
//! scratch buffer, so they always produce identical boards.

use std::str::FromStr;

use super::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// One row after another on the calling thread
    Serial,
    /// Rows split across the rayon pool
    #[default]
    Parallel,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 2] {
        [Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// The other strategy, for switching at runtime
    pub fn next(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }

    /// Advance `grid` by one generation
    pub fn step(self, grid: &mut Grid) {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serial" => Ok(Algorithm::Serial),
            "parallel" => Ok(Algorithm::Parallel),
            other => Err(format!("unknown algorithm `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(Algorithm::default(), Algorithm::Parallel);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Algorithm::Serial.next(), Algorithm::Parallel);
        assert_eq!(Algorithm::Parallel.next().next(), Algorithm::Parallel);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Serial".parse::<Algorithm>(), Ok(Algorithm::Serial));
        assert_eq!("parallel".parse::<Algorithm>(), Ok(Algorithm::Parallel));
        assert!("simd".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_both_strategies_agree() {
        let mut seed = Grid::create(12, 9).unwrap();
        seed.stamp_pattern("lwss").unwrap();
        seed.set_cell(11, 8, Cell::Alive).unwrap();

        let results: Vec<Grid> = Algorithm::all()
            .into_iter()
            .map(|algorithm| {
                let mut grid = seed.clone();
                for _ in 0..6 {
                    algorithm.step(&mut grid);
                }
                grid
            })
            .collect();
        assert_eq!(results[0], results[1]);
    }
}
