use std::fmt;
use std::str::FromStr;

use super::GridError;

/// A named set of cells stamped at fixed board coordinates.
/// Coordinates are absolute `(column, row)` pairs, not offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Smallest board `(columns, rows)` that holds every cell of the pattern
    pub fn min_dimensions(&self) -> (usize, usize) {
        let columns = self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let rows = self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        (columns, rows)
    }

    /// Look a pattern up by its stamp name
    pub fn named(name: &str) -> Result<&'static Pattern, GridError> {
        presets::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name == name)
            .ok_or_else(|| GridError::UnknownPattern(name.to_owned()))
    }
}

/// Patterns the board knows how to stamp
pub mod presets {
    use super::Pattern;

    /// Glider - moves one cell diagonally every 4 generations
    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "Moves diagonally (period 4)",
        cells: &[
            (2, 1),
            (3, 2),
            (1, 3), (2, 3), (3, 3),
        ],
    };

    /// Lightweight spaceship, travels horizontally
    pub const LWSS: Pattern = Pattern {
        name: "lwss",
        description: "Lightweight spaceship",
        cells: &[
            (2, 1), (5, 1),
            (6, 2),
            (3, 3), (6, 3),
            (4, 4), (5, 4), (6, 4),
        ],
    };

    pub const ALL: &[&Pattern] = &[&GLIDER, &LWSS];
}

/// Entries of the pattern selector.
/// `Random` fills the board instead of stamping a fixed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Random,
    Glider,
    Lwss,
}

impl Preset {
    pub fn all() -> [Preset; 3] {
        [Preset::Random, Preset::Glider, Preset::Lwss]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Random => "random",
            Preset::Glider => presets::GLIDER.name,
            Preset::Lwss => presets::LWSS.name,
        }
    }

    /// Label for the selector
    pub fn label(self) -> &'static str {
        match self {
            Preset::Random => "Random",
            Preset::Glider => "Glider",
            Preset::Lwss => "LWSS",
        }
    }

    /// One-line blurb shown under the selector
    pub fn description(self) -> &'static str {
        match self.pattern() {
            Some(pattern) => pattern.description,
            None => "Fills the board at the set density",
        }
    }

    /// Fixed pattern to stamp, `None` for `Random`
    pub fn pattern(self) -> Option<&'static Pattern> {
        match self {
            Preset::Random => None,
            Preset::Glider => Some(&presets::GLIDER),
            Preset::Lwss => Some(&presets::LWSS),
        }
    }
}

impl FromStr for Preset {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| GridError::UnknownPattern(s.to_owned()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_dimensions() {
        assert_eq!(presets::GLIDER.min_dimensions(), (4, 4));
        assert_eq!(presets::LWSS.min_dimensions(), (7, 5));
    }

    #[test]
    fn test_lwss_has_eight_cells() {
        assert_eq!(presets::LWSS.cells.len(), 8);
        assert_eq!(presets::GLIDER.cells.len(), 5);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Pattern::named("glider").unwrap().name, "glider");
        assert_eq!(Pattern::named("lwss").unwrap().name, "lwss");
        assert_eq!(
            Pattern::named("Glider"),
            Err(GridError::UnknownPattern("Glider".into()))
        );
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("random".parse::<Preset>(), Ok(Preset::Random));
        assert_eq!("lwss".parse::<Preset>(), Ok(Preset::Lwss));
        assert!("blinker".parse::<Preset>().is_err());
        assert_eq!(Preset::Random.pattern(), None);
        assert_eq!(Preset::Glider.pattern(), Some(&presets::GLIDER));
        assert_eq!(Preset::Lwss.description(), presets::LWSS.description);
        assert!(!Preset::Random.description().is_empty());
    }
}
