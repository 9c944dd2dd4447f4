//! Solar-System planet tables
//!
//! The fact and orbital-period tables are compile-time constants keyed by
//! [`Planet`]. Lookups go through [`Planet::from_name`], which applies the
//! same narrow normalization for every tool: title-casing only, with no
//! whitespace trimming and no diacritic folding.

use std::fmt;

/// One of the eight Solar-System planets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets, ordered by distance from the Sun
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Canonical capitalized name
    pub fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Fun fact shown to beginners
    pub fn fact(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury orbits the Sun in just 88 Earth‑days.",
            Planet::Venus => "Venus rotates backwards (retrograde spin).",
            Planet::Earth => "Earth is the densest planet in the Solar System.",
            Planet::Mars => "Mars hosts the tallest known volcano, Olympus Mons.",
            Planet::Jupiter => {
                "Jupiter has a persistent anticyclonic storm called the Great Red Spot."
            }
            Planet::Saturn => "Saturn’s rings are less than 1 km thick in most places.",
            Planet::Uranus => "Uranus spins on its side—its axial tilt is 98°.",
            Planet::Neptune => "Neptune was the first planet found by mathematical prediction.",
        }
    }

    /// Orbital period (length of the planetary year) in Earth days
    pub fn orbital_period(self) -> OrbitalPeriod {
        match self {
            Planet::Mercury => OrbitalPeriod::Days(88),
            Planet::Venus => OrbitalPeriod::Days(225),
            Planet::Earth => OrbitalPeriod::FractionalDays(365.25),
            Planet::Mars => OrbitalPeriod::Days(687),
            Planet::Jupiter => OrbitalPeriod::Days(4333),
            Planet::Saturn => OrbitalPeriod::Days(10759),
            Planet::Uranus => OrbitalPeriod::Days(30687),
            Planet::Neptune => OrbitalPeriod::Days(60190),
        }
    }

    /// Resolve a caller-supplied name to a planet
    ///
    /// The input is title-cased and then compared against the canonical
    /// names, so `"mars"`, `"MARS"` and `"mArS"` all resolve to
    /// [`Planet::Mars`] while `" mars"` and `"Mars "` do not.
    ///
    /// # Examples
    ///
    /// ```
    /// use astro_tutor::tools::planets::Planet;
    ///
    /// assert_eq!(Planet::from_name("neptune"), Some(Planet::Neptune));
    /// assert_eq!(Planet::from_name("Pluto"), None);
    /// ```
    pub fn from_name(input: &str) -> Option<Planet> {
        let normalized = title_case(input);
        Self::ALL
            .iter()
            .copied()
            .find(|planet| planet.name() == normalized)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orbital period in Earth days
///
/// Whole and fractional periods are kept apart so that whole values render
/// without a decimal part (`60,190`) and fractional ones keep theirs
/// (`365.25`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitalPeriod {
    /// Whole number of days
    Days(u32),
    /// Fractional number of days
    FractionalDays(f64),
}

impl OrbitalPeriod {
    /// Whether the period is zero
    ///
    /// `days_in_year` treats a zero period as "not found". No planet in the
    /// table has one.
    pub fn is_zero(self) -> bool {
        match self {
            OrbitalPeriod::Days(days) => days == 0,
            OrbitalPeriod::FractionalDays(days) => days == 0.0,
        }
    }
}

impl fmt::Display for OrbitalPeriod {
    /// Renders the period with comma thousands separators
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitalPeriod::Days(days) => f.write_str(&group_thousands(&days.to_string())),
            OrbitalPeriod::FractionalDays(days) => {
                let rendered = days.to_string();
                let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "0"));
                write!(f, "{}.{}", group_thousands(whole), fraction)
            }
        }
    }
}

/// Insert a comma between every group of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Title-case a string
///
/// A cased character that follows another cased character is lower-cased;
/// any other character is upper-cased. Digits, spaces and punctuation are
/// uncased, so they start a new word: `"3mars"` becomes `"3Mars"`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_cased = false;
    for ch in input.chars() {
        if previous_cased {
            output.extend(ch.to_lowercase());
        } else {
            output.extend(ch.to_uppercase());
        }
        previous_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    output
}
