//! Planet table command

use crate::tools::Planet;
use colored::Colorize;
use prettytable::{format, row, Table};

/// Print every planet with its year length and fun fact
pub fn list_planets() {
    let table = planet_table();
    println!("\n{}\n", "Solar-System planets:".bold());
    table.printstd();
    println!();
}

/// Build the planet table
pub fn planet_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(row!["Planet", "Year (Earth days)", "Fact"]);

    for planet in Planet::ALL {
        table.add_row(row![
            planet.name(),
            planet.orbital_period().to_string(),
            planet.fact()
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_table_has_row_per_planet() {
        let table = planet_table();
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_planet_table_rendering() {
        let rendered = planet_table().to_string();
        assert!(rendered.contains("Neptune"));
        assert!(rendered.contains("60,190"));
        assert!(rendered.contains("365.25"));
    }
}
