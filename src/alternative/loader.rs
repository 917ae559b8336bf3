//! Load alternatives from CSV input
//!
//! Expected headers: Name,Investment,UsefulLife,SalvageValue,OperatingCost,Revenue
//! Name may be blank (the engine assigns positional defaults); the trailing
//! three columns default to zero when empty.

use super::Alternative;
use csv::Reader;
use log::debug;
use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the alternatives input format
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Investment")]
    investment: f64,
    #[serde(rename = "UsefulLife")]
    useful_life: u32,
    #[serde(rename = "SalvageValue", default)]
    salvage_value: Option<f64>,
    #[serde(rename = "OperatingCost", default)]
    operating_cost: Option<f64>,
    #[serde(rename = "Revenue", default)]
    revenue: Option<f64>,
}

impl CsvRow {
    fn to_alternative(self) -> Result<Alternative, Box<dyn Error>> {
        if !(self.investment > 0.0) {
            return Err(format!(
                "Investment must be positive, got {} for {:?}",
                self.investment, self.name
            )
            .into());
        }
        if self.useful_life == 0 {
            return Err(format!("UsefulLife must be at least 1 for {:?}", self.name).into());
        }

        Ok(Alternative {
            name: self.name.filter(|n| !n.is_empty()),
            investment: self.investment,
            useful_life: self.useful_life,
            salvage_value: self.salvage_value.unwrap_or(0.0),
            operating_cost: self.operating_cost.unwrap_or(0.0),
            revenue: self.revenue.unwrap_or(0.0),
        })
    }
}

/// Load alternatives from a CSV file
pub fn load_alternatives(path: &Path) -> Result<Vec<Alternative>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let alternatives = read_rows(&mut reader)?;
    debug!("Loaded {} alternatives from {}", alternatives.len(), path.display());
    Ok(alternatives)
}

/// Load alternatives from any CSV reader (in-memory buffers, stdin)
pub fn load_alternatives_from_reader<R: Read>(rdr: R) -> Result<Vec<Alternative>, Box<dyn Error>> {
    let mut reader = Reader::from_reader(rdr);
    read_rows(&mut reader)
}

fn read_rows<R: Read>(reader: &mut Reader<R>) -> Result<Vec<Alternative>, Box<dyn Error>> {
    let mut alternatives = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        alternatives.push(row.to_alternative()?);
    }
    Ok(alternatives)
}

/// Built-in sample set: the classroom exercise (30000 over 8 years at 8500/yr
/// operating cost) next to a cheaper-to-run but pricier machine, for runs
/// without an input file
pub fn classroom_example_set() -> Vec<Alternative> {
    vec![
        Alternative {
            name: Some("Classroom Exercise".to_string()),
            investment: 30_000.0,
            useful_life: 8,
            salvage_value: 0.0,
            operating_cost: 8_500.0,
            revenue: 0.0,
        },
        Alternative {
            name: Some("Premium Machine".to_string()),
            investment: 45_000.0,
            useful_life: 8,
            salvage_value: 6_000.0,
            operating_cost: 6_200.0,
            revenue: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Investment,UsefulLife,SalvageValue,OperatingCost,Revenue
Press A,30000,8,0,8500,0
,45000,10,6000,6200,1500
";

    #[test]
    fn test_load_from_reader() {
        let alts = load_alternatives_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(alts.len(), 2);

        assert_eq!(alts[0].name.as_deref(), Some("Press A"));
        assert_eq!(alts[0].investment, 30_000.0);
        assert_eq!(alts[0].useful_life, 8);
        assert_eq!(alts[0].operating_cost, 8_500.0);

        // Blank name column becomes None so the engine can default it
        assert!(alts[1].name.is_none());
        assert_eq!(alts[1].salvage_value, 6_000.0);
        assert_eq!(alts[1].revenue, 1_500.0);
    }

    #[test]
    fn test_reject_non_positive_investment() {
        let bad = "Name,Investment,UsefulLife\nBad,0,5\n";
        assert!(load_alternatives_from_reader(bad.as_bytes()).is_err());

        let negative = "Name,Investment,UsefulLife\nBad,-100,5\n";
        assert!(load_alternatives_from_reader(negative.as_bytes()).is_err());
    }

    #[test]
    fn test_reject_zero_useful_life() {
        let bad = "Name,Investment,UsefulLife\nBad,1000,0\n";
        assert!(load_alternatives_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_classroom_example_set() {
        let alts = classroom_example_set();
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].investment, 30_000.0);
        assert_eq!(alts[0].useful_life, 8);
        assert_eq!(alts[0].operating_cost, 8_500.0);
    }
}
