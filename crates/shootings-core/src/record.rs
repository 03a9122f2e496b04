//! Incident records and the categorical attributes reports group by

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One police shooting incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Date of the incident (the table's time index)
    pub date: NaiveDate,
    /// Victim name, when published
    pub name: Option<String>,
    /// State (administrative region) name
    pub state: String,
    /// City (locality) name
    pub city: String,
    /// e.g. "Shot" or "Shot and Tasered"
    pub manner_of_death: String,
    /// e.g. "Gun", "Knife", "Unarmed"
    pub armed: Option<String>,
    /// Victim age in years
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub signs_of_mental_illness: Option<bool>,
    pub threat_level: Option<String>,
    pub flee: Option<String>,
    pub body_camera: Option<bool>,
}

impl IncidentRecord {
    /// Create a record with the required fields; everything else is missing
    pub fn new(
        date: NaiveDate,
        state: impl Into<String>,
        city: impl Into<String>,
        manner_of_death: impl Into<String>,
    ) -> Self {
        Self {
            date,
            name: None,
            state: state.into(),
            city: city.into(),
            manner_of_death: manner_of_death.into(),
            armed: None,
            age: None,
            gender: None,
            race: None,
            signs_of_mental_illness: None,
            threat_level: None,
            flee: None,
            body_camera: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_armed(mut self, armed: impl Into<String>) -> Self {
        self.armed = Some(armed.into());
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn with_mental_illness(mut self, signs: bool) -> Self {
        self.signs_of_mental_illness = Some(signs);
        self
    }

    pub fn with_threat_level(mut self, level: impl Into<String>) -> Self {
        self.threat_level = Some(level.into());
        self
    }

    pub fn with_flee(mut self, flee: impl Into<String>) -> Self {
        self.flee = Some(flee.into());
        self
    }

    pub fn with_body_camera(mut self, body_camera: bool) -> Self {
        self.body_camera = Some(body_camera);
        self
    }

    /// Value of a categorical attribute, `None` when missing
    pub fn attribute(&self, attr: Attribute) -> Option<String> {
        match attr {
            Attribute::State => Some(self.state.clone()),
            Attribute::City => Some(self.city.clone()),
            Attribute::MannerOfDeath => Some(self.manner_of_death.clone()),
            Attribute::Armed => self.armed.clone(),
            Attribute::Gender => self.gender.clone(),
            Attribute::Race => self.race.clone(),
            Attribute::SignsOfMentalIllness => self.signs_of_mental_illness.map(bool_label),
            Attribute::ThreatLevel => self.threat_level.clone(),
            Attribute::Flee => self.flee.clone(),
            Attribute::BodyCamera => self.body_camera.map(bool_label),
        }
    }
}

fn bool_label(value: bool) -> String {
    let label = if value { "True" } else { "False" };
    label.to_string()
}

/// Categorical columns of the incident table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    State,
    City,
    MannerOfDeath,
    Armed,
    Gender,
    Race,
    SignsOfMentalIllness,
    ThreatLevel,
    Flee,
    BodyCamera,
}

impl Attribute {
    /// All attributes in dataset column order
    pub const ALL: [Attribute; 10] = [
        Attribute::MannerOfDeath,
        Attribute::Armed,
        Attribute::Gender,
        Attribute::Race,
        Attribute::City,
        Attribute::State,
        Attribute::SignsOfMentalIllness,
        Attribute::ThreatLevel,
        Attribute::Flee,
        Attribute::BodyCamera,
    ];

    /// Column name as it appears in the dataset
    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::State => "State",
            Attribute::City => "City",
            Attribute::MannerOfDeath => "Manner of Death",
            Attribute::Armed => "Armed",
            Attribute::Gender => "Gender",
            Attribute::Race => "Race",
            Attribute::SignsOfMentalIllness => "Signs of Mental Illness",
            Attribute::ThreatLevel => "Threat Level",
            Attribute::Flee => "Flee",
            Attribute::BodyCamera => "Body Camera",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Attribute {
    type Err = ReportError;

    /// Accepts the dataset column name ("Manner of Death") or its
    /// snake_case form ("manner_of_death"), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.column_name().to_lowercase() == wanted)
            .ok_or_else(|| ReportError::UnknownAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IncidentRecord {
        IncidentRecord::new(
            NaiveDate::from_ymd_opt(2015, 1, 2).unwrap(),
            "WA",
            "Shelton",
            "Shot",
        )
        .with_armed("Gun")
        .with_age(53.0)
        .with_race("Asian")
        .with_body_camera(false)
    }

    #[test]
    fn test_attribute_values() {
        let record = sample();
        assert_eq!(record.attribute(Attribute::State).as_deref(), Some("WA"));
        assert_eq!(record.attribute(Attribute::Armed).as_deref(), Some("Gun"));
        assert_eq!(
            record.attribute(Attribute::BodyCamera).as_deref(),
            Some("False")
        );
        assert!(record.attribute(Attribute::Flee).is_none());
    }

    #[test]
    fn test_attribute_from_str() {
        assert_eq!(
            "Manner of Death".parse::<Attribute>().unwrap(),
            Attribute::MannerOfDeath
        );
        assert_eq!(
            "signs_of_mental_illness".parse::<Attribute>().unwrap(),
            Attribute::SignsOfMentalIllness
        );
        assert_eq!("race".parse::<Attribute>().unwrap(), Attribute::Race);
        assert!(matches!(
            "Age".parse::<Attribute>(),
            Err(ReportError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_attribute_names_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.to_string().parse::<Attribute>().unwrap(), attr);
        }
    }
}
