use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Slider-domene slik dashbordet viser det.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Endepunkt: settpunkt ved -20 °C ute.
pub const ENDPOINT_DOMAIN: SliderDomain = SliderDomain { min: 20.0, max: 70.0, step: 0.5, default: 50.0 };
/// Fotpunkt: settpunkt i fotpunktet (både x- og y-skift).
pub const FOOTPOINT_DOMAIN: SliderDomain = SliderDomain { min: 5.0, max: 35.0, step: 0.5, default: 20.0 };

impl SliderDomain {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Tick-merker hver 5 °C, f.eks. (20, "20°C").
    pub fn marks(&self) -> Vec<(i32, String)> {
        let lo = self.min.ceil() as i32;
        let hi = self.max.floor() as i32;
        (lo..=hi)
            .filter(|i| (i - lo) % 5 == 0)
            .map(|i| (i, format!("{i}°C")))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitSettings {
    pub endpoint: f64,  // °C ved -20 °C ute
    pub footpoint: f64, // °C
}

impl Default for CircuitSettings {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT_DOMAIN.default,
            footpoint: FOOTPOINT_DOMAIN.default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub name: String,
    pub settings: CircuitSettings,
}

/// Kretsregister for én sesjon (erstatter global mutabel tilstand).
/// Verdier valideres ikke – også verdier utenfor sliderdomenet lagres som de er.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitRegistry {
    circuits: Vec<Circuit>,
}

impl CircuitRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let circuits = names
            .into_iter()
            .map(|n| Circuit { name: n.into(), settings: CircuitSettings::default() })
            .collect();
        Self { circuits }
    }

    /// `n` kretser med navn "Heizkreis 1".."Heizkreis n".
    pub fn with_count(n: usize) -> Self {
        Self::new((1..=n).map(|i| format!("Heizkreis {i}")))
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), CurveError> {
        if index < self.circuits.len() {
            Ok(())
        } else {
            Err(CurveError::CircuitIndex { index, len: self.circuits.len() })
        }
    }

    pub fn get(&self, index: usize) -> Result<CircuitSettings, CurveError> {
        self.check(index)?;
        Ok(self.circuits[index].settings)
    }

    pub fn name(&self, index: usize) -> Result<&str, CurveError> {
        self.check(index)?;
        Ok(&self.circuits[index].name)
    }

    pub fn set(&mut self, index: usize, settings: CircuitSettings) -> Result<(), CurveError> {
        self.check(index)?;
        self.circuits[index].settings = settings;
        Ok(())
    }

    pub fn set_endpoint(&mut self, index: usize, endpoint: f64) -> Result<(), CurveError> {
        self.check(index)?;
        self.circuits[index].settings.endpoint = endpoint;
        Ok(())
    }

    pub fn set_footpoint(&mut self, index: usize, footpoint: f64) -> Result<(), CurveError> {
        self.check(index)?;
        self.circuits[index].settings.footpoint = footpoint;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Circuit> {
        self.circuits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_every_five_degrees() {
        let m = ENDPOINT_DOMAIN.marks();
        assert_eq!(m.len(), 11);
        assert_eq!(m[0], (20, "20°C".to_string()));
        assert_eq!(m[10], (70, "70°C".to_string()));
        assert_eq!(FOOTPOINT_DOMAIN.marks().len(), 7);
        assert!(FOOTPOINT_DOMAIN.contains(35.0));
        assert!(!ENDPOINT_DOMAIN.contains(19.5));
    }

    #[test]
    fn out_of_range_index_is_error() {
        let mut reg = CircuitRegistry::with_count(2);
        assert!(reg.get(2).is_err());
        assert!(reg.set_endpoint(5, 40.0).is_err());
        assert_eq!(reg.name(1).unwrap(), "Heizkreis 2");
    }
}
