use std::{fmt, str::FromStr};

use thiserror::Error;

/// Rotor topology of a synchronous machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineType {
    /// Interior permanent magnet synchronous machine.
    Ipmsm,
    /// Surface-mounted permanent magnet synchronous machine.
    Spmsm,
    /// Synchronous reluctance machine (no magnets).
    SynRel,
    /// Interior magnets combined with salient reluctance poles.
    Hybrid,
}

impl MachineType {
    /// All supported topologies.
    pub const ALL: [Self; 4] = [Self::Ipmsm, Self::Spmsm, Self::SynRel, Self::Hybrid];

    /// Returns the conventional short name (`"IPMSM"`, `"SynRel"`, …).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ipmsm => "IPMSM",
            Self::Spmsm => "SPMSM",
            Self::SynRel => "SynRel",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Returns `true` if the rotor carries permanent magnets.
    #[must_use]
    pub fn has_magnets(self) -> bool {
        !matches!(self, Self::SynRel)
    }
}

/// Target application, which biases the sizing coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Application {
    Traction,
    Wind,
    Industrial,
    Aerospace,
}

impl Application {
    /// All supported applications.
    pub const ALL: [Self; 4] = [
        Self::Traction,
        Self::Wind,
        Self::Industrial,
        Self::Aerospace,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Traction => "traction",
            Self::Wind => "wind",
            Self::Industrial => "industrial",
            Self::Aerospace => "aerospace",
        }
    }
}

/// Error returned when parsing an unknown topology or application name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyParseError {
    #[error("unsupported machine type: {0:?}")]
    MachineType(String),
    #[error("unsupported application: {0:?}")]
    Application(String),
}

impl FromStr for MachineType {
    type Err = TopologyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TopologyParseError::MachineType(s.to_owned()))
    }
}

impl FromStr for Application {
    type Err = TopologyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app| app.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TopologyParseError::Application(s.to_owned()))
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_conventional_names() {
        assert_eq!("IPMSM".parse(), Ok(MachineType::Ipmsm));
        assert_eq!("synrel".parse(), Ok(MachineType::SynRel));
        assert_eq!(" Hybrid ".parse(), Ok(MachineType::Hybrid));
        assert_eq!("wind".parse(), Ok(Application::Wind));
        assert_eq!("Aerospace".parse(), Ok(Application::Aerospace));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "induction".parse::<MachineType>(),
            Err(TopologyParseError::MachineType("induction".into()))
        );
        assert!(matches!(
            "marine".parse::<Application>(),
            Err(TopologyParseError::Application(_))
        ));
    }

    #[test]
    fn display_roundtrips() {
        for kind in MachineType::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
        for app in Application::ALL {
            assert_eq!(app.to_string().parse(), Ok(app));
        }
    }

    #[test]
    fn only_synrel_is_magnet_free() {
        assert!(MachineType::Ipmsm.has_magnets());
        assert!(MachineType::Hybrid.has_magnets());
        assert!(!MachineType::SynRel.has_magnets());
    }
}
