use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GymKind {
    Commercial,
    Home,
    Apartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Strength,
    Hypertrophy,
    Endurance,
}

/// Server-asserted role claim. `Member` is the least-privileged value and the
/// default whenever the profile response omits the claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    #[default]
    #[serde(rename = "USER")]
    Member,
    #[serde(rename = "MANAGER")]
    Manager,
}

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

impl GymKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Home => "home",
            Self::Apartment => "apartment",
        }
    }
}

impl std::str::FromStr for GymKind {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "commercial" => Ok(Self::Commercial),
            "home" => Ok(Self::Home),
            "apartment" => Ok(Self::Apartment),
            _ => Err(EnumParseError::new("gym_kind", value)),
        }
    }
}

impl FitnessGoal {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
        }
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            _ => Err(EnumParseError::new("fitness_goal", value)),
        }
    }
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "USER",
            Self::Manager => "MANAGER",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Self::Member),
            "MANAGER" => Ok(Self::Manager),
            _ => Err(EnumParseError::new("role", value)),
        }
    }
}
