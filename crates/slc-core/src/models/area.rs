//! Closed token sets used to address parts of a class state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A property collection inside a class state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Class1,
    Class2,
    General,
    None,
    /// Every collection at once. Only meaningful for removals and renames.
    All,
}

impl Area {
    /// The four concrete collections, in storage order.
    pub const CONCRETE: [Area; 4] = [Area::Class1, Area::Class2, Area::General, Area::None];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class1 => "class1",
            Self::Class2 => "class2",
            Self::General => "general",
            Self::None => "none",
            Self::All => "all",
        }
    }

    /// Expands `All` into the concrete areas; a concrete area maps to itself.
    pub fn targets(self) -> &'static [Area] {
        match self {
            Self::Class1 => &[Area::Class1],
            Self::Class2 => &[Area::Class2],
            Self::General => &[Area::General],
            Self::None => &[Area::None],
            Self::All => &Self::CONCRETE,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class1" => Ok(Self::Class1),
            "class2" => Ok(Self::Class2),
            "general" => Ok(Self::General),
            "none" => Ok(Self::None),
            "all" => Ok(Self::All),
            _ => Err(ValidationError::UnknownArea {
                token: s.to_string(),
            }),
        }
    }
}

/// One of the two named classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Class1,
    Class2,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class1 => "class1",
            Self::Class2 => "class2",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class1" => Ok(Self::Class1),
            "class2" => Ok(Self::Class2),
            _ => Err(ValidationError::UnknownSlot {
                token: s.to_string(),
            }),
        }
    }
}

/// The user's verdict on a classified item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Class1,
    Class2,
    /// Belongs to neither class.
    None,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class1 => "class1",
            Self::Class2 => "class2",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match: the wire contract for variants is lowercase.
impl FromStr for Variant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class1" => Ok(Self::Class1),
            "class2" => Ok(Self::Class2),
            "none" => Ok(Self::None),
            _ => Err(ValidationError::UnknownVariant {
                token: s.to_string(),
            }),
        }
    }
}
