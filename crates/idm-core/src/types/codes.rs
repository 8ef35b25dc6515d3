//! Chapter and dimension codes
//!
//! The assessment framework is a fixed four-level hierarchy: 4 chapters,
//! 12 dimensions, 3-5 sub-indicators per dimension, and one or more
//! questions feeding each sub-indicator. The codes here are the stable
//! identifiers for the top two levels.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chapter codes for the 4 top-level assessment chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterCode {
    /// Growth Engine
    GE,
    /// Performance & Health
    PH,
    /// People & Leadership
    PL,
    /// Resilience & Safeguards
    RS,
}

impl ChapterCode {
    /// All chapters in canonical order
    pub const ALL: [ChapterCode; 4] = [
        ChapterCode::GE,
        ChapterCode::PH,
        ChapterCode::PL,
        ChapterCode::RS,
    ];

    /// Code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterCode::GE => "GE",
            ChapterCode::PH => "PH",
            ChapterCode::PL => "PL",
            ChapterCode::RS => "RS",
        }
    }

    /// Display name of the chapter
    pub fn name(&self) -> &'static str {
        match self {
            ChapterCode::GE => "Growth Engine",
            ChapterCode::PH => "Performance & Health",
            ChapterCode::PL => "People & Leadership",
            ChapterCode::RS => "Resilience & Safeguards",
        }
    }
}

impl fmt::Display for ChapterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChapterCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GE" => Ok(ChapterCode::GE),
            "PH" => Ok(ChapterCode::PH),
            "PL" => Ok(ChapterCode::PL),
            "RS" => Ok(ChapterCode::RS),
            other => Err(CoreError::UnknownChapter(other.to_string())),
        }
    }
}

/// Dimension codes for the 12 assessment dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionCode {
    /// Strategy
    STR,
    /// Sales
    SAL,
    /// Marketing
    MKT,
    /// Customer Experience
    CXP,
    /// Operations
    OPS,
    /// Financials
    FIN,
    /// Human Resources
    HRS,
    /// Leadership & Governance
    LDG,
    /// Technology & Innovation
    TIN,
    /// IT, Data & Systems
    IDS,
    /// Risk Management & Sustainability
    RMS,
    /// Compliance
    CMP,
}

impl DimensionCode {
    /// All dimensions in canonical order
    pub const ALL: [DimensionCode; 12] = [
        DimensionCode::STR,
        DimensionCode::SAL,
        DimensionCode::MKT,
        DimensionCode::CXP,
        DimensionCode::OPS,
        DimensionCode::FIN,
        DimensionCode::HRS,
        DimensionCode::LDG,
        DimensionCode::TIN,
        DimensionCode::IDS,
        DimensionCode::RMS,
        DimensionCode::CMP,
    ];

    /// Code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionCode::STR => "STR",
            DimensionCode::SAL => "SAL",
            DimensionCode::MKT => "MKT",
            DimensionCode::CXP => "CXP",
            DimensionCode::OPS => "OPS",
            DimensionCode::FIN => "FIN",
            DimensionCode::HRS => "HRS",
            DimensionCode::LDG => "LDG",
            DimensionCode::TIN => "TIN",
            DimensionCode::IDS => "IDS",
            DimensionCode::RMS => "RMS",
            DimensionCode::CMP => "CMP",
        }
    }
}

impl fmt::Display for DimensionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STR" => Ok(DimensionCode::STR),
            "SAL" => Ok(DimensionCode::SAL),
            "MKT" => Ok(DimensionCode::MKT),
            "CXP" => Ok(DimensionCode::CXP),
            "OPS" => Ok(DimensionCode::OPS),
            "FIN" => Ok(DimensionCode::FIN),
            "HRS" => Ok(DimensionCode::HRS),
            "LDG" => Ok(DimensionCode::LDG),
            "TIN" => Ok(DimensionCode::TIN),
            "IDS" => Ok(DimensionCode::IDS),
            "RMS" => Ok(DimensionCode::RMS),
            "CMP" => Ok(DimensionCode::CMP),
            other => Err(CoreError::UnknownDimension(other.to_string())),
        }
    }
}
