mod ladder;

use std::{fmt, str::FromStr};

use thiserror::Error;

pub use ladder::{advance, advance_str, advance_with};

/// LP needed to clear one division.
pub const LP_PER_DIVISION: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::Iron,
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Diamond,
        Rank::Master,
        Rank::Grandmaster,
        Rank::Challenger,
    ];

    pub fn next(&self) -> Option<Rank> {
        Self::ALL.get(*self as usize + 1).copied()
    }

    pub fn previous(&self) -> Option<Rank> {
        (*self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Iron => "Iron",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = InvalidLadderPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| InvalidLadderPosition::UnknownRank(s.to_string()))
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    pub const ALL: [Division; 4] = [Division::IV, Division::III, Division::II, Division::I];

    /// The division above this one, `None` at `I`.
    pub fn next(&self) -> Option<Division> {
        Self::ALL.get(*self as usize + 1).copied()
    }

    /// The division below this one, `None` at `IV`.
    pub fn previous(&self) -> Option<Division> {
        (*self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::IV => "IV",
            Division::III => "III",
            Division::II => "II",
            Division::I => "I",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = InvalidLadderPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|division| division.as_str() == s)
            .ok_or_else(|| InvalidLadderPosition::UnknownDivision(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LadderPosition {
    pub rank: Rank,
    pub division: Division,
    pub lp: i64,
}

impl LadderPosition {
    /// Checks a starting position as entered at registration. Challenger only
    /// exists at division `I`, where it may sit at the 100 LP ceiling.
    pub fn new(rank: Rank, division: Division, lp: i64) -> Result<Self, InvalidLadderPosition> {
        if rank == Rank::Challenger && division != Division::I {
            return Err(InvalidLadderPosition::ChallengerDivision(division));
        }
        let ceiling = if rank == Rank::Challenger {
            LP_PER_DIVISION
        } else {
            LP_PER_DIVISION - 1
        };
        if !(0..=ceiling).contains(&lp) {
            return Err(InvalidLadderPosition::LpOutOfRange { rank, division, lp });
        }
        Ok(Self { rank, division, lp })
    }

    pub fn parse(rank: &str, division: &str, lp: i64) -> Result<Self, InvalidLadderPosition> {
        Self::new(rank.parse()?, division.parse()?, lp)
    }
}

impl fmt::Display for LadderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} LP)", self.rank, self.division, self.lp)
    }
}

/// How LP below zero is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LadderPolicy {
    /// Negative LP is kept as-is and the rank never drops.
    #[default]
    PromotionOnly,
    /// Negative LP borrows 100 from the division below, down to `Iron IV` at 0 LP.
    WithDemotion,
}

impl LadderPolicy {
    pub fn from_demotion_flag(enabled: bool) -> Self {
        if enabled {
            LadderPolicy::WithDemotion
        } else {
            LadderPolicy::PromotionOnly
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidLadderPosition {
    #[error("unknown rank '{0}'")]
    UnknownRank(String),

    #[error("unknown division '{0}'")]
    UnknownDivision(String),

    #[error("Challenger has no division {0}")]
    ChallengerDivision(Division),

    #[error("{lp} LP is out of range for {rank} {division}")]
    LpOutOfRange {
        rank: Rank,
        division: Division,
        lp: i64,
    },
}
