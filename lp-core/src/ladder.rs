use crate::{Division, InvalidLadderPosition, LP_PER_DIVISION, LadderPolicy, LadderPosition, Rank};

/// Normalizes an absolute LP total into a ladder position, promoting once per
/// 100 LP. A Challenger at the top division is pinned at exactly 100 LP.
pub fn advance(rank: Rank, division: Division, lp: i64) -> LadderPosition {
    advance_with(LadderPolicy::PromotionOnly, rank, division, lp)
}

pub fn advance_with(
    policy: LadderPolicy,
    mut rank: Rank,
    mut division: Division,
    mut lp: i64,
) -> LadderPosition {
    while lp >= LP_PER_DIVISION {
        lp -= LP_PER_DIVISION;
        if let Some(next) = division.next() {
            division = next;
        } else if let Some(next) = rank.next() {
            rank = next;
            division = Division::IV;
        } else {
            lp = LP_PER_DIVISION;
            break;
        }
    }

    if policy == LadderPolicy::WithDemotion {
        while lp < 0 {
            if let Some(previous) = division.previous() {
                division = previous;
            } else if let Some(previous) = rank.previous() {
                rank = previous;
                division = Division::I;
            } else {
                lp = 0;
                break;
            }
            lp += LP_PER_DIVISION;
        }
    }

    LadderPosition { rank, division, lp }
}

/// Same as [`advance`], for positions that arrive as display names.
pub fn advance_str(
    rank: &str,
    division: &str,
    lp: i64,
) -> Result<LadderPosition, InvalidLadderPosition> {
    Ok(advance(rank.parse()?, division.parse()?, lp))
}
