//! The bounty catalogue shown on the earn page.

/// How hard a bounty is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the tag text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Returns the CSS modifier class for the tag.
    pub fn css_class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "tag-easy",
            Difficulty::Medium => "tag-medium",
            Difficulty::Hard => "tag-hard",
        }
    }
}

/// A fixed task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounty {
    pub id: u32,
    pub title: &'static str,
    pub reward: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
}

static BOUNTIES: [Bounty; 3] = [
    Bounty {
        id: 1,
        title: "Create sBTC Swap UI",
        reward: "1,500 STX",
        difficulty: Difficulty::Hard,
        description: "Build a frontend for swapping sBTC to STX.",
    },
    Bounty {
        id: 2,
        title: "Clarinet Test Suite",
        reward: "500 STX",
        difficulty: Difficulty::Medium,
        description: "Write unit tests for the 'Stacking' pool contract.",
    },
    Bounty {
        id: 3,
        title: "Discord Verification Bot",
        reward: "800 STX",
        difficulty: Difficulty::Medium,
        description: "Build a bot that verifies STX holdership.",
    },
];

/// All bounties, in display order.
pub fn bounties() -> &'static [Bounty] {
    &BOUNTIES
}

/// Text of the local acknowledgment shown after applying.
pub const APPLICATION_SUBMITTED: &str = "Application Submitted!";

/// What a bounty card's button does.
///
/// Applying is only possible with a session; otherwise the button starts
/// the wallet connect flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BountyAction {
    Connect,
    Apply,
}

impl BountyAction {
    pub fn for_session(signed_in: bool) -> Self {
        if signed_in {
            BountyAction::Apply
        } else {
            BountyAction::Connect
        }
    }

    /// Button text.
    pub fn label(&self) -> &'static str {
        match self {
            BountyAction::Connect => "Connect Wallet",
            BountyAction::Apply => "Apply Now",
        }
    }

    /// Button CSS class.
    pub fn css_class(&self) -> &'static str {
        match self {
            BountyAction::Connect => "btn-disabled",
            BountyAction::Apply => "btn-claim",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        let titles: Vec<_> = bounties().iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            vec![
                "Create sBTC Swap UI",
                "Clarinet Test Suite",
                "Discord Verification Bot"
            ]
        );

        let ids: Vec<_> = bounties().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(bounties()[0].difficulty, Difficulty::Hard);
        assert_eq!(bounties()[0].reward, "1,500 STX");
    }

    #[test]
    fn test_action_follows_session() {
        assert_eq!(BountyAction::for_session(false), BountyAction::Connect);
        assert_eq!(BountyAction::for_session(false).label(), "Connect Wallet");
        assert_eq!(BountyAction::for_session(true), BountyAction::Apply);
        assert_eq!(BountyAction::for_session(true).label(), "Apply Now");
    }
}
