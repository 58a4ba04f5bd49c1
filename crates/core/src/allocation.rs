use std::fmt;

/// Declared risk tolerance. The host platform sends canonical labels, so
/// matching is exact; anything unrecognized falls into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Other,
}

impl RiskLevel {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("None") => Self::None,
            Some("Low") => Self::Low,
            Some("Medium") => Self::Medium,
            Some("High") => Self::High,
            _ => Self::Other,
        }
    }
}

/// A fixed bond/equity split. Percentages always sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub bond_pct: u8,
    pub equity_pct: u8,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% bonds (AGG), {}% equities (SPY)", self.bond_pct, self.equity_pct)
    }
}

/// Maps a risk tolerance to its static allocation. Total: `High` shares the
/// default branch with unrecognized labels.
pub fn recommend(risk: RiskLevel) -> Allocation {
    match risk {
        RiskLevel::None => Allocation { bond_pct: 100, equity_pct: 0 },
        RiskLevel::Low => Allocation { bond_pct: 60, equity_pct: 40 },
        RiskLevel::Medium => Allocation { bond_pct: 40, equity_pct: 60 },
        RiskLevel::High | RiskLevel::Other => Allocation { bond_pct: 20, equity_pct: 80 },
    }
}

#[cfg(test)]
mod tests {
    use super::{recommend, RiskLevel};

    #[test]
    fn allocation_table_matches_published_splits() {
        assert_eq!(
            recommend(RiskLevel::None).to_string(),
            "100% bonds (AGG), 0% equities (SPY)"
        );
        assert_eq!(recommend(RiskLevel::Low).to_string(), "60% bonds (AGG), 40% equities (SPY)");
        assert_eq!(
            recommend(RiskLevel::Medium).to_string(),
            "40% bonds (AGG), 60% equities (SPY)"
        );
        assert_eq!(recommend(RiskLevel::High).to_string(), "20% bonds (AGG), 80% equities (SPY)");
    }

    #[test]
    fn unrecognized_labels_share_the_aggressive_split() {
        assert_eq!(recommend(RiskLevel::Other), recommend(RiskLevel::High));
        assert_eq!(
            recommend(RiskLevel::parse(Some("anything-unrecognized"))).to_string(),
            "20% bonds (AGG), 80% equities (SPY)"
        );
    }

    #[test]
    fn parse_is_exact_match_on_canonical_labels() {
        assert_eq!(RiskLevel::parse(Some("None")), RiskLevel::None);
        assert_eq!(RiskLevel::parse(Some("Low")), RiskLevel::Low);
        assert_eq!(RiskLevel::parse(Some("Medium")), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse(Some("High")), RiskLevel::High);
        assert_eq!(RiskLevel::parse(Some("medium")), RiskLevel::Other);
        assert_eq!(RiskLevel::parse(None), RiskLevel::Other);
    }

    #[test]
    fn every_allocation_sums_to_one_hundred() {
        for risk in [
            RiskLevel::None,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Other,
        ] {
            let allocation = recommend(risk);
            assert_eq!(u16::from(allocation.bond_pct) + u16::from(allocation.equity_pct), 100);
        }
    }
}
