use super::class::Kind;
use super::class::RangeClass;
use crate::EquityError;

const TIGHT: &str = "AA,KK,QQ,JJ,TT,99,AKs,AQs,AJs,AKo,AQo";
const PREMIUM: &str = "AA,KK,QQ,JJ,TT,AKs,AQs,AJs,AKo,AQo";

/// Named starting-hand ranges.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Preset {
    Tight,
    Loose,
    Premium,
    SuitedConnectors,
    PocketPairs,
}

impl Preset {
    pub const fn all() -> [Preset; 5] {
        [
            Preset::Tight,
            Preset::Loose,
            Preset::Premium,
            Preset::SuitedConnectors,
            Preset::PocketPairs,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Preset::Tight => "Tight",
            Preset::Loose => "Loose",
            Preset::Premium => "Premium",
            Preset::SuitedConnectors => "Suited Connectors",
            Preset::PocketPairs => "Pocket Pairs",
        }
    }
    /// `Loose` is every class and `Suited Connectors` every suited class.
    pub fn classes(&self) -> Vec<RangeClass> {
        match self {
            Preset::Tight => Self::listed(TIGHT),
            Preset::Premium => Self::listed(PREMIUM),
            Preset::Loose => RangeClass::all(),
            Preset::SuitedConnectors => Self::of(Kind::Suited),
            Preset::PocketPairs => Self::of(Kind::Pair),
        }
    }

    fn of(kind: Kind) -> Vec<RangeClass> {
        RangeClass::all()
            .into_iter()
            .filter(|c| c.kind() == kind)
            .collect()
    }
    fn listed(list: &'static str) -> Vec<RangeClass> {
        list.split(',')
            .map(RangeClass::try_from)
            .collect::<Result<Vec<_>, _>>()
            .expect("preset lists are well formed")
    }
}

/// Case-insensitive lookup by display name.
impl TryFrom<&str> for Preset {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Preset::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EquityError::MalformedRange(s.to_string()))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
