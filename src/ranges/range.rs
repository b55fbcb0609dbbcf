use super::class::RangeClass;
use super::presets::Preset;
use crate::EquityError;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// An ordered set of starting-hand classes.
///
/// Parsed from comma separated classes or from a preset name. Plus and
/// dash notation (`QQ+`, `A5s-A2s`) is not understood. An unsuffixed
/// non-pair such as `AK` stands for both `AKs` and `AKo`. Repeats collapse
/// to their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range(Vec<RangeClass>);

impl Range {
    pub fn classes(&self) -> &[RangeClass] {
        &self.0
    }
    /// Every concrete hole in the range. Distinct classes never share a combo.
    pub fn combos(&self) -> Vec<Hole> {
        self.0.iter().flat_map(|c| c.combos()).collect()
    }

    fn token(token: &str) -> Result<Vec<RangeClass>, EquityError> {
        let chars = token.chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [a, b] => match (Rank::try_from(*a), Rank::try_from(*b)) {
                (Ok(a), Ok(b)) if a != b => Ok(vec![
                    RangeClass::unpaired(a, b, true),
                    RangeClass::unpaired(a, b, false),
                ]),
                _ => RangeClass::try_from(token).map(|c| vec![c]),
            },
            _ => RangeClass::try_from(token).map(|c| vec![c]),
        }
    }
}

impl From<Vec<RangeClass>> for Range {
    fn from(classes: Vec<RangeClass>) -> Self {
        let mut unique = Vec::with_capacity(classes.len());
        for class in classes {
            if !unique.contains(&class) {
                unique.push(class);
            }
        }
        Self(unique)
    }
}

impl From<Preset> for Range {
    fn from(preset: Preset) -> Self {
        Self::from(preset.classes())
    }
}

impl TryFrom<&str> for Range {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if let Ok(preset) = Preset::try_from(s) {
            return Ok(Self::from(preset));
        }
        let classes = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Self::token)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<RangeClass>>();
        match classes.len() {
            0 => Err(EquityError::MalformedRange(s.to_string())),
            _ => Ok(Self::from(classes)),
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let classes = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", classes.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shorthand() {
        let range = Range::try_from("AA, KK ,AKs,AQo").unwrap();
        assert_eq!(range.to_string(), "AA,KK,AKs,AQo");
        assert_eq!(range.combos().len(), 6 + 6 + 4 + 12);
    }

    #[test]
    fn unsuffixed_means_both() {
        let range = Range::try_from("AK").unwrap();
        assert_eq!(range.to_string(), "AKs,AKo");
        assert_eq!(range.combos().len(), 16);
    }

    #[test]
    fn duplicates_collapse() {
        let range = Range::try_from("AKs,AA,AK,aa").unwrap();
        assert_eq!(range.to_string(), "AKs,AA,AKo");
    }

    #[test]
    fn presets_by_name() {
        let range = Range::try_from("pocket pairs").unwrap();
        assert_eq!(range.combos().len(), 78);
        assert_eq!(Range::try_from("Loose").unwrap().combos().len(), 1326);
    }

    #[test]
    fn empty_and_bad_ranges_fail() {
        assert_eq!(Range::try_from(""), Err(EquityError::MalformedRange("".into())));
        assert_eq!(Range::try_from(" , "), Err(EquityError::MalformedRange(" , ".into())));
        assert_eq!(Range::try_from("AA,ZZ"), Err(EquityError::MalformedRange("ZZ".into())));
    }
}
