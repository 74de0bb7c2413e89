use std::fmt::{self, Display};

///
/// A single point substitution, `<from><position><to>` (e.g. `A123G`).
///
/// `position` is 1-based.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub from_residue: char,
    pub position: usize,
    pub to_residue: char,
}

impl Variant {
    pub fn new(from_residue: char, position: usize, to_residue: char) -> Self {
        Variant {
            from_residue,
            position,
            to_residue,
        }
    }

    ///
    /// The variant that reverts this one: residues swapped, same position.
    ///
    pub fn inverted(&self) -> Variant {
        Variant {
            from_residue: self.to_residue,
            position: self.position,
            to_residue: self.from_residue,
        }
    }

    ///
    /// 0-based index of the substituted residue, `None` for position 0.
    ///
    pub fn index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from_residue, self.position, self.to_residue)
    }
}

///
/// Ordered variants belonging to one sequence ID. Order is kept as read so the
/// output notation is reproducible.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantSet {
    pub variants: Vec<Variant>,
}

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains(&self, variant: &Variant) -> bool {
        self.variants.contains(variant)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    ///
    /// Every variant inverted, order preserved.
    ///
    pub fn inverted(&self) -> VariantSet {
        self.iter().map(Variant::inverted).collect()
    }
}

impl From<Vec<Variant>> for VariantSet {
    fn from(variants: Vec<Variant>) -> Self {
        VariantSet { variants }
    }
}

impl FromIterator<Variant> for VariantSet {
    fn from_iter<T: IntoIterator<Item = Variant>>(iter: T) -> Self {
        VariantSet {
            variants: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VariantSet {
    type Item = Variant;
    type IntoIter = std::vec::IntoIter<Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

impl Display for VariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariantSet with {} variants.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_inverted_swaps_residues() {
        let variant = Variant::new('A', 123, 'G');
        assert_eq!(variant.inverted(), Variant::new('G', 123, 'A'));
    }

    #[rstest]
    #[case(Variant::new('A', 2, 'G'))]
    #[case(Variant::new('W', 1, 'W'))]
    #[case(Variant::new('*', 9000, 'x'))]
    fn test_double_inversion_is_identity(#[case] variant: Variant) {
        assert_eq!(variant.inverted().inverted().to_string(), variant.to_string());
    }

    #[rstest]
    #[case(1, Some(0))]
    #[case(42, Some(41))]
    #[case(0, None)]
    fn test_index(#[case] position: usize, #[case] expected: Option<usize>) {
        assert_eq!(Variant::new('A', position, 'G').index(), expected);
    }

    #[rstest]
    fn test_set_inverted_keeps_order() {
        let set = VariantSet::from(vec![Variant::new('A', 2, 'G'), Variant::new('K', 4, 'R')]);
        let inverted: Vec<String> = set.inverted().iter().map(|v| v.to_string()).collect();

        assert_eq!(inverted, vec!["G2A".to_string(), "R4K".to_string()]);
    }
}
