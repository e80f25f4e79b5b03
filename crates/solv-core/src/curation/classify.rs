use crate::core::chem::groups::GroupLabel;
use crate::core::chem::matcher::FunctionalGroupMatcher;
use crate::core::chem::molecule::Molecule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The named buckets a structure index can be classified into.
///
/// Variant order is the fixed presentation order of every report and output
/// mapping, matching the order the categories are conventionally listed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Umbrella bucket: every index with at least one match record.
    All,
    Alcohols,
    Aldehydes,
    Carboxylics,
    Halogens,
    Amines,
    Nitros,
    SulfChlorides,
    TerminalAlkynes,
    /// Indices that matched both the amine and the alcohol categories.
    Both,
    /// Indices with no match records at all.
    Other,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::Alcohols,
        Category::Aldehydes,
        Category::Carboxylics,
        Category::Halogens,
        Category::Amines,
        Category::Nitros,
        Category::SulfChlorides,
        Category::TerminalAlkynes,
        Category::Both,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Alcohols => "alcohols",
            Category::Aldehydes => "aldehydes",
            Category::Carboxylics => "carboxylics",
            Category::Halogens => "halogens",
            Category::Amines => "amines",
            Category::Nitros => "nitros",
            Category::SulfChlorides => "sulf_chlorides",
            Category::TerminalAlkynes => "terminal_alkynes",
            Category::Both => "both",
            Category::Other => "other",
        }
    }

    /// The specific bucket a recognized group label feeds, if any.
    ///
    /// `Unrecognized` labels feed no specific bucket; the index still lands
    /// in [`Category::All`].
    pub fn for_label(label: GroupLabel) -> Option<Category> {
        match label {
            GroupLabel::Alcohol => Some(Category::Alcohols),
            GroupLabel::Aldehyde => Some(Category::Aldehydes),
            GroupLabel::Amine => Some(Category::Amines),
            GroupLabel::CarboxylicAcid => Some(Category::Carboxylics),
            GroupLabel::Halogen => Some(Category::Halogens),
            GroupLabel::Nitro => Some(Category::Nitros),
            GroupLabel::SulfonylChloride => Some(Category::SulfChlorides),
            GroupLabel::TerminalAlkyne => Some(Category::TerminalAlkynes),
            GroupLabel::Unrecognized => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

/// One explicit map from category to an ordered collection of structure
/// indices, constructed fresh per classification run.
///
/// Buckets record one entry per qualifying match, so an index may appear more
/// than once in a bucket when a molecule carries several occurrences of the
/// same group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: BTreeMap<Category, Vec<usize>>,
}

impl CategoryBuckets {
    /// Creates the bucket map with every category present and empty.
    pub fn new() -> Self {
        let mut buckets = BTreeMap::new();
        for category in Category::ALL {
            buckets.insert(category, Vec::new());
        }
        Self { buckets }
    }

    /// Appends an index to a category's bucket.
    pub fn push(&mut self, category: Category, index: usize) {
        self.buckets.entry(category).or_default().push(index);
    }

    /// Whether the index currently appears in the category's bucket.
    pub fn contains(&self, category: Category, index: usize) -> bool {
        self.buckets
            .get(&category)
            .is_some_and(|bucket| bucket.contains(&index))
    }

    /// Removes every occurrence of the index from the category's bucket.
    pub fn remove_all(&mut self, category: Category, index: usize) {
        if let Some(bucket) = self.buckets.get_mut(&category) {
            bucket.retain(|&i| i != index);
        }
    }

    /// The ordered indices of a category's bucket.
    pub fn indices(&self, category: Category) -> &[usize] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates buckets in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[usize])> {
        self.buckets
            .iter()
            .map(|(&category, indices)| (category, indices.as_slice()))
    }
}

/// Buckets every structure index by the matcher's functional-group records.
///
/// For each index: no matches (including unparsed structures) routes the
/// index to `other`; otherwise each match record adds the index to `all` and,
/// for recognized labels, to the corresponding specific bucket. Once an
/// index's matches are processed, an index present in both `amines` and
/// `alcohols` is moved out of both and into `both`. That post-check is
/// deliberately limited to the amine/alcohol pair; any other overlap keeps
/// its multi-bucket membership.
pub fn classify_structures(
    structures: &[Option<Molecule>],
    matcher: &impl FunctionalGroupMatcher,
) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::new();

    for (index, structure) in structures.iter().enumerate() {
        let matches = match structure {
            Some(molecule) => matcher.find_matches(molecule),
            None => Vec::new(),
        };

        if matches.is_empty() {
            buckets.push(Category::Other, index);
            continue;
        }

        for record in &matches {
            buckets.push(Category::All, index);
            if let Some(category) = Category::for_label(record.label) {
                buckets.push(category, index);
            }
        }

        if buckets.contains(Category::Amines, index) && buckets.contains(Category::Alcohols, index)
        {
            buckets.remove_all(Category::Amines, index);
            buckets.remove_all(Category::Alcohols, index);
            buckets.push(Category::Both, index);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::groups::GroupMatch;
    use crate::core::chem::smiles::parse_smiles;

    /// A matcher that replays a fixed script of label lists, one per call.
    struct ScriptedMatcher {
        script: Vec<Vec<GroupLabel>>,
        calls: std::cell::Cell<usize>,
    }

    impl ScriptedMatcher {
        fn new(script: Vec<Vec<GroupLabel>>) -> Self {
            Self {
                script,
                calls: std::cell::Cell::new(0),
            }
        }
    }

    impl FunctionalGroupMatcher for ScriptedMatcher {
        fn find_matches(&self, _molecule: &Molecule) -> Vec<GroupMatch> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            self.script[call]
                .iter()
                .map(|&label| GroupMatch::new(label, Vec::new()))
                .collect()
        }
    }

    fn structures(count: usize) -> Vec<Option<Molecule>> {
        (0..count).map(|_| Some(parse_smiles("C").unwrap())).collect()
    }

    #[test]
    fn unmatched_index_goes_to_other_and_never_all() {
        let matcher = ScriptedMatcher::new(vec![vec![]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::Other), &[0]);
        assert!(buckets.indices(Category::All).is_empty());
    }

    #[test]
    fn missing_structure_counts_as_unmatched() {
        let matcher = ScriptedMatcher::new(vec![]);
        let buckets = classify_structures(&[None], &matcher);
        assert_eq!(buckets.indices(Category::Other), &[0]);
    }

    #[test]
    fn recognized_label_lands_in_all_and_its_bucket() {
        let matcher = ScriptedMatcher::new(vec![vec![GroupLabel::Halogen]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::All), &[0]);
        assert_eq!(buckets.indices(Category::Halogens), &[0]);
        assert!(buckets.indices(Category::Other).is_empty());
    }

    #[test]
    fn unrecognized_label_lands_in_all_only() {
        let matcher = ScriptedMatcher::new(vec![vec![GroupLabel::Unrecognized]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::All), &[0]);
        for category in Category::ALL {
            if category != Category::All {
                assert!(buckets.indices(category).is_empty(), "{}", category);
            }
        }
    }

    #[test]
    fn amine_alcohol_overlap_moves_to_both() {
        let matcher =
            ScriptedMatcher::new(vec![vec![GroupLabel::Amine, GroupLabel::Alcohol]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::Both), &[0]);
        assert!(buckets.indices(Category::Amines).is_empty());
        assert!(buckets.indices(Category::Alcohols).is_empty());
        // The umbrella bucket saw one append per match record.
        assert_eq!(buckets.indices(Category::All), &[0, 0]);
    }

    #[test]
    fn other_overlaps_keep_multi_bucket_membership() {
        let matcher =
            ScriptedMatcher::new(vec![vec![GroupLabel::Amine, GroupLabel::Halogen]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::Amines), &[0]);
        assert_eq!(buckets.indices(Category::Halogens), &[0]);
        assert!(buckets.indices(Category::Both).is_empty());
    }

    #[test]
    fn rebucketing_removes_every_occurrence() {
        // Two alcohol occurrences plus an amine: the post-check must clear
        // all of them.
        let matcher = ScriptedMatcher::new(vec![vec![
            GroupLabel::Alcohol,
            GroupLabel::Alcohol,
            GroupLabel::Amine,
        ]]);
        let buckets = classify_structures(&structures(1), &matcher);
        assert_eq!(buckets.indices(Category::Both), &[0]);
        assert!(buckets.indices(Category::Alcohols).is_empty());
        assert!(buckets.indices(Category::Amines).is_empty());
    }

    #[test]
    fn rebucketing_is_scoped_to_each_index() {
        // Index 0 is amine-only, index 1 is alcohol-only: no cross-index move.
        let matcher = ScriptedMatcher::new(vec![
            vec![GroupLabel::Amine],
            vec![GroupLabel::Alcohol],
        ]);
        let buckets = classify_structures(&structures(2), &matcher);
        assert_eq!(buckets.indices(Category::Amines), &[0]);
        assert_eq!(buckets.indices(Category::Alcohols), &[1]);
        assert!(buckets.indices(Category::Both).is_empty());
    }

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
        assert_eq!("solvents".parse::<Category>(), Err(()));
        assert_eq!(Category::SulfChlorides.as_str(), "sulf_chlorides");
        assert_eq!(Category::TerminalAlkynes.as_str(), "terminal_alkynes");
    }

    #[test]
    fn buckets_start_empty_for_every_category() {
        let buckets = CategoryBuckets::new();
        for category in Category::ALL {
            assert!(buckets.indices(category).is_empty());
        }
    }
}
