use std::fmt;

/// Category tag outside a family's closed set. Renders as a 400 at the API
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {family} category `{given}`")]
pub struct UnknownCategory {
    pub family: &'static str,
    pub given: String,
}

/// A closed set of variant tags for one item family.
///
/// `tag()` is the discriminator carried by items and request bodies
/// (`award`); `collection()` is the sub-collection name used in URLs and
/// grouped responses (`awards`). Both spellings are accepted by `parse`,
/// since clients historically mixed them.
pub trait Category: Copy + Eq + fmt::Debug + Send + Sync + Sized + 'static {
    const FAMILY: &'static str;

    fn all() -> &'static [Self];
    fn tag(self) -> &'static str;
    fn collection(self) -> &'static str;

    /// Fields that must be present before an item of this category saves.
    fn required_fields(self) -> &'static [&'static str];

    fn parse(input: &str) -> Result<Self, UnknownCategory> {
        let trimmed = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.tag() == trimmed || c.collection() == trimmed)
            .ok_or_else(|| UnknownCategory {
                family: Self::FAMILY,
                given: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) fn assert_collection_bijection<C: Category>() {
    let mut seen = std::collections::HashSet::new();
    for category in C::all() {
        assert!(
            seen.insert(category.collection()),
            "duplicate collection name `{}` in family `{}`",
            category.collection(),
            C::FAMILY
        );
    }
    assert_eq!(seen.len(), C::all().len());
}
