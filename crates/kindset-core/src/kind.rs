//! Kind discriminants and validated kind sets.

use std::fmt;

use crate::error::ConfigurationError;

/// Discriminant identifying which kind of a closed set a value holds.
///
/// Discriminants are dense: the kinds of a set with `n` members carry the
/// indices `0..n` in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(usize);

impl KindId {
    /// Creates a discriminant from a declaration index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the declaration index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static description of one kind in a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindDescriptor {
    /// Human-readable kind name, unique within its set.
    pub name: &'static str,
    /// Discriminant of the kind.
    pub id: KindId,
}

impl KindDescriptor {
    pub const fn new(name: &'static str, index: usize) -> Self {
        Self {
            name,
            id: KindId::new(index),
        }
    }
}

/// A validated, non-empty, duplicate-free list of kinds.
///
/// Obtained through [`KindSet::new`] or
/// [`ClosedSet::kind_set`](crate::ClosedSet::kind_set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet {
    name: &'static str,
    kinds: &'static [KindDescriptor],
}

impl KindSet {
    /// Validates a declared kind list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyKindSet`] for an empty list,
    /// [`ConfigurationError::DuplicateKind`] when a name or discriminant
    /// repeats, and [`ConfigurationError::MisnumberedKind`] when
    /// discriminants are not dense in declaration order.
    pub fn new(
        name: &'static str,
        kinds: &'static [KindDescriptor],
    ) -> Result<Self, ConfigurationError> {
        if kinds.is_empty() {
            return Err(ConfigurationError::EmptyKindSet { set: name });
        }

        for (position, kind) in kinds.iter().enumerate() {
            let earlier = &kinds[..position];
            if earlier
                .iter()
                .any(|other| other.name == kind.name || other.id == kind.id)
            {
                return Err(ConfigurationError::DuplicateKind {
                    set: name,
                    kind: kind.name,
                });
            }
            if kind.id.index() != position {
                return Err(ConfigurationError::MisnumberedKind {
                    set: name,
                    kind: kind.name,
                    index: kind.id.index(),
                    expected: position,
                });
            }
        }

        Ok(Self { name, kinds })
    }

    /// Name of the closed set.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of kinds. Never zero.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn descriptors(&self) -> &'static [KindDescriptor] {
        self.kinds
    }

    pub fn get(&self, id: KindId) -> Option<&'static KindDescriptor> {
        self.kinds.get(id.index())
    }

    /// Looks up a kind by name.
    pub fn find(&self, name: &str) -> Option<&'static KindDescriptor> {
        self.kinds.iter().find(|kind| kind.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, KindDescriptor> {
        self.kinds.iter()
    }
}

impl IntoIterator for KindSet {
    type Item = &'static KindDescriptor;
    type IntoIter = std::slice::Iter<'static, KindDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHAPES: [KindDescriptor; 2] = [
        KindDescriptor::new("Sphere", 0),
        KindDescriptor::new("Cube", 1),
    ];
    static NONE: [KindDescriptor; 0] = [];
    static REPEATED: [KindDescriptor; 3] = [
        KindDescriptor::new("Sphere", 0),
        KindDescriptor::new("Cube", 1),
        KindDescriptor::new("Sphere", 2),
    ];
    static SHUFFLED: [KindDescriptor; 2] = [
        KindDescriptor::new("Sphere", 1),
        KindDescriptor::new("Cube", 0),
    ];

    #[test]
    fn test_valid_set() {
        let set = KindSet::new("Shape", &SHAPES).unwrap();
        assert_eq!(set.name(), "Shape");
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.get(KindId::new(1)).map(|k| k.name), Some("Cube"));
        assert_eq!(set.find("Sphere").map(|k| k.id), Some(KindId::new(0)));
        assert!(set.find("Cone").is_none());
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = KindSet::new("Nothing", &NONE).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyKindSet { set: "Nothing" });
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let err = KindSet::new("Shape", &REPEATED).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateKind {
                set: "Shape",
                kind: "Sphere"
            }
        );
    }

    #[test]
    fn test_misnumbered_kind_rejected() {
        let err = KindSet::new("Shape", &SHUFFLED).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MisnumberedKind {
                index: 1,
                expected: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let set = KindSet::new("Shape", &SHAPES).unwrap();
        let names: Vec<_> = set.into_iter().map(|k| k.name).collect();
        assert_eq!(names, ["Sphere", "Cube"]);
    }
}
