/// The stable numeric identity of a [`Type`](crate::types::Type).
///
/// Primitives own the reserved IDs 1 through 10. User-declared and
/// anonymous types are numbered from [`TypeId::FIRST_ASSIGNED`] upward in
/// declaration/interning order, and an ID is never reused.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// The first ID handed out to a non-primitive type.
    pub const FIRST_ASSIGNED: TypeId = TypeId(100);

    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` for the reserved primitive IDs.
    pub fn is_primitive(&self) -> bool {
        (1..=10).contains(&self.0)
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
