//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! エンティティの主キーはデータベースが採番する 64bit 整数。
//! マーカー型で別エンティティの ID との取り違えをコンパイル時に防ぎます。

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper over a database-assigned integer key
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// struct UserMarker;
/// type UserId = Id<UserMarker>;
///
/// let id = UserId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing key (from the database or a token claim)
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer key
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would add `T: Clone` etc. bounds the marker never satisfies.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_i64)
    }
}


impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlphaMarker;
    struct BetaMarker;
    type AlphaId = Id<AlphaMarker>;
    type BetaId = Id<BetaMarker>;

    #[test]
    fn test_id_type_safety() {
        let alpha: AlphaId = Id::from_i64(1);
        let beta: BetaId = Id::from_i64(1);

        // Different marker types cannot be compared directly; only the raw keys can.
        assert_eq!(alpha.as_i64(), beta.as_i64());
    }

    #[test]
    fn test_id_roundtrip() {
        let id: AlphaId = 99.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 99);
        assert_eq!(id.to_string(), "99");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: AlphaId = Id::from_i64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let back: AlphaId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
