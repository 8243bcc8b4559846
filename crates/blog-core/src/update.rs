//! Sparse-field update application, shared by user and post patches.
//!
//! A patch only overwrites the fields it actually carries. Nullable columns
//! use `Option<Option<T>>` so an explicit `null` in the request clears the
//! column while an absent field leaves it untouched.

use serde::{Deserialize, Deserializer};

/// Applies a sparse patch over an existing record.
pub trait ApplyPatch<R> {
    /// Overwrite every field present in the patch; leave the rest untouched.
    fn apply_to(&self, record: &mut R);
}

/// Copies each `Some` patch field onto the record. Type-checks for both
/// `Option<T> -> T` fields and `Option<Option<T>> -> Option<T>` fields.
#[macro_export]
macro_rules! apply_patch_fields {
    ($patch:expr, $record:expr, { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = $patch.$field.clone() {
                $record.$field = value;
            }
        )*
    };
}

/// Deserializer for `Option<Option<T>>` fields: a present `null` becomes
/// `Some(None)`, while serde's `default` keeps an absent field as `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
