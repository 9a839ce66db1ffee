//! Composite identifier decomposition.

/// Splits a composite shaman object id into its `(base, skin)` parts.
///
/// The game encodes skinned objects as `base * 10000 + skin`; a bare base
/// id (below 10000) decomposes to skin `0`.
pub fn shaman_object_id_parts(shaman_object_id: u32) -> (u32, u32) {
    (shaman_object_id / 10000, shaman_object_id % 10000)
}
