//! Asset-derivation rules.
//!
//! The thresholds here have drifted between client revisions, so they are
//! configuration data with defaults matching the current live values, not
//! hard-coded constants.

use serde::{Deserialize, Serialize};

/// The highest skin id a static shaman object library bundles for one
/// base id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinCeiling {
    pub base: u32,
    pub ceiling: u32,
}

/// Where assets live and which of them are already baked into the static
/// bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRules {
    /// The two named fixed-URL bundles.
    pub game_swf_url: String,
    pub loader_swf_url: String,

    /// Base URL all library files hang off.
    pub library_base_url: String,
    pub static_fur_libraries: Vec<String>,
    pub static_item_libraries: Vec<String>,
    pub static_shaman_object_libraries: Vec<String>,

    /// Item categories that are furs.
    pub fur_category_ids: Vec<u16>,
    /// Furs with ids at or below this are in the static fur libraries.
    pub max_static_fur_id: u32,

    /// Per-base skin ceilings for the static shaman object library. A base
    /// with no entry has no static skins at all.
    pub max_static_skin: Vec<SkinCeiling>,

    /// Emoji image URL template; `{id}` is replaced with the emoji id.
    pub emoji_url_fmt: String,

    /// Localization data file URL template; `{code}` is replaced with the
    /// language code. Empty disables language file downloads.
    pub language_url_fmt: String,
}

impl Default for AssetRules {
    fn default() -> Self {
        Self {
            game_swf_url: "http://www.transformice.com/Transformice.swf".into(),
            loader_swf_url: "http://www.transformice.com/TransformiceChargeur.swf".into(),
            library_base_url: "http://www.transformice.com/images/x_bibliotheques/".into(),
            static_fur_libraries: vec![
                "x_fourrures.swf".into(),
                "x_fourrures2.swf".into(),
                "x_fourrures3.swf".into(),
                "x_fourrures4.swf".into(),
                "x_fourrures5.swf".into(),
            ],
            static_item_libraries: vec!["x_meli_costumes.swf".into(), "costume1.swf".into()],
            static_shaman_object_libraries: vec!["x_items_chaman.swf".into()],
            fur_category_ids: vec![22, 23],
            max_static_fur_id: 217,
            max_static_skin: vec![
                SkinCeiling { base: 1, ceiling: 142 },
                SkinCeiling { base: 2, ceiling: 46 },
                SkinCeiling { base: 3, ceiling: 40 },
                SkinCeiling { base: 4, ceiling: 43 },
                SkinCeiling { base: 6, ceiling: 36 },
                SkinCeiling { base: 7, ceiling: 9 },
                SkinCeiling { base: 10, ceiling: 21 },
                SkinCeiling { base: 17, ceiling: 35 },
                SkinCeiling { base: 28, ceiling: 44 },
            ],
            emoji_url_fmt:
                "http://www.transformice.com/images/x_transformice/x_smiley/{id}.png".into(),
            language_url_fmt: "http://www.transformice.com/langues/tfz_{code}".into(),
        }
    }
}

impl AssetRules {
    /// URL of a file under the library base.
    pub fn library_url(&self, library: &str) -> String {
        format!("{}{}", self.library_base_url, library)
    }

    /// URL of an individually-shipped fur library.
    pub fn fur_library_url(&self, fur_id: u32) -> String {
        self.library_url(&format!("fourrures/f{fur_id}.swf"))
    }

    /// URL of an individually-shipped shaman object library.
    pub fn shaman_object_library_url(&self, base: u32, skin: u32) -> String {
        self.library_url(&format!("chamanes/o{base},{skin}.swf"))
    }

    /// URL of an emoji image.
    pub fn emoji_url(&self, emoji_id: u32) -> String {
        self.emoji_url_fmt.replace("{id}", &emoji_id.to_string())
    }

    /// URL of a localization data file, if language downloads are enabled.
    pub fn language_url(&self, code: &str) -> Option<String> {
        if self.language_url_fmt.is_empty() {
            return None;
        }
        Some(self.language_url_fmt.replace("{code}", code))
    }

    /// The static skin ceiling for a base id, if one is configured.
    pub fn skin_ceiling(&self, base: u32) -> Option<u32> {
        self.max_static_skin
            .iter()
            .find(|c| c.base == base)
            .map(|c| c.ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let rules = AssetRules::default();
        assert_eq!(rules.max_static_fur_id, 217);
        assert_eq!(rules.fur_category_ids, vec![22, 23]);
        assert_eq!(rules.skin_ceiling(1), Some(142));
        assert_eq!(rules.skin_ceiling(5), None);
    }

    #[test]
    fn url_formatting() {
        let rules = AssetRules::default();
        assert_eq!(
            rules.fur_library_url(222),
            "http://www.transformice.com/images/x_bibliotheques/fourrures/f222.swf"
        );
        assert_eq!(
            rules.shaman_object_library_url(1, 143),
            "http://www.transformice.com/images/x_bibliotheques/chamanes/o1,143.swf"
        );
        assert_eq!(
            rules.emoji_url(42),
            "http://www.transformice.com/images/x_transformice/x_smiley/42.png"
        );
        assert_eq!(
            rules.language_url("en").as_deref(),
            Some("http://www.transformice.com/langues/tfz_en")
        );
    }

    #[test]
    fn empty_language_fmt_disables_language_downloads() {
        let rules = AssetRules {
            language_url_fmt: String::new(),
            ..Default::default()
        };
        assert_eq!(rules.language_url("en"), None);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let rules: AssetRules = serde_json::from_str(r#"{"max_static_fur_id": 300}"#).unwrap();
        assert_eq!(rules.max_static_fur_id, 300);
        assert_eq!(rules.static_fur_libraries.len(), 5);
    }
}
