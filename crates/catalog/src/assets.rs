//! Derivation of the asset URL set a snapshot must download.
//!
//! Pure functions of the catalog and the [`AssetRules`]; dynamic assets
//! come out in the same relative order as their source lists.

use shopsnap_protocol::ids::shaman_object_id_parts;

use crate::catalog::Catalog;
use crate::rules::AssetRules;

/// URLs fetched on every run regardless of catalog contents: the two
/// fixed bundles and the static libraries.
pub fn static_urls(rules: &AssetRules) -> Vec<String> {
    let mut urls = vec![rules.game_swf_url.clone(), rules.loader_swf_url.clone()];
    urls.extend(
        rules
            .static_fur_libraries
            .iter()
            .chain(&rules.static_item_libraries)
            .chain(&rules.static_shaman_object_libraries)
            .map(|lib| rules.library_url(lib)),
    );
    urls
}

/// URLs for catalog entries not covered by a static bundle.
///
/// - Furs above `max_static_fur_id` ship as individual libraries.
/// - Shaman objects whose base has no skin ceiling, or whose skin exceeds
///   it, ship as individual libraries.
/// - Emojis have no static bundle; every one is fetched.
pub fn dynamic_urls(rules: &AssetRules, catalog: &Catalog) -> Vec<String> {
    let mut urls = Vec::new();

    for item in &catalog.items {
        if rules.fur_category_ids.contains(&item.category_id)
            && item.item_id > rules.max_static_fur_id
        {
            urls.push(rules.fur_library_url(item.item_id));
        }
    }

    for object in &catalog.shaman_objects {
        let (base, skin) = shaman_object_id_parts(object.shaman_object_id);
        let bundled = matches!(rules.skin_ceiling(base), Some(ceiling) if skin <= ceiling);
        if !bundled {
            urls.push(rules.shaman_object_library_url(base, skin));
        }
    }

    for emoji in &catalog.emojis {
        urls.push(rules.emoji_url(emoji.emoji_id));
    }

    urls
}

/// URLs of the localization data files for the given language codes.
pub fn language_urls(rules: &AssetRules, languages: &[String]) -> Vec<String> {
    languages
        .iter()
        .filter_map(|code| rules.language_url(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsnap_protocol::types::{Emoji, Item, ShamanObject};

    fn item(category_id: u16, item_id: u32) -> Item {
        Item {
            category_id,
            item_id,
            num_colors: 0,
            is_new: false,
            info: 0,
            cheese_cost: 0,
            fraise_cost: 0,
            needed_item: 0,
        }
    }

    fn shaman_object(id: u32) -> ShamanObject {
        ShamanObject {
            shaman_object_id: id,
            num_colors: 0,
            is_new: false,
            info: 0,
            cheese_cost: 0,
            fraise_cost: 0,
        }
    }

    fn emoji(id: u32) -> Emoji {
        Emoji {
            emoji_id: id,
            cheese_cost: 0,
            fraise_cost: 0,
            is_new: false,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            items: vec![],
            outfits: vec![],
            shaman_objects: vec![],
            emojis: vec![],
        }
    }

    #[test]
    fn static_urls_cover_bundles_and_libraries() {
        let rules = AssetRules::default();
        let urls = static_urls(&rules);
        assert_eq!(urls.len(), 2 + 5 + 2 + 1);
        assert_eq!(urls[0], rules.game_swf_url);
        assert_eq!(urls[1], rules.loader_swf_url);
        assert!(urls.contains(&rules.library_url("x_fourrures3.swf")));
        assert!(urls.contains(&rules.library_url("x_items_chaman.swf")));
    }

    #[test]
    fn bundled_furs_are_not_fetched() {
        let rules = AssetRules::default();
        let mut c = catalog();
        c.items = vec![
            item(22, 217), // at the threshold: bundled
            item(23, 218), // above: fetched
            item(1, 999),  // not a fur category
        ];
        let urls = dynamic_urls(&rules, &c);
        assert_eq!(urls, vec![rules.fur_library_url(218)]);
    }

    #[test]
    fn shaman_object_skin_thresholds() {
        let rules = AssetRules::default();
        let mut c = catalog();
        c.shaman_objects = vec![
            shaman_object(10142), // base 1, skin 142 == ceiling: bundled
            shaman_object(10143), // base 1, skin 143 > ceiling: fetched
            shaman_object(50001), // base 5 has no ceiling: fetched
        ];
        let urls = dynamic_urls(&rules, &c);
        assert_eq!(
            urls,
            vec![
                rules.shaman_object_library_url(1, 143),
                rules.shaman_object_library_url(5, 1),
            ]
        );
    }

    #[test]
    fn every_emoji_is_fetched() {
        let rules = AssetRules::default();
        let mut c = catalog();
        c.emojis = vec![emoji(42), emoji(1)];
        let urls = dynamic_urls(&rules, &c);
        assert_eq!(urls, vec![rules.emoji_url(42), rules.emoji_url(1)]);
    }

    #[test]
    fn derivation_is_deterministic_and_ordered() {
        let rules = AssetRules::default();
        let mut c = catalog();
        c.items = vec![item(22, 300), item(22, 250)];
        c.shaman_objects = vec![shaman_object(10143)];
        c.emojis = vec![emoji(9)];

        let first = dynamic_urls(&rules, &c);
        let second = dynamic_urls(&rules, &c);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                rules.fur_library_url(300),
                rules.fur_library_url(250),
                rules.shaman_object_library_url(1, 143),
                rules.emoji_url(9),
            ]
        );
    }

    #[test]
    fn language_urls_follow_delivery_order() {
        let rules = AssetRules::default();
        let langs = vec!["en".to_string(), "fr".to_string()];
        let urls = language_urls(&rules, &langs);
        assert_eq!(
            urls,
            vec![
                rules.language_url("en").unwrap(),
                rules.language_url("fr").unwrap(),
            ]
        );
    }

    #[test]
    fn language_urls_empty_when_disabled() {
        let rules = AssetRules {
            language_url_fmt: String::new(),
            ..Default::default()
        };
        assert!(language_urls(&rules, &["en".to_string()]).is_empty());
    }
}
