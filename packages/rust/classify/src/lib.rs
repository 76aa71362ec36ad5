//! Keyword-driven prompt classification.
//!
//! Turns a raw comment (plus the post title it was left under) into a
//! category, an optional subcategory, feature tags, audience tags, and
//! localized descriptions. Pure functions over lowercased text; no model,
//! no external state.

pub mod category;
pub mod describe;
pub mod features;
pub mod text;
pub mod title;

use std::collections::BTreeSet;

pub use category::{categorize_by_content, categorize_name, Category};
pub use features::{Audience, Feature};
pub use text::{clean_title, detect_language, extract_date};
pub use title::extract_prompt_title;

/// Full classification result for one prompt.
#[derive(Debug, Clone)]
pub struct Classification {
    pub category: Category,
    pub subcategory: Option<&'static str>,
    /// Feature tag ids, sorted and deduplicated.
    pub features: Vec<String>,
    /// Audience tag ids, sorted and deduplicated.
    pub target_audience: Vec<String>,
    pub description_ru: String,
    pub description_en: String,
}

/// Classify one comment in the context of its post title.
pub fn classify(comment_text: &str, post_title: &str) -> Classification {
    let tl = comment_text.to_lowercase();
    let pt = post_title.to_lowercase();
    let combined = format!("{pt} {tl}");

    let features = features::detect_features(&tl, &pt);
    let audience = features::detect_audience(&combined);
    let (category, subcategory) = category::categorize(&features, &tl, &pt, &combined);

    let description_ru = describe::build_description_ru(&features, category, &tl, &pt);
    let description_en = describe::build_description_en(&features, category, &tl, &pt);

    let feature_ids: BTreeSet<&'static str> = features.iter().map(Feature::as_str).collect();
    let audience_ids: BTreeSet<&'static str> = audience.iter().map(Audience::as_str).collect();

    Classification {
        category,
        subcategory,
        features: feature_ids.into_iter().map(String::from).collect(),
        target_audience: audience_ids.into_iter().map(String::from).collect(),
        description_ru,
        description_en,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glitter_prompt_end_to_end() {
        let c = classify(
            "Отредактируй фото: натуральная ретушь кожи, сохрани текстуру. \
             Добавь блестки на скулы и легкое мерцание вокруг глаз.",
            "ПРОМТ — БЛЕСТКИ ✨",
        );
        assert_eq!(c.category, Category::DecorativeEffects);
        assert_eq!(c.subcategory, Some("glitter"));
        assert!(c.features.contains(&"glitter_sparkles".to_string()));
        assert!(c.features.contains(&"skin_retouch".to_string()));
        assert!(c.description_ru.contains("мерцание"));
        assert!(c.description_en.contains("shimmer"));
    }

    #[test]
    fn feature_ids_sorted_and_unique() {
        let c = classify(
            "ретушь кожи, блестки, стразы, замените фон на черный",
            "стразы",
        );
        let mut sorted = c.features.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(c.features, sorted);
    }

    #[test]
    fn plain_text_defaults_to_natural_retouch() {
        let c = classify("просто какой-то текст без ключевых слов", "пост");
        assert_eq!(c.category, Category::SkinRetouch);
        assert_eq!(c.subcategory, Some("natural"));
        assert!(c.features.is_empty());
        assert!(c.description_ru.is_empty());
    }

    #[test]
    fn audience_from_post_title() {
        let c = classify("сделай натуральную ретушь кожи", "ПРОМТ ДЛЯ БРОВИСТОВ");
        assert!(c.target_audience.contains(&"brow_masters".to_string()));
    }
}
