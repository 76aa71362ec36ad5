//! Category assignment.
//!
//! Two categorizers live here. The fine-grained one picks a category id and
//! optional subcategory from detected feature tags, most distinctive first.
//! The coarse one maps a filter name (or body text) to a Russian display
//! label for the combined filters catalog.

use crate::features::Feature;
use crate::text::contains_any;

/// Primary catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SkinRetouch,
    DecorativeFlowers,
    DecorativeEffects,
    Accessories,
    ClothingChange,
    BackgroundChange,
    Manicure,
    EyeArt,
    LipArt,
    Cosmetology,
    ProductPhotography,
    VideoAnimation,
    Composite,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SkinRetouch => "skin_retouch",
            Category::DecorativeFlowers => "decorative_flowers",
            Category::DecorativeEffects => "decorative_effects",
            Category::Accessories => "accessories",
            Category::ClothingChange => "clothing_change",
            Category::BackgroundChange => "background_change",
            Category::Manicure => "manicure",
            Category::EyeArt => "eye_art",
            Category::LipArt => "lip_art",
            Category::Cosmetology => "cosmetology",
            Category::ProductPhotography => "product_photography",
            Category::VideoAnimation => "video_animation",
            Category::Composite => "composite",
        }
    }
}

/// Pick the primary category and subcategory from detected features.
///
/// Priority runs most specific first; background change only wins when no
/// distinctive decoration is present. `tl` is the lowercased comment text,
/// `pt` the lowercased post title, `combined` their concatenation.
pub fn categorize(
    features: &[Feature],
    tl: &str,
    pt: &str,
    combined: &str,
) -> (Category, Option<&'static str>) {
    let has = |f: Feature| features.contains(&f);
    let tlpt = format!("{tl} {pt}");

    if has(Feature::VideoAnimation) {
        (Category::VideoAnimation, None)
    } else if has(Feature::TextLettering) {
        (Category::Composite, Some("text_lettering"))
    } else if has(Feature::CompositeCollage) {
        (Category::Composite, Some("phone_screen"))
    } else if has(Feature::MagazineStyle) && !has(Feature::NailCare) {
        (Category::Composite, Some("magazine"))
    } else if has(Feature::ProductPhotography) {
        (Category::ProductPhotography, None)
    } else if has(Feature::NailCare) {
        let sub = if contains_any(&tlpt, &["педикюр", "pedicure"]) {
            "pedicure"
        } else {
            "manicure"
        };
        (Category::Manicure, Some(sub))
    } else if has(Feature::EyeLashCloseup) {
        let sub = if contains_any(tl, &["крупный план", "close-up", "разорванн", "torn"]) {
            "close_up_lash"
        } else {
            "lash_portrait"
        };
        (Category::EyeArt, Some(sub))
    } else if has(Feature::LipFocusPrimary) {
        let sub = if contains_any(tl, &["крупный план", "close-up", "разорванн", "torn"]) {
            "close_up"
        } else {
            "portrait"
        };
        (Category::LipArt, Some(sub))
    } else if has(Feature::DriedFlowers) {
        (Category::DecorativeFlowers, Some("dried_flowers"))
    } else if has(Feature::LiveFlowers) {
        (Category::DecorativeFlowers, Some("fresh_flowers"))
    } else if has(Feature::FoilPotal) {
        (Category::DecorativeEffects, Some("foil_potal"))
    } else if has(Feature::GlitterSparkles) {
        (Category::DecorativeEffects, Some("glitter"))
    } else if has(Feature::SnowWinter) {
        (Category::DecorativeEffects, Some("snow_winter"))
    } else if has(Feature::WaterLiquidEffects) {
        let sub = if contains_any(&tlpt, &["пена", "foam"]) {
            "foam"
        } else if contains_any(&tlpt, &["масл", "butter", "oil", "сливочного"]) {
            "oil_drops"
        } else if contains_any(&tlpt, &["влажная кожа", "wet skin"]) {
            "wet_skin"
        } else {
            "water_drops"
        };
        (Category::DecorativeEffects, Some(sub))
    } else if has(Feature::FoodElements) {
        (Category::DecorativeEffects, Some("food_crystals"))
    } else if has(Feature::Accessories) {
        (Category::Accessories, accessory_subcategory(&tlpt))
    } else if has(Feature::ClothingChange) {
        (Category::ClothingChange, None)
    } else if contains_any(combined, &["косметолог", "cosmetolog"]) && has(Feature::SkinRetouch) {
        (Category::Cosmetology, None)
    } else if has(Feature::HairRetouch) {
        (Category::SkinRetouch, Some("hair_retouch"))
    } else if has(Feature::BackgroundChange) && has(Feature::SkinRetouch) {
        (Category::BackgroundChange, None)
    } else if has(Feature::SkinRetouch) {
        let sub = if has(Feature::CommercialEditorial) {
            "commercial"
        } else if has(Feature::GlowTan) {
            "glow"
        } else {
            "natural"
        };
        (Category::SkinRetouch, Some(sub))
    } else {
        (Category::SkinRetouch, Some("natural"))
    }
}

fn accessory_subcategory(tlpt: &str) -> Option<&'static str> {
    if contains_any(tlpt, &["бандан", "bandana"]) {
        Some("bandana")
    } else if contains_any(tlpt, &["кружевн", "lace", "повязку на голову"]) {
        Some("headband")
    } else if contains_any(tlpt, &["красную повязку", "белую повязку", "повязк"]) {
        Some("headband")
    } else if contains_any(tlpt, &["атласную ленту", "лента на шею", "лента", "satin ribbon"]) {
        Some("ribbon")
    } else if contains_any(tlpt, &["чокер", "choker"]) {
        Some("choker")
    } else if contains_any(tlpt, &["кольц", "ring"]) {
        Some("rings")
    } else if contains_any(tlpt, &["очки", "glasses"]) {
        Some("glasses")
    } else if contains_any(tlpt, &["перья", "feather"]) {
        Some("feathers")
    } else if contains_any(tlpt, &["крылья", "wings"]) {
        Some("wings")
    } else if contains_any(
        tlpt,
        &["меховую шапку", "меховая шапка", "варежки", "fur hat", "mittens"],
    ) {
        Some("winter_hat")
    } else if contains_any(tlpt, &["палантин", "шарф"]) {
        Some("scarf")
    } else {
        None
    }
}

// --- coarse categorizer for the combined filters catalog ---

/// Map a filter name to a Russian display label.
///
/// Returns "ПРОЧЕЕ" when nothing matches; callers fall back to
/// [`categorize_by_content`] in that case.
pub fn categorize_name(name: &str) -> &'static str {
    let n = name.to_lowercase();
    let any = |kws: &[&str]| kws.iter().any(|w| n.contains(w));

    if any(&["маникюр", "педикюр", "nail"]) {
        return "МАНИКЮР / ПЕДИКЮР";
    }
    if any(&["на пальцах рук", "на руках", "пена на руках", "капли воды на пальц"]) {
        return "ДЕКОР РУК";
    }
    if any(&["предметн", "предментн", "предметка", "product", "плюшев"]) {
        return "ПРЕДМЕТНАЯ СЪЕМКА";
    }
    if any(&["оживл", "оживить", "runway", "видео"]) {
        return "АНИМАЦИЯ";
    }
    if any(&["косметолог", "перманент"]) {
        return "КОСМЕТОЛОГИЯ";
    }
    if any(&["губ", "lip"]) {
        return "ГУБЫ";
    }
    if n.contains("визажист") {
        return "ВИЗАЖИСТЫ";
    }
    if n.contains("волос") && n.contains("мастер") {
        return "ВОЛОСЫ";
    }
    if any(&["бровист", "мастер пм", "мастеров пм", "brows"]) {
        return "БРОВИ / ПМ";
    }
    if any(&["ресниц", "lashes", "макро съемка", "макро"]) {
        return "МАКРО / РЕСНИЦЫ";
    }
    if any(&["пион", "гипсофил", "сухоцвет", "ромашк", "подсолнух", "одуванчик", "тюльпан"]) {
        return "ЦВЕТЫ И РАСТЕНИЯ";
    }
    if any(&[
        "роза ",
        "розы ",
        " роз ",
        "розы,",
        "розы+",
        "розы\n",
        "белые розы",
        "зеленые цветы",
        "желтые цветы",
        "голубые розы",
        "оранжевые розы",
    ]) {
        return "ЦВЕТЫ И РАСТЕНИЯ";
    }
    if any(&["ягод", "лепестк", "ветк"]) {
        return "ЦВЕТЫ И РАСТЕНИЯ";
    }
    if any(&["клубник", "малин", "лимон", "мармелад", "рожок", "мед "]) {
        return "ЕДА / ФРУКТЫ";
    }
    if n.contains("подтеки меда") {
        return "ЕДА / ФРУКТЫ";
    }
    if any(&[
        "блестк",
        "поталь",
        "капли воды",
        "капли воды на лице",
        "пена",
        "страз",
        "фольга",
        "посыпк",
        "металлические подтеки",
        "подтек металл",
        "сердца на лице",
        "жемчуг",
        "патч",
        "капсула",
    ]) {
        return "ДЕКОР ЛИЦА";
    }
    if any(&["веснушк", "влажн", "снег", "заснеж", "бархатн"]) {
        return "ДЕКОР ЛИЦА";
    }
    if any(&["замена фон", "фон +", "черный фон", "белый фон", "+ фон", "неон", "блик на глаз"]) {
        if any(&["одежд", "шуба", "палантин", "чокер"]) {
            return "ЗАМЕНА ФОНА + ОДЕЖДА";
        }
        return "ЗАМЕНА ФОНА";
    }
    if any(&["замена одежд", "шуба", "бандана", "палантин", "чокер", "кольц", "журнал"]) {
        return "АКСЕССУАРЫ И ОДЕЖДА";
    }
    if any(&[
        "серьги",
        "перчатк",
        "бант",
        "свитер",
        "топ бандо",
        "кружев",
        "повязк",
        "лента",
        "меховая шапка",
        "варежк",
    ]) {
        return "АКСЕССУАРЫ И ОДЕЖДА";
    }
    if any(&["студийн", "studio", "clean girl"]) {
        return "СТУДИЙНОЕ ФОТО";
    }
    if any(&[
        "ретушь",
        "retouch",
        "натуральн",
        "коммерческ",
        "сияющ",
        "текстурн",
        "ленив",
        "после душа",
    ]) {
        return "РЕТУШЬ КОЖИ";
    }
    if any(&["генерир", "коллаж", "картинк", "делаем", "nanobanana", "надпис"]) {
        return "ГЕНЕРАЦИЯ / КОЛЛАЖ";
    }
    if any(&["14 февраля", "валентин", "valentine"]) {
        return "ТЕМАТИЧЕСКИЕ";
    }
    if any(&["кудряв", "волнист"]) {
        return "ПРИЧЕСКА / ВОЛОСЫ";
    }
    if n.contains("подарочн") || n.contains("коробк") {
        return "ЗАМЕНА ФОНА";
    }
    if any(&["кот ", "с котом"]) {
        return "ГЕНЕРАЦИЯ / КОЛЛАЖ";
    }
    "ПРОЧЕЕ"
}

/// Fallback categorizer using the prompt body text.
pub fn categorize_by_content(prompt_text: &str) -> &'static str {
    let p = prompt_text.to_lowercase();
    if p.contains("ретушь кожи") || p.contains("skin retouch") || p.contains("skin retouching") {
        if ["замен", "фон на", "background", "replace"].iter().any(|w| p.contains(w)) {
            return "ЗАМЕНА ФОНА + РЕТУШЬ";
        }
        return "РЕТУШЬ КОЖИ";
    }
    if ["замените фон", "replace the background", "background"].iter().any(|w| p.contains(w)) {
        return "ЗАМЕНА ФОНА";
    }
    if ["одежд", "clothing", "outfit"].iter().any(|w| p.contains(w)) {
        return "АКСЕССУАРЫ И ОДЕЖДА";
    }
    "РЕТУШЬ КОЖИ"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_wins_over_everything() {
        let features = vec![Feature::SkinRetouch, Feature::GlitterSparkles, Feature::VideoAnimation];
        let (cat, sub) = categorize(&features, "", "", "");
        assert_eq!(cat, Category::VideoAnimation);
        assert_eq!(sub, None);
    }

    #[test]
    fn background_only_without_decoration() {
        // Glitter prompt with a background change keeps the decoration category.
        let features = vec![Feature::SkinRetouch, Feature::BackgroundChange, Feature::GlitterSparkles];
        let (cat, sub) = categorize(&features, "", "", "");
        assert_eq!(cat, Category::DecorativeEffects);
        assert_eq!(sub, Some("glitter"));
        // Without decoration the background change wins.
        let features = vec![Feature::SkinRetouch, Feature::BackgroundChange];
        let (cat, _) = categorize(&features, "", "", "");
        assert_eq!(cat, Category::BackgroundChange);
    }

    #[test]
    fn default_is_natural_retouch() {
        let (cat, sub) = categorize(&[], "", "", "");
        assert_eq!(cat, Category::SkinRetouch);
        assert_eq!(sub, Some("natural"));
    }

    #[test]
    fn water_subcategory_by_text() {
        let features = vec![Feature::WaterLiquidEffects];
        let (_, sub) = categorize(&features, "пена на руках модели", "", "");
        assert_eq!(sub, Some("foam"));
        let (_, sub) = categorize(&features, "капли сливочного масла", "", "");
        assert_eq!(sub, Some("oil_drops"));
        let (_, sub) = categorize(&features, "капли воды на коже", "", "");
        assert_eq!(sub, Some("water_drops"));
    }

    #[test]
    fn cosmetology_needs_keyword_and_retouch() {
        let features = vec![Feature::SkinRetouch];
        let (cat, _) = categorize(&features, "", "", "промт для косметологов ретушь");
        assert_eq!(cat, Category::Cosmetology);
        let (cat, _) = categorize(&features, "", "", "ретушь кожи");
        assert_eq!(cat, Category::SkinRetouch);
    }

    #[test]
    fn coarse_labels_from_name() {
        assert_eq!(categorize_name("Маникюр — нюдовые ногти"), "МАНИКЮР / ПЕДИКЮР");
        assert_eq!(categorize_name("RUNWAY — оживление фото"), "АНИМАЦИЯ");
        assert_eq!(categorize_name("Промт для бровистов"), "БРОВИ / ПМ");
        assert_eq!(categorize_name("Черный фон + шуба"), "ЗАМЕНА ФОНА + ОДЕЖДА");
        assert_eq!(categorize_name("Нечто неизвестное"), "ПРОЧЕЕ");
    }

    #[test]
    fn coarse_fallback_by_content() {
        assert_eq!(
            categorize_by_content("сделай натуральную ретушь кожи, замени фон на белый"),
            "ЗАМЕНА ФОНА + РЕТУШЬ"
        );
        assert_eq!(categorize_by_content("replace the background with studio grey"), "ЗАМЕНА ФОНА");
        assert_eq!(categorize_by_content("обычный текст про что-то"), "РЕТУШЬ КОЖИ");
    }
}
