//! Feature and audience tag detection.
//!
//! A flat keyword table per feature, evaluated against the lowercased
//! comment text and post title. The tables were tuned against the actual
//! channel export; keyword choice is deliberate (e.g. "ногти" alone is NOT
//! a nail keyword because most prompts say "не трогайте ногти").

use crate::text::contains_any;

/// A feature tag attached to a prompt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SkinRetouch,
    FrecklesBlush,
    BackgroundChange,
    ClothingChange,
    DriedFlowers,
    LiveFlowers,
    FoilPotal,
    GlitterSparkles,
    WaterLiquidEffects,
    FoodElements,
    SnowWinter,
    Accessories,
    EyeHighlight,
    NailCare,
    ProductPhotography,
    LipFocusPrimary,
    EyeLashCloseup,
    BrowFixation,
    HairRetouch,
    CompositeCollage,
    MagazineStyle,
    AnimalPet,
    VideoAnimation,
    TextLettering,
    GlowTan,
    CommercialEditorial,
    WetSkin,
}

impl Feature {
    /// Tag id as it appears in emitted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::SkinRetouch => "skin_retouch",
            Feature::FrecklesBlush => "freckles_blush",
            Feature::BackgroundChange => "background_change",
            Feature::ClothingChange => "clothing_change",
            Feature::DriedFlowers => "dried_flowers",
            Feature::LiveFlowers => "live_flowers",
            Feature::FoilPotal => "foil_potal",
            Feature::GlitterSparkles => "glitter_sparkles",
            Feature::WaterLiquidEffects => "water_liquid_effects",
            Feature::FoodElements => "food_elements",
            Feature::SnowWinter => "snow_winter",
            Feature::Accessories => "accessories",
            Feature::EyeHighlight => "eye_highlight",
            Feature::NailCare => "nail_care",
            Feature::ProductPhotography => "product_photography",
            Feature::LipFocusPrimary => "lip_focus_primary",
            Feature::EyeLashCloseup => "eye_lash_closeup",
            Feature::BrowFixation => "brow_fixation",
            Feature::HairRetouch => "hair_retouch",
            Feature::CompositeCollage => "composite_collage",
            Feature::MagazineStyle => "magazine_style",
            Feature::AnimalPet => "animal_pet",
            Feature::VideoAnimation => "video_animation",
            Feature::TextLettering => "text_lettering",
            Feature::GlowTan => "glow_tan",
            Feature::CommercialEditorial => "commercial_editorial",
            Feature::WetSkin => "wet_skin",
        }
    }
}

/// A target-audience tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    BrowMasters,
    PmMasters,
    LashMasters,
    Cosmetologists,
    MakeupArtists,
    NailMasters,
    PedicureMasters,
    HairMasters,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::BrowMasters => "brow_masters",
            Audience::PmMasters => "pm_masters",
            Audience::LashMasters => "lash_masters",
            Audience::Cosmetologists => "cosmetologists",
            Audience::MakeupArtists => "makeup_artists",
            Audience::NailMasters => "nail_masters",
            Audience::PedicureMasters => "pedicure_masters",
            Audience::HairMasters => "hair_masters",
        }
    }
}

/// Detect feature tags from the lowercased comment text (`tl`) and
/// lowercased post title (`pt`).
pub fn detect_features(tl: &str, pt: &str) -> Vec<Feature> {
    let mut features: Vec<Feature> = Vec::new();
    let mut push = |fs: &mut Vec<Feature>, f: Feature| {
        if !fs.contains(&f) {
            fs.push(f);
        }
    };

    if contains_any(
        tl,
        &[
            "ретушь кожи",
            "skin retouch",
            "retouching",
            "текстуру кожи",
            "skin texture",
            "blemish",
            "кожа должна",
            "skin should",
            "естественная текстура",
            "кожа должна выглядеть",
            "retouch",
            "ретушь",
            "дефект кожи",
            "skin imperfect",
        ],
    ) {
        push(&mut features, Feature::SkinRetouch);
    }

    if contains_any(tl, &["веснушки", "freckle", "румянец"]) {
        push(&mut features, Feature::FrecklesBlush);
    }

    // Background: specific phrasings only, to avoid "фон не трогать".
    if contains_any(
        tl,
        &[
            "замените фон",
            "замена фона",
            "черный фон",
            "белый фон",
            "replace the background",
            "replace background",
            "changing the background",
            "change the background",
            "фон на черный",
            "фон на белый",
            "черном фоне",
            "белом фоне",
            "studio background",
            "студийный фон",
            "background.*replace",
            "темный фон",
        ],
    ) {
        push(&mut features, Feature::BackgroundChange);
    }

    if contains_any(
        tl,
        &[
            "замена одежд",
            "replace clothing",
            "replace.*cloth",
            "change.*outfit",
            "шуба",
            "fur coat",
            "меховая",
            "одежд",
            "платье в",
            "перчатки",
            "gloves",
        ],
    ) {
        push(&mut features, Feature::ClothingChange);
    }

    // Flowers: positive mentions only (not "не касалась бровей" noise).
    let flower_kws = [
        "сухоцвет",
        "ветки нежно",
        "кустовую ветку",
        "ветку из",
        "ветки из",
        "лизиантус",
        "пион",
        "мак на щек",
        "гипсофил",
        "подсолнух",
        "ягоды",
        "ягод на",
        "желтые цветы",
        "желтых цветов",
        "цветочн",
        "цветы на",
        "лепестки на",
        "розы на",
        "sunflower",
        "gypsophila",
        "flowers on",
        "petals on",
        "bouquet",
        "peony",
        "roses on",
    ];
    if contains_any(tl, &flower_kws) {
        if contains_any(tl, &["сухоцвет", "dried flower", "dry flower"]) {
            push(&mut features, Feature::DriedFlowers);
        } else {
            push(&mut features, Feature::LiveFlowers);
        }
    }

    // "потал" covers both "потал" and "поталь" word forms.
    if tl.contains("потал") {
        push(&mut features, Feature::FoilPotal);
    }

    if contains_any(
        tl,
        &[
            "блестки",
            "блёстки",
            "блесток",
            "мерцание",
            "шиммер",
            "glitter",
            "стразы на",
            "стразы по",
            "мерцающ",
            "shimmer",
            "sparkl",
            "страз",
            "rhinestone",
        ],
    ) {
        push(&mut features, Feature::GlitterSparkles);
    }

    if contains_any(
        tl,
        &[
            "капли воды",
            "water drop",
            "drop of water",
            "drops of water",
            "конденсат",
            "condensation",
            "влажн",
            "wet skin",
            "wet look",
            "пена на руках",
            "foam on",
            "капли сливочного масла",
            "drops of butter",
            "butter drops",
        ],
    ) {
        push(&mut features, Feature::WaterLiquidEffects);
    }

    if contains_any(
        tl,
        &[
            "сахар",
            "sugar",
            "поп корн",
            "popcorn",
            "шарики мороженого",
            "торт",
            "шоколад",
            "chocolate",
            "круассан",
            "croissant",
            "кокос",
            "coconut",
            "молоке с нежно",
            "хлопьями",
        ],
    ) {
        push(&mut features, Feature::FoodElements);
    }

    if contains_any(tl, &["снег", "snow", "варежк", "mittens"]) {
        push(&mut features, Feature::SnowWinter);
    }

    // Accessories: only items actually added to the scene.
    let accessory_kws: &[&[&str]] = &[
        &["бандан", "bandana"],
        &[
            "кружевную повязку",
            "кружевная повязка",
            "белую повязку",
            "красную повязку",
            "повязку на голову",
            "lace headband",
        ],
        &["атласную ленту", "атласной лент", "лента на шею", "satin ribbon", "ribbon on neck"],
        &["чокер", "choker"],
        &["кольца", "кольцо", "ring on finger", "rings on"],
        &["очки", "sunglasses", "glasses on"],
        &["белые перья", "white feathers", "перья на"],
        &["белые крылья", "white wings", "крылья"],
        &["меховую шапку", "меховая шапка", "варежки", "fur hat", "mittens"],
        &["атласный палантин", "палантин на голову", "шарф"],
    ];
    for kws in accessory_kws {
        if contains_any(tl, kws) {
            push(&mut features, Feature::Accessories);
            break;
        }
    }
    // Botanical leaf added as decoration.
    if contains_any(tl, &["листом", "лист на", "leaf on"])
        && contains_any(tl, &["добавь лист", "добавьте лист", "добавь на"])
    {
        push(&mut features, Feature::Accessories);
    }

    if contains_any(
        tl,
        &[
            "блик на глазу",
            "блик на радужку",
            "добавьте блик",
            "добавь блик",
            "eye highlight",
            "add highlight.*eye",
        ],
    ) {
        push(&mut features, Feature::EyeHighlight);
    }

    if contains_any(tl, &["маникюр", "manicure", "педикюр", "pedicure"])
        || contains_any(pt, &["маникюра", "маникюр", "педикюра", "педикюр"])
    {
        push(&mut features, Feature::NailCare);
    }

    if contains_any(
        tl,
        &[
            "тюбик",
            "мой предмет",
            "my product",
            "my item",
            "мое изделие",
            "вакуумн",
            "vacuum",
            "упаковк",
            "packaging",
            "product photo",
            "studio photo.*product",
            "предмет с фото",
            "студийную фотографию моего",
        ],
    ) {
        push(&mut features, Feature::ProductPhotography);
    }

    // Lips must be the subject, not "не меняйте цвет губ".
    if contains_any(
        tl,
        &[
            "крупный план.*губ",
            "губ.*выглядывающего",
            "сахар.*губ",
            "страз.*губ",
            "перманент губ",
            "lip.*close",
            "close.*lip",
            "lips.*torn",
            "губ.*разорванн",
            "разорванн.*губ",
        ],
    ) || contains_any(pt, &["для губ", "губ 👄", "для перманента губ"])
    {
        push(&mut features, Feature::LipFocusPrimary);
    }

    if contains_any(
        tl,
        &[
            "крупный план.*глаз",
            "крупный план.*ресниц",
            "крупный план.*бров",
            "выглядывающего через разорванн",
            "through.*torn",
            "macro.*eye",
            "макросъемочный снимок",
            "область вокруг глаз",
        ],
    ) || contains_any(pt, &["для ресниц", "для мастеров по ресниц"])
    {
        push(&mut features, Feature::EyeLashCloseup);
    }

    if contains_any(pt, &["бровист", "мастеров пм"]) {
        push(&mut features, Feature::BrowFixation);
    }

    if contains_any(pt, &["волосам", "парикмахер"])
        || contains_any(
            tl,
            &[
                "волосы — это полностью защищен",
                "ни в коем случае не изменяй волосы",
                "hair.*fully protected",
            ],
        )
    {
        push(&mut features, Feature::HairRetouch);
    }

    if contains_any(
        tl,
        &[
            "смартфон",
            "smartphone",
            "экране камер",
            "camera screen",
            "camera mode interface",
            "кнопку съемки",
        ],
    ) {
        push(&mut features, Feature::CompositeCollage);
    }

    if contains_any(pt, &["журнал", "magazine"])
        || contains_any(tl, &["журнал на фоне", "magazine background"])
    {
        push(&mut features, Feature::MagazineStyle);
    }

    if contains_any(
        tl,
        &["кот моргает", "кот должен", "добавь кота", "with a cat", "cat blinks"],
    ) {
        push(&mut features, Feature::AnimalPet);
    }

    if contains_any(
        tl,
        &[
            "моргает",
            "blink",
            "оживить",
            "animate",
            "наклоняет голов",
            "slight head tilt",
            "slightly tilt",
            "моргание",
        ],
    ) {
        push(&mut features, Feature::VideoAnimation);
    }

    if contains_any(
        tl,
        &[
            "надпись",
            "inscription",
            "lettering",
            "шрифт",
            "3d.*letter",
            "letter.*fur",
            "letter.*chocolate",
            "letter.*knit",
            "объемную надпись",
            "объёмную надпись",
            "3d rendering",
            "3d-рендеринг",
            "volumetric.*text",
            "объемный текст",
            "add an inscription",
        ],
    ) {
        push(&mut features, Feature::TextLettering);
    }

    if contains_any(tl, &["загар", "subtle tan", "create.*tan"]) {
        push(&mut features, Feature::GlowTan);
    }

    if contains_any(
        tl,
        &[
            "коммерческая ретушь",
            "commercial retouch",
            "high-end",
            "high fashion",
            "редакционной бьюти",
            "editorial beauty",
            "editorial photography",
            "редакционной фотографии",
            "high end",
            "studio sculpting beauty",
        ],
    ) {
        push(&mut features, Feature::CommercialEditorial);
    }

    if contains_any(
        tl,
        &["влажный оттенок", "wet highlight", "влажн", "wet look", "wet skin", "влажная кожа"],
    ) {
        push(&mut features, Feature::WetSkin);
    }

    enrich_from_post_title(pt, &mut features);

    features
}

/// Template prompts apply to many scenarios; the post title names the one
/// the comment thread is about, so it can imply features the body omits.
fn enrich_from_post_title(pt: &str, features: &mut Vec<Feature>) {
    let mut add = |fs: &mut Vec<Feature>, f: Feature| {
        if !fs.contains(&f) {
            fs.push(f);
        }
    };

    if pt.contains("потал") {
        add(features, Feature::FoilPotal);
    }
    if contains_any(pt, &["блестки", "блёстки", "блестками", "стразы"]) {
        add(features, Feature::GlitterSparkles);
    }
    if pt.contains("снег") {
        add(features, Feature::SnowWinter);
    }
    if contains_any(pt, &["капли воды", "влажная кожа", "капли сливочного масла"]) {
        add(features, Feature::WaterLiquidEffects);
    }
    if contains_any(
        pt,
        &[
            "мак на",
            "пион",
            "розы",
            "гипсофил",
            "желтые цветы",
            "желтых цветов",
            "цветочная композиция",
            "нежный фон и розы",
        ],
    ) && !features.contains(&Feature::LiveFlowers)
        && !features.contains(&Feature::DriedFlowers)
    {
        features.push(Feature::LiveFlowers);
    }
    if pt.contains("сухоцветы") {
        add(features, Feature::DriedFlowers);
    }
    if contains_any(
        pt,
        &[
            "бандан",
            "повязка",
            "повязку",
            "атласная лента",
            "лента на шею",
            "лента 🖤",
            "чокер",
            "кольца",
            "очки",
            "перья",
            "крылья",
            "палантин",
        ],
    ) {
        add(features, Feature::Accessories);
    }
    if contains_any(pt, &["шуба", "меховая шапка", "варежки"]) {
        add(features, Feature::ClothingChange);
        if contains_any(pt, &["меховая шапка", "варежки"]) {
            add(features, Feature::Accessories);
        }
    }
    if pt.contains("замена одежды") {
        add(features, Feature::ClothingChange);
    }
    if pt.contains("замена фона") {
        add(features, Feature::BackgroundChange);
    }
}

/// Detect target-audience tags over post title + comment text combined.
pub fn detect_audience(combined: &str) -> Vec<Audience> {
    let mut audience = Vec::new();
    let mut push = |a: Audience| {
        if !audience.contains(&a) {
            audience.push(a);
        }
    };

    if contains_any(combined, &["бровист", "brow master", "мастеров по бров"]) {
        push(Audience::BrowMasters);
    }
    if contains_any(
        combined,
        &["мастер пм", "мастеров пм", "перманент", "permanent makeup", "пм/"],
    ) {
        push(Audience::PmMasters);
    }
    if contains_any(combined, &["ресниц", "lash master", "ресничник"]) {
        push(Audience::LashMasters);
    }
    if contains_any(combined, &["косметолог", "cosmetolog"]) {
        push(Audience::Cosmetologists);
    }
    if contains_any(combined, &["визажист", "makeup artist", "visagist"]) {
        push(Audience::MakeupArtists);
    }
    if contains_any(combined, &["маникюр", "nail master", "мастеров маникюра"]) {
        push(Audience::NailMasters);
    }
    if contains_any(combined, &["педикюр", "pedicure"]) {
        push(Audience::PedicureMasters);
    }
    if contains_any(combined, &["волосам", "парикмахер", "hair master"]) {
        push(Audience::HairMasters);
    }

    audience
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retouch_keywords_detected() {
        let features = detect_features("отредактируй фото: натуральная ретушь кожи", "");
        assert!(features.contains(&Feature::SkinRetouch));
    }

    #[test]
    fn negated_background_not_detected() {
        let features = detect_features("фон не трогать, ретушь кожи", "");
        assert!(!features.contains(&Feature::BackgroundChange));
        assert!(features.contains(&Feature::SkinRetouch));
    }

    #[test]
    fn dried_flowers_beat_live_flowers() {
        let features = detect_features("добавь ветки сухоцветов и пионы", "");
        assert!(features.contains(&Feature::DriedFlowers));
        assert!(!features.contains(&Feature::LiveFlowers));
    }

    #[test]
    fn foil_detected_from_word_stem() {
        assert!(detect_features("серебряная поталь на скулах", "").contains(&Feature::FoilPotal));
        assert!(detect_features("мелкие фрагменты potal", "поталь 🤍").contains(&Feature::FoilPotal));
    }

    #[test]
    fn post_title_enriches_template_prompt() {
        let features = detect_features("отредактируй фото, сохрани текстуру кожи", "промт — блестки ✨");
        assert!(features.contains(&Feature::GlitterSparkles));
        assert!(features.contains(&Feature::SkinRetouch));
    }

    #[test]
    fn lip_subject_vs_lip_mention() {
        // Subject: close-up of lips.
        let features = detect_features("крупный план губ с каплями воды", "");
        assert!(features.contains(&Feature::LipFocusPrimary));
        // Mention: protective instruction only.
        let features = detect_features("не меняйте цвет губ, ретушь кожи", "");
        assert!(!features.contains(&Feature::LipFocusPrimary));
    }

    #[test]
    fn video_animation_detected() {
        let features = detect_features("модель легко моргает и наклоняет голову", "");
        assert!(features.contains(&Feature::VideoAnimation));
    }

    #[test]
    fn audience_from_combined_text() {
        let audience = detect_audience("промт для бровистов и мастеров пм — ретушь");
        assert!(audience.contains(&Audience::BrowMasters));
        assert!(audience.contains(&Audience::PmMasters));
        assert!(!audience.contains(&Audience::HairMasters));
    }

    #[test]
    fn split_product_keyword_matches_in_order() {
        let features = detect_features("create a studio photo of my beauty product", "");
        assert!(features.contains(&Feature::ProductPhotography));

        // Reversed order does not match.
        let features = detect_features("place the product against a studio photo backdrop", "");
        assert!(!features.contains(&Feature::ProductPhotography));
    }

    #[test]
    fn no_duplicate_features() {
        let features = detect_features("блестки, стразы на скулах, мерцание", "стразы");
        let glitter = features
            .iter()
            .filter(|f| **f == Feature::GlitterSparkles)
            .count();
        assert_eq!(glitter, 1);
    }
}
