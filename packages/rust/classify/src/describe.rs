//! Short human-readable descriptions in Russian and English.
//!
//! Each detected feature contributes one fragment; fragments are joined
//! with ", ". The two builders run the same chain with localized wording,
//! so edits here usually come in pairs.

use crate::category::Category;
use crate::features::Feature;
use crate::text::contains_any;

/// Build the Russian description from detected features.
///
/// `tl` is the lowercased comment text, `pt` the lowercased post title.
pub fn build_description_ru(
    features: &[Feature],
    category: Category,
    tl: &str,
    pt: &str,
) -> String {
    let has = |f: Feature| features.contains(&f);
    let tlpt = format!("{tl} {pt}");
    let mut parts: Vec<String> = Vec::new();

    if has(Feature::SkinRetouch) {
        if has(Feature::CommercialEditorial) {
            parts.push("коммерческая/editorial ретушь кожи".into());
        } else {
            parts.push("натуральная ретушь кожи".into());
        }
    }
    if has(Feature::FrecklesBlush) {
        parts.push("добавление веснушек и румянца".into());
    }
    if has(Feature::EyeHighlight) {
        parts.push("блик на радужке глаза".into());
    }
    if has(Feature::GlowTan) {
        parts.push("лёгкий загар".into());
    }
    if has(Feature::WetSkin) {
        parts.push("влажный эффект кожи".into());
    }
    if has(Feature::DriedFlowers) {
        parts.push("ветки сухоцветов на переднем плане".into());
    }
    if has(Feature::LiveFlowers) {
        let named = [
            ("лизиантус", "лизиантусы"),
            ("пион", "пионы"),
            ("мак на", "маки"),
            ("гипсофил", "гипсофилы"),
            ("подсолнух", "подсолнухи"),
            ("ягод", "ягоды"),
            ("розы", "розы"),
            ("роз", "розы"),
            ("желтые цветы", "желтые цветы"),
        ]
        .iter()
        .find(|(kw, _)| tl.contains(kw))
        .map(|(_, nm)| format!("добавление {nm}"));
        parts.push(named.unwrap_or_else(|| "добавление живых цветов".into()));
    }
    if has(Feature::FoilPotal) {
        let color = if contains_any(tl, &["серебр", "silver"]) {
            "серебряная "
        } else if contains_any(tl, &["золот", "gold"]) {
            "золотая "
        } else if tl.contains("розов") {
            "розовая "
        } else {
            ""
        };
        parts.push(format!("{color}поталь на лице"));
    }
    if has(Feature::GlitterSparkles) {
        if contains_any(tl, &["страз", "rhinestone"]) {
            parts.push("стразы на коже/губах".into());
        } else if contains_any(tl, &["мерцание", "shimmer"]) {
            parts.push("мерцание на коже вокруг глаз".into());
        } else {
            parts.push("блёстки на лице".into());
        }
    }
    if has(Feature::WaterLiquidEffects) {
        if contains_any(tl, &["пена", "foam"]) {
            parts.push("пена на руках".into());
        } else if contains_any(tl, &["масл", "butter", "oil"]) {
            parts.push("капли сливочного масла".into());
        } else {
            parts.push("капли воды на коже".into());
        }
    }
    if has(Feature::SnowWinter) {
        parts.push("лёгкий снег на лице".into());
    }
    if has(Feature::FoodElements) {
        if contains_any(tl, &["сахар", "sugar"]) {
            parts.push("крупинки сахара на губах".into());
        } else if contains_any(tl, &["шоколад", "chocolate"]) {
            parts.push("шоколадные элементы".into());
        } else if contains_any(tl, &["мороженое", "ice cream"]) {
            parts.push("шарики мороженого".into());
        } else if contains_any(tl, &["кокос", "coconut"]) {
            parts.push("кокосы".into());
        } else if contains_any(tl, &["торт", "cake"]) {
            parts.push("торт".into());
        } else if contains_any(tl, &["поп корн", "popcorn"]) {
            parts.push("попкорн".into());
        } else {
            parts.push("пищевые декоративные элементы".into());
        }
    }
    if has(Feature::Accessories) && category == Category::Accessories {
        let mut acc: Vec<&str> = Vec::new();
        let pairs: &[(&[&str], &str)] = &[
            (&["бандан", "bandana"], "бандана"),
            (&["кружевн", "lace"], "кружевная повязка"),
            (&["красную повязку", "белую повязку", "повязку на голову"], "повязка"),
            (&["атласную ленту", "лента на шею"], "атласная лента"),
            (&["атласный палантин", "палантин"], "атласный палантин"),
            (&["чокер", "choker"], "чокер"),
            (&["кольца", "кольцо"], "кольца"),
            (&["очки", "glasses"], "очки"),
            (&["белые перья", "перья"], "белые перья"),
            (&["крылья", "wings"], "белые крылья"),
            (&["меховую шапку", "меховая шапка"], "меховая шапка"),
            (&["варежки", "mittens"], "варежки"),
            (&["шуба", "fur coat"], "шуба"),
        ];
        for (kws, nm) in pairs.iter().copied() {
            if contains_any(tl, kws) {
                acc.push(nm);
            }
        }
        if !acc.is_empty() {
            parts.push(format!("добавление: {}", acc.join(", ")));
        }
    }
    if has(Feature::ClothingChange) && category == Category::ClothingChange {
        parts.push("замена одежды".into());
    }
    if has(Feature::BackgroundChange) {
        parts.push("замена фона".into());
    }
    if has(Feature::NailCare) && category == Category::Manicure {
        if contains_any(&tlpt, &["педикюр", "pedicure"]) {
            parts.push("обработка фото педикюра".into());
        } else {
            parts.push("обработка фото маникюра".into());
        }
    }
    if has(Feature::ProductPhotography) {
        parts.push("предметная фотосъёмка".into());
    }
    if has(Feature::CompositeCollage) {
        parts.push("коллаж с экраном смартфона".into());
    }
    if has(Feature::MagazineStyle) {
        parts.push("журнальный стиль".into());
    }
    if has(Feature::TextLettering) {
        parts.push("объёмные 3D-надписи на фоне".into());
    }
    if has(Feature::VideoAnimation) {
        parts.push("оживление фото (видеоэффект через Runway)".into());
    }
    if has(Feature::AnimalPet) {
        parts.push("добавление кота в кадр".into());
    }
    if has(Feature::HairRetouch) {
        parts.push("защита/ретушь волос".into());
    }

    parts.join(", ")
}

/// English counterpart of [`build_description_ru`].
pub fn build_description_en(
    features: &[Feature],
    category: Category,
    tl: &str,
    pt: &str,
) -> String {
    let has = |f: Feature| features.contains(&f);
    let tlpt = format!("{tl} {pt}");
    let mut parts: Vec<String> = Vec::new();

    if has(Feature::SkinRetouch) {
        if has(Feature::CommercialEditorial) {
            parts.push("commercial/editorial skin retouching".into());
        } else {
            parts.push("natural skin retouching".into());
        }
    }
    if has(Feature::FrecklesBlush) {
        parts.push("adding freckles and blush".into());
    }
    if has(Feature::EyeHighlight) {
        parts.push("iris highlight/glow".into());
    }
    if has(Feature::GlowTan) {
        parts.push("subtle tan effect".into());
    }
    if has(Feature::WetSkin) {
        parts.push("wet skin effect".into());
    }
    if has(Feature::DriedFlowers) {
        parts.push("dried flower branches in foreground".into());
    }
    if has(Feature::LiveFlowers) {
        let named = [
            ("лизиантус", "lisianthus"),
            ("пион", "peonies"),
            ("мак на", "poppies"),
            ("гипсофил", "gypsophila"),
            ("подсолнух", "sunflowers"),
            ("ягод", "berries"),
            ("розы", "roses"),
            ("роз", "roses"),
            ("желтые цветы", "yellow flowers"),
            ("peony", "peonies"),
            ("roses", "roses"),
        ]
        .iter()
        .find(|(kw, _)| tl.contains(kw))
        .map(|(_, nm)| format!("adding {nm}"));
        parts.push(named.unwrap_or_else(|| "adding fresh flowers".into()));
    }
    if has(Feature::FoilPotal) {
        let color = if contains_any(tl, &["серебр", "silver"]) {
            "silver "
        } else if contains_any(tl, &["золот", "gold"]) {
            "gold "
        } else if tl.contains("розов") {
            "pink "
        } else {
            ""
        };
        parts.push(format!("{color}foil on face"));
    }
    if has(Feature::GlitterSparkles) {
        if contains_any(tl, &["страз", "rhinestone"]) {
            parts.push("rhinestones".into());
        } else if contains_any(tl, &["мерцание", "shimmer"]) {
            parts.push("shimmer around eyes".into());
        } else {
            parts.push("glitter on face".into());
        }
    }
    if has(Feature::WaterLiquidEffects) {
        if contains_any(tl, &["пена", "foam"]) {
            parts.push("foam on hands".into());
        } else if contains_any(tl, &["масл", "butter", "oil"]) {
            parts.push("butter/oil drops".into());
        } else {
            parts.push("water drops on skin".into());
        }
    }
    if has(Feature::SnowWinter) {
        parts.push("light snow on face".into());
    }
    if has(Feature::FoodElements) {
        if contains_any(tl, &["сахар", "sugar"]) {
            parts.push("sugar crystals on lips".into());
        } else if contains_any(tl, &["шоколад", "chocolate"]) {
            parts.push("chocolate elements".into());
        } else if contains_any(tl, &["мороженое", "ice cream"]) {
            parts.push("ice cream scoops".into());
        } else if contains_any(tl, &["кокос", "coconut"]) {
            parts.push("coconuts".into());
        } else if contains_any(tl, &["поп корн", "popcorn"]) {
            parts.push("popcorn".into());
        } else {
            parts.push("food decorative elements".into());
        }
    }
    if has(Feature::Accessories) && category == Category::Accessories {
        let mut acc: Vec<&str> = Vec::new();
        let pairs: &[(&[&str], &str)] = &[
            (&["бандан", "bandana"], "bandana"),
            (&["кружевн", "lace"], "lace headband"),
            (&["красную повязку", "белую повязку", "повязку на голову"], "headband"),
            (&["атласную ленту", "лента на шею", "satin ribbon"], "satin ribbon"),
            (&["атласный палантин", "палантин"], "satin headscarf"),
            (&["чокер", "choker"], "choker"),
            (&["кольца", "кольцо", "ring"], "rings"),
            (&["очки", "glasses"], "glasses"),
            (&["белые перья", "перья"], "white feathers"),
            (&["крылья", "wings"], "white wings"),
            (&["меховую шапку", "меховая шапка"], "fur hat"),
            (&["варежки", "mittens"], "mittens"),
            (&["шуба", "fur coat"], "fur coat"),
        ];
        for (kws, nm) in pairs.iter().copied() {
            if contains_any(tl, kws) {
                acc.push(nm);
            }
        }
        if !acc.is_empty() {
            parts.push(format!("adding: {}", acc.join(", ")));
        }
    }
    if has(Feature::ClothingChange) && category == Category::ClothingChange {
        parts.push("clothing replacement".into());
    }
    if has(Feature::BackgroundChange) {
        parts.push("background replacement".into());
    }
    if has(Feature::NailCare) && category == Category::Manicure {
        if contains_any(&tlpt, &["педикюр", "pedicure"]) {
            parts.push("pedicure photo editing".into());
        } else {
            parts.push("manicure photo editing".into());
        }
    }
    if has(Feature::ProductPhotography) {
        parts.push("product photography".into());
    }
    if has(Feature::CompositeCollage) {
        parts.push("smartphone camera screen composite".into());
    }
    if has(Feature::MagazineStyle) {
        parts.push("magazine style layout".into());
    }
    if has(Feature::TextLettering) {
        parts.push("3D lettering overlay on background".into());
    }
    if has(Feature::VideoAnimation) {
        parts.push("photo animation / video effect (Runway)".into());
    }
    if has(Feature::AnimalPet) {
        parts.push("adding a cat to the scene".into());
    }
    if has(Feature::HairRetouch) {
        parts.push("hair protection / retouching".into());
    }

    parts.join(", ")
}
