//! Fixed category definitions for the prompt catalog.

use promptcat_shared::CategoryDef;

/// All catalog categories, in presentation order.
pub fn category_defs() -> Vec<CategoryDef> {
    vec![
        def(
            "skin_retouch",
            "Ретушь кожи",
            "Skin Retouch",
            "Профессиональная ретушь кожи с сохранением естественной текстуры, пор и деталей. Натуральный и коммерческий (editorial) стиль.",
            "Professional skin retouching that preserves natural texture, pores, and detail. Natural and commercial (editorial) styles.",
        ),
        def(
            "decorative_flowers",
            "Декоративные цветы",
            "Decorative Flowers",
            "Добавление живых и сушёных цветов, лепестков и ботанических веток к портрету.",
            "Adding fresh and dried flowers, petals, and botanical branches to portraits.",
        ),
        def(
            "decorative_effects",
            "Декоративные эффекты",
            "Decorative Effects",
            "Поталь/фольга, блёстки, стразы, капли воды и масла, снег, кристаллы сахара и другие текстурные элементы.",
            "Foil, glitter, rhinestones, water/oil drops, snow, sugar crystals, and other textural elements.",
        ),
        def(
            "background_change",
            "Замена фона",
            "Background Change",
            "Замена фона фотографии на студийный, белый, чёрный, цветной или текстурный.",
            "Replacing photo background with studio, white, black, colored, or textured backgrounds.",
        ),
        def(
            "clothing_change",
            "Замена одежды",
            "Clothing Change",
            "Замена или добавление одежды: шубы, пальто, платья и другие образы.",
            "Replacing or adding clothing: fur coats, dresses, and other outfit changes.",
        ),
        def(
            "accessories",
            "Аксессуары",
            "Accessories",
            "Добавление головных повязок, бандан, лент, чокеров, колец, очков, перьев, крыльев и других аксессуаров.",
            "Adding headbands, bandanas, ribbons, chokers, rings, glasses, feathers, wings, and other accessories.",
        ),
        def(
            "manicure",
            "Маникюр и педикюр",
            "Manicure & Pedicure",
            "Профессиональная обработка фото маникюра и педикюра с заменой фона и добавлением декора.",
            "Professional manicure and pedicure photo editing with background replacement and decorative elements.",
        ),
        def(
            "product_photography",
            "Предметная съёмка",
            "Product Photography",
            "Создание профессиональных студийных снимков косметических изделий и продуктов.",
            "Creating professional studio shots of cosmetic products and items.",
        ),
        def(
            "lip_art",
            "Крупный план губ",
            "Lip Art",
            "Крупный план губ, художественные эффекты на губах (стразы, сахар, цветы).",
            "Lip close-ups with artistic effects (rhinestones, sugar, flowers).",
        ),
        def(
            "eye_art",
            "Крупный план глаз и ресниц",
            "Eye & Lash Art",
            "Крупный план глаз, ресниц с художественным фреймингом (разорванная бумага, мерцание).",
            "Close-up of eyes and lashes with artistic framing (torn paper, shimmer).",
        ),
        def(
            "cosmetology",
            "Косметология и ПМ",
            "Cosmetology & PM",
            "Промты для косметологов и мастеров перманентного макияжа.",
            "Prompts for cosmetologists and permanent makeup masters.",
        ),
        def(
            "video_animation",
            "Видео и анимация",
            "Video & Animation",
            "Промты для оживления фотографий (моргание, движение головы) через Runway.",
            "Prompts for animating photos (blinking, head movement) via Runway.",
        ),
        def(
            "composite",
            "Коллажи и надписи",
            "Composites & Lettering",
            "Коллажи с экраном смартфона, журнальный стиль, объёмные 3D-надписи на фоне.",
            "Smartphone screen composites, magazine-style layouts, 3D lettering on backgrounds.",
        ),
    ]
}

fn def(
    id: &str,
    name_ru: &str,
    name_en: &str,
    description_ru: &str,
    description_en: &str,
) -> CategoryDef {
    CategoryDef {
        id: id.to_string(),
        name_ru: name_ru.to_string(),
        name_en: name_en.to_string(),
        description_ru: description_ru.to_string(),
        description_en: description_en.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_categories_unique_ids() {
        let defs = category_defs();
        assert_eq!(defs.len(), 13);
        let mut ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn first_category_is_skin_retouch() {
        assert_eq!(category_defs()[0].id, "skin_retouch");
    }
}
