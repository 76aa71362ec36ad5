//! App-facing filters document.
//!
//! Maps the merged filters catalog onto the mobile app's shape: kebab-case
//! category ids with Georgian labels and icon names, cleaned Russian names
//! with keyword-table Georgian translations, sequential `filter-N` ids.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::instrument;

use promptcat_shared::{
    AppCategory, AppFilter, AppFilterDoc, FiltersCatalog, CURRENT_SCHEMA_VERSION,
};

/// Coarse Russian label to app category id, Georgian label, icon name.
/// Order here is the tiebreak order for equal-count categories.
const APP_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("ДЕКОР ЛИЦА", "face-decor", "სახის დეკორი", "Sparkle"),
    ("ПРЕДМЕТНАЯ СЪЕМКА", "product-photo", "პროდუქტის ფოტო", "Package"),
    ("РЕТУШЬ КОЖИ", "skin-retouch", "კანის რეტუში", "MagicWand"),
    ("ЦВЕТЫ И РАСТЕНИЯ", "flowers", "ყვავილები", "Flower"),
    ("ГЕНЕРАЦИЯ / КОЛЛАЖ", "generation", "გენერაცია / კოლაჟი", "Images"),
    ("АКСЕССУАРЫ И ОДЕЖДА", "accessories", "აქსესუარები", "TShirt"),
    ("ЗАМЕНА ФОНА", "background", "ფონის შეცვლა", "Image"),
    ("ЕДА / ФРУКТЫ", "food", "საკვები / ხილი", "Orange"),
    ("МАКРО / РЕСНИЦЫ", "macro-lashes", "მაკრო / წამწამები", "Eye"),
    ("АНИМАЦИЯ", "animation", "ანიმაცია", "Play"),
    ("СТУДИЙНОЕ ФОТО", "studio", "სტუდიური ფოტო", "Camera"),
    ("ТЕМАТИЧЕСКИЕ", "seasonal", "თემატური", "Heart"),
    ("ЗАМЕНА ФОНА + РЕТУШЬ", "bg-retouch", "ფონი + რეტუში", "ImageSquare"),
    ("МАНИКЮР / ПЕДИКЮР", "nails", "მანიკური / პედიკური", "HandPalm"),
    ("БРОВИ / ПМ", "brows-pmu", "წარბები / PM", "PenNib"),
    ("ЗАМЕНА ФОНА + ОДЕЖДА", "bg-outfit", "ფონი + ტანსაცმელი", "Hoodie"),
    ("ДЕКОР РУК", "hand-decor", "ხელის დეკორი", "Hand"),
    ("ПРИЧЕСКА / ВОЛОСЫ", "hair", "თმა / ვარცხნილობა", "Scissors"),
    ("ГУБЫ", "lips", "ტუჩები", "SmileyWink"),
    ("КОСМЕТОЛОГИЯ", "cosmetology", "კოსმეტოლოგია", "FirstAid"),
    ("ВОЛОСЫ", "hair-masters", "თმის მასტერები", "Scissors"),
    ("ВИЗАЖИСТЫ", "makeup-artists", "ვიზაჟისტები", "PaintBrush"),
];

const FALLBACK_CATEGORY: (&str, &str, &str) = ("other", "სხვა", "Star");

/// Russian keyword to Georgian translation, applied longest key first.
const KA_NAMES: &[(&str, &str)] = &[
    ("веснушки", "ჩხატები"),
    ("блестки", "ბრჭყვიალა"),
    ("капли воды", "წყლის წვეთები"),
    ("перья", "ბუმბული"),
    ("поталь", "პოტალი"),
    ("стразы", "სტრაზები"),
    ("фольга", "ფოლგა"),
    ("снег", "თოვლი"),
    ("пионы", "პეონები"),
    ("пион", "პეონი"),
    ("розы", "ვარდები"),
    ("роза", "ვარდი"),
    ("ромашки", "გვირილები"),
    ("ромашка", "გვირილა"),
    ("сухоцветы", "გამხმარი ყვავილები"),
    ("гипсофилы", "გიფსოფილა"),
    ("ягоды", "კენკრა"),
    ("лимон", "ლიმონი"),
    ("клубника", "მარწყვი"),
    ("мед", "თაფლი"),
    ("подтеки меда", "თაფლის წვეთები"),
    ("ретушь", "რეტუში"),
    ("маникюр", "მანიკური"),
    ("педикюр", "პედიკური"),
    ("ресницы", "წამწამები"),
    ("брови", "წარბები"),
    ("губы", "ტუჩები"),
    ("жемчуг", "მარგალიტი"),
    ("бантики", "ბანტები"),
    ("банты", "ბანტები"),
    ("сердца", "გულები"),
    ("лента", "ლენტი"),
    ("ленты", "ლენტები"),
    ("шуба", "ბეწვის ქურთუკი"),
    ("кудрявые волосы", "ხუხული თმა"),
    ("волнистые волосы", "ტალღოვანი თმა"),
    ("черный фон", "შავი ფონი"),
    ("белый фон", "თეთრი ფონი"),
    ("замена фона", "ფონის შეცვლა"),
    ("замена одежды", "ტანსაცმლის შეცვლა"),
    ("предметная съемка", "პროდუქტის ფოტო"),
    ("студийное фото", "სტუდიური ფოტო"),
    ("студийная фотография", "სტუდიური ფოტო"),
    ("clean girl", "Clean Girl"),
    ("макро", "მაკრო"),
    ("перчатки", "ხელთათმანები"),
    ("очки", "სათვალე"),
    ("повязка", "თავსაბურავი"),
    ("кольца", "ბეჭდები"),
    ("серьги", "საყურეები"),
    ("одуванчик", "ბაბუაწვერა"),
    ("подсолнух", "მზესუმზირა"),
    ("тюльпаны", "ტიტები"),
    ("бабочки", "პეპლები"),
    ("масло", "კარაქი"),
    ("мыльные пузыри", "საპნის ბუშტები"),
    ("капсула", "კაფსულა"),
    ("рожок", "ნაყინი"),
    ("мармеладные мишки", "მარმელადი"),
    ("малина", "ჟოლო"),
    ("предметная", "პროდუქტის ფოტო"),
    ("посыпка", "საკონდიტრო მოყვანილობა"),
    ("кондитерская посыпка", "საკონდიტრო მოყვანილობა"),
    ("металлические подтеки", "მეტალის წვეთები"),
    ("влажная кожа", "ტენიანი კანი"),
    ("крупинки сахара", "შაქრის კრისტალები"),
    ("блик", "ბზინვარება"),
    ("подарочные коробки", "საჩუქრის ყუთები"),
    ("неон", "ნეონი"),
    ("косметологов", "კოსმეტოლოგები"),
    ("визажистов", "ვიზაჟისტები"),
    ("бровистов", "წარბების მასტერი"),
    ("мастеров пм", "PM მასტერი"),
    ("мастеров по ресницам", "წამწამების მასტერი"),
    ("мастеров маникюра", "მანიკურის მასტერი"),
    ("мастеров по волосам", "თმის მასტერი"),
    ("сияющей кожи", "ბრწყინვალე კანი"),
    ("натуральная ретушь", "ნატურალური რეტუში"),
    ("коммерческая ретушь", "კომერციული რეტუში"),
    ("ленивая ретушь", "სწრაფი რეტუში"),
    ("ретушь кожи", "კანის რეტუში"),
    ("текстурная кожа", "ტექსტურიანი კანი"),
];

/// Translation table ordered longest key first so multiword keywords win
/// over their fragments.
static KA_NAMES_BY_LEN: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut pairs = KA_NAMES.to_vec();
    pairs.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    pairs
});

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|__").unwrap());
static PROMPT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s*\d*\s*[-\u{2013}\u{2014}]?\s*").unwrap());
static PROMPT_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s+ДЛЯ\s+").unwrap());
static STRUCTURE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*Структура\s*.*$").unwrap());

/// Strip markers and `ПРОМТ` prefixes from a filter name.
pub fn clean_name(name: &str) -> String {
    let cleaned = BOLD_RE.replace_all(name, "");
    let cleaned = PROMPT_PREFIX_RE.replace(&cleaned, "");
    let cleaned = PROMPT_FOR_RE.replace(&cleaned, "");
    let cleaned = STRUCTURE_RE.replace(&cleaned, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "Фильтр".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Translate a cleaned Russian name into Georgian via the keyword table.
///
/// Longest keywords match first, each at most once, joined with ` + `
/// capped at three parts. Names with no keyword hit pass through.
pub fn translate_name(name: &str) -> String {
    let mut lower = name.to_lowercase();
    let mut parts: Vec<&str> = Vec::new();
    for (ru, ka) in KA_NAMES_BY_LEN.iter() {
        if let Some(idx) = lower.find(ru) {
            parts.push(ka);
            lower.replace_range(idx..idx + ru.len(), "");
        }
    }
    if parts.is_empty() {
        name.to_string()
    } else {
        parts.truncate(3);
        parts.join(" + ")
    }
}

/// Build the app filter document from the merged catalog.
#[instrument(skip_all, fields(filters = catalog.filters.len()))]
pub fn build_app_filters(catalog: &FiltersCatalog) -> AppFilterDoc {
    let lookup = |label: &str| -> (&str, &str, &str) {
        APP_CATEGORIES
            .iter()
            .find(|(ru, _, _, _)| *ru == label)
            .map(|(_, id, ka, icon)| (*id, *ka, *icon))
            .unwrap_or(FALLBACK_CATEGORY)
    };

    let mut filters: Vec<AppFilter> = Vec::with_capacity(catalog.filters.len());
    for (i, entry) in catalog.filters.iter().enumerate() {
        let (cat_id, _, _) = lookup(&entry.category);
        let name_ru = clean_name(&entry.name);
        let name_ka = translate_name(&name_ru);
        filters.push(AppFilter {
            id: format!("filter-{}", i + 1),
            category_id: cat_id.to_string(),
            name_ka,
            name_ru,
            prompt: entry.prompt_text.clone(),
        });
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for f in &filters {
        *counts.entry(f.category_id.as_str()).or_default() += 1;
    }

    let mut categories: Vec<AppCategory> = APP_CATEGORIES
        .iter()
        .filter_map(|(ru, id, ka, icon)| {
            let count = counts.get(id).copied().unwrap_or(0);
            (count > 0).then(|| AppCategory {
                id: id.to_string(),
                label_ka: ka.to_string(),
                label_ru: ru.to_string(),
                icon: icon.to_string(),
                count,
            })
        })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    AppFilterDoc {
        schema_version: CURRENT_SCHEMA_VERSION,
        categories,
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptcat_shared::{FilterEntry, FilterSource};

    fn entry(category: &str, name: &str, text: &str) -> FilterEntry {
        FilterEntry {
            source: FilterSource::Excel,
            source_id: "1".into(),
            category: category.into(),
            name: name.into(),
            prompt_text: text.into(),
        }
    }

    fn catalog(entries: Vec<FilterEntry>) -> FiltersCatalog {
        FiltersCatalog {
            schema_version: CURRENT_SCHEMA_VERSION,
            filters: entries,
        }
    }

    #[test]
    fn clean_name_strips_prompt_prefix() {
        assert_eq!(clean_name("**ПРОМТ 3 — БЛЕСТКИ**"), "БЛЕСТКИ");
        assert_eq!(clean_name("ПРОМТ ДЛЯ БРОВИСТОВ"), "ДЛЯ БРОВИСТОВ");
        assert_eq!(clean_name("ПРОМТ"), "Фильтр");
    }

    #[test]
    fn longest_keyword_wins() {
        // "натуральная ретушь" must not decompose into just "ретушь".
        assert_eq!(translate_name("Натуральная ретушь"), "ნატურალური რეტუში");
    }

    #[test]
    fn translation_caps_at_three_parts() {
        let ka = translate_name("блестки + стразы + поталь + снег");
        assert_eq!(ka.matches(" + ").count(), 2);
    }

    #[test]
    fn untranslatable_name_passes_through() {
        assert_eq!(translate_name("Что-то неизвестное"), "Что-то неизвестное");
    }

    #[test]
    fn unknown_category_maps_to_other() {
        let doc = build_app_filters(&catalog(vec![entry("НЕИЗВЕСТНО", "имя", "текст")]));
        assert_eq!(doc.filters[0].category_id, "other");
        // Fallback id has no entry in the category table.
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn sequential_ids_and_sorted_categories() {
        let doc = build_app_filters(&catalog(vec![
            entry("РЕТУШЬ КОЖИ", "Ретушь", "а"),
            entry("РЕТУШЬ КОЖИ", "Ретушь 2", "б"),
            entry("ДЕКОР ЛИЦА", "Блестки", "в"),
        ]));
        assert_eq!(doc.filters[0].id, "filter-1");
        assert_eq!(doc.filters[2].id, "filter-3");
        assert_eq!(doc.categories[0].id, "skin-retouch");
        assert_eq!(doc.categories[0].count, 2);
        assert_eq!(doc.categories[1].id, "face-decor");
    }
}
