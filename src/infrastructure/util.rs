// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates to ASCII (deunicode), lowercases, and joins alphanumeric
/// runs with single hyphens.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    fn is_well_formed(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn folds_vietnamese_diacritics() {
        assert_eq!(normalize("Áo sơ mi Hàn Quốc"), "ao-so-mi-han-quoc");
        assert_eq!(normalize("Giày thể thao"), "giay-the-thao");
        assert_eq!(normalize("Mũ len"), "mu-len");
        assert_eq!(normalize("Đồng hồ đeo tay"), "dong-ho-deo-tay");
        assert_eq!(normalize("Áo Polo"), "ao-polo");
    }

    #[test]
    fn collapses_separator_runs_and_trims() {
        assert_eq!(normalize("  --Sale!!  50%  off--  "), "sale-50-off");
        assert_eq!(normalize("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn symbol_only_titles_normalize_to_empty() {
        assert_eq!(normalize("!!! ... ???"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn output_is_deterministic_and_well_formed() {
        let titles = [
            "Áo sơ mi Hàn Quốc",
            "Quần JEANS nam (size 32)",
            "Tủ lạnh — 2 cánh",
            "Bánh mì & cà phê",
            "ÂĂÊÔƠƯĐ âăêôơưđ",
            "x",
        ];
        for title in titles {
            let first = normalize(title);
            assert_eq!(first, normalize(title), "{title:?} is not deterministic");
            assert!(is_well_formed(&first), "{title:?} produced {first:?}");
        }
    }
}
