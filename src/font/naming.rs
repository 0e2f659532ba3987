use lazy_static::lazy_static;
use regex::Regex;
use write_fonts::types::NameId;

use super::{Region, Style};

pub const FONT_COPYRIGHT: &str = "© 2014-2021 Adobe (http://www.adobe.com/).";
pub const FONT_VERSION: &str = "Version 2.004;hotconv 1.0.118;makeotfexe 2.5.65603";
pub const FONT_TRADEMARK: &str = "Noto is a trademark of Google Inc.";
pub const FONT_MANUFACTURER: &str = "Adobe";
pub const FONT_DESIGNER: &str = "Ryoko NISHIZUKA 西塚涼子 (kana, bopomofo & ideographs); Paul D. Hunt (Latin, Greek & Cyrillic); Sandoll Communications 산돌커뮤니케이션, Soo-young JANG 장수영 & Joo-yeon KANG 강주연 (hangul elements, letters & syllables)";
pub const FONT_DESCRIPTION: &str = "Dr. Ken Lunde (project architect, glyph set definition & overall production); Masataka HATTORI 服部正貴 (production & ideograph elements)";
pub const FONT_VENDOR_URL: &str = "http://www.google.com/get/noto/";
pub const FONT_DESIGNER_URL: &str = "http://www.adobe.com/type/";
pub const FONT_LICENSE_DESCRIPTION: &str = "This Font Software is licensed under the SIL Open Font License, Version 1.1. This Font Software is distributed on an \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the SIL Open Font License for the specific language, permissions and limitations governing your use of this Font Software.";
pub const FONT_LICENSE_URL: &str = "http://scripts.sil.org/OFL";

lazy_static! {
    static ref VERSION_NUMBER: Regex = Regex::new(r"^Version\s+([0-9.]+)").unwrap();
}

/// Extract the bare version number (e.g. "2.004") from the version string
pub fn version_number() -> &'static str {
    VERSION_NUMBER
        .captures(FONT_VERSION)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("0.000")
}

/// File name of the renamed per-region TTF
pub fn ttf_file_name(region: Region, style: Style) -> String {
    format!("NotoSansCJK{}-{}.ttf", region.lowercase(), style.name())
}

/// File name of the merged per-style collection
pub fn ttc_file_name(style: Style) -> String {
    format!("NotoSansCJK-{}.ttc", style.name())
}

/// The complete set of name-table strings for one (region, style) variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    pub family: String,
    pub subfamily: String,
    pub unique_id: String,
    pub full_name: String,
    pub postscript_name: String,
    pub preferred_family: Option<String>,
    pub preferred_subfamily: Option<String>,
}

impl NameSet {
    /// Compute the names for a (region, style) variant
    pub fn new(region: Region, style: Style) -> Self {
        let base_family = format!("Noto Sans CJK {}", region.code());
        let postscript_name = format!("NotoSansCJK{}-{}", region.lowercase(), style.name());
        // Style is dropped in the full name for Regular
        let full_name = if style == Style::Regular {
            base_family.clone()
        } else {
            format!("{} {}", base_family, style.name())
        };
        let unique_id = format!("{};GOOG;{};ADOBE", version_number(), postscript_name);

        if style.is_style_linked() {
            Self {
                family: base_family,
                subfamily: style.name().to_string(),
                unique_id,
                full_name,
                postscript_name,
                preferred_family: None,
                preferred_subfamily: None,
            }
        } else {
            Self {
                family: format!("{} {}", base_family, style.name()),
                subfamily: "Regular".to_string(),
                unique_id,
                full_name,
                postscript_name,
                preferred_family: Some(base_family),
                preferred_subfamily: Some(style.name().to_string()),
            }
        }
    }

    /// All records to write for this variant, in ascending name-ID order
    pub fn records(&self) -> Vec<(NameId, String)> {
        let mut records = vec![
            (NameId::COPYRIGHT_NOTICE, FONT_COPYRIGHT.to_string()),
            (NameId::FAMILY_NAME, self.family.clone()),
            (NameId::SUBFAMILY_NAME, self.subfamily.clone()),
            (NameId::UNIQUE_ID, self.unique_id.clone()),
            (NameId::FULL_NAME, self.full_name.clone()),
            (NameId::VERSION_STRING, FONT_VERSION.to_string()),
            (NameId::POSTSCRIPT_NAME, self.postscript_name.clone()),
            (NameId::TRADEMARK, FONT_TRADEMARK.to_string()),
            (NameId::MANUFACTURER, FONT_MANUFACTURER.to_string()),
            (NameId::DESIGNER, FONT_DESIGNER.to_string()),
            (NameId::DESCRIPTION, FONT_DESCRIPTION.to_string()),
            (NameId::VENDOR_URL, FONT_VENDOR_URL.to_string()),
            (NameId::DESIGNER_URL, FONT_DESIGNER_URL.to_string()),
            (NameId::LICENSE_DESCRIPTION, FONT_LICENSE_DESCRIPTION.to_string()),
            (NameId::LICENSE_URL, FONT_LICENSE_URL.to_string()),
        ];

        if let (Some(family), Some(subfamily)) =
            (&self.preferred_family, &self.preferred_subfamily)
        {
            records.push((NameId::TYPOGRAPHIC_FAMILY_NAME, family.clone()));
            records.push((NameId::TYPOGRAPHIC_SUBFAMILY_NAME, subfamily.clone()));
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_keeps_the_plain_family() {
        let names = NameSet::new(Region::Jp, Style::Regular);
        assert_eq!(names.family, "Noto Sans CJK JP");
        assert_eq!(names.subfamily, "Regular");
        assert_eq!(names.full_name, "Noto Sans CJK JP");
        assert_eq!(names.postscript_name, "NotoSansCJKjp-Regular");
        assert!(names.preferred_family.is_none());
        assert!(names.preferred_subfamily.is_none());
    }

    #[test]
    fn bold_is_style_linked() {
        let names = NameSet::new(Region::Tc, Style::Bold);
        assert_eq!(names.family, "Noto Sans CJK TC");
        assert_eq!(names.subfamily, "Bold");
        assert_eq!(names.full_name, "Noto Sans CJK TC Bold");
        assert!(names.preferred_family.is_none());
    }

    #[test]
    fn light_moves_the_style_into_the_family() {
        let names = NameSet::new(Region::Sc, Style::Light);
        assert_eq!(names.family, "Noto Sans CJK SC Light");
        assert_eq!(names.subfamily, "Regular");
        assert_eq!(names.full_name, "Noto Sans CJK SC Light");
        assert_eq!(names.postscript_name, "NotoSansCJKsc-Light");
        assert_eq!(names.preferred_family.as_deref(), Some("Noto Sans CJK SC"));
        assert_eq!(names.preferred_subfamily.as_deref(), Some("Light"));
    }

    #[test]
    fn unique_id_embeds_version_and_postscript_name() {
        let names = NameSet::new(Region::Hk, Style::Black);
        assert_eq!(names.unique_id, "2.004;GOOG;NotoSansCJKhk-Black;ADOBE");
    }

    #[test]
    fn version_number_is_extracted_from_the_version_string() {
        assert_eq!(version_number(), "2.004");
    }

    #[test]
    fn file_names_follow_the_release_convention() {
        assert_eq!(
            ttf_file_name(Region::Kr, Style::Medium),
            "NotoSansCJKkr-Medium.ttf"
        );
        assert_eq!(ttc_file_name(Style::Thin), "NotoSansCJK-Thin.ttc");
    }

    #[test]
    fn typographic_records_only_appear_for_non_linked_styles() {
        let regular = NameSet::new(Region::Jp, Style::Regular);
        assert!(!regular
            .records()
            .iter()
            .any(|(id, _)| *id == NameId::TYPOGRAPHIC_FAMILY_NAME));

        let medium = NameSet::new(Region::Jp, Style::Medium);
        let records = medium.records();
        assert!(records
            .iter()
            .any(|(id, value)| *id == NameId::TYPOGRAPHIC_FAMILY_NAME
                && value == "Noto Sans CJK JP"));
        assert!(records
            .iter()
            .any(|(id, value)| *id == NameId::TYPOGRAPHIC_SUBFAMILY_NAME && value == "Medium"));
    }
}
