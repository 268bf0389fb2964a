//! Font resolution for a documentation run

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::error::DocError;
use crate::scene::{FontName, Host};
use crate::stylesheet::FontFamily;

/// Fonts for every text role of the document, all from one loaded family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    pub title: FontName,
    pub heading: FontName,
    pub subheading: FontName,
    pub body: FontName,
    pub bold: FontName,
    pub medium: FontName,
}

impl FontSet {
    pub fn from_family(family: &FontFamily) -> Self {
        let font = |style: &str| FontName::new(family.family.as_str(), style);
        Self {
            title: font(&family.title),
            heading: font(&family.heading),
            subheading: font(&family.subheading),
            body: font(&family.body),
            bold: font(&family.bold),
            medium: font(&family.medium),
        }
    }

    pub fn family(&self) -> &str {
        &self.body.family
    }
}

/// Load the first family whose fonts are all available.
///
/// Styles of one family load together; a family with any missing style is
/// skipped.
pub async fn load_font_set<H: Host + ?Sized>(
    host: &H,
    families: &[FontFamily],
) -> Result<FontSet, DocError> {
    for family in families {
        let fonts = family.required_fonts();
        match try_join_all(fonts.iter().map(|font| host.load_font(font))).await {
            Ok(_) => {
                debug!(family = family.family.as_str(), "fonts loaded");
                return Ok(FontSet::from_family(family));
            }
            Err(e) => {
                warn!(family = family.family.as_str(), error = %e, "font family unavailable");
            }
        }
    }

    Err(DocError::FontsUnavailable {
        families: families.iter().map(|f| f.family.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryHost;
    use crate::stylesheet::default_font_families;
    use futures::executor::block_on;

    fn host_with_fonts(fonts: &[(&str, &str)]) -> MemoryHost {
        let fonts: Vec<String> = fonts
            .iter()
            .map(|(family, style)| format!(r#"{{"family": "{}", "style": "{}"}}"#, family, style))
            .collect();
        MemoryHost::from_json(&format!(r#"{{"nodes": [], "fonts": [{}]}}"#, fonts.join(",")))
            .unwrap()
    }

    #[test]
    fn test_first_family_wins() {
        let host = MemoryHost::from_json(r#"{"nodes": []}"#).unwrap();
        let fonts = block_on(load_font_set(&host, &default_font_families())).unwrap();
        assert_eq!(fonts.family(), "Manrope");
        assert_eq!(fonts.subheading, FontName::new("Manrope", "SemiBold"));
    }

    #[test]
    fn test_partial_family_falls_through() {
        // Manrope is missing its Medium style
        let host = host_with_fonts(&[
            ("Manrope", "Bold"),
            ("Manrope", "SemiBold"),
            ("Manrope", "Regular"),
            ("Roboto", "Bold"),
            ("Roboto", "Medium"),
            ("Roboto", "Regular"),
        ]);
        let fonts = block_on(load_font_set(&host, &default_font_families())).unwrap();
        assert_eq!(fonts.family(), "Roboto");
        assert_eq!(fonts.bold, FontName::new("Roboto", "Medium"));
    }

    #[test]
    fn test_exhausted_families() {
        let host = host_with_fonts(&[("Comic Sans", "Regular")]);
        let err = block_on(load_font_set(&host, &default_font_families())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load fonts. Please ensure Manrope, Inter, or Roboto is available."
        );
    }
}
