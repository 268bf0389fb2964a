//! Read-only analysis of component templates
//!
//! Everything here works on borrowed scene data and produces plain values;
//! the only mutation is revealing elements on a freshly created instance.

pub mod property;
pub mod style;
pub mod visual;
pub mod xref;

pub use property::{
    clean_property_name, default_variant, describe, format_variant_heading,
    non_variant_properties, PropertyInfo, PropertyKey,
};
pub use style::{resolve, rgb_to_hex, ResolvedStyle, StyleAttribute};
pub use visual::{extract_visual_properties, style_attributes};
pub use xref::{cross_reference, find_referencing_node, MatchStrategy};
