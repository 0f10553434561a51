//! Parser Feature Flags
//!
//! Resolves the capability set for a language version and file kind. Version
//! tiers only ever add capabilities; file-kind overrides are applied last.

use crate::file_kinds::FileKind;
use crate::language_version::LanguageVersion;
use bitflags::bitflags;

bitflags! {
    /// Capabilities read by the parser and by passes that gate behavior on them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParserFeatureFlags: u32 {
        const MINIMIZED_BOOLEAN_TAG_HELPER_ATTRIBUTES = 1 << 0;
        const HTML_COMMENTS_IN_TAG_HELPERS = 1 << 1;
        const COMPONENT_FILE_KIND = 1 << 2;
        const CODE_IN_ALL_CODE_BLOCKS = 1 << 3;
        const USING_VARIABLE_DECLARATIONS = 1 << 4;
        const CONDITIONAL_DATA_DASH_ATTRIBUTES = 1 << 5;
        const CODE_IN_MARKUP_ATTRIBUTE_AREA = 1 << 6;
    }
}

/// Version thresholds in ascending order, each with the capabilities it adds.
const VERSION_TIERS: &[(LanguageVersion, ParserFeatureFlags)] = &[
    (
        LanguageVersion::VERSION_2_1,
        ParserFeatureFlags::MINIMIZED_BOOLEAN_TAG_HELPER_ATTRIBUTES
            .union(ParserFeatureFlags::HTML_COMMENTS_IN_TAG_HELPERS),
    ),
    (
        LanguageVersion::VERSION_3_0,
        ParserFeatureFlags::COMPONENT_FILE_KIND
            .union(ParserFeatureFlags::CODE_IN_ALL_CODE_BLOCKS)
            .union(ParserFeatureFlags::USING_VARIABLE_DECLARATIONS),
    ),
    (
        LanguageVersion::EXPERIMENTAL,
        ParserFeatureFlags::CONDITIONAL_DATA_DASH_ATTRIBUTES,
    ),
];

impl ParserFeatureFlags {
    pub fn create(version: LanguageVersion, file_kind: FileKind) -> Self {
        let mut flags = ParserFeatureFlags::CODE_IN_MARKUP_ATTRIBUTE_AREA;

        for (threshold, added) in VERSION_TIERS {
            if version >= *threshold {
                flags |= *added;
            }
        }

        if file_kind.is_component() {
            flags.insert(ParserFeatureFlags::CONDITIONAL_DATA_DASH_ATTRIBUTES);
            flags.remove(ParserFeatureFlags::CODE_IN_MARKUP_ATTRIBUTE_AREA);
        }

        flags
    }

    pub fn allow_minimized_boolean_tag_helper_attributes(&self) -> bool {
        self.contains(ParserFeatureFlags::MINIMIZED_BOOLEAN_TAG_HELPER_ATTRIBUTES)
    }

    pub fn allow_html_comments_in_tag_helpers(&self) -> bool {
        self.contains(ParserFeatureFlags::HTML_COMMENTS_IN_TAG_HELPERS)
    }

    pub fn allow_component_file_kind(&self) -> bool {
        self.contains(ParserFeatureFlags::COMPONENT_FILE_KIND)
    }

    pub fn allow_code_in_all_code_blocks(&self) -> bool {
        self.contains(ParserFeatureFlags::CODE_IN_ALL_CODE_BLOCKS)
    }

    pub fn allow_using_variable_declarations(&self) -> bool {
        self.contains(ParserFeatureFlags::USING_VARIABLE_DECLARATIONS)
    }

    pub fn allow_conditional_data_dash_attributes(&self) -> bool {
        self.contains(ParserFeatureFlags::CONDITIONAL_DATA_DASH_ATTRIBUTES)
    }

    pub fn allow_code_in_markup_attribute_area(&self) -> bool {
        self.contains(ParserFeatureFlags::CODE_IN_MARKUP_ATTRIBUTE_AREA)
    }
}
