//! Translation of user-facing option names into service codes

use crate::domain::DomainError;

const AUDIO_FORMATS: &[(&str, u32)] = &[
    ("deep_dive", 1),
    ("brief", 2),
    ("critique", 3),
    ("debate", 4),
];

const AUDIO_LENGTHS: &[(&str, u32)] = &[("short", 1), ("default", 2), ("long", 3)];

/// Maps option names such as `deep-dive` or `long` to the numeric codes the
/// notebook service expects.
///
/// Lookup is case-insensitive and treats `-` and `_` as the same character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeMapper;

impl CodeMapper {
    pub fn audio_format_code(&self, name: &str) -> Result<u32, DomainError> {
        lookup("audio format", AUDIO_FORMATS, name)
    }

    pub fn audio_length_code(&self, name: &str) -> Result<u32, DomainError> {
        lookup("audio length", AUDIO_LENGTHS, name)
    }

    pub fn audio_formats(&self) -> impl Iterator<Item = &'static str> {
        AUDIO_FORMATS.iter().map(|(name, _)| *name)
    }

    pub fn audio_lengths(&self) -> impl Iterator<Item = &'static str> {
        AUDIO_LENGTHS.iter().map(|(name, _)| *name)
    }
}

fn canonical(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

fn lookup(option: &'static str, table: &[(&str, u32)], name: &str) -> Result<u32, DomainError> {
    let key = canonical(name);
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, code)| *code)
        .ok_or_else(|| DomainError::UnknownOption {
            option,
            value: name.to_string(),
            expected: table
                .iter()
                .map(|(candidate, _)| *candidate)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("deep_dive", 1)]
    #[case("deep-dive", 1)]
    #[case("Brief", 2)]
    #[case("critique", 3)]
    #[case(" debate ", 4)]
    fn given_known_format_when_mapping_then_returns_code(#[case] name: &str, #[case] code: u32) {
        assert_eq!(CodeMapper.audio_format_code(name).unwrap(), code);
    }

    #[rstest]
    #[case("short", 1)]
    #[case("default", 2)]
    #[case("LONG", 3)]
    fn given_known_length_when_mapping_then_returns_code(#[case] name: &str, #[case] code: u32) {
        assert_eq!(CodeMapper.audio_length_code(name).unwrap(), code);
    }

    #[test]
    fn given_unknown_format_when_mapping_then_error_lists_choices() {
        let err = CodeMapper.audio_format_code("podcast").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("podcast"));
        assert!(msg.contains("deep_dive, brief, critique, debate"));
    }

    #[test]
    fn given_mapper_when_listing_then_every_name_maps() {
        let mapper = CodeMapper;
        for name in mapper.audio_formats() {
            assert!(mapper.audio_format_code(name).is_ok());
        }
        for name in mapper.audio_lengths() {
            assert!(mapper.audio_length_code(name).is_ok());
        }
    }
}
