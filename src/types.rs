use serde::Deserialize;

/// A `css` / `js` section of an `.unglue` config.
///
/// The file allows either a flag or a list of entry files; once validated
/// only two shapes remain:
///
/// - `Disabled`: section missing, `null`, `false` or `[]`.
/// - `Entries`: the entry points, relative to the config folder, in
///   declaration order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Disabled,
    Entries(Vec<String>),
}

impl Section {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Section::Entries(_))
    }

    /// Entry files in declaration order (empty when disabled).
    pub fn entries(&self) -> &[String] {
        match self {
            Section::Disabled => &[],
            Section::Entries(entries) => entries,
        }
    }
}

/// Section value exactly as written in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawSection {
    Flag(bool),
    Entries(Vec<String>),
}

impl TryFrom<RawSection> for Section {
    type Error = String;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        match raw {
            RawSection::Flag(false) => Ok(Section::Disabled),
            RawSection::Flag(true) => Err(
                "`true` does not name any entry file; use a list such as [\"main.scss\"]"
                    .to_string(),
            ),
            RawSection::Entries(entries) if entries.is_empty() => Ok(Section::Disabled),
            RawSection::Entries(entries) => {
                if let Some(blank) = entries.iter().find(|e| e.trim().is_empty()) {
                    return Err(format!("entry file names must not be blank (got {blank:?})"));
                }
                Ok(Section::Entries(entries))
            }
        }
    }
}
