use std::fmt;
use std::fs::Metadata;

/// DOS-style attribute flags of a filesystem entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryAttributes {
    pub read_only: bool,
    pub archive: bool,
    pub hidden: bool,
    pub system: bool,
}

impl EntryAttributes {
    #[cfg(windows)]
    pub fn from_metadata(_name: &str, md: &Metadata) -> Self {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_READONLY: u32 = 0x1;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;
        const FILE_ATTRIBUTE_ARCHIVE: u32 = 0x20;

        let bits = md.file_attributes();
        Self {
            read_only: bits & FILE_ATTRIBUTE_READONLY != 0,
            archive: bits & FILE_ATTRIBUTE_ARCHIVE != 0,
            hidden: bits & FILE_ATTRIBUTE_HIDDEN != 0,
            system: bits & FILE_ATTRIBUTE_SYSTEM != 0,
        }
    }

    // No archive or system bits outside Windows; dotfiles count as hidden.
    #[cfg(not(windows))]
    pub fn from_metadata(name: &str, md: &Metadata) -> Self {
        Self {
            read_only: md.permissions().readonly(),
            archive: false,
            hidden: name.starts_with('.'),
            system: false,
        }
    }

    /// Four-character code in `rahs` order, `-` for each cleared flag.
    pub fn code(&self) -> String {
        attribute_code(self)
    }
}

pub fn attribute_code(attrs: &EntryAttributes) -> String {
    let flag = |set: bool, c: char| if set { c } else { '-' };
    [
        flag(attrs.read_only, 'r'),
        flag(attrs.archive, 'a'),
        flag(attrs.hidden, 'h'),
        flag(attrs.system, 's'),
    ]
    .iter()
    .collect()
}

impl fmt::Display for EntryAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&attribute_code(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_and_hidden() {
        let attrs = EntryAttributes {
            read_only: true,
            hidden: true,
            ..Default::default()
        };
        assert_eq!(attrs.code(), "r-h-");
    }

    #[test]
    fn all_and_none() {
        assert_eq!(EntryAttributes::default().to_string(), "----");
        let all = EntryAttributes {
            read_only: true,
            archive: true,
            hidden: true,
            system: true,
        };
        assert_eq!(attribute_code(&all), "rahs");
    }

    #[cfg(unix)]
    #[test]
    fn dotfile_is_hidden_on_unix() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join(".profile");
        std::fs::write(&p, b"x").unwrap();
        let md = std::fs::metadata(&p).unwrap();
        let attrs = EntryAttributes::from_metadata(".profile", &md);
        assert!(attrs.hidden);
        assert!(!attrs.archive);
        assert!(!attrs.system);
    }
}
