//! Size groups
//!
//! Each dataset folder belongs to one size group, and the group fixes the
//! brick used to dilate the ink mask. Bigger, more widely spaced writing
//! needs a bigger brick before its strokes fuse into word blobs.
//!
//! | Group    | Brick   |
//! |----------|---------|
//! | `esmall` | 4 x 4   |
//! | `small`  | 8 x 8   |
//! | `normal` | 15 x 15 |
//! | `large`  | 30 x 30 |
//!
//! Folders not listed anywhere fall back to `normal`.

use crate::{RecogError, RecogResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Handwriting size group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeGroup {
    /// Extra small writing
    ESmall,
    /// Small writing
    Small,
    /// Default group
    #[default]
    Normal,
    /// Large writing
    Large,
}

/// Brick size per group, smallest first
const SEL_SIZES: [(u32, u32); 4] = [(4, 4), (8, 8), (15, 15), (30, 30)];

impl SizeGroup {
    /// Every group, smallest brick first
    pub const ALL: [SizeGroup; 4] = [
        SizeGroup::ESmall,
        SizeGroup::Small,
        SizeGroup::Normal,
        SizeGroup::Large,
    ];

    fn index(self) -> usize {
        match self {
            Self::ESmall => 0,
            Self::Small => 1,
            Self::Normal => 2,
            Self::Large => 3,
        }
    }

    /// Dilation brick `(width, height)` for this group
    pub fn sel_size(self) -> (u32, u32) {
        SEL_SIZES[self.index()]
    }

    /// Lowercase group name as used in configuration
    pub fn name(self) -> &'static str {
        match self {
            Self::ESmall => "esmall",
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeGroup {
    type Err = RecogError;

    fn from_str(s: &str) -> RecogResult<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecogError::UnknownGroup(s.to_string()))
    }
}

/// Folder names listed per explicit group
///
/// This is the configuration form; `normal` has no list because it is the
/// fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupMembership {
    pub small: Vec<String>,
    pub large: Vec<String>,
    pub esmall: Vec<String>,
}

impl GroupMembership {
    /// Lists in lookup precedence order
    fn lists(&self) -> [(SizeGroup, &[String]); 3] {
        [
            (SizeGroup::Small, self.small.as_slice()),
            (SizeGroup::Large, self.large.as_slice()),
            (SizeGroup::ESmall, self.esmall.as_slice()),
        ]
    }

    /// Check that no folder appears under two groups
    pub fn validate(&self) -> RecogResult<()> {
        GroupTable::try_from(self).map(|_| ())
    }
}

/// Folder name to size group lookup
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    folders: HashMap<String, SizeGroup>,
}

impl GroupTable {
    /// Create an empty table; every folder is `normal`
    pub fn new() -> Self {
        Self::default()
    }

    /// Group for `folder`, falling back to [`SizeGroup::Normal`]
    pub fn group_for(&self, folder: &str) -> SizeGroup {
        self.folders.get(folder).copied().unwrap_or_default()
    }

    /// Brick size for `folder`
    pub fn sel_size_for(&self, folder: &str) -> (u32, u32) {
        self.group_for(folder).sel_size()
    }

    /// Number of explicitly assigned folders
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// True if no folder is explicitly assigned
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl TryFrom<&GroupMembership> for GroupTable {
    type Error = RecogError;

    /// Build the lookup, rejecting folders listed under two groups.
    ///
    /// Repeating a folder within the same group is harmless.
    fn try_from(membership: &GroupMembership) -> RecogResult<Self> {
        let mut folders: HashMap<String, SizeGroup> = HashMap::new();
        for (group, names) in membership.lists() {
            for name in names {
                match folders.get(name.as_str()).copied() {
                    Some(prev) if prev != group => {
                        return Err(RecogError::DuplicateFolder {
                            folder: name.clone(),
                            first: prev.name(),
                            second: group.name(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        folders.insert(name.clone(), group);
                    }
                }
            }
        }
        Ok(Self { folders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership() -> GroupMembership {
        GroupMembership {
            small: vec!["alice".into(), "bob".into()],
            large: vec!["carol".into()],
            esmall: vec!["dave".into()],
        }
    }

    #[test]
    fn test_size_table() {
        assert_eq!(SizeGroup::Small.sel_size(), (8, 8));
        assert_eq!(SizeGroup::Large.sel_size(), (30, 30));
        assert_eq!(SizeGroup::ESmall.sel_size(), (4, 4));
        assert_eq!(SizeGroup::Normal.sel_size(), (15, 15));
    }

    #[test]
    fn test_lookup_and_fallback() {
        let table = GroupTable::try_from(&membership()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.group_for("bob"), SizeGroup::Small);
        assert_eq!(table.group_for("carol"), SizeGroup::Large);
        assert_eq!(table.group_for("dave"), SizeGroup::ESmall);
        assert_eq!(table.group_for("erin"), SizeGroup::Normal);
        assert_eq!(table.sel_size_for("erin"), (15, 15));
        // Lookup is exact
        assert_eq!(table.group_for("Alice"), SizeGroup::Normal);
        assert_eq!(GroupTable::new().sel_size_for("alice"), (15, 15));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut m = membership();
        m.esmall.push("alice".into());
        match GroupTable::try_from(&m) {
            Err(RecogError::DuplicateFolder {
                folder,
                first,
                second,
            }) => {
                assert_eq!(folder, "alice");
                assert_eq!((first, second), ("small", "esmall"));
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert!(m.validate().is_err());

        let mut repeated = membership();
        repeated.small.push("alice".into());
        assert!(repeated.validate().is_ok());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("ESMALL".parse::<SizeGroup>().unwrap(), SizeGroup::ESmall);
        assert_eq!("normal".parse::<SizeGroup>().unwrap(), SizeGroup::Normal);
        assert!("medium".parse::<SizeGroup>().is_err());
        for g in SizeGroup::ALL {
            assert_eq!(g.to_string().parse::<SizeGroup>().unwrap(), g);
        }
    }

    #[test]
    fn test_membership_from_toml() {
        let m: GroupMembership = toml::from_str("small = [\"a\"]\nlarge = [\"b\"]\n").unwrap();
        assert_eq!(m.small, vec!["a".to_string()]);
        assert!(m.esmall.is_empty());
    }
}
