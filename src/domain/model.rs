use serde::Serialize;
use std::fmt;

/// The four nested administrative levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Region,
    Department,
    Arrondissement,
    Commune,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Region,
        Level::Department,
        Level::Arrondissement,
        Level::Commune,
    ];

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Region => Some(Level::Department),
            Level::Department => Some(Level::Arrondissement),
            Level::Arrondissement => Some(Level::Commune),
            Level::Commune => None,
        }
    }

    pub fn depth(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Region => "region",
            Level::Department => "department",
            Level::Arrondissement => "arrondissement",
            Level::Commune => "commune",
        };
        f.write_str(label)
    }
}

/// A `{code, name}` entry as returned by every listing operation.
///
/// `name` may be empty in the source data; that only matters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Place<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            pub(crate) fn idx(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Index of a region inside its [`Catalog`](crate::Catalog).
    RegionId
);
arena_id!(
    /// Index of a department inside its [`Catalog`](crate::Catalog).
    DepartmentId
);
arena_id!(
    /// Index of an arrondissement inside its [`Catalog`](crate::Catalog).
    ArrondissementId
);
arena_id!(
    /// Index of a commune inside its [`Catalog`](crate::Catalog).
    CommuneId
);

/// A complete four-part location as captured by a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocationTuple {
    pub region: String,
    pub department: String,
    pub arrondissement: String,
    pub commune: String,
}

impl LocationTuple {
    pub fn new(
        region: impl Into<String>,
        department: impl Into<String>,
        arrondissement: impl Into<String>,
        commune: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            department: department.into(),
            arrondissement: arrondissement.into(),
            commune: commune.into(),
        }
    }
}

/// A location that passed validation, with each level's display entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation<'a> {
    pub region: Place<'a>,
    pub department: Place<'a>,
    pub arrondissement: Place<'a>,
    pub commune: Place<'a>,
}

impl fmt::Display for ResolvedLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.region.name, self.department.name, self.arrondissement.name, self.commune.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order_and_children() {
        assert!(Level::Region < Level::Commune);
        assert_eq!(Level::Region.child(), Some(Level::Department));
        assert_eq!(Level::Commune.child(), None);
        assert_eq!(Level::Arrondissement.depth(), 2);
        assert_eq!(Level::Arrondissement.to_string(), "arrondissement");
    }
}
