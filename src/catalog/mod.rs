//! Immutable, arena-backed geographic catalog.
//!
//! Each level lives in its own flat vector in declaration order. A node knows
//! its parent index and the contiguous range of its children in the next
//! level, so the communes of a whole department form a single slice.
//!
//! Codes are only unique among siblings. Every lookup by code is scoped by
//! the full ancestor chain and scans the parent's children in order, so a
//! duplicated sibling code resolves to the first declared sibling.

pub mod builtin;
pub mod source;

use crate::domain::model::{ArrondissementId, CommuneId, DepartmentId, Level, Place, RegionId};
use crate::utils::error::{GeoError, Result};
use source::CatalogSource;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::from_source(builtin::source());
    tracing::debug!(
        "Embedded {} catalog ready: {:?}",
        catalog.country(),
        catalog.stats()
    );
    catalog
});

/// The embedded catalog, built on first use and kept for the process lifetime.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[derive(Debug, Clone)]
struct Node {
    key: Option<String>,
    code: String,
    name: String,
    parent: Option<u32>,
    children: Range<usize>,
}

impl Node {
    fn place(&self) -> Place<'_> {
        Place {
            code: &self.code,
            name: &self.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct CatalogStats {
    pub regions: usize,
    pub departments: usize,
    pub arrondissements: usize,
    pub communes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(CatalogFormat::Json),
            "toml" => Ok(CatalogFormat::Toml),
            other => Err(GeoError::InvalidConfigValueError {
                field: "catalog.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported catalog format. Valid formats: json, toml".to_string(),
            }),
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        CatalogFormat::parse(ext).ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    country: String,
    regions: Vec<Node>,
    departments: Vec<Node>,
    arrondissements: Vec<Node>,
    communes: Vec<Node>,
}

impl Catalog {
    /// Flatten a nested source into the arena, keeping declaration order.
    pub fn from_source(source: CatalogSource) -> Self {
        let mut catalog = Catalog {
            country: source.country,
            ..Default::default()
        };

        for region in source.regions {
            let region_idx = catalog.regions.len() as u32;
            let dept_start = catalog.departments.len();

            for department in region.departments {
                let dept_idx = catalog.departments.len() as u32;
                let arr_start = catalog.arrondissements.len();

                for arrondissement in department.arrondissements {
                    let arr_idx = catalog.arrondissements.len() as u32;
                    let commune_start = catalog.communes.len();

                    for commune in arrondissement.communes {
                        catalog.communes.push(Node {
                            key: None,
                            code: commune.code,
                            name: commune.name,
                            parent: Some(arr_idx),
                            children: 0..0,
                        });
                    }

                    catalog.arrondissements.push(Node {
                        key: None,
                        code: arrondissement.code,
                        name: arrondissement.name,
                        parent: Some(dept_idx),
                        children: commune_start..catalog.communes.len(),
                    });
                }

                catalog.departments.push(Node {
                    key: department.key,
                    code: department.code,
                    name: department.name,
                    parent: Some(region_idx),
                    children: arr_start..catalog.arrondissements.len(),
                });
            }

            catalog.regions.push(Node {
                key: None,
                code: region.code,
                name: region.name,
                parent: None,
                children: dept_start..catalog.departments.len(),
            });
        }

        catalog
    }

    /// 從 JSON 字串載入目錄
    pub fn from_json_str(content: &str) -> Result<Self> {
        let source: CatalogSource = serde_json::from_str(content)?;
        Self::checked(source)
    }

    /// 從 TOML 字串載入目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let source: CatalogSource = toml::from_str(content)?;
        Self::checked(source)
    }

    /// Load a catalog file, picking the format from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path).ok_or_else(|| GeoError::ConfigError {
            message: format!(
                "Cannot infer catalog format from '{}'; use a .json or .toml file or set catalog.format",
                path.display()
            ),
        })?;
        Self::from_file_with_format(path, format)
    }

    pub fn from_file_with_format<P: AsRef<Path>>(path: P, format: CatalogFormat) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = match format {
            CatalogFormat::Json => Self::from_json_str(&content)?,
            CatalogFormat::Toml => Self::from_toml_str(&content)?,
        };
        tracing::info!(
            "Loaded catalog '{}' from {}: {:?}",
            catalog.country(),
            path.display(),
            catalog.stats()
        );
        Ok(catalog)
    }

    fn checked(source: CatalogSource) -> Result<Self> {
        if source.regions.is_empty() {
            return Err(GeoError::CatalogError {
                message: "catalog contains no regions".to_string(),
            });
        }
        Ok(Self::from_source(source))
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            regions: self.regions.len(),
            departments: self.departments.len(),
            arrondissements: self.arrondissements.len(),
            communes: self.communes.len(),
        }
    }

    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.regions.len() as u32).map(RegionId)
    }

    pub fn region(&self, code: &str) -> Option<RegionId> {
        find_code(&self.regions, 0..self.regions.len(), code).map(RegionId)
    }

    pub fn department(&self, region: &str, code: &str) -> Option<DepartmentId> {
        let region = self.region(region)?;
        self.department_in(region, code)
    }

    pub fn department_in(&self, region: RegionId, code: &str) -> Option<DepartmentId> {
        let children = self.regions[region.idx()].children.clone();
        find_code(&self.departments, children, code).map(DepartmentId)
    }

    /// Look a department up by its storage key rather than its display code.
    pub fn department_by_key(&self, region: &str, key: &str) -> Option<DepartmentId> {
        let region = self.region(region)?;
        self.regions[region.idx()]
            .children
            .clone()
            .find(|&i| self.departments[i].key.as_deref() == Some(key))
            .map(|i| DepartmentId(i as u32))
    }

    pub fn arrondissement(
        &self,
        region: &str,
        department: &str,
        code: &str,
    ) -> Option<ArrondissementId> {
        let department = self.department(region, department)?;
        self.arrondissement_in(department, code)
    }

    pub fn arrondissement_in(&self, department: DepartmentId, code: &str) -> Option<ArrondissementId> {
        let children = self.departments[department.idx()].children.clone();
        find_code(&self.arrondissements, children, code).map(ArrondissementId)
    }

    pub fn commune(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        code: &str,
    ) -> Option<CommuneId> {
        let arrondissement = self.arrondissement(region, department, arrondissement)?;
        self.commune_in(arrondissement, code)
    }

    pub fn commune_in(&self, arrondissement: ArrondissementId, code: &str) -> Option<CommuneId> {
        let children = self.arrondissements[arrondissement.idx()].children.clone();
        find_code(&self.communes, children, code).map(CommuneId)
    }

    pub fn region_place(&self, id: RegionId) -> Place<'_> {
        self.regions[id.idx()].place()
    }

    pub fn department_place(&self, id: DepartmentId) -> Place<'_> {
        self.departments[id.idx()].place()
    }

    pub fn department_key(&self, id: DepartmentId) -> Option<&str> {
        self.departments[id.idx()].key.as_deref()
    }

    pub fn arrondissement_place(&self, id: ArrondissementId) -> Place<'_> {
        self.arrondissements[id.idx()].place()
    }

    pub fn commune_place(&self, id: CommuneId) -> Place<'_> {
        self.communes[id.idx()].place()
    }

    pub fn department_ids(&self, region: RegionId) -> impl Iterator<Item = DepartmentId> {
        ids(&self.regions[region.idx()].children).map(DepartmentId)
    }

    pub fn arrondissement_ids(&self, department: DepartmentId) -> impl Iterator<Item = ArrondissementId> {
        ids(&self.departments[department.idx()].children).map(ArrondissementId)
    }

    pub fn commune_ids(&self, arrondissement: ArrondissementId) -> impl Iterator<Item = CommuneId> {
        ids(&self.arrondissements[arrondissement.idx()].children).map(CommuneId)
    }

    pub fn region_of(&self, department: DepartmentId) -> RegionId {
        RegionId(self.departments[department.idx()].parent.unwrap_or_default())
    }

    pub fn department_of(&self, arrondissement: ArrondissementId) -> DepartmentId {
        DepartmentId(self.arrondissements[arrondissement.idx()].parent.unwrap_or_default())
    }

    pub fn arrondissement_of(&self, commune: CommuneId) -> ArrondissementId {
        ArrondissementId(self.communes[commune.idx()].parent.unwrap_or_default())
    }

    /// Places of a single level, in declaration order.
    pub(crate) fn places(&self, level: Level, range: Range<usize>) -> Vec<Place<'_>> {
        let nodes = match level {
            Level::Region => &self.regions,
            Level::Department => &self.departments,
            Level::Arrondissement => &self.arrondissements,
            Level::Commune => &self.communes,
        };
        nodes[range].iter().map(Node::place).collect()
    }

    pub(crate) fn region_children(&self, id: RegionId) -> Range<usize> {
        self.regions[id.idx()].children.clone()
    }

    pub(crate) fn department_children(&self, id: DepartmentId) -> Range<usize> {
        self.departments[id.idx()].children.clone()
    }

    pub(crate) fn arrondissement_children(&self, id: ArrondissementId) -> Range<usize> {
        self.arrondissements[id.idx()].children.clone()
    }

    /// All communes below a department. The arena keeps them contiguous.
    pub(crate) fn department_communes(&self, id: DepartmentId) -> Range<usize> {
        let arrs = self.department_children(id);
        if arrs.is_empty() {
            return 0..0;
        }
        self.arrondissements[arrs.start].children.start..self.arrondissements[arrs.end - 1].children.end
    }
}

fn find_code(nodes: &[Node], scope: Range<usize>, code: &str) -> Option<u32> {
    scope.into_iter().find(|&i| nodes[i].code == code).map(|i| i as u32)
}

fn ids(range: &Range<usize>) -> impl Iterator<Item = u32> {
    (range.start as u32)..(range.end as u32)
}
