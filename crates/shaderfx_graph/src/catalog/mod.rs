// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node type catalog.
//!
//! Maps human-readable node type names to the host's numeric ids. Ids differ
//! between the two shader network flavors, and a descriptor only works in a
//! network of its own flavor. The built-in tables in [`sfx`] and [`pbs`] can
//! be replaced by a regenerated catalog loaded from RON.

pub mod pbs;
pub mod sfx;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Fixed middle segment of every group identifier
pub const GROUP_LIBRARY: &str = "Hw Shader Nodes";

/// Shader network flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    /// Vanilla ShaderFX network
    ShaderFx,
    /// Stingray PBS network
    StingrayPbs,
}

impl Flavor {
    /// Shading node type the host instantiates for this flavor
    pub fn shading_node_type(self) -> &'static str {
        match self {
            Self::ShaderFx => "ShaderfxShader",
            Self::StingrayPbs => "StingrayPBS",
        }
    }

    /// Short name used on the command line and in catalog files
    pub fn short_name(self) -> &'static str {
        match self {
            Self::ShaderFx => "sfx",
            Self::StingrayPbs => "pbs",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shading_node_type())
    }
}

/// A named node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Display name, as reported by the node's class name
    pub name: Cow<'static, str>,
    /// Numeric type id
    pub id: i32,
    /// Group category for types instantiated as groups
    #[serde(default)]
    pub group: Option<Cow<'static, str>>,
    /// Flavor the id belongs to
    pub flavor: Flavor,
}

impl TypeDescriptor {
    /// Descriptor for a type created by numeric id
    pub const fn plain(name: &'static str, id: i32, flavor: Flavor) -> Self {
        Self {
            name: Cow::Borrowed(name),
            id,
            group: None,
            flavor,
        }
    }

    /// Descriptor for a type created as a group in `category`
    pub const fn group(name: &'static str, id: i32, category: &'static str, flavor: Flavor) -> Self {
        Self {
            name: Cow::Borrowed(name),
            id,
            group: Some(Cow::Borrowed(category)),
            flavor,
        }
    }

    /// Whether nodes of this type are groups
    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }

    /// How the host is asked to create a node of this type
    pub fn create_target(&self) -> CreateTarget {
        match &self.group {
            Some(category) => CreateTarget::Group {
                type_name: self.name.to_string(),
                category: category.to_string(),
            },
            None => CreateTarget::Plain(self.id),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.name, self.id)
    }
}

/// Creation request for a node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateTarget {
    /// Created from its numeric id
    Plain(i32),
    /// Created as a group from a composite identifier
    Group {
        /// Display name of the type
        type_name: String,
        /// Group category
        category: String,
    },
}

impl CreateTarget {
    /// Composite group identifier, `None` for plain types
    pub fn identifier(&self) -> Option<String> {
        match self {
            Self::Plain(_) => None,
            Self::Group {
                type_name,
                category,
            } => Some(group_identifier(type_name, category)),
        }
    }
}

/// Composite identifier the host creates a group from
pub fn group_identifier(type_name: &str, category: &str) -> String {
    format!("{type_name}-{GROUP_LIBRARY}-{category}.grp")
}

/// Split a composite group identifier into `(type name, category)`
pub fn parse_group_identifier(identifier: &str) -> Option<(&str, &str)> {
    let stem = identifier.strip_suffix(".grp")?;
    let separator = format!("-{GROUP_LIBRARY}-");
    let at = stem.find(&separator)?;
    Some((&stem[..at], &stem[at + separator.len()..]))
}

/// Node type table for one flavor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Flavor every descriptor belongs to
    pub flavor: Flavor,
    /// Descriptors in declaration order
    pub types: Vec<TypeDescriptor>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            types: Vec::new(),
        }
    }

    /// The built-in table for a flavor
    pub fn builtin(flavor: Flavor) -> Self {
        let types = match flavor {
            Flavor::ShaderFx => sfx::ALL,
            Flavor::StingrayPbs => pbs::ALL,
        };
        Self {
            flavor,
            types: types.to_vec(),
        }
    }

    /// Add a descriptor
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.push(descriptor);
    }

    /// Descriptor by display name
    pub fn by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Descriptor by numeric id
    pub fn by_id(&self, id: i32) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.id == id)
    }

    /// All descriptors
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, config)
    }

    /// Deserialize from RON
    pub fn from_ron(ron_str: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(ron_str)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save to a catalog file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = self
            .to_ron()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_identifier() {
        let target = sfx::TEXTURE_MAP.create_target();
        assert_eq!(
            target.identifier().as_deref(),
            Some("Texture Map-Hw Shader Nodes-Textures.grp")
        );
        assert_eq!(sfx::COLOR.create_target(), CreateTarget::Plain(20011));
        assert_eq!(sfx::COLOR.create_target().identifier(), None);
    }

    #[test]
    fn test_parse_group_identifier() {
        let id = sfx::CAMERA_VECTOR.create_target().identifier().unwrap();
        assert_eq!(
            parse_group_identifier(&id),
            Some(("Camera Vector", "Inputs Common"))
        );
        assert_eq!(parse_group_identifier("Texture Map.grp"), None);
        assert_eq!(parse_group_identifier("Texture Map-Hw Shader Nodes-Textures"), None);
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin(Flavor::StingrayPbs);
        assert_eq!(catalog.by_name("Material Variable").map(|t| t.id), Some(20185));
        assert_eq!(catalog.by_id(20186).map(|t| t.name.as_ref()), Some("Multiply"));
        assert!(catalog.iter().all(|t| t.flavor == Flavor::StingrayPbs && !t.is_group()));
        assert!(Catalog::builtin(Flavor::ShaderFx).iter().any(TypeDescriptor::is_group));
    }

    #[test]
    fn test_flavors_disagree_on_ids() {
        let sfx = Catalog::builtin(Flavor::ShaderFx);
        let pbs = Catalog::builtin(Flavor::StingrayPbs);
        assert_ne!(
            sfx.by_name("Multiply").map(|t| t.id),
            pbs.by_name("Multiply").map(|t| t.id)
        );
    }

    #[test]
    fn test_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfx.ron");
        let catalog = Catalog::builtin(Flavor::ShaderFx);
        catalog.save(&path).unwrap();
        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.len(), catalog.len());
        assert_eq!(loaded.by_name("Texture Map"), catalog.by_name("Texture Map"));
    }
}
