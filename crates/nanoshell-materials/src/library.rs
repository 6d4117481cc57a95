//! Named catalogue of analysis materials.
//!
//! Cores and host media come from the dielectric shelf, shells from the
//! metal shelf. Names are unique per shelf and matched case-insensitively.

use std::collections::BTreeMap;

use crate::dielectric::ConstantDielectric;
use crate::drude::DrudeMaterial;
use crate::provider::MaterialError;

/// In-memory material catalogue.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    dielectrics: BTreeMap<String, ConstantDielectric>,
    metals: BTreeMap<String, DrudeMaterial>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl MaterialLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library preloaded with the built-in dielectrics and metals.
    pub fn with_builtins() -> Self {
        let mut library = Self::new();
        library.dielectrics = ConstantDielectric::builtins()
            .into_iter()
            .map(|m| (key(&m.name), m))
            .collect();
        library.metals = DrudeMaterial::builtins()
            .into_iter()
            .map(|m| (key(&m.name), m))
            .collect();
        library
    }

    /// Register a core/medium dielectric. Fails on an invalid permittivity
    /// or if the name is already taken.
    pub fn insert_dielectric(&mut self, material: ConstantDielectric) -> Result<(), MaterialError> {
        material.validate()?;
        let k = key(&material.name);
        if k.is_empty() {
            return Err(MaterialError::InvalidParameter {
                material: material.name,
                reason: "name must not be empty".into(),
            });
        }
        if self.dielectrics.contains_key(&k) {
            return Err(MaterialError::Duplicate(material.name));
        }
        log::debug!("Registered dielectric '{}' (ε={})", material.name, material.permittivity);
        self.dielectrics.insert(k, material);
        Ok(())
    }

    /// Register a shell metal. Fails on invalid Drude parameters or if the
    /// name is already taken.
    pub fn insert_metal(&mut self, material: DrudeMaterial) -> Result<(), MaterialError> {
        material.validate()?;
        let k = key(&material.name);
        if k.is_empty() {
            return Err(MaterialError::InvalidParameter {
                material: material.name,
                reason: "name must not be empty".into(),
            });
        }
        if self.metals.contains_key(&k) {
            return Err(MaterialError::Duplicate(material.name));
        }
        log::debug!("Registered metal '{}' ({:?})", material.name, material.parameters);
        self.metals.insert(k, material);
        Ok(())
    }

    pub fn dielectric(&self, name: &str) -> Result<&ConstantDielectric, MaterialError> {
        self.dielectrics
            .get(&key(name))
            .ok_or_else(|| MaterialError::NotFound(format!("dielectric '{name}'")))
    }

    pub fn metal(&self, name: &str) -> Result<&DrudeMaterial, MaterialError> {
        self.metals
            .get(&key(name))
            .ok_or_else(|| MaterialError::NotFound(format!("shell metal '{name}'")))
    }

    /// Dielectrics sorted by name.
    pub fn dielectrics(&self) -> impl Iterator<Item = &ConstantDielectric> {
        self.dielectrics.values()
    }

    /// Metals sorted by name.
    pub fn metals(&self) -> impl Iterator<Item = &DrudeMaterial> {
        self.metals.values()
    }

    pub fn len(&self) -> usize {
        self.dielectrics.len() + self.metals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
