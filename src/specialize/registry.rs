use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

// used to keep the one-to-one mapping between generated names and identities
use bimap::BiMap;
use lazy_static::lazy_static;
use regex::Regex;
use seahash::SeaHasher;
use tracing::debug;

use crate::error::{Result, TristateError};
use crate::specialize::{parse_signature, Identity, Signature, Specialized};

pub type IdentityHasher = BuildHasherDefault<SeaHasher>;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

// ------------- Specialization -------------
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialization {
    identity: Identity,
    signature: Signature,
    name: String,
}

impl Specialization {
    pub fn new(signature: Signature) -> Result<Self> {
        if signature.is_concrete() {
            return Err(TristateError::Specialization(format!(
                "'{}' has no type arguments",
                signature
            )));
        }
        if let Some(bad) = signature.names().into_iter().find(|n| !IDENTIFIER.is_match(n)) {
            return Err(TristateError::Specialization(format!(
                "'{}' is not a valid type name",
                bad
            )));
        }
        let identity = Identity::of(&signature);
        let name = identity.identifier(signature.name());
        Ok(Self {
            identity,
            signature,
            name,
        })
    }
    pub fn identity(&self) -> Identity {
        self.identity
    }
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
    pub fn template(&self) -> &str {
        self.signature.name()
    }
    /// The generated identifier, `_<Template>_<HEX>`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ------------- Registry -------------
/// Keeps one record per specialization; asking again for the same template
/// and arguments gives back the record already kept.
#[derive(Debug, Default)]
pub struct Registry {
    kept: HashMap<Identity, Arc<Specialization>, IdentityHasher>,
    names: BiMap<String, Identity>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
            names: BiMap::new(),
        }
    }
    /// Returns the kept record and whether it had been kept before.
    pub fn keep(&mut self, signature: Signature) -> Result<(Arc<Specialization>, bool)> {
        let identity = Identity::of(&signature);
        match self.kept.entry(identity) {
            Entry::Occupied(e) => Ok((Arc::clone(e.get()), true)),
            Entry::Vacant(e) => {
                let specialization = Arc::new(Specialization::new(signature)?);
                debug!(name = specialization.name(), signature = %specialization.signature(), "kept specialization");
                self.names.insert(specialization.name().to_string(), identity);
                Ok((Arc::clone(e.insert(specialization)), false))
            }
        }
    }
    pub fn construct(&mut self, template: &str, args: Vec<Signature>) -> Result<Arc<Specialization>> {
        self.keep(Signature::of(template, args)).map(|(kept, _)| kept)
    }
    /// Builds or retrieves the specialization a textual descriptor names.
    pub fn resolve(&mut self, descriptor: &str) -> Result<Arc<Specialization>> {
        let signature = parse_signature(descriptor)?;
        self.keep(signature).map(|(kept, _)| kept)
    }
    pub fn register<S: Specialized>(&mut self) -> Result<Arc<Specialization>> {
        self.keep(S::specialized_signature()).map(|(kept, _)| kept)
    }
    /// A typed wrapper over `base`, recording its specialization on the way.
    pub fn wrap<S: Specialized>(&mut self, base: Option<S::Base>) -> Result<S> {
        self.register::<S>()?;
        Ok(S::from_base(base))
    }
    pub fn by_identity(&self, identity: &Identity) -> Option<Arc<Specialization>> {
        self.kept.get(identity).map(Arc::clone)
    }
    pub fn by_name(&self, name: &str) -> Option<Arc<Specialization>> {
        self.names
            .get_by_left(name)
            .and_then(|identity| self.by_identity(identity))
    }
    pub fn name_of(&self, identity: &Identity) -> Option<&str> {
        self.names.get_by_right(identity).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Specialization>> {
        self.kept.values()
    }
}
