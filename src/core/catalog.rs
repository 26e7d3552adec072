use std::collections::HashSet;
use std::sync::Arc;
use crate::core::errors::CatalogError;
use crate::models::ProfileRecord;

/// Read-only profile catalog shared by every worker
///
/// Built once at startup; cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Arc<[ProfileRecord]>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(profiles: Vec<ProfileRecord>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id) {
                return Err(CatalogError::DuplicateId(profile.id));
            }
        }

        Ok(Self {
            profiles: profiles.into(),
        })
    }

    /// The four demo architects shipped with the service
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles().into(),
        }
    }

    pub fn profiles(&self) -> &[ProfileRecord] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(id: u32, name: &str, tags: &[&str], highlight: &str) -> ProfileRecord {
    ProfileRecord {
        id,
        name: name.to_string(),
        style_tags: tags.iter().map(|t| t.to_string()).collect(),
        portfolio_highlight: highlight.to_string(),
    }
}

pub fn builtin_profiles() -> Vec<ProfileRecord> {
    vec![
        profile(1, "Alice Sterling", &["Modern", "Minimalist", "Sustainable"], "Glass House in the Hills"),
        profile(2, "Bob Builder", &["Classic", "Colonial", "Brick"], "Heritage Manor Restoration"),
        profile(3, "Charlie Design", &["Industrial", "Urban", "Loft"], "Downtown Warehouse Conversion"),
        profile(4, "Dana Eco", &["Eco-friendly", "Bamboo", "Modern"], "Green Roof Complex"),
    ]
}
