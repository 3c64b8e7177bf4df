use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// Domain category (business view).
///
/// On the wire the Spanish column names are kept: `nombre`, `descripcion`,
/// `productos`. `product_ids` is reported back but never written through the
/// category operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "productos", default)]
    pub product_ids: BTreeSet<i64>,
}

impl Categoria {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: Some(description.into()),
            product_ids: BTreeSet::new(),
        }
    }

    pub(crate) fn from_model(m: models::categoria::Model, product_ids: BTreeSet<i64>) -> Self {
        Self { id: Some(m.id), name: m.nombre, description: m.descripcion, product_ids }
    }
}

/// Partial update: each field is independently absent (`None`, leave as is)
/// or present (`Some(v)`, overwrite, `v` may be null). Unknown keys are dropped
/// by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoriaPatch {
    #[serde(rename = "nombre", default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(rename = "descripcion", default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

impl CategoriaPatch {
    pub fn is_empty(&self) -> bool { self.name.is_none() && self.description.is_none() }

    /// Overwrite the fields that are present; the rest of `target` is untouched.
    pub fn apply_to(self, target: &mut Categoria) {
        if let Some(name) = self.name { target.name = name; }
        if let Some(description) = self.description { target.description = description; }
    }
}

/// Columns a category page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriaSortField {
    Id,
    Name,
    Description,
}

impl CategoriaSortField {
    /// Accepts the wire names (`id`, `nombre`, `descripcion`).
    pub fn parse(property: &str) -> Result<Self, ServiceError> {
        match property {
            "id" => Ok(Self::Id),
            "nombre" => Ok(Self::Name),
            "descripcion" => Ok(Self::Description),
            other => Err(ServiceError::Validation(format!("cannot sort categories by `{other}`"))),
        }
    }
}
