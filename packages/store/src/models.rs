//! # Domain models for apartment listings
//!
//! These types mirror the JSON bodies exchanged with the apartments API and
//! are `Serialize + Deserialize` with the API's camelCase field names.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Apartment`] | A listing as returned by the server. The `id` is server-assigned and opaque. |
//! | [`NewApartment`] | The four editable fields sent when creating a listing. |
//!
//! Every string field defaults to `""` when the server omits it, so a sparse
//! record still sorts and filters (missing fields compare as the empty string).

use serde::{Deserialize, Serialize};

use crate::query::SortField;

/// An apartment listing as stored by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    #[serde(default)]
    pub id: String,
    /// Display name: "Sea View 3B"
    #[serde(default)]
    pub unit_name: String,
    #[serde(default)]
    pub unit_number: String,
    /// Project (compound) name
    #[serde(default)]
    pub project: String,
    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
}

impl Apartment {
    /// The raw (not case-folded) value of a sortable field.
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::UnitName => &self.unit_name,
            SortField::UnitNumber => &self.unit_number,
            SortField::Project => &self.project,
        }
    }

    /// Description for display, with a placeholder when empty.
    pub fn description_or_placeholder(&self) -> &str {
        if self.description.is_empty() {
            "No description provided."
        } else {
            &self.description
        }
    }
}

/// Fields submitted to create a new apartment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApartment {
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    pub description: String,
}

impl NewApartment {
    /// Labels of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.unit_name.trim().is_empty() {
            missing.push("Unit Name");
        }
        if self.unit_number.trim().is_empty() {
            missing.push("Unit Number");
        }
        if self.project.trim().is_empty() {
            missing.push("Project Name");
        }
        missing
    }
}
