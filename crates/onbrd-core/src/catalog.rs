//! Built-in declarations for the public job-board API.
//!
//! | type        | endpoint       | relationships                                  |
//! |-------------|----------------|------------------------------------------------|
//! | `Job`       | `/jobs`        | `company` (one), `category` (one)              |
//! | `Tag`       | `/tags`        | `jobs` (many, `tag_id`)                        |
//! | `Category`  | `/categories`  | `jobs` (many, `category_id`)                   |
//! | `Company`   | `/companies`   | `jobs` (many, `company_id`)                    |
//! | `Seniority` | `/seniorities` |                                                |
//! | `Modality`  | `/modalities`  |                                                |
use onbrd_model::ResourceType;

use crate::{error::CoreError, registry::RegistryBuilder};

pub const JOB: &str = "Job";
pub const TAG: &str = "Tag";
pub const CATEGORY: &str = "Category";
pub const COMPANY: &str = "Company";
pub const SENIORITY: &str = "Seniority";
pub const MODALITY: &str = "Modality";

/// Builder pre-populated with the public resources and their relationships.
///
/// Callers may add their own types and declarations before freezing it.
pub fn public_catalog() -> Result<RegistryBuilder, CoreError> {
    let mut b = RegistryBuilder::new();

    for (name, endpoint) in [
        (JOB, "/jobs"),
        (TAG, "/tags"),
        (CATEGORY, "/categories"),
        (COMPANY, "/companies"),
        (SENIORITY, "/seniorities"),
        (MODALITY, "/modalities"),
    ] {
        b.register_type(ResourceType::new(name, endpoint))?;
    }

    b.declare_has_many(TAG, "jobs", JOB)?
        .declare_has_many(CATEGORY, "jobs", JOB)?
        .declare_has_many(COMPANY, "jobs", JOB)?
        .declare_has_one(JOB, "company", COMPANY)?
        .declare_has_one(JOB, "category", CATEGORY)?;

    Ok(b)
}
