use std::fmt;

use thiserror::Error;

use crate::model::profile::{ApplicantProfile, ProfileField, RawProfile, field_order};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill all required fields: {}", MissingList(.missing))]
pub struct ValidationError {
    pub missing: Vec<ProfileField>,
}

struct MissingList<'a>(&'a [ProfileField]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.label())?;
        }
        Ok(())
    }
}

/// Zero is the "not filled" sentinel for every numeric field, so a genuine
/// zero (e.g. TOEFL 0) is reported as missing.
pub fn validate(raw: &RawProfile) -> Result<ApplicantProfile, ValidationError> {
    let mut missing = Vec::new();
    for &field in field_order() {
        if is_unset(raw, field) {
            missing.push(field);
        }
    }

    match (missing.is_empty(), raw.research) {
        (true, Some(research)) => Ok(ApplicantProfile {
            gre: raw.gre,
            toefl: raw.toefl,
            university_rating: raw.university_rating,
            sop: raw.sop,
            lor: raw.lor,
            cgpa: raw.cgpa,
            research,
        }),
        _ => Err(ValidationError { missing }),
    }
}

fn is_unset(raw: &RawProfile, field: ProfileField) -> bool {
    match field {
        ProfileField::Gre => raw.gre == 0,
        ProfileField::Toefl => raw.toefl == 0,
        ProfileField::UniversityRating => raw.university_rating == 0,
        ProfileField::Sop => raw.sop == 0.0,
        ProfileField::Lor => raw.lor == 0.0,
        ProfileField::Cgpa => raw.cgpa == 0.0,
        ProfileField::Research => raw.research.is_none(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
