use serde::Serialize;

pub const FEATURE_COUNT: usize = 7;

/// Feature vector handed to a predictor, in `field_order()` order.
pub type FeatureVector = [f64; FEATURE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ProfileField {
    Gre,
    Toefl,
    UniversityRating,
    Sop,
    Lor,
    Cgpa,
    Research,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Gre => "GRE Score",
            ProfileField::Toefl => "TOEFL Score",
            ProfileField::UniversityRating => "University Rating",
            ProfileField::Sop => "SOP Strength",
            ProfileField::Lor => "LOR Strength",
            ProfileField::Cgpa => "CGPA",
            ProfileField::Research => "Research Experience",
        }
    }
}

pub fn field_order() -> &'static [ProfileField; FEATURE_COUNT] {
    &[
        ProfileField::Gre,
        ProfileField::Toefl,
        ProfileField::UniversityRating,
        ProfileField::Sop,
        ProfileField::Lor,
        ProfileField::Cgpa,
        ProfileField::Research,
    ]
}

/// Form values as collected, before validation. Numeric fields hold 0 when
/// not filled in; `research` is `None` when nothing was selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawProfile {
    pub gre: u32,
    pub toefl: u32,
    pub university_rating: u32,
    pub sop: f64,
    pub lor: f64,
    pub cgpa: f64,
    pub research: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub gre: u32,
    pub toefl: u32,
    pub university_rating: u32,
    pub sop: f64,
    pub lor: f64,
    pub cgpa: f64,
    pub research: bool,
}

impl ApplicantProfile {
    pub fn features(&self) -> FeatureVector {
        [
            f64::from(self.gre),
            f64::from(self.toefl),
            f64::from(self.university_rating),
            self.sop,
            self.lor,
            self.cgpa,
            if self.research { 1.0 } else { 0.0 },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRecord {
    pub profile: ApplicantProfile,
    /// Observed chance of admission as stored in the dataset, a fraction.
    pub outcome: f64,
}
