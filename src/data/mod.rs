mod record;

pub use record::{EducationData, EducationRecord};
