pub mod resume_data;
pub mod response;

pub use resume_data::{ExperienceEntry, FormFields, ResumeData, SelectedFile};
pub use response::{ModificationRequest, UploadResponse};
