use serde::{Deserialize, Serialize};

use crate::types::resume_data::FormFields;

// ===== Service Request/Response Types =====

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub extracted_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationRequest {
    pub extracted_text: String,
    pub modification_instructions: FormFields,
}
