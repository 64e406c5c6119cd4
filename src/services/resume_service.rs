use crate::{
    constants::skills::{FALLBACK_MATCHED_SKILLS, FALLBACK_NOTE, SKILL_VOCABULARY},
    models::dto::response::{ResumeAnalysis, UploadResponse},
    uploads::StoredUpload,
};

pub struct ResumeService;

impl ResumeService {
    pub fn upload_receipt(upload: &StoredUpload) -> UploadResponse {
        UploadResponse {
            message: "Resume uploaded successfully".to_string(),
            filename: upload.original_name.clone(),
            stored_name: upload.stored_name.clone(),
        }
    }

    /// Content-independent analysis: the file is never read.
    pub fn fallback_analysis(upload: &StoredUpload) -> ResumeAnalysis {
        log::info!("Fallback resume analysis for {}", upload.stored_name);

        let matched_skills: Vec<String> =
            FALLBACK_MATCHED_SKILLS.iter().map(|s| s.to_string()).collect();
        let missing_skills = SKILL_VOCABULARY
            .iter()
            .filter(|skill| !FALLBACK_MATCHED_SKILLS.contains(*skill))
            .map(|s| s.to_string())
            .collect();

        ResumeAnalysis {
            status: "success".to_string(),
            analysis_type: "fallback".to_string(),
            matched_skills,
            missing_skills,
            note: FALLBACK_NOTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn upload(name: &str) -> StoredUpload {
        StoredUpload {
            original_name: name.to_string(),
            stored_name: "0b8e7f3a".to_string(),
            path: PathBuf::from("uploads/0b8e7f3a"),
            size: 1024,
        }
    }

    #[test]
    fn test_fallback_analysis_is_fixed() {
        let analysis = ResumeService::fallback_analysis(&upload("cv.pdf"));

        assert_eq!(analysis.analysis_type, "fallback");
        assert_eq!(analysis.matched_skills, vec!["javascript", "react", "html", "css"]);
        assert_eq!(
            analysis.missing_skills,
            vec!["node", "express", "mongodb", "git", "github", "rest", "api"]
        );
    }

    #[test]
    fn test_fallback_analysis_ignores_upload() {
        let first = ResumeService::fallback_analysis(&upload("a.pdf"));
        let second = ResumeService::fallback_analysis(&upload("completely-different.pdf"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_upload_receipt_reports_both_names() {
        let receipt = ResumeService::upload_receipt(&upload("cv.pdf"));
        assert_eq!(receipt.filename, "cv.pdf");
        assert_eq!(receipt.stored_name, "0b8e7f3a");
    }
}
