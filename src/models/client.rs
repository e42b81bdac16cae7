// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "Pending review")]
    PendingReview,
    #[serde(rename = "Needs action")]
    NeedsAction,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Approved => "تایید شده",
            UploadStatus::PendingReview => "در انتظار بررسی",
            UploadStatus::NeedsAction => "نیازمند اصلاح",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: String,
    pub name: String,
    pub size: String,
    pub status: UploadStatus,
    pub uploaded_at: DateTime<Utc>,
}

// Arquivo escolhido pelo cliente, antes do upload simulado
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingFile {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Done,
    Active,
    Waiting,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStep {
    pub id: String,
    pub title: String,
    pub status: StepStatus,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub size: String,
    pub requires_payment: bool,
}
