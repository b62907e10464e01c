//! GET /api/copy-types - the option lists a form front-end renders.

use axum::Json;
use serde::Serialize;

use copysmith_types::copy::{CopyType, Tone};

#[derive(Debug, Serialize)]
pub struct CopyTypeOption {
    #[serde(rename = "type")]
    pub copy_type: CopyType,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToneOption {
    pub tone: Tone,
    pub label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOptions {
    pub copy_types: Vec<CopyTypeOption>,
    pub tones: Vec<ToneOption>,
}

impl CopyOptions {
    pub fn all() -> Self {
        Self {
            copy_types: CopyType::ALL
                .into_iter()
                .map(|copy_type| CopyTypeOption {
                    copy_type,
                    label: copy_type.label(),
                })
                .collect(),
            tones: Tone::ALL
                .into_iter()
                .map(|tone| ToneOption {
                    label: tone.label().to_string(),
                    tone,
                })
                .collect(),
        }
    }
}

pub async fn list_copy_types() -> Json<CopyOptions> {
    Json(CopyOptions::all())
}
