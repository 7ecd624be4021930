use std::path::PathBuf;

use crate::api::{CropRecommendations, DiseaseDiagnosis, YieldPrediction};
use crate::error::PanelError;
use crate::model::{FormKind, PanelName, SelectedFile};

#[derive(Debug, Clone)]
pub enum Message {
    SelectPanel(PanelName),
    FieldChanged(FormKind, usize, String),
    SubmitYield,
    SubmitRecommendations,
    AnalyzeImage,
    YieldCompleted(Result<YieldPrediction, PanelError>),
    DiseaseCompleted(Result<DiseaseDiagnosis, PanelError>),
    RecommendationsCompleted(Result<CropRecommendations, PanelError>),
    PickImage,
    ImageSelected(Option<Result<SelectedFile, PanelError>>),
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    DismissNotification,
}
