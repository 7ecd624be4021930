use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PredictYield,
    DetectDisease,
    GetRecommendations,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::PredictYield => "/predict_yield",
            Self::DetectDisease => "/detect_disease",
            Self::GetRecommendations => "/get_recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Form(Map<String, Value>),
    Image(ImageUpload),
}
