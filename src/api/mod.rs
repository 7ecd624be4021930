pub mod client;
pub mod endpoint;
pub mod outcome;
pub mod responses;

pub use client::{HttpPredictionApi, PredictionApi};
pub use endpoint::{Endpoint, ImageUpload, Payload};
pub use outcome::parse_outcome;
pub use responses::{CropRecommendations, DiseaseDiagnosis, Medicine, YieldPrediction};
