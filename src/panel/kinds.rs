use super::PanelKind;
use crate::api::{CropRecommendations, DiseaseDiagnosis, Endpoint, Payload, YieldPrediction};
use crate::error::PanelError;
use crate::model::{FormState, ImageAttachment, PanelName};
use crate::render::{self, ResultView};

pub struct YieldKind;

impl PanelKind for YieldKind {
    const PANEL: PanelName = PanelName::Yield;
    const ENDPOINT: Endpoint = Endpoint::PredictYield;

    type Input = YieldForm;
    type Output = YieldPrediction;

    fn collect_payload(input: &YieldForm) -> Result<Payload, PanelError> {
        Ok(Payload::Form(input.0.to_payload()))
    }

    fn render(output: &YieldPrediction) -> ResultView {
        render::yield_view(output)
    }
}

pub struct RecommendationKind;

impl PanelKind for RecommendationKind {
    const PANEL: PanelName = PanelName::Recommendations;
    const ENDPOINT: Endpoint = Endpoint::GetRecommendations;

    type Input = RecommendationForm;
    type Output = CropRecommendations;

    fn collect_payload(input: &RecommendationForm) -> Result<Payload, PanelError> {
        Ok(Payload::Form(input.0.to_payload()))
    }

    fn render(output: &CropRecommendations) -> ResultView {
        render::recommendations_view(output)
    }
}

pub struct DiseaseKind;

impl PanelKind for DiseaseKind {
    const PANEL: PanelName = PanelName::Disease;
    const ENDPOINT: Endpoint = Endpoint::DetectDisease;

    type Input = ImageAttachment;
    type Output = DiseaseDiagnosis;

    fn collect_payload(input: &ImageAttachment) -> Result<Payload, PanelError> {
        input
            .pending()
            .map(|image| Payload::Image(image.to_upload()))
            .ok_or_else(|| PanelError::validation("Please select an image first"))
    }

    fn render(output: &DiseaseDiagnosis) -> ResultView {
        render::disease_view(output)
    }

    fn reset_on_leave(input: &mut ImageAttachment) -> bool {
        input.clear();
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldForm(pub FormState);

impl Default for YieldForm {
    fn default() -> Self {
        Self(FormState::yield_form())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationForm(pub FormState);

impl Default for RecommendationForm {
    fn default() -> Self {
        Self(FormState::recommendation_form())
    }
}
