use std::fmt::Write;

use serde_json::Value;

use crate::api::{CropRecommendations, DiseaseDiagnosis, Medicine, YieldPrediction};
use crate::utils::{display_key, format_confidence, format_yield};

#[derive(Debug, Clone, PartialEq)]
pub enum ResultLine {
    Headline(String),
    Field { label: String, value: String },
    Bullet(String),
    Caution(String),
    Subheading(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    pub title: String,
    pub lines: Vec<ResultLine>,
    pub gauge: Option<f32>,
}

impl ResultSection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            gauge: None,
        }
    }

    fn bullets<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut section = Self::new(title);
        section.lines = items
            .into_iter()
            .map(|item| ResultLine::Bullet(item.into()))
            .collect();
        section
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultView {
    pub sections: Vec<ResultSection>,
}

impl ResultView {
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "{}", section.title);
            for line in &section.lines {
                let _ = match line {
                    ResultLine::Headline(text) | ResultLine::Subheading(text) => {
                        writeln!(out, "  {text}")
                    }
                    ResultLine::Field { label, value } => writeln!(out, "  {label}: {value}"),
                    ResultLine::Bullet(text) => writeln!(out, "  - {text}"),
                    ResultLine::Caution(text) => writeln!(out, "  ! {text}"),
                };
            }
        }
        out
    }

    #[cfg(test)]
    pub fn contains(&self, needle: &str) -> bool {
        self.to_plain_text().contains(needle)
    }
}

pub fn yield_view(prediction: &YieldPrediction) -> ResultView {
    let mut headline = ResultSection::new("Predicted Yield");
    headline.lines.push(ResultLine::Headline(format_yield(
        prediction.predicted_yield,
        &prediction.unit,
    )));

    ResultView {
        sections: vec![
            headline,
            ResultSection::bullets("Recommendations", prediction.recommendations.iter().cloned()),
        ],
    }
}

pub fn disease_view(diagnosis: &DiseaseDiagnosis) -> ResultView {
    let mut detection = ResultSection::new("Disease Detection Results");
    detection.lines.push(ResultLine::Field {
        label: "Detected Disease".to_string(),
        value: display_key(&diagnosis.disease),
    });
    detection.lines.push(ResultLine::Field {
        label: "Confidence".to_string(),
        value: format_confidence(diagnosis.confidence),
    });
    detection.gauge = Some(diagnosis.confidence.clamp(0.0, 1.0) as f32);

    let mut sections = vec![detection];

    let suggestions = &diagnosis.medicine_suggestions;
    if !suggestions.medicines.is_empty() {
        let mut medicines = ResultSection::new("Recommended Medicines");
        medicines.lines = suggestions.medicines.iter().flat_map(medicine_lines).collect();
        sections.push(medicines);
    }

    if !suggestions.organic_alternatives.is_empty() {
        sections.push(ResultSection::bullets(
            "Organic Alternatives",
            suggestions.organic_alternatives.iter().cloned(),
        ));
    }

    sections.push(ResultSection::bullets(
        "Treatment Tips",
        diagnosis.treatment_tips.iter().cloned(),
    ));

    ResultView { sections }
}

fn medicine_lines(medicine: &Medicine) -> [ResultLine; 4] {
    [
        ResultLine::Subheading(medicine.name.clone()),
        ResultLine::Field {
            label: "Dosage".to_string(),
            value: medicine.dosage.clone(),
        },
        ResultLine::Field {
            label: "Application".to_string(),
            value: medicine.application.clone(),
        },
        ResultLine::Caution(medicine.precautions.clone()),
    ]
}

pub fn recommendations_view(recommendations: &CropRecommendations) -> ResultView {
    let sections = recommendations
        .recommendations
        .iter()
        .filter_map(|(category, items)| {
            let items = items.as_array().filter(|items| !items.is_empty())?;
            Some(ResultSection::bullets(
                display_key(category),
                items.iter().map(item_text),
            ))
        })
        .collect();

    ResultView { sections }
}

fn item_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::responses::MedicineSuggestions;
    use serde_json::json;

    #[test]
    fn yield_view_rounds_and_lists_recommendations() {
        let view = yield_view(&YieldPrediction {
            predicted_yield: 12.345,
            unit: "tons/acre".to_string(),
            recommendations: vec!["Irrigate more".to_string()],
        });

        assert!(view.contains("12.35 tons/acre"));
        let bullets: Vec<_> = view.sections[1]
            .lines
            .iter()
            .filter(|line| matches!(line, ResultLine::Bullet(_)))
            .collect();
        assert_eq!(bullets, [&ResultLine::Bullet("Irrigate more".to_string())]);
    }

    #[test]
    fn disease_view_skips_empty_suggestion_sections() {
        let view = disease_view(&DiseaseDiagnosis {
            disease: "brown_spot".to_string(),
            confidence: 0.873,
            medicine_suggestions: MedicineSuggestions::default(),
            treatment_tips: vec!["Avoid water stress".to_string()],
        });

        let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Disease Detection Results", "Treatment Tips"]);
        assert!(view.contains("Detected Disease: BROWN SPOT"));
        assert!(view.contains("Confidence: 87.3%"));
        assert_eq!(view.sections[0].gauge, Some(0.873_f64 as f32));
    }

    #[test]
    fn disease_view_lists_medicines_and_alternatives() {
        let view = disease_view(&DiseaseDiagnosis {
            disease: "leaf_blast".to_string(),
            confidence: 0.95,
            medicine_suggestions: MedicineSuggestions {
                medicines: vec![Medicine {
                    name: "Tricyclazole".to_string(),
                    dosage: "0.6 g/L".to_string(),
                    application: "Foliar spray".to_string(),
                    precautions: "Wear gloves".to_string(),
                }],
                organic_alternatives: vec!["Neem oil".to_string()],
            },
            treatment_tips: Vec::new(),
        });

        assert_eq!(view.sections.len(), 4);
        assert_eq!(view.sections[1].title, "Recommended Medicines");
        assert!(view.contains("Dosage: 0.6 g/L"));
        assert!(view.contains("! Wear gloves"));
        assert!(view.contains("- Neem oil"));
    }

    #[test]
    fn recommendations_view_skips_empty_and_non_list_categories() {
        let parsed: CropRecommendations = serde_json::from_value(json!({
            "recommendations": {
                "general_tips": ["Conduct soil testing before planting"],
                "fertilizer_schedule": [],
                "notes": "free text",
                "seasonal_tips": ["Ensure adequate irrigation", 3]
            }
        }))
        .expect("valid");

        let view = recommendations_view(&parsed);
        let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["GENERAL TIPS", "SEASONAL TIPS"]);
        assert!(view.contains("- 3"));
    }
}
