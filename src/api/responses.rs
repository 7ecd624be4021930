use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YieldPrediction {
    pub predicted_yield: f64,
    pub unit: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiseaseDiagnosis {
    pub disease: String,
    pub confidence: f64,
    #[serde(default, deserialize_with = "suggestions_or_empty")]
    pub medicine_suggestions: MedicineSuggestions,
    #[serde(default)]
    pub treatment_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MedicineSuggestions {
    pub medicines: Vec<Medicine>,
    pub organic_alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub application: String,
    pub precautions: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CropRecommendations {
    #[serde(default)]
    pub recommendations: Map<String, Value>,
}

// Low-confidence diagnoses come back with `"medicine_suggestions": []`.
fn suggestions_or_empty<'de, D>(deserializer: D) -> Result<MedicineSuggestions, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        Object(MedicineSuggestions),
        List(Vec<IgnoredAny>),
        Null(()),
    }

    Ok(match Shape::deserialize(deserializer)? {
        Shape::Object(suggestions) => suggestions,
        Shape::List(_) | Shape::Null(()) => MedicineSuggestions::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diagnosis_accepts_empty_list_for_suggestions() {
        let diagnosis: DiseaseDiagnosis = serde_json::from_value(json!({
            "disease": "brown_spot",
            "confidence": 0.42,
            "medicine_suggestions": [],
            "treatment_tips": ["Image quality insufficient for accurate diagnosis"]
        }))
        .expect("valid diagnosis");

        assert!(diagnosis.medicine_suggestions.medicines.is_empty());
        assert!(diagnosis.medicine_suggestions.organic_alternatives.is_empty());
        assert_eq!(diagnosis.treatment_tips.len(), 1);
    }

    #[test]
    fn diagnosis_rejects_scalar_suggestions() {
        let result: Result<DiseaseDiagnosis, _> = serde_json::from_value(json!({
            "disease": "brown_spot",
            "confidence": 0.9,
            "medicine_suggestions": "none"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn diagnosis_reads_full_suggestions() {
        let diagnosis: DiseaseDiagnosis = serde_json::from_value(json!({
            "disease": "leaf_blast",
            "confidence": 0.91,
            "medicine_suggestions": {
                "medicines": [{
                    "name": "Tricyclazole",
                    "dosage": "0.6 g/L",
                    "application": "Foliar spray",
                    "precautions": "Wear gloves"
                }],
                "organic_alternatives": ["Neem oil"]
            },
            "treatment_tips": []
        }))
        .expect("valid diagnosis");

        let suggestions = diagnosis.medicine_suggestions;
        assert_eq!(suggestions.medicines[0].name, "Tricyclazole");
        assert_eq!(suggestions.organic_alternatives, vec!["Neem oil"]);
    }

    #[test]
    fn recommendation_categories_keep_server_order() {
        let parsed: CropRecommendations = serde_json::from_value(json!({
            "recommendations": {
                "general_tips": ["a"],
                "seasonal_tips": ["b"],
                "fertilizer": ["c"]
            }
        }))
        .expect("valid recommendations");

        let keys: Vec<&str> = parsed.recommendations.keys().map(String::as_str).collect();
        assert_eq!(keys, ["general_tips", "seasonal_tips", "fertilizer"]);
    }
}
