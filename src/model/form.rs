use serde_json::{Map, Value};

const CROP_TYPES: [&str; 5] = ["wheat", "rice", "corn", "soybean", "cotton"];
const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
    Choice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            value: String::new(),
        }
    }

    fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            value: String::new(),
        }
    }

    fn choice(name: &'static str, label: &'static str, options: &[&str]) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options.iter().map(|option| option.to_string()).collect()),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Yield,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn yield_form() -> Self {
        Self {
            fields: vec![
                FormField::choice("crop_type", "Crop Type", &CROP_TYPES),
                FormField::number("area", "Area (hectares)"),
                FormField::number("rainfall", "Rainfall (mm)"),
                FormField::number("temperature", "Temperature (°C)"),
                FormField::number("humidity", "Humidity (%)"),
                FormField::number("ph", "Soil pH"),
                FormField::number("nitrogen", "Nitrogen (kg/ha)"),
                FormField::number("phosphorus", "Phosphorus (kg/ha)"),
                FormField::number("potassium", "Potassium (kg/ha)"),
            ],
        }
    }

    pub fn recommendation_form() -> Self {
        Self {
            fields: vec![
                FormField::choice("crop_type", "Crop Type", &CROP_TYPES),
                FormField::choice("season", "Season", &SEASONS),
                FormField::text("location", "Location"),
            ],
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn set(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
        }
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn to_payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), Value::String(field.value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_includes_every_field_even_when_blank() {
        let mut form = FormState::yield_form();
        form.set(1, "12.5".to_string());

        let payload = form.to_payload();
        assert_eq!(payload.len(), 9);
        assert_eq!(payload["area"], "12.5");
        assert_eq!(payload["nitrogen"], "");
    }

    #[test]
    fn values_are_sent_unvalidated() {
        let mut form = FormState::yield_form();
        form.set(5, "-40 or so".to_string());
        assert_eq!(form.to_payload()["ph"], "-40 or so");
    }

    #[test]
    fn payload_preserves_field_order() {
        let mut form = FormState::recommendation_form();
        form.set(0, "rice".to_string());
        form.set(1, "summer".to_string());
        form.set(2, "Punjab".to_string());

        let payload = form.to_payload();
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, ["crop_type", "season", "location"]);
        assert_eq!(form.value("location"), Some("Punjab"));
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut form = FormState::recommendation_form();
        let before = form.clone();
        form.set(99, "x".to_string());
        assert_eq!(form, before);
    }
}
