use uuid::Uuid;

/// A numeric slider widget. Values always stay inside `[min, max]`.
#[derive(Debug, Clone)]
pub struct NumberSlider {
    pub id: Uuid,
    pub name: String,
    pub nickname: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    value: f64,
}

impl NumberSlider {
    pub fn new(name: &str, min: f64, max: f64, step: f64, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            nickname: String::new(),
            min,
            max,
            step,
            value: value.clamp(min, max),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// The user-facing label: nickname when set, internal name otherwise.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.name
        } else {
            &self.nickname
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextPanel {
    pub id: Uuid,
    pub name: String,
    pub text: String,
}

impl TextPanel {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            text: text.to_string(),
        }
    }
}

/// Everything that can live in a document, tagged by kind so consumers can
/// filter on the capability they need.
#[derive(Debug, Clone)]
pub enum DocumentObject {
    NumberSlider(NumberSlider),
    TextPanel(TextPanel),
}

impl DocumentObject {
    pub fn id(&self) -> Uuid {
        match self {
            DocumentObject::NumberSlider(slider) => slider.id,
            DocumentObject::TextPanel(panel) => panel.id,
        }
    }

    pub fn as_number_slider(&self) -> Option<&NumberSlider> {
        match self {
            DocumentObject::NumberSlider(slider) => Some(slider),
            _ => None,
        }
    }

    pub fn as_number_slider_mut(&mut self) -> Option<&mut NumberSlider> {
        match self {
            DocumentObject::NumberSlider(slider) => Some(slider),
            _ => None,
        }
    }
}
