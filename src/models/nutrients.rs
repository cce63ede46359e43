use serde::{Deserialize, Serialize};

/// Guaranteed-analysis percentages as printed on the label (as-fed basis).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientInput {
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub ash: f64,
    pub moisture: f64,
    pub calcium: f64,
    pub phosphorus: f64,
}

impl NutrientInput {
    /// Field names paired with values, in label order.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("protein", self.protein),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("ash", self.ash),
            ("moisture", self.moisture),
            ("calcium", self.calcium),
            ("phosphorus", self.phosphorus),
        ]
    }

    /// Every field finite and within 0..=100.
    ///
    /// The scoring engine does not call this; it is for callers that collect
    /// values from users before scoring.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// Name and value of the first out-of-range field, if any.
    pub fn first_invalid(&self) -> Option<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || !(0.0..=100.0).contains(v))
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "P:{} F:{} Fi:{} A:{} M:{} Ca:{} Ph:{}",
            self.protein,
            self.fat,
            self.fiber,
            self.ash,
            self.moisture,
            self.calcium,
            self.phosphorus
        )
    }
}
