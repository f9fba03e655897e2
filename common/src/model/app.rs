use crate::model::rating::RatingBreakdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_BUTTON_TEXT: &str = "GET";
pub const DEFAULT_SUBMIT_BUTTON_TEXT: &str = "Submit";
pub const DEFAULT_LOADING_STEP_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_USERS: &str = "0";

/// A catalog entry as it is stored and served.
///
/// `rating` and `total_ratings` are derived from `rating_breakdown` and are
/// only ever written through [`App::set_rating_breakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    pub has_loading_steps: bool,
    #[serde(default)]
    pub loading_steps: Vec<String>,
    pub loading_step_interval: u64,
    pub allow_input: bool,
    #[serde(default)]
    pub input_fields: Vec<InputField>,
    pub submit_button_text: String,
    pub rating: f64,
    pub total_ratings: u64,
    pub rating_breakdown: RatingBreakdown,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub users: String,
    pub order: i64,
    pub is_trending: bool,
    pub created_at: DateTime<Utc>,
}

/// One entry of the guided-input form shown before the call-to-action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputField {
    pub title: String,
    pub placeholder: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub required: bool,
    /// Choices offered by `radio`, `checkbox` and `select` fields.
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Phone,
    Textarea,
    Radio,
    Checkbox,
    Select,
    Other,
}

impl InputKind {
    pub fn has_options(&self) -> bool {
        matches!(self, InputKind::Radio | InputKind::Checkbox | InputKind::Select)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub label: String,
    pub value: String,
    pub icon: String,
}

/// Payload accepted when creating an app. Every field except `name` may
/// be omitted and falls back to its documented default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDraft {
    pub name: String,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub icon: Option<String>,
    pub images: Option<Vec<String>>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub has_loading_steps: Option<bool>,
    pub loading_steps: Option<Vec<String>>,
    pub loading_step_interval: Option<u64>,
    pub allow_input: Option<bool>,
    pub input_fields: Option<Vec<InputField>>,
    pub submit_button_text: Option<String>,
    pub rating_breakdown: Option<RatingBreakdown>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub users: Option<String>,
    pub order: Option<i64>,
    pub is_trending: Option<bool>,
}

/// Partial update of an app. Absent fields leave the stored value alone.
/// The optional text fields distinguish an absent key (`None`) from an
/// explicit `null` (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub short_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub long_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub button_link: Option<Option<String>>,
    pub has_loading_steps: Option<bool>,
    pub loading_steps: Option<Vec<String>>,
    pub loading_step_interval: Option<u64>,
    pub allow_input: Option<bool>,
    pub input_fields: Option<Vec<InputField>>,
    pub submit_button_text: Option<String>,
    pub rating_breakdown: Option<RatingBreakdown>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub users: Option<String>,
    pub order: Option<i64>,
    pub is_trending: Option<bool>,
}

/// Maps a present key to `Some`, keeping `null` as `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("App validation failed: name is required".to_string());
    }
    Ok(())
}

impl AppDraft {
    pub fn validate(&self) -> Result<(), String> {
        check_name(&self.name)
    }
}

impl AppPatch {
    pub fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) => check_name(name),
            None => Ok(()),
        }
    }
}

impl App {
    /// Builds a new record from a creation payload, filling defaults.
    pub fn from_draft(id: String, draft: AppDraft, created_at: DateTime<Utc>) -> Self {
        let mut app = App {
            id,
            name: draft.name,
            category: draft.category,
            short_description: draft.short_description,
            long_description: draft.long_description,
            icon: draft.icon,
            images: draft.images.unwrap_or_default(),
            button_text: draft
                .button_text
                .unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string()),
            button_link: draft.button_link,
            has_loading_steps: draft.has_loading_steps.unwrap_or(false),
            loading_steps: draft.loading_steps.unwrap_or_default(),
            loading_step_interval: draft
                .loading_step_interval
                .unwrap_or(DEFAULT_LOADING_STEP_INTERVAL_MS),
            allow_input: draft.allow_input.unwrap_or(false),
            input_fields: draft.input_fields.unwrap_or_default(),
            submit_button_text: draft
                .submit_button_text
                .unwrap_or_else(|| DEFAULT_SUBMIT_BUTTON_TEXT.to_string()),
            rating: 0.0,
            total_ratings: 0,
            rating_breakdown: RatingBreakdown::default(),
            custom_fields: draft.custom_fields.unwrap_or_default(),
            users: draft.users.unwrap_or_else(|| DEFAULT_USERS.to_string()),
            order: draft.order.unwrap_or(0),
            is_trending: draft.is_trending.unwrap_or(false),
            created_at,
        };
        if let Some(breakdown) = draft.rating_breakdown {
            app.set_rating_breakdown(breakdown);
        }
        app
    }

    /// Merges the fields present in `patch`. Identity and creation time
    /// are never touched.
    pub fn apply(&mut self, patch: AppPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.short_description {
            self.short_description = v;
        }
        if let Some(v) = patch.long_description {
            self.long_description = v;
        }
        if let Some(v) = patch.icon {
            self.icon = v;
        }
        if let Some(v) = patch.images {
            self.images = v;
        }
        if let Some(v) = patch.button_text {
            self.button_text = v;
        }
        if let Some(v) = patch.button_link {
            self.button_link = v;
        }
        if let Some(v) = patch.has_loading_steps {
            self.has_loading_steps = v;
        }
        if let Some(v) = patch.loading_steps {
            self.loading_steps = v;
        }
        if let Some(v) = patch.loading_step_interval {
            self.loading_step_interval = v;
        }
        if let Some(v) = patch.allow_input {
            self.allow_input = v;
        }
        if let Some(v) = patch.input_fields {
            self.input_fields = v;
        }
        if let Some(v) = patch.submit_button_text {
            self.submit_button_text = v;
        }
        if let Some(v) = patch.rating_breakdown {
            self.set_rating_breakdown(v);
        }
        if let Some(v) = patch.custom_fields {
            self.custom_fields = v;
        }
        if let Some(v) = patch.users {
            self.users = v;
        }
        if let Some(v) = patch.order {
            self.order = v;
        }
        if let Some(v) = patch.is_trending {
            self.is_trending = v;
        }
    }

    /// Replaces the breakdown wholesale and recomputes the aggregates.
    pub fn set_rating_breakdown(&mut self, breakdown: RatingBreakdown) {
        self.rating_breakdown = breakdown;
        self.total_ratings = breakdown.total();
        self.rating = breakdown.average();
    }

    /// Case-insensitive substring match on name, category or short
    /// description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        contains(self.name.as_str())
            || self.category.as_deref().is_some_and(contains)
            || self.short_description.as_deref().is_some_and(contains)
    }
}
