//! Type definitions for the CookMaster API.
//!
//! The API speaks Spanish on the wire (`nombre`, `categoria`, `ingredientes`,
//! `pasos`, ...). The Rust types use English names and map to the wire names
//! through serde renames or explicit payload construction.
//!
//! ## Key Types
//!
//! - [`NewRecipe`] - Payload for creating a recipe, with local validation
//! - [`Ingredient`] / [`IngredientEntry`] - Ingredients, structured or as raw JSON objects
//! - [`Difficulty`] - Closed set of difficulty levels used by search
//! - [`SearchFilters`] - Optional filters for the search endpoint

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::error::{CookMasterError, Result};

/// Upper bound on ingredients accepted by the create endpoint.
pub const MAX_INGREDIENTS: usize = 20;

pub(crate) const FIELD_NAME: &str = "nombre";
pub(crate) const FIELD_CATEGORY: &str = "categoria";
pub(crate) const FIELD_INGREDIENTS: &str = "ingredientes";
pub(crate) const FIELD_STEPS: &str = "pasos";

const REQUIRED_FIELDS: [&str; 4] = [FIELD_NAME, FIELD_CATEGORY, FIELD_INGREDIENTS, FIELD_STEPS];

/// Recipe difficulty level.
///
/// Serialized as its lowercase Spanish tag: `"facil"`, `"media"`, `"dificil"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "facil")]
    Easy,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "dificil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire tag for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "facil",
            Difficulty::Medium => "media",
            Difficulty::Hard => "dificil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CookMasterError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CookMasterError::invalid(format!("invalid difficulty: {}", s)))
    }
}

/// A difficulty given either as a typed [`Difficulty`] or as its raw tag.
///
/// Raw tags are checked when the search request is built, so an unknown tag
/// fails before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyFilter {
    Known(Difficulty),
    Raw(String),
}

impl DifficultyFilter {
    pub fn resolve(&self) -> Result<Difficulty> {
        match self {
            DifficultyFilter::Known(d) => Ok(*d),
            DifficultyFilter::Raw(tag) => tag.parse(),
        }
    }

    /// An empty raw tag counts as no filter at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, DifficultyFilter::Raw(tag) if tag.is_empty())
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(d: Difficulty) -> Self {
        DifficultyFilter::Known(d)
    }
}

impl From<&str> for DifficultyFilter {
    fn from(tag: &str) -> Self {
        DifficultyFilter::Raw(tag.to_string())
    }
}

impl From<String> for DifficultyFilter {
    fn from(tag: String) -> Self {
        DifficultyFilter::Raw(tag)
    }
}

/// One ingredient line: what and how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form quantity such as "200g" or "2 tazas"
    #[serde(rename = "cantidad")]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// An ingredient as supplied by the caller.
///
/// Both forms end up as a plain JSON object on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientEntry {
    Structured(Ingredient),
    Mapping(Map<String, Value>),
}

impl IngredientEntry {
    /// Normalizes the entry to a plain JSON object.
    pub fn into_mapping(self) -> Result<Map<String, Value>> {
        match self {
            IngredientEntry::Structured(ingredient) => match serde_json::to_value(ingredient) {
                Ok(Value::Object(map)) => Ok(map),
                Ok(_) => Err(CookMasterError::invalid("ingredient did not serialize to an object")),
                Err(e) => Err(CookMasterError::invalid(format!(
                    "ingredient could not be serialized: {}",
                    e
                ))),
            },
            IngredientEntry::Mapping(map) => Ok(map),
        }
    }
}

impl From<Ingredient> for IngredientEntry {
    fn from(ingredient: Ingredient) -> Self {
        IngredientEntry::Structured(ingredient)
    }
}

impl From<Map<String, Value>> for IngredientEntry {
    fn from(map: Map<String, Value>) -> Self {
        IngredientEntry::Mapping(map)
    }
}

/// Payload for `POST recetas`.
///
/// Every field starts out unset so a partially-built recipe can be validated
/// the same way as a raw JSON object. Extra fields (difficulty, cooking time,
/// ...) are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecipe {
    pub name: Option<String>,
    pub category: Option<String>,
    pub ingredients: Option<Vec<IngredientEntry>>,
    pub steps: Option<Vec<String>>,
    pub extra: Map<String, Value>,
}

impl NewRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn ingredient(mut self, ingredient: impl Into<IngredientEntry>) -> Self {
        self.ingredients
            .get_or_insert_with(Vec::new)
            .push(ingredient.into());
        self
    }

    pub fn ingredients<I, E>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<IngredientEntry>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.get_or_insert_with(Vec::new).push(step.into());
        self
    }

    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an extra top-level field, e.g. `("dificultad", "media")`.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds a recipe from a raw JSON object.
    ///
    /// Reports every missing required field at once, then checks that
    /// `ingredientes` is a list of objects and `pasos` a list of strings.
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }

        let name = take_string(&mut map, FIELD_NAME)?;
        let category = take_string(&mut map, FIELD_CATEGORY)?;

        let ingredients = match map.remove(FIELD_INGREDIENTS) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(obj) => Ok(IngredientEntry::Mapping(obj)),
                    _ => Err(CookMasterError::invalid(
                        "'ingredientes' must be a list of ingredient objects",
                    )),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(CookMasterError::invalid(
                    "'ingredientes' must be a list of ingredient objects",
                ))
            }
        };

        let steps = match map.remove(FIELD_STEPS) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(CookMasterError::invalid("'pasos' must be a list of strings")),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => return Err(CookMasterError::invalid("'pasos' must be a list of strings")),
        };

        Ok(Self {
            name: Some(name),
            category: Some(category),
            ingredients: Some(ingredients),
            steps: Some(steps),
            extra: map,
        })
    }

    /// Checks required fields and the ingredient limit.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(FIELD_NAME);
        }
        if self.category.is_none() {
            missing.push(FIELD_CATEGORY);
        }
        if self.ingredients.is_none() {
            missing.push(FIELD_INGREDIENTS);
        }
        if self.steps.is_none() {
            missing.push(FIELD_STEPS);
        }
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }

        let count = self.ingredients.as_ref().map_or(0, Vec::len);
        if count > MAX_INGREDIENTS {
            return Err(CookMasterError::invalid(format!(
                "at most {} ingredients per recipe (got {})",
                MAX_INGREDIENTS, count
            )));
        }
        Ok(())
    }

    /// Validates and converts the recipe into its JSON wire form, with every
    /// ingredient normalized to a plain object.
    pub fn into_payload(self) -> Result<Value> {
        self.validate()?;

        let mut payload = self.extra;
        if let Some(name) = self.name {
            payload.insert(FIELD_NAME.to_string(), Value::String(name));
        }
        if let Some(category) = self.category {
            payload.insert(FIELD_CATEGORY.to_string(), Value::String(category));
        }
        if let Some(ingredients) = self.ingredients {
            let items = ingredients
                .into_iter()
                .map(|entry| entry.into_mapping().map(Value::Object))
                .collect::<Result<Vec<_>>>()?;
            payload.insert(FIELD_INGREDIENTS.to_string(), Value::Array(items));
        }
        if let Some(steps) = self.steps {
            let items = steps.into_iter().map(Value::String).collect();
            payload.insert(FIELD_STEPS.to_string(), Value::Array(items));
        }
        Ok(Value::Object(payload))
    }
}

fn missing_fields_error(missing: &[&str]) -> CookMasterError {
    CookMasterError::invalid(format!("missing required fields: {}", missing.join(", ")))
}

fn take_string(map: &mut Map<String, Value>, field: &str) -> Result<String> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(CookMasterError::invalid(format!("'{}' must be a string", field))),
    }
}

/// Filters for `GET recetas/buscar`. Unset filters are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub difficulty: Option<DifficultyFilter>,
    /// Maximum total time in minutes
    pub max_time: Option<u32>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<DifficultyFilter>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn max_time(mut self, minutes: u32) -> Self {
        self.max_time = Some(minutes);
        self
    }

    /// Query parameters in wire order. An empty category, an empty
    /// difficulty tag and a zero time limit count as unset.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>> {
        let mut params = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            params.push(("categoria", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty.as_ref().filter(|d| !d.is_empty()) {
            params.push(("dificultad", difficulty.resolve()?.as_str().to_string()));
        }
        if let Some(max_time) = self.max_time.filter(|t| *t > 0) {
            params.push(("tiempo_max", max_time.to_string()));
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_difficulty_wire_tags() {
        assert_eq!(serde_json::to_value(Difficulty::Easy).unwrap(), json!("facil"));
        assert_eq!(serde_json::to_value(Difficulty::Medium).unwrap(), json!("media"));
        assert_eq!(serde_json::to_value(Difficulty::Hard).unwrap(), json!("dificil"));
        assert_eq!("dificil".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("invalid".parse::<Difficulty>().is_err());
        assert!("FACIL".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_filter_raw_and_typed_agree() {
        let typed = SearchFilters::new().difficulty(Difficulty::Easy).to_query().unwrap();
        let raw = SearchFilters::new().difficulty("facil").to_query().unwrap();
        assert_eq!(typed, raw);
        assert_eq!(typed, vec![("dificultad", "facil".to_string())]);
    }

    #[test]
    fn test_search_filters_omit_absent_values() {
        assert!(SearchFilters::new().to_query().unwrap().is_empty());

        let params = SearchFilters::new()
            .category("")
            .difficulty("")
            .max_time(0)
            .to_query()
            .unwrap();
        assert!(params.is_empty());

        let params = SearchFilters::new()
            .category("pastas")
            .difficulty(Difficulty::Medium)
            .max_time(45)
            .to_query()
            .unwrap();
        assert_eq!(
            params,
            vec![
                ("categoria", "pastas".to_string()),
                ("dificultad", "media".to_string()),
                ("tiempo_max", "45".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_filters_invalid_difficulty() {
        let err = SearchFilters::new().difficulty("invalid").to_query().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("invalid"));
    }

    #[test]
    fn test_missing_fields_listed_exactly() {
        let err = NewRecipe::new().name("Tortilla").validate().unwrap_err();
        assert_eq!(
            err.message(),
            "missing required fields: categoria, ingredientes, pasos"
        );

        let err = NewRecipe::from_map(object(json!({"nombre": "x", "pasos": []}))).unwrap_err();
        assert_eq!(err.message(), "missing required fields: categoria, ingredientes");
    }

    #[test]
    fn test_from_map_type_checks() {
        let err = NewRecipe::from_map(object(json!({
            "nombre": "x", "categoria": "y", "ingredientes": "harina", "pasos": []
        })))
        .unwrap_err();
        assert!(err.message().contains("ingredientes"));

        let err = NewRecipe::from_map(object(json!({
            "nombre": "x", "categoria": "y", "ingredientes": [], "pasos": "mezclar"
        })))
        .unwrap_err();
        assert!(err.message().contains("pasos"));

        let err = NewRecipe::from_map(object(json!({
            "nombre": "x", "categoria": "y", "ingredientes": [], "pasos": [1, 2]
        })))
        .unwrap_err();
        assert!(err.message().contains("pasos"));
    }

    #[test]
    fn test_ingredient_limit() {
        let at_limit = NewRecipe::new()
            .name("x")
            .category("y")
            .ingredients((0..MAX_INGREDIENTS).map(|i| Ingredient::new(format!("i{}", i), "1")))
            .steps(["mix"]);
        assert!(at_limit.validate().is_ok());

        let over = at_limit.ingredient(Ingredient::new("extra", "1"));
        let err = over.validate().unwrap_err();
        assert!(err.message().contains("20"));
    }

    #[test]
    fn test_structured_ingredient_mapping_uses_wire_names() {
        let map = IngredientEntry::from(Ingredient::new("Sal", "1 pizca"))
            .into_mapping()
            .unwrap();
        assert_eq!(Value::Object(map), json!({"nombre": "Sal", "cantidad": "1 pizca"}));
    }

    #[test]
    fn test_payload_normalizes_ingredients() {
        let mut raw = Map::new();
        raw.insert("nombre".into(), json!("Albahaca"));
        raw.insert("cantidad".into(), json!("50g"));

        let payload = NewRecipe::new()
            .name("Pasta al pesto")
            .category("pastas")
            .ingredient(Ingredient::new("Pasta", "200g"))
            .ingredient(raw)
            .steps(["Hervir pasta", "Preparar pesto"])
            .field("dificultad", "facil")
            .into_payload()
            .unwrap();

        assert_eq!(
            payload,
            json!({
                "nombre": "Pasta al pesto",
                "categoria": "pastas",
                "ingredientes": [
                    {"nombre": "Pasta", "cantidad": "200g"},
                    {"nombre": "Albahaca", "cantidad": "50g"}
                ],
                "pasos": ["Hervir pasta", "Preparar pesto"],
                "dificultad": "facil"
            })
        );
    }
}
