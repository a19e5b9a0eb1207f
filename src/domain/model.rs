use crate::utils::error::{CakeError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CAKE_TYPE: &str = "Plain";
pub const DEFAULT_LAYERS: u32 = 1;

/// A baked-good record. Every field is populated at construction and none
/// can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CakeSpec")]
pub struct Cake {
    r#type: String,
    layers: u32,
    ingredients: Vec<String>,
}

impl Cake {
    /// Positional construction with every field given.
    pub fn new(cake_type: impl Into<String>, layers: u32, ingredients: Vec<String>) -> Self {
        Self {
            r#type: cake_type.into(),
            layers,
            ingredients,
        }
    }

    /// Resolves a spec against the built-in default table.
    pub fn from_spec(spec: CakeSpec) -> Self {
        CakeDefaults::default().resolve(spec)
    }

    pub fn cake_type(&self) -> &str {
        &self.r#type
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn bake(&self) -> String {
        format!("The {} cake is baking.", self.r#type)
    }
}

impl From<CakeSpec> for Cake {
    fn from(spec: CakeSpec) -> Self {
        Cake::from_spec(spec)
    }
}

/// Construction input: any field left as `None` falls back to the default table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CakeSpec {
    pub r#type: Option<String>,
    pub layers: Option<u32>,
    pub ingredients: Option<Vec<String>>,
}

impl CakeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, cake_type: impl Into<String>) -> Self {
        self.r#type = Some(cake_type.into());
        self
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = Some(layers);
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.r#type.is_none() && self.layers.is_none() && self.ingredients.is_none()
    }

    /// Reads a spec out of a dynamic record such as `{"type": "Fruit", "layers": 2}`.
    ///
    /// Each field is checked strictly; nothing is coerced. `null` counts as
    /// omitted and unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| CakeError::invalid_field("cake", "an object", describe(value)))?;

        let r#type = match object.get("type") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => return Err(CakeError::invalid_field("type", "a string", describe(other))),
        };

        let layers = match object.get("layers") {
            None | Some(Value::Null) => None,
            Some(other) => Some(
                other
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| {
                        CakeError::invalid_field("layers", "a non-negative integer", describe(other))
                    })?,
            ),
        };

        let ingredients = match object.get("ingredients") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .map(|item| {
                        item.as_str().map(str::to_string).ok_or_else(|| {
                            CakeError::invalid_field(
                                "ingredients",
                                "a list of strings",
                                describe(item),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            Some(other) => {
                return Err(CakeError::invalid_field(
                    "ingredients",
                    "a list of strings",
                    describe(other),
                ))
            }
        };

        Ok(Self {
            r#type,
            layers,
            ingredients,
        })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("string \"{}\"", s),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
        other => other.to_string(),
    }
}

/// The fixed table that omitted fields are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeDefaults {
    pub r#type: String,
    pub layers: u32,
    pub ingredients: Vec<String>,
}

impl Default for CakeDefaults {
    fn default() -> Self {
        Self {
            r#type: DEFAULT_CAKE_TYPE.to_string(),
            layers: DEFAULT_LAYERS,
            ingredients: Vec::new(),
        }
    }
}

impl CakeDefaults {
    /// Replaces the entries that `overrides` provides.
    pub fn overridden_by(self, overrides: CakeSpec) -> Self {
        Self {
            r#type: overrides.r#type.unwrap_or(self.r#type),
            layers: overrides.layers.unwrap_or(self.layers),
            ingredients: overrides.ingredients.unwrap_or(self.ingredients),
        }
    }

    pub fn resolve(&self, spec: CakeSpec) -> Cake {
        Cake {
            r#type: spec.r#type.unwrap_or_else(|| self.r#type.clone()),
            layers: spec.layers.unwrap_or(self.layers),
            ingredients: spec.ingredients.unwrap_or_else(|| self.ingredients.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub actor: String,
    pub character: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub year: i32,
    /// Running time in minutes.
    pub duration: u32,
    pub genres: Vec<String>,
    pub cast: Vec<CastMember>,
}

impl Film {
    pub fn actor_playing(&self, character: &str) -> Option<&str> {
        self.cast
            .iter()
            .find(|member| member.character == character)
            .map(|member| member.actor.as_str())
    }

    pub fn age_in(&self, current_year: i32) -> u32 {
        // Widened so that any pair of years fits; future releases are 0.
        u32::try_from(i64::from(current_year) - i64::from(self.year)).unwrap_or(0)
    }

    pub fn age(&self) -> u32 {
        use chrono::Datelike;
        self.age_in(chrono::Local::now().year())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub airport: String,
    pub city: String,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub number: String,
    pub airline: Airline,
    pub departure: FlightLeg,
    pub arrival: FlightLeg,
}

impl Flight {
    /// Time in the air, wrapping past midnight when arrival is earlier than departure.
    pub fn duration(&self) -> chrono::Duration {
        let elapsed = self.arrival.time.signed_duration_since(self.departure.time);
        if elapsed < chrono::Duration::zero() {
            elapsed + chrono::Duration::days(1)
        } else {
            elapsed
        }
    }
}
