// product_service/src/schema.rs

//! Validation and filtering of incoming Product payloads.
//!
//! Request bodies arrive as raw JSON. [`ProductSchema::load`] keeps the four
//! writable fields (`name`, `description`, `price`, `stock`), type-checks them,
//! and drops everything else, including `id`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::models::{NewProduct, ProductPatch};

/// Upper bound on `name`, matching the `VARCHAR(150)` column.
pub const NAME_MAX_LEN: usize = 150;

/// `price` is stored as `NUMERIC(10, 2)`.
const PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 100_000_000;

const SCHEMA_KEY: &str = "_schema";

const MISSING: &str = "Missing data for required field.";
const NULL_NOT_ALLOWED: &str = "Field may not be null.";
const INVALID_INPUT: &str = "Invalid input type.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_NUMBER: &str = "Not a valid number.";
const NOT_AN_INTEGER: &str = "Not a valid integer.";

/// Whether every required field must be present (create) or any subset will do (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
  Full,
  Partial,
}

/// Field name to messages, serialized as `{"price": ["Not a valid number."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// An error about the payload as a whole rather than one field.
  pub fn schema(message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.add(SCHEMA_KEY, message);
    errors
  }

  pub fn add(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_string()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, field: &str) -> Option<&[String]> {
    self.0.get(field).map(Vec::as_slice)
  }

  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, messages) in &self.0 {
      if !first {
        write!(f, "; ")?;
      }
      first = false;
      write!(f, "{}: {}", field, messages.join(" "))?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

pub struct ProductSchema;

impl ProductSchema {
  /// Validates `input` and returns only the recognized fields that were present.
  ///
  /// In [`LoadMode::Partial`] absent fields stay `None` in the returned patch;
  /// they are never defaulted. All offending fields are reported together.
  pub fn load(input: &Value, mode: LoadMode) -> Result<ProductPatch, ValidationErrors> {
    let Some(object) = input.as_object() else {
      return Err(ValidationErrors::schema(INVALID_INPUT));
    };

    let mut errors = ValidationErrors::new();
    let mut patch = ProductPatch::default();

    match object.get("name") {
      None if mode == LoadMode::Full => errors.add("name", MISSING),
      None => {}
      Some(Value::Null) => errors.add("name", NULL_NOT_ALLOWED),
      Some(Value::String(name)) if name.chars().count() > NAME_MAX_LEN => {
        errors.add("name", format!("Longer than maximum length {}.", NAME_MAX_LEN))
      }
      Some(Value::String(name)) => patch.name = Some(name.clone()),
      Some(_) => errors.add("name", NOT_A_STRING),
    }

    match object.get("description") {
      None => {}
      Some(Value::Null) => patch.description = Some(None),
      Some(Value::String(description)) => patch.description = Some(Some(description.clone())),
      Some(_) => errors.add("description", NOT_A_STRING),
    }

    match object.get("price") {
      None => {}
      Some(Value::Null) => patch.price = Some(None),
      Some(Value::Number(number)) => match parse_price(number) {
        Ok(price) => patch.price = Some(Some(price)),
        Err(message) => errors.add("price", message),
      },
      Some(_) => errors.add("price", NOT_A_NUMBER),
    }

    // Negative stock is accepted here; the table's check constraint rejects it.
    match object.get("stock") {
      None => {}
      Some(Value::Null) => patch.stock = Some(None),
      Some(Value::Number(number)) => match number.as_i64().and_then(|n| i32::try_from(n).ok()) {
        Some(stock) => patch.stock = Some(Some(stock)),
        None => errors.add("stock", NOT_AN_INTEGER),
      },
      Some(_) => errors.add("stock", NOT_AN_INTEGER),
    }

    if errors.is_empty() {
      Ok(patch)
    } else {
      Err(errors)
    }
  }

  /// Full-mode load for a create request.
  pub fn load_new(input: &Value) -> Result<NewProduct, ValidationErrors> {
    let fields = Self::load(input, LoadMode::Full)?;
    let Some(name) = fields.name else {
      let mut errors = ValidationErrors::new();
      errors.add("name", MISSING);
      return Err(errors);
    };

    Ok(NewProduct {
      name,
      description: fields.description.flatten(),
      price: fields.price.flatten(),
      stock: fields.stock.flatten(),
    })
  }

  /// Decodes a raw request body. Unparsable input is reported under `_schema`.
  pub fn parse_body(body: &[u8]) -> Result<Value, ValidationErrors> {
    serde_json::from_slice(body).map_err(|e| ValidationErrors::schema(format!("Invalid JSON: {}", e)))
  }

  /// Partial-mode load for an update request.
  pub fn load_patch(input: &Value) -> Result<ProductPatch, ValidationErrors> {
    Self::load(input, LoadMode::Partial)
  }
}

fn parse_price(number: &Number) -> Result<Decimal, &'static str> {
  let text = number.to_string();
  let price = Decimal::from_str(&text)
    .or_else(|_| Decimal::from_scientific(&text))
    .map_err(|_| NOT_A_NUMBER)?
    .round_dp(PRICE_SCALE);

  if price.abs() >= Decimal::from(PRICE_LIMIT) {
    return Err("Number out of range.");
  }
  Ok(price)
}
