use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// La Secuencia (Sequence): la lista ordenada de valores numéricos de una corrida.
///
/// Es inmutable durante toda la corrida: el total se fija al construirla
/// y nunca cambia. Los llamadores con datos ya tipados usan `From<Vec<f64>>`;
/// los que reciben entrada dinámica (JSON de un frontend, un comando, etc.)
/// usan `parse`, que valida TODO antes de que el procesamiento empiece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence(Vec<f64>);

impl Sequence {
  /// Valida una entrada dinámica y la convierte en `Sequence`.
  ///
  /// Reglas (fail-fast, sin efectos parciales):
  /// - el valor debe ser un array JSON,
  /// - cada elemento debe ser numérico.
  pub fn parse(input: &Value) -> Result<Self, CoreError> {
    let Some(items) = input.as_array() else {
      return Err(CoreError::InvalidInput("expected a list of numbers".to_string()));
    };

    let mut values = Vec::with_capacity(items.len());

    for item in items {
      match item.as_f64() {
        Some(n) => values.push(n),
        None => {
          return Err(CoreError::InvalidInput("list must contain only numbers".to_string()));
        }
      }
    }

    Ok(Sequence(values))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn values(&self) -> &[f64] {
    &self.0
  }
}

impl From<Vec<f64>> for Sequence {
  fn from(values: Vec<f64>) -> Self {
    Sequence(values)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_rejects_non_array() {
    let err = Sequence::parse(&json!("invalid input")).unwrap_err();
    assert!(err.to_string().contains("expected a list of numbers"));
  }

  #[test]
  fn test_parse_rejects_non_numeric_element() {
    let err = Sequence::parse(&json!([1, "two", 3])).unwrap_err();
    assert!(err.to_string().contains("list must contain only numbers"));
  }

  #[test]
  fn test_parse_accepts_numbers() {
    let seq = Sequence::parse(&json!([1, 2.5, -3])).unwrap();
    assert_eq!(seq.values(), &[1.0, 2.5, -3.0]);
    assert_eq!(seq.len(), 3);
  }

  #[test]
  fn test_parse_accepts_empty_array() {
    let seq = Sequence::parse(&json!([])).unwrap();
    assert!(seq.is_empty());
  }
}
