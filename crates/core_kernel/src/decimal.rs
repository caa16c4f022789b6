//! Decimal engine with precise, total arithmetic
//!
//! This module provides the arithmetic substrate for all monetary computation.
//! Values arrive from the document store and the API in several shapes (native
//! numbers, locale-formatted strings, high-precision wire objects) and are
//! normalized into rust_decimal before any arithmetic happens, so running sums
//! over thousands of movements never accumulate binary floating-point error.
//!
//! Every operation is total: malformed input degrades to zero with a warning
//! instead of failing, because a reporting surface must always render
//! something plausible from partial or messy data.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field name used by the document database wire format for high-precision
/// decimals, e.g. `{ "$numberDecimal": "123.45" }`.
pub const WIRE_DECIMAL_FIELD: &str = "$numberDecimal";

/// Default number of fractional digits kept on intermediate results.
pub const DEFAULT_SCALE: u32 = 20;

/// High-precision decimal as serialized by the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDecimal {
    #[serde(rename = "$numberDecimal")]
    pub value: String,
}

/// A monetary or quantity scalar in any of the source forms the system
/// accepts.
///
/// The set of variants is closed: every numeric field in a stored document
/// maps onto exactly one of these, and [`DecimalEngine::normalize`] turns any
/// of them into a canonical `Decimal`. Absent and null fields are `Missing`
/// and normalize to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    /// Absent, null, or empty input; the additive identity.
    #[default]
    Missing,
    /// A native floating-point number.
    Number(f64),
    /// A numeric string, possibly with a comma decimal separator and
    /// whitespace thousand separators.
    Text(String),
    /// The document database high-precision wire format.
    Wire(WireDecimal),
    /// A decimal already produced inside this process.
    Exact(Decimal),
}

impl NumericInput {
    /// Wraps a decimal string in the wire format.
    pub fn wire(value: impl Into<String>) -> Self {
        Self::Wire(WireDecimal {
            value: value.into(),
        })
    }

    /// Classifies an arbitrary JSON value into a source form.
    ///
    /// Objects are checked for the wire-format field first; anything else
    /// falls through to its string rendering, which either parses as a
    /// numeral later or degrades to zero.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Missing,
            serde_json::Value::Number(n) => {
                n.as_f64().map(Self::Number).unwrap_or(Self::Missing)
            }
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Object(map) => match map.get(WIRE_DECIMAL_FIELD) {
                Some(serde_json::Value::String(s)) => Self::Wire(WireDecimal {
                    value: s.clone(),
                }),
                _ => Self::Text(value.to_string()),
            },
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, ""),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Wire(w) => write!(f, "{}", w.value),
            Self::Exact(d) => write!(f, "{}", d),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

impl<T> From<Option<T>> for NumericInput
where
    T: Into<NumericInput>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

impl Serialize for NumericInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_unit(),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Wire(w) => w.serialize(serializer),
            Self::Exact(d) => serializer.serialize_str(&d.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Arithmetic context for monetary computation
///
/// Precision and rounding are explicit construction parameters rather than
/// process-global state. The defaults (20 fractional digits of intermediate
/// precision, round-half-up) apply everywhere unless a caller needs
/// otherwise; rounding is uniform across every division and formatting path
/// so a displayed total always reconciles with its displayed components.
#[derive(Debug, Clone, Copy)]
pub struct DecimalEngine {
    scale: u32,
    rounding: RoundingStrategy,
}

impl Default for DecimalEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl DecimalEngine {
    /// Creates an engine with the given intermediate scale and rounding
    /// strategy. Scale is capped at rust_decimal's maximum of 28.
    pub fn new(scale: u32, rounding: RoundingStrategy) -> Self {
        Self {
            scale: scale.min(28),
            rounding,
        }
    }

    /// Intermediate scale (fractional digits) of this engine.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Converts any supported source form to a canonical decimal.
    ///
    /// Never fails: unparseable input (including non-finite floats) returns
    /// zero and emits a warning, so aggregation is never blocked by a single
    /// malformed field.
    pub fn normalize(&self, value: &NumericInput) -> Decimal {
        match value {
            NumericInput::Missing => Decimal::ZERO,
            NumericInput::Exact(d) => *d,
            NumericInput::Number(n) => {
                if !n.is_finite() {
                    tracing::warn!(value = %n, "non-finite number normalized to zero");
                    return Decimal::ZERO;
                }
                Decimal::from_f64(*n).unwrap_or_else(|| {
                    tracing::warn!(value = %n, "unrepresentable number normalized to zero");
                    Decimal::ZERO
                })
            }
            NumericInput::Text(s) => self.parse_numeral(s).unwrap_or_else(|| {
                tracing::warn!(raw = %s, "unparseable numeric string normalized to zero");
                Decimal::ZERO
            }),
            NumericInput::Wire(w) => self.parse_numeral(&w.value).unwrap_or_else(|| {
                tracing::warn!(raw = %w.value, "unparseable wire decimal normalized to zero");
                Decimal::ZERO
            }),
        }
    }

    /// Parses a numeral, tolerating whitespace thousand separators and a
    /// comma decimal separator. Empty input is the additive identity.
    fn parse_numeral(&self, raw: &str) -> Option<Decimal> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        if cleaned.is_empty() {
            return Some(Decimal::ZERO);
        }

        Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .ok()
    }

    fn bound(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.scale, self.rounding)
    }

    /// Adds two values at full precision.
    pub fn add(&self, a: &NumericInput, b: &NumericInput) -> Decimal {
        match self.normalize(a).checked_add(self.normalize(b)) {
            Some(sum) => self.bound(sum),
            None => {
                tracing::warn!("decimal addition overflowed, result degraded to zero");
                Decimal::ZERO
            }
        }
    }

    /// Subtracts `b` from `a` at full precision.
    pub fn subtract(&self, a: &NumericInput, b: &NumericInput) -> Decimal {
        match self.normalize(a).checked_sub(self.normalize(b)) {
            Some(diff) => self.bound(diff),
            None => {
                tracing::warn!("decimal subtraction overflowed, result degraded to zero");
                Decimal::ZERO
            }
        }
    }

    /// Multiplies two values at full precision.
    pub fn multiply(&self, a: &NumericInput, b: &NumericInput) -> Decimal {
        match self.normalize(a).checked_mul(self.normalize(b)) {
            Some(product) => self.bound(product),
            None => {
                tracing::warn!("decimal multiplication overflowed, result degraded to zero");
                Decimal::ZERO
            }
        }
    }

    /// Divides `a` by `b`.
    ///
    /// A normalized-zero divisor yields zero rather than a fault: reporting
    /// contexts prefer a degraded zero over a crashed aggregation. Callers
    /// relying on a distinct "no denominator" signal must check the divisor
    /// themselves before calling.
    pub fn divide(&self, a: &NumericInput, b: &NumericInput) -> Decimal {
        let divisor = self.normalize(b);
        if divisor.is_zero() {
            return Decimal::ZERO;
        }
        match self.normalize(a).checked_div(divisor) {
            Some(quotient) => self.bound(quotient),
            None => {
                tracing::warn!("decimal division overflowed, result degraded to zero");
                Decimal::ZERO
            }
        }
    }

    /// Total ordering of two values after normalization.
    pub fn compare(&self, a: &NumericInput, b: &NumericInput) -> Ordering {
        self.normalize(a).cmp(&self.normalize(b))
    }

    /// Lossy conversion for presentation-only consumers (chart libraries).
    ///
    /// Never use the result for further arithmetic; feed `NumericInput`
    /// values back through the engine instead.
    pub fn to_number(&self, value: &NumericInput) -> f64 {
        self.normalize(value).to_f64().unwrap_or(0.0)
    }

    /// Fixed-point formatting with round-half-up, for display.
    pub fn to_fixed(&self, value: &NumericInput, places: u32) -> String {
        let mut rounded = self
            .normalize(value)
            .round_dp_with_strategy(places, self.rounding);
        rounded.rescale(places);
        rounded.to_string()
    }

    /// Returns true if the value normalizes to a strictly positive decimal.
    pub fn gt_zero(&self, value: &NumericInput) -> bool {
        self.normalize(value) > Decimal::ZERO
    }

    /// Returns true if the value normalizes to zero.
    pub fn is_zero(&self, value: &NumericInput) -> bool {
        self.normalize(value).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engine() -> DecimalEngine {
        DecimalEngine::default()
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(engine().normalize(&NumericInput::Number(123.45)), dec!(123.45));
    }

    #[test]
    fn test_normalize_text_with_comma_separator() {
        assert_eq!(engine().normalize(&"123,45".into()), dec!(123.45));
    }

    #[test]
    fn test_normalize_text_with_thousand_separators() {
        assert_eq!(engine().normalize(&"1 234 567,89".into()), dec!(1234567.89));
        assert_eq!(engine().normalize(&"1\u{a0}234,50".into()), dec!(1234.50));
    }

    #[test]
    fn test_normalize_wire_format() {
        assert_eq!(engine().normalize(&NumericInput::wire("99.9999")), dec!(99.9999));
    }

    #[test]
    fn test_normalize_missing_and_empty_are_zero() {
        assert_eq!(engine().normalize(&NumericInput::Missing), Decimal::ZERO);
        assert_eq!(engine().normalize(&"".into()), Decimal::ZERO);
        assert_eq!(engine().normalize(&"   ".into()), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_malformed_degrades_to_zero() {
        assert_eq!(engine().normalize(&"not a number".into()), Decimal::ZERO);
        assert_eq!(engine().normalize(&NumericInput::Number(f64::NAN)), Decimal::ZERO);
        assert_eq!(engine().normalize(&NumericInput::Number(f64::INFINITY)), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_scientific_notation() {
        assert_eq!(engine().normalize(&"1.5e3".into()), dec!(1500));
    }

    #[test]
    fn test_from_json_dispatch() {
        let wire = serde_json::json!({ "$numberDecimal": "10.01" });
        assert_eq!(
            NumericInput::from_json(&wire),
            NumericInput::wire("10.01")
        );
        assert_eq!(
            NumericInput::from_json(&serde_json::Value::Null),
            NumericInput::Missing
        );
        assert_eq!(
            NumericInput::from_json(&serde_json::json!("42")),
            NumericInput::Text("42".to_string())
        );
    }

    #[test]
    fn test_from_json_unrecognized_object_becomes_text() {
        let value = serde_json::json!({ "foo": "bar" });
        let input = NumericInput::from_json(&value);
        // Stringified object does not parse, so it degrades to zero.
        assert_eq!(engine().normalize(&input), Decimal::ZERO);
    }

    #[test]
    fn test_divide_by_zero_is_zero() {
        let e = engine();
        assert_eq!(e.divide(&"10".into(), &"0".into()), Decimal::ZERO);
        assert_eq!(e.divide(&"10".into(), &NumericInput::Missing), Decimal::ZERO);
        assert_eq!(e.divide(&"10".into(), &"garbage".into()), Decimal::ZERO);
    }

    #[test]
    fn test_divide_full_precision() {
        let e = engine();
        let third = e.divide(&"1".into(), &"3".into());
        assert_eq!(third, dec!(0.33333333333333333333));
    }

    #[test]
    fn test_add_mixed_source_forms() {
        let e = engine();
        let sum = e.add(&NumericInput::Number(0.1), &NumericInput::wire("0.2"));
        assert_eq!(sum, dec!(0.3));
    }

    #[test]
    fn test_compare() {
        let e = engine();
        assert_eq!(e.compare(&"1,50".into(), &"1.5".into()), Ordering::Equal);
        assert_eq!(e.compare(&"2".into(), &"10".into()), Ordering::Less);
        assert_eq!(e.compare(&"-1".into(), &NumericInput::Missing), Ordering::Less);
    }

    #[test]
    fn test_to_fixed_rounds_half_up() {
        let e = engine();
        assert_eq!(e.to_fixed(&"2.345".into(), 2), "2.35");
        assert_eq!(e.to_fixed(&"2.344".into(), 2), "2.34");
        assert_eq!(e.to_fixed(&"-2.345".into(), 2), "-2.35");
        assert_eq!(e.to_fixed(&"7".into(), 2), "7.00");
    }

    #[test]
    fn test_to_number_presentation() {
        let e = engine();
        assert!((e.to_number(&"123.45".into()) - 123.45).abs() < 1e-9);
        assert_eq!(e.to_number(&NumericInput::Missing), 0.0);
    }

    #[test]
    fn test_predicates() {
        let e = engine();
        assert!(e.gt_zero(&"0.0001".into()));
        assert!(!e.gt_zero(&"-5".into()));
        assert!(e.is_zero(&NumericInput::Missing));
        assert!(e.is_zero(&"0,00".into()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let input: NumericInput = serde_json::from_str("\"12,5\"").unwrap();
        assert_eq!(input, NumericInput::Text("12,5".to_string()));

        let wire: NumericInput =
            serde_json::from_str(r#"{"$numberDecimal":"12.5"}"#).unwrap();
        assert_eq!(wire, NumericInput::wire("12.5"));

        let null: NumericInput = serde_json::from_str("null").unwrap();
        assert_eq!(null, NumericInput::Missing);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn cents() -> impl Strategy<Value = Decimal> {
        (-1_000_000_000i64..1_000_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #[test]
        fn addition_is_commutative(a in cents(), b in cents()) {
            let e = DecimalEngine::default();
            prop_assert_eq!(
                e.add(&a.into(), &b.into()),
                e.add(&b.into(), &a.into())
            );
        }

        #[test]
        fn addition_is_associative(a in cents(), b in cents(), c in cents()) {
            let e = DecimalEngine::default();
            let ab_c = e.add(&e.add(&a.into(), &b.into()).into(), &c.into());
            let a_bc = e.add(&a.into(), &e.add(&b.into(), &c.into()).into());
            prop_assert_eq!(ab_c, a_bc);
        }

        #[test]
        fn normalization_is_idempotent(a in cents()) {
            let e = DecimalEngine::default();
            let once = e.normalize(&a.into());
            let twice = e.normalize(&once.to_string().into());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn division_by_zero_is_always_zero(a in cents()) {
            let e = DecimalEngine::default();
            prop_assert_eq!(e.divide(&a.into(), &Decimal::ZERO.into()), Decimal::ZERO);
        }

        #[test]
        fn to_number_roundtrips_within_tolerance(n in -1_000_000i64..1_000_000i64) {
            let e = DecimalEngine::default();
            let d = Decimal::new(n, 2);
            let back = e.to_number(&d.into());
            let direct = n as f64 / 100.0;
            prop_assert!((back - direct).abs() < 1e-6);
        }
    }
}
