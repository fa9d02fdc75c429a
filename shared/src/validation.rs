use std::fmt;

/// A raw form value, as text or as a coerced number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A value together with the constraints it has to satisfy.
///
/// Length bounds only apply to text and numeric bounds only to numbers. All
/// bounds are exclusive: a `min_length` of 2 rejects `"ab"`, a `min` of 0
/// rejects `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<Value>) -> Self {
        Validatable {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Checks every constraint present on `input`; true only if all pass.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.to_string().trim().is_empty();
    }

    if let Value::Text(text) = &input.value {
        // browser string length, in UTF-16 code units
        let len = text.encode_utf16().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && len > min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && len < max_length;
        }
    }

    if let Value::Number(n) = input.value {
        // comparisons with NaN are false, so NaN fails any bound
        if let Some(min) = input.min {
            is_valid = is_valid && n > min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && n < max;
        }
    }

    is_valid
}
