use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;

/// 整數或浮點數；整數運算溢位時提升為浮點數
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    #[cfg(test)]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", FloatDisplay(*v)),
        }
    }
}

/// 浮點數輸出格式比照 Python repr：整數值補上 `.0`，
/// 絕對值 >= 1e16 或 < 1e-4 時改用科學記號（`1e+16`、`1.5e-05`）
pub struct FloatDisplay(pub f64);

impl fmt::Display for FloatDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }

        let magnitude = v.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            // Rust 的 `{:e}` 產生 `1.5e-5`，Python 為 `1.5e-05`
            let formatted = format!("{:e}", v);
            let parts = formatted
                .split_once('e')
                .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
            return match parts {
                Some((mantissa, exponent)) => {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
                }
                None => f.write_str(&formatted),
            };
        }

        if v.fract() == 0.0 {
            write!(f, "{:.1}", v)
        } else {
            write!(f, "{}", v)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub version: String,
    pub environment: String,
    pub status: String,
}

/// 一次示範執行的完整結果
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub a: Number,
    pub b: Number,
    pub sum: Number,
    pub product: Number,
    pub quotient: f64,
    pub factorial_input: i64,
    #[serde(serialize_with = "serialize_biguint")]
    pub factorial_result: BigUint,
    pub prime_candidates: Vec<i64>,
    pub primes: Vec<i64>,
    pub greeting: String,
    pub app: AppInfo,
}

fn serialize_biguint<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_str_radix(10))
}
