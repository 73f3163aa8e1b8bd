use crate::domain::model::Number;
use crate::utils::error::{DemoError, Result};

/// 加法：兩個整數得整數，任一為浮點數則得浮點數
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 + y as f64)),
        (x, y) => Number::Float(x.as_f64() + y.as_f64()),
    }
}

/// 乘法，型別提升規則同 [`add`]
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 * y as f64)),
        (x, y) => Number::Float(x.as_f64() * y.as_f64()),
    }
}

/// 真除法（不取整）；先檢查除數，`0`、`0.0`、`-0.0` 一律回傳錯誤
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<f64> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(DemoError::DivisionByZero);
    }
    Ok(a.as_f64() / b.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), Number::Int(5));
        assert_eq!(add(-1, 1), Number::Int(0));
        assert_eq!(add(0, 0), Number::Int(0));
        assert_eq!(add(-5, -3), Number::Int(-8));
        assert_eq!(add(999_999, 1), Number::Int(1_000_000));
    }

    #[test]
    fn test_add_promotes_to_float() {
        assert_eq!(add(1, 0.5), Number::Float(1.5));
        assert_eq!(add(2.5, 2), Number::Float(4.5));
        assert!(add(i64::MAX, 1i64).is_float());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3, 4), Number::Int(12));
        assert_eq!(multiply(-2, 3), Number::Int(-6));
        assert_eq!(multiply(0, 5), Number::Int(0));
        assert_eq!(multiply(-2, -3), Number::Int(6));
        assert_eq!(multiply(1.5, 2), Number::Float(3.0));
        assert!(multiply(i64::MAX, 2i64).is_float());
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 2).unwrap(), 5.0);
        assert_eq!(divide(9, 3).unwrap(), 3.0);
        assert_eq!(divide(-6, 2).unwrap(), -3.0);
        assert!((divide(7, 3).unwrap() - 2.333_333_333_333_333).abs() < 1e-12);
        assert!((divide(1, 3).unwrap() - 0.333_333_333_333_333_3).abs() < 1e-10);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(5, 0), Err(DemoError::DivisionByZero)));
        assert!(matches!(divide(5.0, 0.0), Err(DemoError::DivisionByZero)));
        assert!(matches!(divide(5, -0.0), Err(DemoError::DivisionByZero)));
        assert!(matches!(divide(0, 0), Err(DemoError::DivisionByZero)));
    }
}
