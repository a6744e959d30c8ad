/// 單變數實函數 f: R -> R。
///
/// Root finder 只透過此 trait 取值；實作必須是純函數（同樣的 x 永遠回傳同樣的值），
/// 否則 Brent-Dekker 的收斂保證不成立。
pub trait ScalarFunction {
    fn apply(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shifted {
        offset: f64,
    }

    impl ScalarFunction for Shifted {
        fn apply(&self, x: f64) -> f64 {
            x - self.offset
        }
    }

    #[test]
    fn test_closure_is_scalar_function() {
        let f = |x: f64| 2.0 * x + 1.0;
        assert_eq!(f.apply(3.0), 7.0);
    }

    #[test]
    fn test_struct_is_scalar_function() {
        let f = Shifted { offset: 0.5 };
        let dyn_f: &dyn ScalarFunction = &f;
        assert_eq!(dyn_f.apply(2.0), 1.5);
    }
}
