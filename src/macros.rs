/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Array elements and object values are
/// literals, nested brackets or braces, or a negated number. Any other expression
/// is converted with
/// [`to_value`](crate::to_value), falling back to `null` if it cannot be serialized.
///
/// ```rust
/// use serde_jsonpointer::{value, Value};
///
/// let doc = value!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "nested": { "empty": [] },
///     "none": null
/// });
/// assert!(doc.is_object());
/// assert_eq!(value!([]), Value::Array(vec![]));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::value!(@array [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Map::new();
        $crate::value!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    // Array elements, collected one at a time so `-1` stays a single element
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };

    (@array [$($elems:expr,)*] - $num:literal $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!(-$num),] $($($rest)*)?)
    };

    (@array [$($elems:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!($next),] $($($rest)*)?)
    };

    // Object members
    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::value!(-$num));
        $crate::value!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::value!($value));
        $crate::value!(@object $object $($($rest)*)?);
    };

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_nesting() {
        let doc = value!({ "a": [1, { "b": null }], "": {} });
        let mut inner = Map::new();
        inner.insert("b".to_string(), Value::Null);
        let mut expected = Map::new();
        expected.insert(
            "a".to_string(),
            Value::Array(vec![Value::from(1), Value::Object(inner)]),
        );
        expected.insert(String::new(), Value::Object(Map::new()));
        assert_eq!(doc, Value::Object(expected));
    }

    #[test]
    fn test_value_macro_negative_members() {
        assert_eq!(
            value!([-1, 2, -3.5]),
            Value::Array(vec![Value::from(-1), Value::from(2), Value::from(-3.5)])
        );

        let doc = value!({ "a": -1, "b": [-2], });
        assert_eq!(doc.to_string(), r#"{"a":-1,"b":[-2]}"#);
    }

    #[test]
    fn test_value_macro_expression_fallback() {
        let tags = vec!["x", "y"];
        assert_eq!(value!(tags), Value::Array(vec![Value::from("x"), Value::from("y")]));
    }
}
