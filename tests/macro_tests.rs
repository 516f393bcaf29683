use serde_jsonpointer::{get, value, Map, Number, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(
        value!("hello world"),
        Value::String("hello world".to_string())
    );
    assert_eq!(value!(""), Value::String(String::new()));
    assert_eq!(value!("a/b~c"), Value::String("a/b~c".to_string()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    assert_eq!(
        value!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_negative_numbers_in_containers() {
    assert_eq!(
        value!([-1, 0, -2.5]),
        Value::Array(vec![
            Value::Number(Number::Integer(-1)),
            Value::Number(Number::Integer(0)),
            Value::Number(Number::Float(-2.5)),
        ])
    );

    let doc = value!({
        "offset": -3,
        "points": [[-1, -2], { "z": -0.5 }]
    });
    assert_eq!(get(&doc, "/offset").unwrap(), &value!(-3));
    assert_eq!(get(&doc, "/points/0/1").unwrap(), &value!(-2));
    assert_eq!(get(&doc, "/points/1/z").unwrap(), &value!(-0.5));
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let simple = value!({
        "name": "Alice",
        "age": 30
    });

    match simple {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 2);
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("age"), Some(&Value::Number(Number::Integer(30))));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_value_macro_keeps_key_order() {
    let doc = value!({ "z": 1, "a": 2, "m": 3 });
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_value_macro_pointer_unfriendly_keys() {
    let doc = value!({
        "": 0,
        "a/b": 1,
        "m~n": 8,
        " ": 7
    });

    assert_eq!(get(&doc, "/").unwrap(), &value!(0));
    assert_eq!(get(&doc, "/a~1b").unwrap(), &value!(1));
    assert_eq!(get(&doc, "/m~0n").unwrap(), &value!(8));
    assert_eq!(get(&doc, "/ ").unwrap(), &value!(7));
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    assert_eq!(get(&nested, "/user/id").unwrap(), &value!(123));
    assert_eq!(get(&nested, "/user/name").unwrap(), &value!("Bob"));
    assert_eq!(get(&nested, "/user/active").unwrap(), &value!(true));
    assert_eq!(get(&nested, "/tags/1").unwrap(), &value!("developer"));
    assert_eq!(get(&nested, "/count").unwrap(), &value!(42));
}

#[test]
fn test_value_macro_expression_fallback() {
    let tags = vec!["x", "y"];
    assert_eq!(value!(tags), value!(["x", "y"]));

    let maybe: Option<u8> = None;
    assert_eq!(value!(maybe), Value::Null);
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());
    assert!(!null_val.is_container());

    let bool_val = value!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert!(array_val.is_container());
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = value!({"key": "value"});
    assert!(obj_val.is_object());
    assert!(obj_val.is_container());
    assert_eq!(obj_val.as_object().unwrap().len(), 1);
}
