use super::*;
use std::env::VarError;

env_var! {
    struct MyFunctionId;
}

#[test]
fn it_reads_the_snake_upper_name() {
    assert_eq!(MyFunctionId::NAME, "MY_FUNCTION_ID");

    let value = with_mock_env(
        |name| match name {
            "MY_FUNCTION_ID" => Ok("fn-1".to_string()),
            _ => Err(VarError::NotPresent),
        },
        MyFunctionId::new,
    )
    .unwrap();

    assert_eq!(&*value, "fn-1");
    assert_eq!(value.into_string(), "fn-1");
}

#[test]
fn missing_var_reports_its_name() {
    let err = with_mock_env(|_| Err(VarError::NotPresent), MyFunctionId::new).unwrap_err();
    assert_eq!(err.var_name(), "MY_FUNCTION_ID");
    assert!(err.is_not_present());
    assert!(err.to_string().contains("MY_FUNCTION_ID"));
}

#[test]
fn optional_maps_not_present_to_none() {
    let value = with_mock_env(|_| Err(VarError::NotPresent), MyFunctionId::optional).unwrap();
    assert!(value.is_none());
}

#[test]
fn optional_still_fails_on_invalid_unicode() {
    let res = with_mock_env(
        |_| Err(VarError::NotUnicode(std::ffi::OsString::from("x"))),
        MyFunctionId::optional,
    );
    assert!(res.is_err());
}
