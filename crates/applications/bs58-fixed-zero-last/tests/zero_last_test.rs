use bs58_fixed_zero_last::{
    Bs58Pk, DecodeError, ZeroLastError, ZeroLastObj, ZeroLastOptObj, ZeroLastVecObj, zero_last,
    zero_last_json, zero_last_obj, zero_last_opt, zero_last_opt_obj, zero_last_ref, zero_last_str,
    zero_last_vec, zero_last_vec_obj,
};
use serde_json::json;

const ALL_ONES: &str = "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi";
const ALL_ONES_ZERO_LAST: &str = "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKh";
const ALL_ZEROS: &str = "11111111111111111111111111111111";

fn all_ones() -> Bs58Pk {
    ALL_ONES.parse().expect("Couldn't parse ALL_ONES")
}

#[test]
fn zero_last_by_value() {
    assert_eq!(zero_last(all_ones()).to_string(), ALL_ONES_ZERO_LAST);
}

#[test]
fn zero_last_by_ref() {
    let key = all_ones();
    assert_eq!(zero_last_ref(&key).to_string(), ALL_ONES_ZERO_LAST);
    // the input is left as it was
    assert_eq!(key.to_string(), ALL_ONES);
}

#[test]
fn zero_last_opt_none() {
    assert_eq!(zero_last_opt(None).to_string(), ALL_ZEROS);
}

#[test]
fn zero_last_opt_some() {
    assert_eq!(zero_last_opt(Some(all_ones())).to_string(), ALL_ONES_ZERO_LAST);
}

#[test]
fn zero_last_vec_single() {
    let out = zero_last_vec(&[all_ones()]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].to_string(), ALL_ONES_ZERO_LAST);
}

#[test]
fn zero_last_vec_preserves_order() {
    let zero = Bs58Pk::default();
    let out = zero_last_vec(&[all_ones(), zero, all_ones()]);
    let out: Vec<String> = out.iter().map(ToString::to_string).collect();
    assert_eq!(out, [ALL_ONES_ZERO_LAST, ALL_ZEROS, ALL_ONES_ZERO_LAST]);

    assert!(zero_last_vec(&[]).is_empty());
}

#[test]
fn zero_last_string() {
    assert_eq!(zero_last_str(ALL_ONES).unwrap(), ALL_ONES_ZERO_LAST);
    assert_eq!(zero_last_str(ALL_ZEROS).unwrap(), ALL_ZEROS);
}

#[test]
fn zero_last_string_errors() {
    for bad in ["0", "O", "I", "l"] {
        assert!(
            matches!(
                zero_last_str(bad),
                Err(ZeroLastError::Decode(DecodeError::InvalidCharacter { position: 0, .. }))
            ),
            "{bad:?} should be rejected"
        );
    }

    let too_long = format!("1{ALL_ONES}");
    assert!(matches!(
        zero_last_str(&too_long),
        Err(ZeroLastError::Decode(DecodeError::LengthMismatch(33)))
    ));
}

#[test]
fn zero_last_record() {
    let input: ZeroLastObj = serde_json::from_value(json!({ "arg": ALL_ONES })).unwrap();
    let output = serde_json::to_value(zero_last_obj(input)).unwrap();
    assert_eq!(output, json!({ "arg": ALL_ONES_ZERO_LAST }));
}

#[test]
fn zero_last_opt_record_none() {
    for input in [json!({}), json!({ "arg": null })] {
        let input: ZeroLastOptObj = serde_json::from_value(input).unwrap();
        let output = serde_json::to_value(zero_last_opt_obj(input)).unwrap();
        assert_eq!(output, json!({ "arg": ALL_ZEROS }));
    }
}

#[test]
fn zero_last_opt_record_some() {
    let input: ZeroLastOptObj = serde_json::from_value(json!({ "arg": ALL_ONES })).unwrap();
    let output = serde_json::to_value(zero_last_opt_obj(input)).unwrap();
    assert_eq!(output, json!({ "arg": ALL_ONES_ZERO_LAST }));
}

#[test]
fn zero_last_vec_record() {
    let input: ZeroLastVecObj = serde_json::from_value(json!({ "arg": [ALL_ONES] })).unwrap();
    let output = serde_json::to_value(zero_last_vec_obj(input)).unwrap();
    assert_eq!(output, json!({ "arg": [ALL_ONES_ZERO_LAST] }));
}

#[test]
fn zero_last_record_rejects_bad_key() {
    let result = serde_json::from_value::<ZeroLastObj>(json!({ "arg": "0" }));
    assert!(result.is_err());
}

#[test]
fn zero_last_json_shapes() {
    let cases = [
        (json!(ALL_ONES), json!(ALL_ONES_ZERO_LAST)),
        (json!(null), json!(ALL_ZEROS)),
        (json!([ALL_ONES, ALL_ZEROS]), json!([ALL_ONES_ZERO_LAST, ALL_ZEROS])),
        (json!({ "arg": ALL_ONES }), json!({ "arg": ALL_ONES_ZERO_LAST })),
        (json!({ "arg": null }), json!({ "arg": ALL_ZEROS })),
        (json!({}), json!({ "arg": ALL_ZEROS })),
        (json!({ "arg": [ALL_ONES] }), json!({ "arg": [ALL_ONES_ZERO_LAST] })),
    ];

    for (input, expected) in cases {
        let output = zero_last_json(&input.to_string()).unwrap();
        let output: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output, expected, "input {input}");
    }
}

#[test]
fn zero_last_json_bad_key() {
    let err = zero_last_json(r#"{"arg": ["I"]}"#).unwrap_err();
    assert!(matches!(err, ZeroLastError::Json(_)));
    assert!(err.to_string().contains("Invalid base58 character 'I'"));
}
