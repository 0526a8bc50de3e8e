//! Record shapes of the transform, `{"arg": ...}` in JSON

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{Bs58Pk, Result, ZeroLastError, zero_last, zero_last_opt, zero_last_vec};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZeroLastObj {
    pub arg: Bs58Pk,
}

/// A missing or `null` `arg` is the absent key
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZeroLastOptObj {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<Bs58Pk>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZeroLastVecObj {
    pub arg: Vec<Bs58Pk>,
}

pub fn zero_last_obj(ZeroLastObj { arg }: ZeroLastObj) -> ZeroLastObj {
    ZeroLastObj {
        arg: zero_last(arg),
    }
}

/// Always returns a present key, see [`zero_last_opt`]
pub fn zero_last_opt_obj(ZeroLastOptObj { arg }: ZeroLastOptObj) -> ZeroLastObj {
    ZeroLastObj {
        arg: zero_last_opt(arg),
    }
}

pub fn zero_last_vec_obj(ZeroLastVecObj { arg }: ZeroLastVecObj) -> ZeroLastVecObj {
    ZeroLastVecObj {
        arg: zero_last_vec(&arg),
    }
}

/// Applies the transform to a JSON document and returns the transformed document.
///
/// Accepted shapes:
/// - `"<key>"` and `null` (absent key)
/// - `["<key>", ...]`
/// - `{"arg": "<key>"}`, `{"arg": null}`, `{}` and `{"arg": ["<key>", ...]}`
pub fn zero_last_json(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;

    let output = match value {
        Value::Null => {
            debug!("absent key");
            serde_json::to_value(zero_last_opt(None))?
        }
        Value::String(_) => {
            debug!("single key");
            serde_json::to_value(zero_last(serde_json::from_value(value)?))?
        }
        Value::Array(_) => {
            let keys: Vec<Bs58Pk> = serde_json::from_value(value)?;
            debug!(count = keys.len(), "key array");
            serde_json::to_value(zero_last_vec(&keys))?
        }
        Value::Object(map) => {
            let is_vec = matches!(map.get("arg"), Some(Value::Array(_)));
            let value = Value::Object(map);
            if is_vec {
                debug!("key array record");
                serde_json::to_value(zero_last_vec_obj(serde_json::from_value(value)?))?
            } else {
                debug!("optional key record");
                serde_json::to_value(zero_last_opt_obj(serde_json::from_value(value)?))?
            }
        }
        Value::Bool(_) => return Err(ZeroLastError::UnsupportedInput("a boolean")),
        Value::Number(_) => return Err(ZeroLastError::UnsupportedInput("a number")),
    };

    Ok(output.to_string())
}
