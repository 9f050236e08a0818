use serde_json::Value;

use crate::common::error::CoverError;

/// read an integer param and clamp it to a 0-100 percentage
pub fn get_percent(params: &Value, value_name: &str) -> Result<u8, CoverError> {
    let value = get_int(params, value_name)?;
    Ok(value.clamp(0, 100) as u8)
}

pub fn get_int(params: &Value, value_name: &str) -> Result<i64, CoverError> {
    let value = &params[value_name];
    // whole floats like 50.0 are accepted as well
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .ok_or(CoverError::invalid_command(format!("json parser: cannot find integer {} in params", value_name)))
}
