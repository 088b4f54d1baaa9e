//! Convenience macros for structured logging

/// Build a [`Fields`](crate::utils::logging::Fields) map from `key => value` pairs.
///
/// Values that fail to serialize are recorded as `null`.
#[macro_export]
macro_rules! log_fields {
    ($($key:expr => $value:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut fields = $crate::utils::logging::Fields::new();
            $(
                fields.insert(
                    $key.to_string(),
                    $crate::__private::serde_json::to_value($value)
                        .unwrap_or($crate::__private::serde_json::Value::Null),
                );
            )*
            fields
        }
    };
}
