use metrics_exporter_prometheus::PrometheusHandle;
use rent_split::billing::RawValue;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Renders a raw form value the way the user would have typed it.
pub(crate) fn display_raw(value: &RawValue) -> String {
    match value {
        RawValue::Text(text) => text.clone(),
        RawValue::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
            format!("{}", *number as i64)
        }
        RawValue::Number(number) => number.to_string(),
        RawValue::Unsupported => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_drop_the_decimal_point() {
        assert_eq!(display_raw(&RawValue::Number(1000.0)), "1000");
        assert_eq!(display_raw(&RawValue::Number(12.5)), "12.5");
        assert_eq!(display_raw(&RawValue::Text(" 8 ".to_string())), " 8 ");
    }
}
