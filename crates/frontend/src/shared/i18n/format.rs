//! Locale-aware number, money and date formatting.
//!
//! Uses the browser `Intl` API; the plain formatters below are the fallback
//! when `Intl` is unavailable or rejects the input (unknown currency code).

use contracts::enums::Locale;
use wasm_bindgen::JsValue;

/// Thousands-separated number with a fixed number of decimals.
/// `1234.567, 2` -> `"1 234.57"`
pub fn format_plain(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn intl_format(value: f64, locale: Locale, currency: Option<&str>) -> Option<String> {
    let locales = js_sys::Array::of1(&JsValue::from_str(locale.intl_tag()));
    let options = js_sys::Object::new();
    if let Some(currency) = currency {
        js_sys::Reflect::set(&options, &"style".into(), &"currency".into()).ok()?;
        js_sys::Reflect::set(
            &options,
            &"currency".into(),
            &JsValue::from_str(&currency.to_uppercase()),
        )
        .ok()?;
        js_sys::Reflect::set(&options, &"minimumFractionDigits".into(), &JsValue::from(0)).ok()?;
    }
    let formatter = js_sys::Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &JsValue::from_f64(value))
        .ok()?
        .as_string()
}

pub fn format_currency(amount: f64, currency: &str, locale: Locale) -> String {
    intl_format(amount, locale, Some(currency))
        .unwrap_or_else(|| format!("{} {}", format_plain(amount, 0), currency.to_uppercase()))
}

pub fn format_number(value: f64, locale: Locale) -> String {
    intl_format(value, locale, None).unwrap_or_else(|| format_plain(value, 0))
}

/// `2024-03-15T14:02:26` -> `2024-03-15`
pub fn date_part(iso: &str) -> String {
    iso.split('T').next().unwrap_or(iso).to_string()
}

/// Date part of an ISO timestamp in the locale's short form
pub fn format_date(iso: &str, locale: Locale) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return date_part(iso);
    }
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"year".into(), &"numeric".into());
    let _ = js_sys::Reflect::set(&options, &"month".into(), &"short".into());
    let _ = js_sys::Reflect::set(&options, &"day".into(), &"numeric".into());
    date.to_locale_date_string(locale.intl_tag(), &options)
        .as_string()
        .unwrap_or_else(|| date_part(iso))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_groups_thousands() {
        assert_eq!(format_plain(1234.567, 2), "1 234.57");
        assert_eq!(format_plain(1234567.0, 0), "1 234 567");
        assert_eq!(format_plain(999.0, 0), "999");
        assert_eq!(format_plain(0.0, 2), "0.00");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-03-15T14:02:26.123"), "2024-03-15");
        assert_eq!(date_part("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_plain_negative() {
        assert_eq!(format_plain(-1234.5, 1), "-1 234.5");
        assert_eq!(format_plain(-12.0, 0), "-12");
    }
}
