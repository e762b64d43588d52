use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Display locales supported by the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "vi-VN")]
    ViVn,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ViVn => "vi-VN",
        }
    }

    pub fn no_data_label(&self) -> &'static str {
        match self {
            Locale::EnUs => "No data",
            Locale::ViVn => "Không có dữ liệu",
        }
    }

    pub fn details_label(&self) -> &'static str {
        match self {
            Locale::EnUs => "Details",
            Locale::ViVn => "Chi tiết",
        }
    }

    fn separators(&self) -> (char, char) {
        // (grouping, decimal)
        match self {
            Locale::EnUs => (',', '.'),
            Locale::ViVn => ('.', ','),
        }
    }

    /// Grouped integer part, at most three fraction digits, trailing zeros dropped.
    pub fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let (group, decimal) = self.separators();
        let fixed = format!("{:.3}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(group);
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(decimal);
            out.push_str(frac_part);
        }
        out
    }

    pub fn format_datetime(&self, value: &NaiveDateTime) -> String {
        let pattern = match self {
            Locale::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
            Locale::ViVn => "%H:%M:%S %-d/%-m/%Y",
        };
        value.format(pattern).to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "vi-vn" | "vi" => Ok(Locale::ViVn),
            other => Err(CoreError::Config(format!("unsupported locale: {}", other))),
        }
    }
}

/// How values are presented: labels, separators and the offset timestamps are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub locale: Locale,
    pub offset: FixedOffset,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            offset: Utc.fix(),
        }
    }
}

impl DisplayOptions {
    pub fn new(locale: Locale, utc_offset_minutes: i32) -> CoreResult<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                CoreError::Config(format!("utc offset out of range: {} minutes", utc_offset_minutes))
            })?;
        Ok(Self { locale, offset })
    }
}
