use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    compose::plan::ReelKind,
    select::unique::Named,
    text::rating::{parse_leading_f64, rating_text_to_stars, rating_to_stars},
};

/// A record type that can be featured in a reel.
pub trait ReelRecord: Named + Clone {
    /// Reel kind this record type produces.
    const KIND: ReelKind;

    /// Title and rating listed on the intro scene.
    fn headline(&self) -> Headline;

    /// Profile scene rows in display order.
    fn info_rows(&self) -> Vec<InfoRow>;
}

/// A field the content API sends either as a number or as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON number, kept verbatim.
    Number(serde_json::Number),
    /// JSON string.
    Text(String),
}

impl Scalar {
    /// Numeric view: numbers as-is, text through a lenient leading-number parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => parse_leading_f64(s),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for Scalar {
    /// Non-finite values have no JSON form and become text.
    fn from(v: f64) -> Self {
        match serde_json::Number::from_f64(v) {
            Some(n) => Self::Number(n),
            None => Self::Text(v.to_string()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A travel / co-working destination featured in a spot reel.
pub struct Spot {
    /// Content API row id.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name; also the de-duplication key.
    pub name: String,
    /// Country shown on the profile scene.
    pub country: String,
    /// Monthly cost in USD.
    pub cost_usd: Scalar,
    /// Internet speed in Mbps.
    pub internet_speed: Scalar,
    /// Ten-point overall rating.
    pub overall_rating: Scalar,
    /// Temperature in degrees Celsius.
    pub temperature: Scalar,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A job posting featured in a job reel.
pub struct Job {
    /// Content API row id.
    #[serde(rename = "Id")]
    pub id: u64,
    /// Job title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Job category.
    pub category: String,
    /// Salary text; sometimes a scraped star-rating class instead.
    pub salary: String,
    /// Work location.
    pub location: String,
    /// Posting date as sent by the API.
    pub date_posted: String,
    /// Posting URL; the de-duplication key when present.
    pub job_url: String,
    /// Full description text.
    pub job_description: String,
    /// Contract type (full-time, freelance, ...).
    pub job_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One labelled line on a profile scene.
pub struct InfoRow {
    /// Row label as stored, without the display colon.
    pub label: String,
    /// Formatted value text.
    pub value: String,
    /// Rendered as stars rather than text.
    pub is_rating: bool,
}

impl InfoRow {
    fn new(label: &str, value: String, is_rating: bool) -> Self {
        Self {
            label: label.to_owned(),
            value,
            is_rating,
        }
    }

    /// Label with a trailing colon, added only if missing.
    pub fn label_text(&self) -> String {
        if self.label.ends_with(':') {
            self.label.clone()
        } else {
            format!("{}:", self.label)
        }
    }

    /// Value as displayed: stars for rating rows, text otherwise.
    pub fn display_value(&self) -> String {
        if self.is_rating {
            rating_text_to_stars(&self.value)
        } else {
            self.value.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Title plus star rating listed on the intro scene.
pub struct Headline {
    /// Record title.
    pub title: String,
    /// Stars, or the raw rating text when it is not numeric.
    pub rating: String,
}

impl ReelRecord for Spot {
    const KIND: ReelKind = ReelKind::Spot;

    fn info_rows(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Pays", self.country.clone(), false),
            InfoRow::new("Coût (USD/mois)", format!("${}", self.cost_usd), false),
            InfoRow::new("Débit internet", format!("{} Mbps", self.internet_speed), false),
            InfoRow::new("Note Globale", format!("{}/10", self.overall_rating), true),
            InfoRow::new("Température", format!("{}C", self.temperature), false),
        ]
    }

    fn headline(&self) -> Headline {
        Headline {
            title: self.name.clone(),
            rating: rating_to_stars(&self.overall_rating),
        }
    }
}

impl ReelRecord for Job {
    const KIND: ReelKind = ReelKind::Job;

    fn info_rows(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Salary", self.salary.clone(), false),
            InfoRow::new("Location", self.location.clone(), false),
            InfoRow::new("Job Type", self.job_type.clone(), false),
            InfoRow::new("Job Description", self.job_description.clone(), false),
        ]
    }

    fn headline(&self) -> Headline {
        Headline {
            title: self.title.clone(),
            rating: rating_text_to_stars(&self.salary),
        }
    }
}

impl Named for Spot {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Job {
    fn name(&self) -> &str {
        if self.job_url.is_empty() {
            &self.title
        } else {
            &self.job_url
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/records/model.rs"]
mod tests;
