use std::time::Duration;

/// Options controlling report composition.
#[derive(Debug, Clone)]
pub struct ReportOption {
    pub(crate) wait: Duration,
    pub(crate) separator: String,
    pub(crate) text_parts: Vec<String>,
    pub(crate) factors: (i64, i64, i64),
}

impl Default for ReportOption {
    fn default() -> Self {
        ReportOption {
            wait: Duration::from_millis(1000),
            separator: "  ".to_string(),
            text_parts: vec!["foo".into(), "bar".into(), "baz".into()],
            factors: (10, 20, 5),
        }
    }
}

impl ReportOption {
    /// Fixed wait applied to every delayed value.
    pub fn wait(self, wait: Duration) -> Self {
        ReportOption { wait, ..self }
    }

    /// Separator joining resolved text parts.
    pub fn separator(self, separator: impl Into<String>) -> Self {
        ReportOption {
            separator: separator.into(),
            ..self
        }
    }

    /// Text parts resolved by the text computation, in order.
    pub fn text_parts<I, S>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReportOption {
            text_parts: parts.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Operands of the numeric computation, combined as `(a * b) + c`.
    pub fn factors(self, a: i64, b: i64, c: i64) -> Self {
        ReportOption {
            factors: (a, b, c),
            ..self
        }
    }
}
