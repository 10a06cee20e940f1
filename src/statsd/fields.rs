use crate::error::ConfigError;

/// Stats forwarded for every row unless the configuration names others.
pub const DEFAULT_FIELDS: [&str; 13] = [
    "qcur", "qmax", "scur", "smax", "rate", "rate_max", "hrsp_1xx", "hrsp_2xx", "hrsp_3xx",
    "hrsp_4xx", "hrsp_5xx", "bin", "bout",
];

/// Ordered list of stat columns emitted per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<String>,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|field| (*field).to_owned()).collect(),
        }
    }
}

impl FieldSelection {
    /// Builds a custom selection, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty or contains a blank name.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            fields.push(name.to_owned());
        }
        if fields.is_empty() {
            return Err(ConfigError::EmptyFields);
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}
