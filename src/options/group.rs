use super::{OptionError, OptionMap, OptionValue};

pub const DEFAULT_PLACEHOLDER: &str = "%default";
pub const WORKFLOW_GROUP_TITLE: &str = "Workflow options";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Flag,
}

impl OptionKind {
    fn expected(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Flag => "true or false",
        }
    }
}

/// One command-line option, exposed as `--<dest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub dest: String,
    pub kind: OptionKind,
    pub help: String,
    /// Set for required options: the description reported when it is missing.
    pub required: Option<String>,
}

impl OptionSpec {
    pub fn new(dest: impl Into<String>, kind: OptionKind, help: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            kind,
            help: help.into(),
            required: None,
        }
    }

    pub fn required(mut self, description: impl Into<String>) -> Self {
        self.required = Some(description.into());
        self
    }

    pub fn flag(&self) -> String {
        format!("--{}", self.dest)
    }

    fn invalid(&self, value: &str) -> OptionError {
        OptionError::InvalidValue {
            name: self.dest.clone(),
            value: value.to_string(),
            expected: self.kind.expected(),
        }
    }

    fn usage(&self) -> String {
        match self.kind {
            OptionKind::Flag => self.flag(),
            OptionKind::String | OptionKind::Integer => {
                format!("{}={}", self.flag(), self.dest.to_ascii_uppercase())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub title: String,
    specs: Vec<OptionSpec>,
}

impl OptionGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            specs: Vec::new(),
        }
    }

    /// Registering a `dest` twice replaces the earlier spec.
    pub fn add_option(&mut self, spec: OptionSpec) {
        match self.specs.iter_mut().find(|existing| existing.dest == spec.dest) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
    }

    pub fn find(&self, dest: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.dest == dest)
    }

    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Required options paired with their missing-value descriptions.
    pub fn required_specs(&self) -> impl Iterator<Item = (&OptionSpec, &str)> {
        self.specs
            .iter()
            .filter_map(|spec| spec.required.as_deref().map(|description| (spec, description)))
    }

    pub fn parse_value(&self, dest: &str, raw: Option<&str>) -> Result<OptionValue, OptionError> {
        let spec = self.registered(dest)?;
        let invalid = |value: &str| spec.invalid(value);

        match (spec.kind, raw) {
            (OptionKind::Flag, None) => Ok(OptionValue::Flag(true)),
            (OptionKind::Flag, Some(value)) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(OptionValue::Flag(true)),
                "false" | "no" | "0" => Ok(OptionValue::Flag(false)),
                _ => Err(invalid(value)),
            },
            (_, None) => Err(OptionError::MissingValue {
                name: spec.dest.clone(),
            }),
            (OptionKind::String, Some(value)) => Ok(OptionValue::text(value)),
            (OptionKind::Integer, Some(value)) => value
                .trim()
                .parse::<i64>()
                .map(OptionValue::Integer)
                .map_err(|_| invalid(value)),
        }
    }

    /// Checks a value that did not come from the command line, such as an
    /// overrides file entry, against the registered kind.
    pub fn coerce_value(&self, dest: &str, value: OptionValue) -> Result<OptionValue, OptionError> {
        let spec = self.registered(dest)?;
        match (spec.kind, value) {
            (OptionKind::String, OptionValue::Text(text)) => Ok(OptionValue::Text(text)),
            (OptionKind::String, OptionValue::Integer(number)) => {
                Ok(OptionValue::Text(number.to_string()))
            }
            (OptionKind::Integer, value @ OptionValue::Integer(_))
            | (OptionKind::Flag, value @ OptionValue::Flag(_)) => Ok(value),
            (OptionKind::Integer | OptionKind::Flag, OptionValue::Text(text)) => {
                self.parse_value(dest, Some(&text))
            }
            (_, other) => Err(spec.invalid(&other.to_string())),
        }
    }

    fn registered(&self, dest: &str) -> Result<&OptionSpec, OptionError> {
        self.find(dest).ok_or_else(|| OptionError::Unknown {
            name: dest.to_string(),
        })
    }

    pub fn help_lines(&self, defaults: &OptionMap) -> Vec<String> {
        let mut lines = vec![format!("{}:", self.title)];
        lines.extend(self.specs.iter().map(|spec| {
            let default = defaults
                .get(&spec.dest)
                .map(ToString::to_string)
                .unwrap_or_else(|| "None".to_string());
            format!(
                "  {0:28} {1}",
                spec.usage(),
                spec.help.replace(DEFAULT_PLACEHOLDER, &default)
            )
        }));
        lines
    }
}
