//! Console lines are assembled from a user-configurable layout such as
//! `"{timestamp} {tag} {channel}  {msg}"`, parsed once and rendered per record.

/// Closed set of known tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Tag,
    Channel,
    Msg,
    Timestamp,
    Severity,
    Context,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Channel => "channel",
            Self::Msg => "msg",
            Self::Timestamp => "timestamp",
            Self::Severity => "severity",
            Self::Context => "context",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Tag,
        Self::Channel,
        Self::Msg,
        Self::Timestamp,
        Self::Severity,
        Self::Context,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSegment {
    /// Separators and unknown `{names}`, copied verbatim.
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed layout, parsed once and rendered many times.
#[derive(Debug, Clone)]
pub struct LineLayout {
    segments: Vec<LayoutSegment>,
    uses_timestamp: bool,
}

impl LineLayout {
    /// Never fails: anything that isn't a known placeholder is literal text.
    #[must_use]
    pub fn parse(layout: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = layout;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            if let Some(ph) = Placeholder::from_name(name) {
                if !current.is_empty() {
                    segments.push(LayoutSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(LayoutSegment::Placeholder(ph));
            } else {
                current.push_str(&rest[open..=close]);
            }
            rest = &rest[close + 1..];
        }
        current.push_str(rest);

        if !current.is_empty() {
            segments.push(LayoutSegment::Literal(current));
        }

        let uses_timestamp = segments
            .iter()
            .any(|s| *s == LayoutSegment::Placeholder(Placeholder::Timestamp));

        Self {
            segments,
            uses_timestamp,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[LayoutSegment] {
        &self.segments
    }

    /// Lets the console skip clock reads for layouts without `{timestamp}`.
    #[must_use]
    pub const fn uses_timestamp(&self) -> bool {
        self.uses_timestamp
    }

    #[must_use]
    pub fn render(&self, values: &LayoutValues<'_>) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                LayoutSegment::Literal(s) => result.push_str(s),
                LayoutSegment::Placeholder(ph) => result.push_str(match ph {
                    Placeholder::Tag => values.tag,
                    Placeholder::Channel => values.channel,
                    Placeholder::Msg => values.msg,
                    Placeholder::Timestamp => values.timestamp,
                    Placeholder::Severity => values.severity,
                    Placeholder::Context => values.context,
                }),
            }
        }

        result
    }
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::parse(DEFAULT_LAYOUT)
    }
}

/// Layout used when none is configured.
pub const DEFAULT_LAYOUT: &str = "{tag} {channel}  {msg}";

/// Borrowed values for one rendered line; unset fields render as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutValues<'a> {
    pub tag: &'a str,
    pub channel: &'a str,
    pub msg: &'a str,
    pub timestamp: &'a str,
    pub severity: &'a str,
    pub context: &'a str,
}
