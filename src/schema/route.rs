use serde::{Deserialize, Serialize};
use std::fmt;

/// The graduation route a side event belongs to.
///
/// The five known routes carry their own gate windows. Any other route
/// name is kept verbatim and falls back to the generic gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RouteKey {
    /// Postgraduate recommendation (保研).
    Pg,
    /// Graduate entrance exam (考研).
    Kaoyan,
    /// Study abroad applications (出国).
    Abroad,
    /// Civil service exam (考公).
    Gongkao,
    /// Autumn campus recruitment (秋招).
    Qiuzhao,
    Other(String),
}

impl RouteKey {
    /// The route name as written in data files and output (e.g., "kaoyan").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pg => "pg",
            Self::Kaoyan => "kaoyan",
            Self::Abroad => "abroad",
            Self::Gongkao => "gongkao",
            Self::Qiuzhao => "qiuzhao",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns the tag string for this route (e.g., "route:pg").
    pub fn tag(&self) -> String {
        format!("route:{}", self.as_str())
    }

    /// Whether this route has a dedicated gate window.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for RouteKey {
    fn from(name: &str) -> Self {
        match name {
            "pg" => Self::Pg,
            "kaoyan" => Self::Kaoyan,
            "abroad" => Self::Abroad,
            "gongkao" => Self::Gongkao,
            "qiuzhao" => Self::Qiuzhao,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RouteKey {
    fn from(name: String) -> Self {
        RouteKey::from(name.as_str())
    }
}

impl From<RouteKey> for String {
    fn from(key: RouteKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
