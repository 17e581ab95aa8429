use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record type identifier.
///
/// The types a migration actually has to reason about get their own variant;
/// anything else rides along in [`Other`](Self::Other) and is treated
/// generically (no translation rules apply). Serialized as the uppercase
/// wire string (`"A"`, `"AAAA"`, `"CNAME"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Service locator record.
    Srv,
    /// Name server record.
    Ns,
    /// Start of authority record.
    Soa,
    /// Certificate Authority Authorization record.
    Caa,
    /// Any other record type, carried through untouched.
    Other(String),
}

impl RecordType {
    /// The uppercase wire representation of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Caa => "CAA",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "NS" => Self::Ns,
            "SOA" => Self::Soa,
            "CAA" => Self::Caa,
            upper => Self::Other(upper.to_string()),
        }
    }
}

impl From<RecordType> for String {
    fn from(t: RecordType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Record ============

/// One DNS record in transit between providers.
///
/// The lifecycle is transient: built from a source fetch response, rewritten
/// in place by normalization, consumed by one publish call, then dropped.
///
/// `name` is zone-relative; `"@"` denotes the zone apex. `data` carries the
/// whole type-specific payload as a single string: for MX that is
/// `"<priority> <target>"`, for SRV `"<priority> <weight> <port> <target>"`.
/// Multi-fragment TXT values are joined into one string by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Record name relative to the zone apex (`"@"` for the apex itself).
    pub name: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record type.
    pub record_type: RecordType,
    /// Type-specific payload.
    pub data: String,
}

impl Record {
    /// Whether this record carries nothing worth migrating.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.data.is_empty()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.ttl, self.record_type, self.data
        )
    }
}

// ============ Zone ============

/// A zone as resolved at the source provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceZone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
}
