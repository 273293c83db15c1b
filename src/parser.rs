use crate::error::ParseFailure;
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

/// Whatever a backend builds out of the bytes. The harness never looks inside.
pub type StructuredValue = plist::Value;

/// Something that can turn raw property list bytes into a value.
///
/// This is the only point at which the harness touches a parser, so any
/// deserializer can be benchmarked by implementing it.
pub trait StructuredParser {
    /// Short name used in reports and log lines.
    fn name(&self) -> &str;

    fn parse_structured_value(&self, bytes: &[u8]) -> Result<StructuredValue, ParseFailure>;
}

/// XML-only reader from the `plist` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl StructuredParser for XmlParser {
    fn name(&self) -> &str {
        "xml"
    }

    fn parse_structured_value(&self, bytes: &[u8]) -> Result<StructuredValue, ParseFailure> {
        Ok(plist::Value::from_reader_xml(bytes)?)
    }
}

/// Format-sniffing reader: binary or XML, whichever the header says.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoParser;

impl StructuredParser for AutoParser {
    fn name(&self) -> &str {
        "auto"
    }

    fn parse_structured_value(&self, bytes: &[u8]) -> Result<StructuredValue, ParseFailure> {
        Ok(plist::Value::from_reader(Cursor::new(bytes))?)
    }
}

/// Goes through the serde deserializer rather than the value builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeParser;

impl StructuredParser for SerdeParser {
    fn name(&self) -> &str {
        "serde"
    }

    fn parse_structured_value(&self, bytes: &[u8]) -> Result<StructuredValue, ParseFailure> {
        Ok(plist::from_bytes(bytes)?)
    }
}

/// The built-in parsers, selectable by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Xml,
    Auto,
    Serde,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Xml, Backend::Auto, Backend::Serde];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Xml => "xml",
            Backend::Auto => "auto",
            Backend::Serde => "serde",
        }
    }

    pub fn parser(self) -> Box<dyn StructuredParser> {
        match self {
            Backend::Xml => Box::new(XmlParser),
            Backend::Auto => Box::new(AutoParser),
            Backend::Serde => Box::new(SerdeParser),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Xml
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown backend '{}', expected one of: {}",
                    s,
                    itertools::join(Backend::ALL.iter().map(|b| b.name()), ", ")
                )
            })
    }
}
