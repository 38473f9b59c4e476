use crate::procurement::domain::{Item, Opportunity, OpportunityId, Supplier};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use thiserror::Error;

/// Timestamp layout used by the feed: no offset, optional fractional seconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Longest excerpt of an offending value quoted in an error message.
const MAX_EXCERPT_CHARS: usize = 40;

/// Schema violation found while loading a payload.
///
/// Every record-level variant names the record (its `id`, or `#<index>` when
/// the id itself is unusable) and the field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {details}")]
    Syntax { details: String },

    #[error("payload must be an array of opportunity records, found {found}")]
    NotAnArray { found: String },

    #[error("record #{index} is not an object (found {found})")]
    RecordNotObject { index: usize, found: String },

    #[error("record {record}: field `{field}` is missing")]
    MissingField { record: String, field: String },

    #[error("record {record}: field `{field}` must be {expected}, found {found}")]
    InvalidField {
        record: String,
        field: String,
        expected: &'static str,
        found: String,
    },
}

/// PayloadLoader - Validates a payload against the opportunity schema and
/// decodes it into domain records.
pub struct PayloadLoader;

impl PayloadLoader {
    /// Parses a payload holding a JSON array of opportunities.
    ///
    /// The source-file form `const name = [ ... ];` is accepted as well.
    ///
    /// # Errors
    /// Returns the first [`PayloadError`] found, in record order.
    pub fn parse(content: &str) -> Result<Vec<Opportunity>, PayloadError> {
        let literal = extract_array_literal(content)?;
        let value: Value = serde_json::from_str(literal).map_err(|e| PayloadError::Syntax {
            details: e.to_string(),
        })?;

        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(PayloadError::NotAnArray {
                    found: describe(&other),
                })
            }
        };

        records
            .iter()
            .enumerate()
            .map(|(index, record)| parse_opportunity(index, record))
            .collect()
    }
}

/// Strips a JavaScript declaration wrapper around the array, if present.
fn extract_array_literal(content: &str) -> Result<&str, PayloadError> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('[') || !is_declaration(trimmed) {
        return Ok(trimmed);
    }

    let (start, end) = match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(PayloadError::Syntax {
                details: "declaration does not contain an array literal".to_string(),
            })
        }
    };

    let head = trimmed[..start].trim_end();
    if !(head.ends_with('=') || head == "export default") {
        return Err(PayloadError::Syntax {
            details: format!("unexpected content before the array: `{}`", excerpt(head)),
        });
    }

    let tail = trimmed[end + 1..].trim();
    if !(tail.is_empty() || tail == ";") {
        return Err(PayloadError::Syntax {
            details: format!("unexpected content after the array: `{}`", excerpt(tail)),
        });
    }

    Ok(&trimmed[start..=end])
}

fn is_declaration(text: &str) -> bool {
    ["const ", "let ", "var ", "export "]
        .iter()
        .any(|keyword| text.starts_with(keyword))
}

fn parse_opportunity(index: usize, record: &Value) -> Result<Opportunity, PayloadError> {
    let object = record
        .as_object()
        .ok_or_else(|| PayloadError::RecordNotObject {
            index,
            found: describe(record),
        })?;

    let label = match object.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        _ => format!("#{}", index),
    };
    let fields = FieldReader::new(&label, String::new(), object);

    let items = fields
        .array("itens")?
        .iter()
        .enumerate()
        .map(|(position, value)| parse_item(&label, position, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Opportunity {
        id: OpportunityId::new(fields.string("id")?),
        uf: fields.string("uf")?,
        city: fields.string("cidade")?,
        unit: fields.string("unidade")?,
        published_at: fields.timestamp("data_pub")?,
        proposals_close_at: fields.timestamp("data_encerramento_proposta")?,
        agency: fields.string("orgao")?,
        object: fields.string("objeto")?,
        notice: fields.string("edital")?,
        uasg: fields.string("uasg")?,
        estimated_total: fields.number("valor_total_estimado")?,
        confidential: fields.boolean("is_sigiloso")?,
        declared_item_count: fields.count("qtd_total_itens")?,
        pncp_link: fields.string("link_pncp")?,
        items,
    })
}

fn parse_item(label: &str, position: usize, value: &Value) -> Result<Item, PayloadError> {
    let prefix = format!("itens[{}].", position);
    let object = value.as_object().ok_or_else(|| PayloadError::InvalidField {
        record: label.to_string(),
        field: format!("itens[{}]", position),
        expected: "an object",
        found: describe(value),
    })?;
    let fields = FieldReader::new(label, prefix, object);

    Ok(Item {
        number: fields.count("item")?,
        description: fields.string("desc")?,
        quantity: fields.number("qtd")?,
        unit_price: fields.number("unitario")?,
        total: fields.nullable_number("total")?,
        supplier: Supplier::new(fields.string("fornecedor")?),
        won: fields.boolean("vitoria")?,
    })
}

/// Typed access to the fields of one JSON object, reporting violations with
/// the record label and the full field path.
struct FieldReader<'a> {
    record: &'a str,
    prefix: String,
    object: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn new(record: &'a str, prefix: String, object: &'a Map<String, Value>) -> Self {
        Self {
            record,
            prefix,
            object,
        }
    }

    fn path(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn field(&self, name: &str) -> Result<&'a Value, PayloadError> {
        self.object
            .get(name)
            .ok_or_else(|| PayloadError::MissingField {
                record: self.record.to_string(),
                field: self.path(name),
            })
    }

    fn invalid(&self, name: &str, expected: &'static str, value: &Value) -> PayloadError {
        PayloadError::InvalidField {
            record: self.record.to_string(),
            field: self.path(name),
            expected,
            found: describe(value),
        }
    }

    fn string(&self, name: &str) -> Result<String, PayloadError> {
        let value = self.field(name)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(name, "a string", value))
    }

    fn number(&self, name: &str) -> Result<f64, PayloadError> {
        let value = self.field(name)?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid(name, "a number", value))
    }

    fn nullable_number(&self, name: &str) -> Result<Option<f64>, PayloadError> {
        let value = self.field(name)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_f64()
            .map(Some)
            .ok_or_else(|| self.invalid(name, "a number or null", value))
    }

    fn boolean(&self, name: &str) -> Result<bool, PayloadError> {
        let value = self.field(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.invalid(name, "a boolean", value))
    }

    fn count(&self, name: &str) -> Result<u32, PayloadError> {
        let value = self.field(name)?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.invalid(name, "a non-negative integer", value))
    }

    fn timestamp(&self, name: &str) -> Result<NaiveDateTime, PayloadError> {
        let value = self.field(name)?;
        value
            .as_str()
            .and_then(|s| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok())
            .ok_or_else(|| self.invalid(name, "a timestamp (YYYY-MM-DDTHH:MM:SS)", value))
    }

    fn array(&self, name: &str) -> Result<&'a Vec<Value>, PayloadError> {
        let value = self.field(name)?;
        value
            .as_array()
            .ok_or_else(|| self.invalid(name, "an array", value))
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string \"{}\"", excerpt(s)),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
        format!("{}...", head)
    }
}
