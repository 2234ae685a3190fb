use crate::error::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::{convert::TryFrom, fs, mem, path::Path};

/// A Postman collection (v2.x) reduced to the parts needed to find recorded error responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub variable: Vec<Variable>,
    pub item: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

/// A node of the collection tree. Nodes carrying an `item` list are folders, everything else is a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ItemNode")]
pub enum Item {
    Folder(Folder),
    Request(Request),
}

#[derive(Debug, Clone)]
pub struct Folder {
    pub name: String,
    pub item: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub name: String,
    pub request: RequestDefinition,
    pub response: Vec<RecordedResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestDefinition {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: Url,
}

/// Postman stores a request URL either as a plain string or as an object with a `raw` form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Url {
    Raw(String),
    Detailed { raw: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordedResponse {
    #[serde(default)]
    pub name: String,
    pub code: Option<u16>,
    /// JSON text of the body. A `null` body reads as `null`, a missing one as empty text.
    #[serde(default, deserialize_with = "body_text")]
    pub body: String,
    pub header: Option<Vec<Header>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Deserialize)]
struct ItemNode {
    #[serde(default)]
    name: String,
    item: Option<Vec<Item>>,
    request: Option<RequestDefinition>,
    response: Option<Vec<RecordedResponse>>,
}

impl TryFrom<ItemNode> for Item {
    type Error = String;

    fn try_from(node: ItemNode) -> Result<Self, Self::Error> {
        match (node.item, node.request) {
            (Some(item), _) => Ok(Item::Folder(Folder {
                name: node.name,
                item,
            })),
            (None, Some(request)) => Ok(Item::Request(Request {
                name: node.name,
                request,
                response: node.response.unwrap_or_default(),
            })),
            (None, None) => Err(format!(
                "item \"{}\" has neither an `item` list nor a `request`",
                node.name
            )),
        }
    }
}

// Nested folders are released one level at a time so deep trees don't exhaust the stack.
impl Drop for Folder {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.item);
        while let Some(item) = pending.pop() {
            if let Item::Folder(mut folder) = item {
                pending.append(&mut folder.item);
            }
        }
    }
}

fn default_method() -> String {
    String::from("GET")
}

fn body_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| String::from("null")))
}

impl Collection {
    /// Parses a collection of any nesting depth, growing the stack on demand.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, Error> {
        let mut deserializer = serde_json::Deserializer::from_str(json.as_ref());
        deserializer.disable_recursion_limit();

        let collection = Collection::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .map_err(Error::InvalidCollection)?;
        deserializer.end().map_err(Error::InvalidCollection)?;

        Ok(collection)
    }

    /// Value of the first variable whose key is exactly `name`.
    pub fn variable_value(&self, name: &str) -> Option<String> {
        self.variable
            .iter()
            .find(|variable| variable.key == name)
            .map(|variable| match &variable.value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
    }
}

impl Url {
    pub fn raw(&self) -> &str {
        match self {
            Url::Raw(raw) | Url::Detailed { raw } => raw,
        }
    }
}

impl RecordedResponse {
    /// The status code when it is an error status (400 and above).
    pub fn error_code(&self) -> Option<u16> {
        self.code.filter(|code| *code >= 400)
    }
}

pub fn load_collection<P: AsRef<Path>>(filename: P) -> Result<Collection, Error> {
    let file_contents = fs::read_to_string(filename)?;
    Collection::from_json(file_contents)
}
