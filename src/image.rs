use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mongodb::bson::spec::BinarySubtype;
use mongodb::bson::{Binary, Bson, doc};
use serde::{Deserialize, Serialize, Serializer};

/// Stored image record: declared MIME type, byte size, raw payload.
///
/// The derived `Serialize` impl targets JSON responses, where the payload is
/// rendered as base64 text. Inserts go through [`ImageFile::to_bson`]
/// instead, which keeps the payload as raw BSON binary at rest.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ImageFile {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub size: i64,
    #[serde(serialize_with = "serialize_binary_as_base64")]
    #[schema(value_type = String, format = Byte)]
    pub img: Binary,
}

impl ImageFile {
    /// Build a record from an upload's declared MIME type and raw bytes.
    ///
    /// The size is the actual byte length; the MIME type is stored as
    /// declared, with no sniffing of the content.
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        let size = data.len() as i64;
        Self {
            content_type: content_type.into(),
            size,
            img: Binary {
                subtype: BinarySubtype::Generic,
                bytes: data,
            },
        }
    }

    /// BSON value for embedding in an insert document.
    pub fn to_bson(&self) -> Bson {
        Bson::Document(doc! {
            "contentType": &self.content_type,
            "size": self.size,
            "img": Bson::Binary(self.img.clone()),
        })
    }
}

fn serialize_binary_as_base64<S>(binary: &Binary, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(&binary.bytes))
}
